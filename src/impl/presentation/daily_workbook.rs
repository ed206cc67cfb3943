use chrono::NaiveDate;
use iso_currency::Currency;
use rust_xlsxwriter::Workbook;

use crate::{
    entities::{ExportedWorkbook, Payment},
    errors::LedgerError,
    presentation::utils::format_amount,
};

/// One line of the daily report: a payment with its client name already
/// resolved (payments whose client has since been deleted keep a placeholder
/// name).
pub(crate) struct DailyReportRow {
    pub client_name: String,
    pub payment: Payment,
}

/// Prints the daily payments workbook: a single "Daily Report" sheet with a
/// date header row, a Client | Amount | Notes header, one row per payment on
/// that day, and a closing total row. Callers are responsible for refusing
/// to print an empty day.
pub(crate) struct DailyWorkbookPrinter {
    currency: Currency,
}

impl DailyWorkbookPrinter {
    pub(crate) fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub(crate) fn print(
        &self,
        date: NaiveDate,
        rows: &[DailyReportRow],
    ) -> Result<ExportedWorkbook, LedgerError> {
        let date_string = date.format("%Y-%m-%d").to_string();

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Daily Report")?;

        sheet.write_string(0, 0, "Payments on")?;
        sheet.write_string(0, 1, date_string.as_str())?;
        for (col, header) in ["Client", "Amount", "Notes"].iter().enumerate() {
            sheet.write_string(1, col as u16, *header)?;
        }
        for (i, row) in rows.iter().enumerate() {
            let r = 2 + i as u32;
            sheet.write_string(r, 0, row.client_name.as_str())?;
            sheet.write_number(r, 1, row.payment.amount)?;
            if let Some(notes) = &row.payment.notes {
                sheet.write_string(r, 2, notes.as_str())?;
            }
        }

        let total: f64 = rows.iter().map(|r| r.payment.amount).sum();
        let total_row = 2 + rows.len() as u32;
        sheet.write_string(total_row, 0, "Total")?;
        sheet.write_number(total_row, 1, total)?;
        sheet.write_string(total_row, 2, format_amount(total, self.currency))?;

        Ok(ExportedWorkbook {
            filename: format!("daily_report_{date_string}.xlsx"),
            bytes: workbook.save_to_buffer()?,
        })
    }
}
