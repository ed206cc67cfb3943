use chrono::{DateTime, Local, Utc};
use iso_currency::Currency;
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::{
    entities::{ClientSummary, ExportedWorkbook, Payment, Project},
    errors::LedgerError,
    presentation::{filename::sanitize_file_stem, utils::format_amount},
};

fn local_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Prints a per-client workbook. Sheet names and column order are a stable
/// contract for downstream consumers:
///
/// - "Summary": label/value rows (Client, Client since, Total projects,
///   Total earned, Total paid, Outstanding balance). Monetary rows carry the
///   numeric value in column B and the formatted amount in column C.
/// - "Projects": Date | Videos | Rate per Video | Total, one row per project.
/// - "Payments": Date | Amount | Notes, one row per payment; the Notes cell
///   is left empty when a payment has none.
///
/// A client with zero projects and payments still produces a valid workbook
/// with all-zero summary figures.
pub(crate) struct ClientWorkbookPrinter {
    currency: Currency,
}

impl ClientWorkbookPrinter {
    pub(crate) fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub(crate) fn print(
        &self,
        summary: &ClientSummary,
        projects: &[Project],
        payments: &[Payment],
    ) -> Result<ExportedWorkbook, LedgerError> {
        let mut workbook = Workbook::new();
        self.print_summary(workbook.add_worksheet(), summary)?;
        self.print_projects(workbook.add_worksheet(), projects)?;
        self.print_payments(workbook.add_worksheet(), payments)?;

        Ok(ExportedWorkbook {
            filename: format!("{}_report.xlsx", sanitize_file_stem(&summary.client.name)),
            bytes: workbook.save_to_buffer()?,
        })
    }

    fn print_summary(
        &self,
        sheet: &mut Worksheet,
        summary: &ClientSummary,
    ) -> Result<(), LedgerError> {
        sheet.set_name("Summary")?;
        sheet.write_string(0, 0, "Client")?;
        sheet.write_string(0, 1, summary.client.name.as_str())?;
        sheet.write_string(1, 0, "Client since")?;
        sheet.write_string(1, 1, local_date(&summary.client.created_at))?;
        sheet.write_string(2, 0, "Total projects")?;
        sheet.write_number(2, 1, summary.total_projects as f64)?;

        let money_rows = [
            ("Total earned", summary.total_earned),
            ("Total paid", summary.total_paid),
            ("Outstanding balance", summary.outstanding_balance),
        ];
        for (i, (label, amount)) in money_rows.iter().enumerate() {
            let row = 3 + i as u32;
            sheet.write_string(row, 0, *label)?;
            sheet.write_number(row, 1, *amount)?;
            sheet.write_string(row, 2, format_amount(*amount, self.currency))?;
        }
        Ok(())
    }

    fn print_projects(
        &self,
        sheet: &mut Worksheet,
        projects: &[Project],
    ) -> Result<(), LedgerError> {
        sheet.set_name("Projects")?;
        for (col, header) in ["Date", "Videos", "Rate per Video", "Total"].iter().enumerate() {
            sheet.write_string(0, col as u16, *header)?;
        }
        for (i, project) in projects.iter().enumerate() {
            let row = 1 + i as u32;
            sheet.write_string(row, 0, local_date(&project.created_at))?;
            sheet.write_number(row, 1, f64::from(project.number_of_videos))?;
            sheet.write_number(row, 2, project.charge_per_video)?;
            sheet.write_number(row, 3, project.total)?;
        }
        Ok(())
    }

    fn print_payments(
        &self,
        sheet: &mut Worksheet,
        payments: &[Payment],
    ) -> Result<(), LedgerError> {
        sheet.set_name("Payments")?;
        for (col, header) in ["Date", "Amount", "Notes"].iter().enumerate() {
            sheet.write_string(0, col as u16, *header)?;
        }
        for (i, payment) in payments.iter().enumerate() {
            let row = 1 + i as u32;
            sheet.write_string(row, 0, local_date(&payment.date))?;
            sheet.write_number(row, 1, payment.amount)?;
            if let Some(notes) = &payment.notes {
                sheet.write_string(row, 2, notes.as_str())?;
            }
        }
        Ok(())
    }
}
