use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::{
    data::{
        datasources::config_datasource::ConfigDatasourceImpl,
        repositories::record_store_impl::RecordStoreImpl,
    },
    domain::{
        logic::summary_logic,
        repositories::record_store::RecordStore as _,
        usecases::bookkeeping_usecase::{BookkeepingUsecase as _, BookkeepingUsecaseImpl},
    },
    entities::{
        Client, ClientDetail, ClientSummary, ExportedWorkbook, Payment, Project, RecordId,
        StudioLedgerConfig,
    },
    errors::LedgerError,
    presentation::{
        client_workbook::ClientWorkbookPrinter,
        daily_workbook::{DailyReportRow, DailyWorkbookPrinter},
    },
};

/// Entry point to the ledger. Construct one per application at startup and
/// pass it by reference to whatever needs it; it owns the record store and
/// serializes all access to the persisted document.
///
/// Mutating operations return the created entity (or unit) and deliberately
/// do not return refreshed collections: in-memory copies held by callers are
/// disposable caches, to be re-queried after any mutation.
pub struct StudioLedgerUtil {
    store: Arc<RecordStoreImpl>,
    bookkeeping_usecase: BookkeepingUsecaseImpl,
    client_printer: ClientWorkbookPrinter,
    daily_printer: DailyWorkbookPrinter,
}

impl StudioLedgerUtil {
    pub fn new(config: StudioLedgerConfig) -> Self {
        let store = Arc::new(RecordStoreImpl::new(config.store_path));
        Self {
            bookkeeping_usecase: BookkeepingUsecaseImpl::new(Arc::clone(&store)),
            client_printer: ClientWorkbookPrinter::new(config.currency),
            daily_printer: DailyWorkbookPrinter::new(config.currency),
            store,
        }
    }

    /// Build from a RON config file (see `StudioLedgerConfig`).
    pub async fn from_config_file<P>(path: P) -> Result<Self, LedgerError>
    where
        P: AsRef<Path> + Send,
    {
        let config = ConfigDatasourceImpl::new().from_file(path).await?;
        Ok(Self::new(config))
    }

    // Bookkeeping.
    // ---

    pub async fn add_client(&self, name: &str) -> Result<Client, LedgerError> {
        self.bookkeeping_usecase.add_client(name).await
    }

    pub async fn add_project(
        &self,
        client_id: &RecordId,
        number_of_videos: u32,
        charge_per_video: f64,
    ) -> Result<Project, LedgerError> {
        self.bookkeeping_usecase
            .add_project(client_id, number_of_videos, charge_per_video)
            .await
    }

    pub async fn record_payment(
        &self,
        client_id: &RecordId,
        amount: f64,
        date: DateTime<Utc>,
        notes: Option<String>,
    ) -> Result<Payment, LedgerError> {
        self.bookkeeping_usecase
            .record_payment(client_id, amount, date, notes)
            .await
    }

    pub async fn delete_project(&self, id: &RecordId) -> Result<(), LedgerError> {
        self.bookkeeping_usecase.delete_project(id).await
    }

    pub async fn delete_payment(&self, id: &RecordId) -> Result<(), LedgerError> {
        self.bookkeeping_usecase.delete_payment(id).await
    }

    /// Deletes the client and, in the same store operation, every project
    /// and payment referencing it.
    pub async fn delete_client(&self, id: &RecordId) -> Result<(), LedgerError> {
        self.bookkeeping_usecase.delete_client(id).await
    }

    pub async fn client_summaries(&self) -> Result<Vec<ClientSummary>, LedgerError> {
        self.bookkeeping_usecase.client_summaries().await
    }

    /// `Ok(None)` when the id does not resolve; callers show an empty state
    /// or redirect rather than treating this as a failure.
    pub async fn client_detail(
        &self,
        client_id: &RecordId,
    ) -> Result<Option<ClientDetail>, LedgerError> {
        self.bookkeeping_usecase.client_detail(client_id).await
    }

    pub async fn payments_on_date(&self, date: NaiveDate) -> Result<Vec<Payment>, LedgerError> {
        self.bookkeeping_usecase.payments_on_date(date).await
    }

    // Reports.
    // ---

    pub async fn client_report(
        &self,
        client_id: &RecordId,
    ) -> Result<ExportedWorkbook, LedgerError> {
        let detail = self
            .bookkeeping_usecase
            .client_detail(client_id)
            .await?
            .ok_or_else(|| LedgerError::ClientNotFound {
                id: client_id.to_string(),
            })?;
        let summary =
            summary_logic::summarize_client(&detail.client, &detail.projects, &detail.payments);
        let workbook = self
            .client_printer
            .print(&summary, &detail.projects, &detail.payments)?;
        info!(client_id = %client_id, filename = %workbook.filename, "exported client report");
        Ok(workbook)
    }

    /// Errors with `NothingToExport` when no payment falls on the given
    /// local calendar day; an empty workbook is never produced.
    pub async fn daily_report(&self, date: NaiveDate) -> Result<ExportedWorkbook, LedgerError> {
        let payments = self.bookkeeping_usecase.payments_on_date(date).await?;
        if payments.is_empty() {
            return Err(LedgerError::NothingToExport { date });
        }

        let names: HashMap<RecordId, String> = self
            .store
            .clients()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();
        let rows: Vec<DailyReportRow> = payments
            .into_iter()
            .map(|payment| DailyReportRow {
                client_name: names
                    .get(&payment.client_id)
                    .cloned()
                    .unwrap_or_else(|| "(unknown client)".to_string()),
                payment,
            })
            .collect();

        let workbook = self.daily_printer.print(date, &rows)?;
        info!(%date, rows = rows.len(), filename = %workbook.filename, "exported daily report");
        Ok(workbook)
    }

    /// Write a finished report into `dir` under its own filename, returning
    /// the full path.
    pub async fn save_workbook<P>(
        &self,
        dir: P,
        workbook: &ExportedWorkbook,
    ) -> Result<PathBuf, LedgerError>
    where
        P: AsRef<Path> + Send,
    {
        let path = dir.as_ref().join(&workbook.filename);
        tokio::fs::write(&path, &workbook.bytes)
            .await
            .map_err(|e| LedgerError::WorkbookWrite {
                path: path.clone(),
                source: e,
            })?;
        Ok(path)
    }
}
