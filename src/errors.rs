use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    // IO-related.
    #[error("error reading store document at {path:?}")]
    StoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error persisting store document at {path:?}")]
    StorePersist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error reading config file at {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error writing workbook to {path:?}")]
    WorkbookWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing-related.
    #[error("invalid store document (invalid JSON format)")]
    InvalidStoreDocument(#[source] serde_json::Error),
    #[error("invalid config (invalid RON format)")]
    InvalidConfig(#[source] ron::error::SpannedError),
    #[error("invalid ISO datetime: {value}")]
    InvalidIsoDateTime { value: String },
    #[error("invalid ISO currency code: {code}")]
    InvalidIsoCurrencyCode { code: String },

    // Validation-related.
    #[error("client name must not be empty")]
    EmptyClientName,
    #[error("number of videos must be at least 1")]
    InvalidVideoCount,
    #[error("charge per video must be a positive amount, got {amount}")]
    InvalidChargePerVideo { amount: f64 },
    #[error("payment amount must be a positive amount, got {amount}")]
    InvalidPaymentAmount { amount: f64 },

    // Export-related.
    #[error("client '{id}' does not exist")]
    ClientNotFound { id: String },
    #[error("no payments recorded on {date}, nothing to export")]
    NothingToExport { date: NaiveDate },
    #[error("error building workbook")]
    WorkbookBuild(#[from] rust_xlsxwriter::XlsxError),
}
