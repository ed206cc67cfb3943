use std::path::PathBuf;

use iso_currency::Currency;

/// Application configuration, fixed at construction time.
///
/// The store path is the only environment-dependent setting; the currency
/// controls report formatting only (stored amounts are plain numbers).
#[derive(Debug, Clone)]
pub struct StudioLedgerConfig {
    /// Location of the persisted JSON store document.
    pub store_path: PathBuf,
    pub currency: Currency,
}

impl StudioLedgerConfig {
    pub fn new<P: Into<PathBuf>>(store_path: P) -> Self {
        Self {
            store_path: store_path.into(),
            currency: Currency::USD,
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}
