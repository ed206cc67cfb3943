use std::path::PathBuf;

use iso_currency::Currency;

use crate::{entities::StudioLedgerConfig, errors::LedgerError};

/// RON form of the config file, ex.:
///
/// ```ron
/// (
///     store_path: "studio-books.json",
///     currency: "EUR",
/// )
/// ```
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct StudioLedgerConfigModel {
    pub store_path: PathBuf,
    #[serde(default = "default_currency_code")]
    pub currency: String,
}

fn default_currency_code() -> String {
    "USD".to_string()
}

impl StudioLedgerConfigModel {
    pub(crate) fn into_config(self) -> Result<StudioLedgerConfig, LedgerError> {
        let currency =
            Currency::from_code(&self.currency).ok_or(LedgerError::InvalidIsoCurrencyCode {
                code: self.currency,
            })?;
        Ok(StudioLedgerConfig {
            store_path: self.store_path,
            currency,
        })
    }
}
