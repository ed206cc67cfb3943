use std::path::Path;

use ron::from_str;

use crate::{
    data::models::ledger_config_model::StudioLedgerConfigModel, entities::StudioLedgerConfig,
    errors::LedgerError,
};

pub(crate) trait ConfigDatasource {
    fn from_string(&self, s: &str) -> Result<StudioLedgerConfig, LedgerError>;
}

pub(crate) struct ConfigDatasourceImpl;

impl ConfigDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn from_file<P>(&self, path: P) -> Result<StudioLedgerConfig, LedgerError>
    where
        P: AsRef<Path> + Send,
    {
        let raw = tokio::fs::read_to_string(path.as_ref())
            .await
            .map_err(|e| LedgerError::ConfigRead {
                path: path.as_ref().to_path_buf(),
                source: e,
            })?;
        self.from_string(&raw)
    }
}

impl ConfigDatasource for ConfigDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<StudioLedgerConfig, LedgerError> {
        let model: StudioLedgerConfigModel = from_str(s).map_err(LedgerError::InvalidConfig)?;
        model.into_config()
    }
}

#[cfg(test)]
mod tests {
    use iso_currency::Currency;

    use super::*;

    #[test]
    fn parses_full_config() {
        let config = ConfigDatasourceImpl::new()
            .from_string(r#"(store_path: "books.json", currency: "EUR")"#)
            .unwrap();
        assert_eq!(config.store_path.to_str(), Some("books.json"));
        assert_eq!(config.currency, Currency::EUR);
    }

    #[test]
    fn currency_defaults_to_usd() {
        let config = ConfigDatasourceImpl::new()
            .from_string(r#"(store_path: "books.json")"#)
            .unwrap();
        assert_eq!(config.currency, Currency::USD);
    }

    #[test]
    fn rejects_unknown_currency_code() {
        let err = ConfigDatasourceImpl::new()
            .from_string(r#"(store_path: "books.json", currency: "GOLD")"#)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InvalidIsoCurrencyCode { code } if code == "GOLD"
        ));
    }
}
