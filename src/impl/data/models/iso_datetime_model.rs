use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// RFC 3339 / ISO-8601 instant as stored in the document (ex.
/// "2024-03-01T23:59:00Z"). Offsets are normalized to UTC on read; writes
/// keep however many subsecond digits the instant carries, so a stored
/// record reads back as exactly the value that was saved.
#[derive(Debug)]
pub(crate) struct IsoDateTimeModel(pub DateTime<Utc>);

impl FromStr for IsoDateTimeModel {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|_| LedgerError::InvalidIsoDateTime {
            value: s.to_string(),
        })?;
        Ok(IsoDateTimeModel(dt.with_timezone(&Utc)))
    }
}

impl Serialize for IsoDateTimeModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl<'de> Deserialize<'de> for IsoDateTimeModel {
    fn deserialize<D>(deserializer: D) -> Result<IsoDateTimeModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IsoDateTimeModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<DateTime<Utc>> for IsoDateTimeModel {
    fn from(dt: DateTime<Utc>) -> Self {
        IsoDateTimeModel(dt)
    }
}

impl Into<DateTime<Utc>> for IsoDateTimeModel {
    fn into(self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parses_utc_and_offset_forms() {
        let utc: IsoDateTimeModel = "2024-03-01T23:59:00.000Z".parse().unwrap();
        let offset: IsoDateTimeModel = "2024-03-02T08:59:00+09:00".parse().unwrap();
        assert_eq!(utc.0, offset.0);
    }

    #[test]
    fn rejects_garbage() {
        assert!("yesterday".parse::<IsoDateTimeModel>().is_err());
    }

    #[test]
    fn serializes_as_rfc3339_utc() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 0).unwrap();
        let json = serde_json::to_string(&IsoDateTimeModel(dt)).unwrap();
        assert_eq!(json, "\"2024-03-01T23:59:00Z\"");
    }

    #[test]
    fn subsecond_precision_survives_a_round_trip() {
        let json = "\"2024-03-01T23:59:00.123456789Z\"";
        let model: IsoDateTimeModel = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&model).unwrap(), json);
    }
}
