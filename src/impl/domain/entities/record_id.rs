use std::fmt;

/// Identifier assigned to a stored record, unique within its collection for
/// the lifetime of the store (never reused after deletion).
///
/// Roughly ordered by creation time, but the random suffix dominates
/// comparisons within the same millisecond; sort on `created_at`/`date`
/// fields instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId(s.to_string())
    }
}
