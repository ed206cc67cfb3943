use std::sync::LazyLock;

use regex::Regex;

static ILLEGAL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._\-]+").expect("hardcoded regex should be valid"));

/// Escape a client name for use as a filename stem. Any run of characters
/// outside `[A-Za-z0-9._-]` (whitespace included) becomes a single '_'; a
/// name with nothing left falls back to "client" so the download always has
/// a stem.
pub(crate) fn sanitize_file_stem(name: &str) -> String {
    let collapsed = ILLEGAL_RUN.replace_all(name.trim(), "_");
    if collapsed.is_empty() {
        "client".to_string()
    } else {
        collapsed.into_owned()
    }
}
