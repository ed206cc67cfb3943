/// A finished spreadsheet report, ready to hand to the user as a named
/// download or to write to disk.
#[derive(Debug, Clone)]
pub struct ExportedWorkbook {
    /// Deterministic filename derived from the client name or report date,
    /// sanitized for the host filesystem.
    pub filename: String,
    /// OOXML workbook bytes.
    pub bytes: Vec<u8>,
}
