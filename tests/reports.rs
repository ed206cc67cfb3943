//! Integration tests for the report exporters: per-client workbooks, daily
//! workbooks, nothing-to-export handling, and filename derivation.

use chrono::{Local, NaiveDate, TimeZone, Utc};
use studio_ledger::entities::StudioLedgerConfig;
use studio_ledger::errors::LedgerError;
use studio_ledger::util::StudioLedgerUtil;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ledger(dir: &TempDir) -> StudioLedgerUtil {
    StudioLedgerUtil::new(StudioLedgerConfig::new(dir.path().join("books.json")))
}

/// Noon on the given local calendar day, as the stored UTC instant.
fn local_noon(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .unwrap()
        .with_timezone(&Utc)
}

fn assert_is_workbook(bytes: &[u8]) {
    // OOXML workbooks are zip containers.
    assert!(bytes.len() > 4);
    assert!(bytes.starts_with(b"PK"));
}

// ---------------------------------------------------------------------------
// Per-client reports
// ---------------------------------------------------------------------------

#[tokio::test]
async fn client_with_no_activity_still_exports_a_valid_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger(&dir);
    let client = ledger.add_client("Acme").await.unwrap();

    let workbook = ledger.client_report(&client.id).await.unwrap();
    assert_eq!(workbook.filename, "Acme_report.xlsx");
    assert_is_workbook(&workbook.bytes);
}

#[tokio::test]
async fn client_report_filename_is_sanitized() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger(&dir);
    let client = ledger.add_client("Acme / Büro: Nord").await.unwrap();

    let workbook = ledger.client_report(&client.id).await.unwrap();
    assert_eq!(workbook.filename, "Acme_B_ro_Nord_report.xlsx");
}

#[tokio::test]
async fn client_report_for_unknown_client_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger(&dir);
    assert!(matches!(
        ledger.client_report(&"gone".into()).await,
        Err(LedgerError::ClientNotFound { .. })
    ));
}

#[tokio::test]
async fn client_report_covers_projects_and_payments() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger(&dir);
    let client = ledger.add_client("Acme").await.unwrap();
    ledger.add_project(&client.id, 5, 20.0).await.unwrap();
    ledger
        .record_payment(
            &client.id,
            60.0,
            local_noon(2024, 3, 1),
            Some("first half".to_string()),
        )
        .await
        .unwrap();

    let workbook = ledger.client_report(&client.id).await.unwrap();
    assert_is_workbook(&workbook.bytes);
}

// ---------------------------------------------------------------------------
// Daily reports
// ---------------------------------------------------------------------------

#[tokio::test]
async fn daily_report_collects_that_day_only_and_names_the_file_by_date() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger(&dir);
    let client = ledger.add_client("Acme").await.unwrap();
    ledger
        .record_payment(&client.id, 60.0, local_noon(2024, 3, 1), None)
        .await
        .unwrap();
    ledger
        .record_payment(&client.id, 40.0, local_noon(2024, 3, 2), None)
        .await
        .unwrap();

    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let workbook = ledger.daily_report(date).await.unwrap();
    assert_eq!(workbook.filename, "daily_report_2024-03-01.xlsx");
    assert_is_workbook(&workbook.bytes);
}

#[tokio::test]
async fn empty_day_is_nothing_to_export_not_an_empty_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger(&dir);
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert!(matches!(
        ledger.daily_report(date).await,
        Err(LedgerError::NothingToExport { .. })
    ));
}

// ---------------------------------------------------------------------------
// Saving to disk
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_workbook_writes_the_named_download() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let ledger = ledger(&dir);
    let client = ledger.add_client("Acme").await.unwrap();

    let workbook = ledger.client_report(&client.id).await.unwrap();
    let path = ledger.save_workbook(out.path(), &workbook).await.unwrap();

    assert_eq!(path, out.path().join("Acme_report.xlsx"));
    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, workbook.bytes);
}
