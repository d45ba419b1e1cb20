//! Loading ledger entries from disk.

use std::fs;
use std::path::Path;

use chrono::Local;
use haulbook_core::ledger::LedgerEntry;
use haulbook_core::reports::ReportPeriod;
use haulbook_shared::{AppError, AppResult};
use tracing::debug;

/// Reads a JSON array of ledger entries.
pub fn load_entries(path: &Path) -> AppResult<Vec<LedgerEntry>> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::NotFound(format!("{}: {e}", path.display())),
        _ => AppError::from(e),
    })?;
    let entries: Vec<LedgerEntry> = serde_json::from_str(&raw)?;
    debug!(path = %path.display(), entries = entries.len(), "loaded ledger entries");
    Ok(entries)
}

/// Resolves the report period.
///
/// Missing bounds default to the earliest and latest entry dates, or to today
/// when there are no entries.
pub fn resolve_period(
    entries: &[LedgerEntry],
    from: Option<chrono::NaiveDate>,
    to: Option<chrono::NaiveDate>,
) -> AppResult<ReportPeriod> {
    let today = Local::now().date_naive();
    let start = from
        .or_else(|| entries.iter().map(|e| e.date).min())
        .unwrap_or(today);
    let end = to
        .or_else(|| entries.iter().map(|e| e.date).max())
        .unwrap_or(today);

    if start > end {
        return Err(AppError::Validation(format!(
            "period start {start} is after end {end}"
        )));
    }
    Ok(ReportPeriod::new(start, end))
}
