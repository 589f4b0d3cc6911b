//! Pure render tree for the report table.
//!
//! Each poll cycle maps the server's listing to plain [`ReportRow`] records
//! before any markup exists; the dashboard view is only an adapter that
//! applies the rows to the DOM. Server order is authoritative — no sorting,
//! no cross-cycle diffing.

use super::report;

/// Path prefix for the per-report download links.
pub const DOWNLOAD_PREFIX: &str = "report/";

/// One rendered table row: link label, link target, timestamp cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: String,
    pub href: String,
    pub timestamp_text: String,
}

/// Builds the full row set for one listing, preserving input order.
///
/// Malformed identifiers still produce a row (with the invalid-date marker);
/// a single bad entry never aborts the batch.
pub fn build_rows(listing: &[String]) -> Vec<ReportRow> {
    listing
        .iter()
        .map(|id| {
            let meta = report::parse_report_id(id);
            ReportRow {
                label: meta.name,
                href: format!("{DOWNLOAD_PREFIX}{id}"),
                timestamp_text: report::timestamp_text(meta.timestamp),
            }
        })
        .collect()
}

/// Applies one cycle's listing to the current row state.
///
/// An empty listing keeps the previous rows on screen; a non-empty listing
/// replaces them wholesale.
pub fn apply_listing(rows: &mut Vec<ReportRow>, listing: &[String]) {
    if listing.is_empty() {
        return;
    }
    *rows = build_rows(listing);
}
