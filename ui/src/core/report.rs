//! Report-identifier parsing and timestamp presentation.
//!
//! The server names generated report files `<name>-<unixSeconds>.csv`. The
//! dashboard never interprets report contents; it only splits the identifier
//! into a display name and a creation time. The split takes the *last* `-`
//! segment as the timestamp so hyphenated report names keep their full text.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Suffix the server appends to every generated report file.
pub const REPORT_SUFFIX: &str = ".csv";

/// Cell text shown when an identifier carries no usable timestamp segment.
pub const INVALID_TIMESTAMP_LABEL: &str = "Invalid Date";

/// Display-oriented view of one report identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMeta {
    /// Human-readable report category (everything before the timestamp).
    pub name: String,
    /// Creation time in seconds since epoch, when the identifier has a
    /// numeric final segment.
    pub timestamp: Option<i64>,
}

/// Splits a report identifier into its display name and creation timestamp.
///
/// Identifiers without a trailing numeric segment are not an error: the whole
/// stem becomes the name and the timestamp is absent, which the renderer
/// shows as [`INVALID_TIMESTAMP_LABEL`].
pub fn parse_report_id(id: &str) -> ReportMeta {
    let stem = id.strip_suffix(REPORT_SUFFIX).unwrap_or(id);

    if let Some((name, seconds)) = stem.rsplit_once('-') {
        if !name.is_empty() {
            if let Ok(timestamp) = seconds.parse::<i64>() {
                return ReportMeta {
                    name: name.to_string(),
                    timestamp: Some(timestamp),
                };
            }
        }
    }

    ReportMeta {
        name: stem.to_string(),
        timestamp: None,
    }
}

/// RFC 3339 text for an epoch-seconds timestamp, or the invalid-date marker.
pub fn timestamp_text(timestamp: Option<i64>) -> String {
    timestamp
        .and_then(|seconds| OffsetDateTime::from_unix_timestamp(seconds).ok())
        .and_then(|moment| moment.format(&Rfc3339).ok())
        .unwrap_or_else(|| INVALID_TIMESTAMP_LABEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_epoch_seconds() {
        let meta = parse_report_id("daily-1700000000.csv");
        assert_eq!(meta.name, "daily");
        assert_eq!(meta.timestamp, Some(1_700_000_000));
    }

    #[test]
    fn hyphenated_names_keep_their_full_text() {
        let meta = parse_report_id("broadband-subscription-1700003600.csv");
        assert_eq!(meta.name, "broadband-subscription");
        assert_eq!(meta.timestamp, Some(1_700_003_600));
    }

    #[test]
    fn missing_timestamp_segment_degrades_to_name_only() {
        let meta = parse_report_id("malformed.csv");
        assert_eq!(meta.name, "malformed");
        assert_eq!(meta.timestamp, None);
    }

    #[test]
    fn non_numeric_segment_degrades_to_name_only() {
        let meta = parse_report_id("weekly-summary.csv");
        assert_eq!(meta.name, "weekly-summary");
        assert_eq!(meta.timestamp, None);
    }

    #[test]
    fn suffix_is_optional() {
        let meta = parse_report_id("adhoc-1700000000");
        assert_eq!(meta.name, "adhoc");
        assert_eq!(meta.timestamp, Some(1_700_000_000));
    }

    #[test]
    fn formats_epoch_seconds_as_rfc3339() {
        assert_eq!(timestamp_text(Some(1_700_000_000)), "2023-11-14T22:13:20Z");
        assert_eq!(timestamp_text(Some(1_700_003_600)), "2023-11-14T23:13:20Z");
    }

    #[test]
    fn absent_timestamp_renders_invalid_marker() {
        assert_eq!(timestamp_text(None), INVALID_TIMESTAMP_LABEL);
    }

    #[test]
    fn out_of_range_timestamp_renders_invalid_marker() {
        assert_eq!(timestamp_text(Some(i64::MAX)), INVALID_TIMESTAMP_LABEL);
    }
}
