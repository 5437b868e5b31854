use std::path::Path;

use anyhow::Context;
use chrono::NaiveDateTime;

use crate::models::InvestorRecord;

/// Timestamps in the export look like `9/11/23 2:30 PM`.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%m/%d/%y %I:%M %p";

/// Columns every roster export must carry, spelled the way the platform
/// spells them.
const EXPECTED_COLUMNS: [&str; 4] = [
    "Last Investment With AngelList",
    "Last Investment with Your Syndicate",
    "Date Joined Your Syndicate",
    "Total Amount Invested With AngelList (Last 12m)",
];

/// Read the LP roster export, preserving row order. A missing file, a
/// malformed row, or an absent expected column all surface here.
pub fn read_investors(path: &Path) -> anyhow::Result<Vec<InvestorRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from {}", path.display()))?;
    for column in EXPECTED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            anyhow::bail!("{} is missing expected column {column:?}", path.display());
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<InvestorRecord>() {
        let record = row.with_context(|| format!("malformed row in {}", path.display()))?;
        records.push(record);
    }

    Ok(records)
}

pub fn parse_export_timestamp(raw: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), EXPORT_TIMESTAMP_FORMAT)
        .with_context(|| format!("timestamp {raw:?} does not match `{EXPORT_TIMESTAMP_FORMAT}`"))
}

/// Calendar year of an export timestamp as a 4-digit string.
pub fn investment_year(raw: &str) -> anyhow::Result<String> {
    Ok(parse_export_timestamp(raw)?.format("%Y").to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_export_timestamps() {
        let parsed = parse_export_timestamp("9/11/23 2:30 PM").unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2023-09-11 14:30");
        assert_eq!(investment_year("01/05/21 11:00 AM").unwrap(), "2021");
    }

    #[test]
    fn rejects_unexpected_timestamp_shapes() {
        assert!(parse_export_timestamp("2023-09-11 14:30").is_err());
        assert!(parse_export_timestamp("9/11/23 14:30").is_err());
        assert!(investment_year("").is_err());
    }

    #[test]
    fn reads_records_and_treats_empty_cells_as_absent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "Name,Last Investment With AngelList,Last Investment with Your Syndicate,\
             Date Joined Your Syndicate,Total Amount Invested With AngelList (Last 12m)"
        )
        .unwrap();
        writeln!(file, "Ada,3/10/21 2:30 PM,,1/15/20 10:00 AM,≥ $500k").unwrap();
        writeln!(file, "Grace,,,2/20/20 11:00 AM,").unwrap();

        let records = read_investors(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].last_investment_with_angellist.as_deref(),
            Some("3/10/21 2:30 PM")
        );
        assert!(records[0].last_investment_with_syndicate.is_none());
        assert_eq!(records[0].invested_last_12m.as_deref(), Some("≥ $500k"));
        assert!(records[1].last_investment_with_angellist.is_none());
        assert!(records[1].invested_last_12m.is_none());
        assert_eq!(records[1].date_joined_syndicate, "2/20/20 11:00 AM");
    }

    #[test]
    fn fails_on_missing_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Name,Email").unwrap();
        writeln!(file, "Ada,ada@example.com").unwrap();
        assert!(read_investors(file.path()).is_err());
    }

    #[test]
    fn fails_when_one_optional_column_is_absent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "Last Investment with Your Syndicate,Date Joined Your Syndicate,\
             Total Amount Invested With AngelList (Last 12m)"
        )
        .unwrap();
        writeln!(file, ",1/15/20 10:00 AM,$0").unwrap();

        let error = read_investors(file.path()).unwrap_err();
        assert!(error.to_string().contains("Last Investment With AngelList"));
    }

    #[test]
    fn fails_on_missing_file() {
        assert!(read_investors(Path::new("no-such-roster.csv")).is_err());
    }
}
