//! Field-level parsing shared by the CSV repositories. The CSV layer owns
//! string conversion; domain models only ever see typed values.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use csv::StringRecord;
use rust_decimal::Decimal;

/// Fetch a column by index, treating a missing column as empty.
pub(crate) fn field<'a>(record: &'a StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or("")
}

/// Parse an RFC 3339 timestamp into UTC.
pub(crate) fn parse_datetime(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("Invalid timestamp in CSV record: '{}'", value))
}

/// Parse a YYYY-MM-DD date.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date in CSV record: '{}'", value))
}

/// Parse a fixed-point money or rate value.
pub(crate) fn parse_decimal(value: &str) -> Result<Decimal> {
    value
        .parse::<Decimal>()
        .map_err(|e| anyhow!("Invalid decimal '{}' in CSV record: {}", value, e))
}

pub(crate) fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("Invalid boolean '{}' in CSV record", other)),
    }
}

pub(crate) fn parse_u32(value: &str) -> Result<u32> {
    value
        .parse::<u32>()
        .with_context(|| format!("Invalid integer in CSV record: '{}'", value))
}
