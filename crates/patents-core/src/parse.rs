//! Column-level parsing helpers shared by both record kinds.

use chrono::{Days, NaiveDate};
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{FormatError, ParseError};

/// Delay between the date a row describes and the date it becomes available.
pub const LAG_DAYS: u64 = 1;

/// Date format of the time series date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format of universe file names (`yyyymmdd`).
pub const FILE_DATE_FORMAT: &str = "%Y%m%d";

/// CSV settings shared by single-line parsing and file loading.
///
/// Rows are headerless and may vary in width; quoted fields are unquoted
/// and nothing is trimmed.
pub fn csv_reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).trim(Trim::None);
    builder
}

/// Split a raw line into its columns.
pub fn split_line(line: &str) -> Vec<String> {
    let mut reader = csv_reader_builder().from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => record.iter().map(str::to_string).collect(),
        // A &str source cannot fail on I/O or UTF-8; only blank input ends here.
        _ => Vec::new(),
    }
}

/// Check the column count of a split line.
pub fn expect_columns<S: AsRef<str>>(fields: &[S], expected: usize) -> Result<(), ParseError> {
    if fields.len() != expected {
        return Err(ParseError::ColumnCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

/// Parse a `yyyy-MM-dd` date with no leniency on widths or separators.
pub fn parse_date(value: &str) -> Result<NaiveDate, FormatError> {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shape_ok {
        return Err(FormatError {
            value: value.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| FormatError {
        value: value.to_string(),
    })
}

/// Parse a locale-invariant decimal column.
///
/// Accepts an optional sign and decimal point. Grouping separators and
/// exponents are rejected.
pub fn parse_decimal(column: usize, value: &str) -> Result<Decimal, ParseError> {
    let trimmed = value.trim();
    let invalid = || ParseError::InvalidNumber {
        column,
        value: value.to_string(),
    };

    let digits = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);
    if !digits.bytes().any(|b| b.is_ascii_digit())
        || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'.')
    {
        return Err(invalid());
    }

    Decimal::from_str(trimmed).map_err(|_| invalid())
}

/// Shift a file date back to the date the row describes.
pub fn observation_date(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(LAG_DAYS)).unwrap_or(date)
}

/// The date a row becomes available, given the date it describes.
pub fn available_date(time: NaiveDate) -> NaiveDate {
    time.checked_add_days(Days::new(LAG_DAYS)).unwrap_or(time)
}
