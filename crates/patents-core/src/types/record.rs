//! Per-symbol time series record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PatentMetrics, Symbol, METRIC_COLUMNS};
use crate::error::RecordResult;
use crate::parse::{
    available_date, expect_columns, observation_date, parse_date, split_line, DATE_FORMAT,
};

/// Columns in a time series row: date, then the metrics.
pub const TIME_SERIES_COLUMNS: usize = 1 + METRIC_COLUMNS;

/// Common accessors for both patent record kinds.
pub trait PatentData {
    /// Symbol the record describes.
    fn symbol(&self) -> &Symbol;

    /// Date the filing activity pertains to.
    fn time(&self) -> NaiveDate;

    /// Filing metrics.
    fn metrics(&self) -> &PatentMetrics;

    /// Date the record becomes available to consumers.
    fn end_time(&self) -> NaiveDate {
        available_date(self.time())
    }

    /// Generic record value, mirrors `patents_filed`.
    fn value(&self) -> Decimal {
        self.metrics().patents_filed
    }
}

/// One day of patent filing metrics for one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatentRecord {
    /// Symbol the record describes
    pub symbol: Symbol,
    /// Observation date (file date minus the lag)
    pub time: NaiveDate,
    /// Filing metrics
    pub metrics: PatentMetrics,
}

impl PatentRecord {
    /// Create a record from its parts.
    pub fn new(symbol: Symbol, time: NaiveDate, metrics: PatentMetrics) -> Self {
        Self {
            symbol,
            time,
            metrics,
        }
    }

    /// Parse one line of a per-symbol file.
    ///
    /// The row's own date column drives the record dates; `date` is the
    /// context date of the request and does not alter the result.
    pub fn parse_line(symbol: &Symbol, line: &str, date: NaiveDate) -> RecordResult<Self> {
        Self::from_fields(symbol, &split_line(line), date)
    }

    /// Build a record from pre-split columns.
    pub fn from_fields<S: AsRef<str>>(
        symbol: &Symbol,
        fields: &[S],
        _date: NaiveDate,
    ) -> RecordResult<Self> {
        expect_columns(fields, TIME_SERIES_COLUMNS)?;

        let file_date = parse_date(fields[0].as_ref())?;
        let metrics = PatentMetrics::from_fields(&fields[1..], 1)?;

        Ok(Self {
            symbol: symbol.clone(),
            time: observation_date(file_date),
            metrics,
        })
    }

    /// Render the record as a row of its per-symbol file.
    ///
    /// The symbol is not written; it is implied by the file name.
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{}",
            self.end_time().format(DATE_FORMAT),
            self.metrics.to_csv_columns()
        )
    }
}

impl PatentData for PatentRecord {
    fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    fn time(&self) -> NaiveDate {
        self.time
    }

    fn metrics(&self) -> &PatentMetrics {
        &self.metrics
    }
}

impl fmt::Display for PatentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, self)
    }
}

/// Shared human-readable summary used by both record kinds.
pub(crate) fn write_summary(f: &mut fmt::Formatter<'_>, data: &impl PatentData) -> fmt::Result {
    let m = data.metrics();
    write!(
        f,
        "{} - Patents Filed: {}, Tech Diversity: {}, 90d Patents: {}",
        data.symbol(),
        m.patents_filed,
        m.tech_diversity,
        m.patents_90d
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FormatError, ParseError, RecordError};
    use chrono::Duration;
    use rust_decimal_macros::dec;

    const LINE: &str = "2022-02-15,5,1234,50,150,500,8,3,0.75,2";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parse(line: &str) -> RecordResult<PatentRecord> {
        PatentRecord::parse_line(&Symbol::equity("AAPL"), line, date(2022, 2, 15))
    }

    #[test]
    fn test_parse_line() {
        let record = parse(LINE).unwrap();

        assert_eq!(record.symbol.ticker, "AAPL");
        assert_eq!(record.time, date(2022, 2, 14));
        assert_eq!(record.end_time(), date(2022, 2, 15));
        assert_eq!(record.metrics.patents_filed, dec!(5));
        assert_eq!(record.metrics.cumulative_patents, dec!(1234));
        assert_eq!(record.metrics.tech_diversity, dec!(0.75));
        assert_eq!(record.metrics.unique_locations, dec!(2));
        assert_eq!(record.value(), dec!(5));
    }

    #[test]
    fn test_lag_is_one_day() {
        for line in [LINE, "2020-03-01,0,0,0,0,0,0,1,0,0"] {
            let record = parse(line).unwrap();
            assert_eq!(record.end_time() - record.time, Duration::days(1));
        }
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse(LINE).unwrap(), parse(LINE).unwrap());
    }

    #[test]
    fn test_missing_column() {
        let err = parse("2022-02-15,5,1234,50,150,500,8,3,0.75").unwrap_err();
        assert_eq!(
            err,
            RecordError::Parse(ParseError::ColumnCount {
                expected: 10,
                found: 9
            })
        );
    }

    #[test]
    fn test_non_numeric_column() {
        let err = parse("2022-02-15,5,1234,50,150,500,8,three,0.75,2").unwrap_err();
        assert_eq!(
            err,
            RecordError::Parse(ParseError::InvalidNumber {
                column: 7,
                value: "three".to_string()
            })
        );
    }

    #[test]
    fn test_wrong_date_separator() {
        let err = parse("2022/02/15,5,1234,50,150,500,8,3,0.75,2").unwrap_err();
        assert_eq!(
            err,
            RecordError::Format(FormatError {
                value: "2022/02/15".to_string()
            })
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let record = parse(LINE).unwrap();
        let mut copy = record.clone();
        assert_eq!(copy, record);

        copy.metrics.patents_filed = dec!(99);
        copy.symbol.ticker.push_str("L");
        assert_eq!(record.metrics.patents_filed, dec!(5));
        assert_eq!(record.symbol.ticker, "AAPL");
        assert_ne!(copy, record);
    }

    #[test]
    fn test_csv_roundtrip() {
        let record = parse(LINE).unwrap();
        let line = record.to_csv_line();
        assert_eq!(line, LINE);
        assert_eq!(parse(&line).unwrap(), record);
    }

    #[test]
    fn test_json_roundtrip() {
        let record = parse(LINE).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: PatentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_date_column_is_not_trimmed() {
        for bad in [" 2022-02-15", "2022-02-15 "] {
            let line = format!("{},5,1234,50,150,500,8,3,0.75,2", bad);
            assert_eq!(
                parse(&line).unwrap_err(),
                RecordError::Format(FormatError {
                    value: bad.to_string()
                })
            );
        }
    }

    #[test]
    fn test_roundtrip_edge_rows() {
        // (input row, expected rendering)
        let rows = [
            (
                "2022-02-15,5.0,1234,50,150,500,8,3,0.75,2",
                "2022-02-15,5.0,1234,50,150,500,8,3,0.75,2",
            ),
            (
                "2022-02-15,+3,-1,0,0,0,0,0,0,0",
                "2022-02-15,3,-1,0,0,0,0,0,0,0",
            ),
            (
                "2022-02-15,1,1,1,1,1,1,1,0.1234567890123456789012345678,1",
                "2022-02-15,1,1,1,1,1,1,1,0.1234567890123456789012345678,1",
            ),
            (
                "2020-01-01,0,0,0,0,0,0,0,0,0",
                "2020-01-01,0,0,0,0,0,0,0,0,0",
            ),
            (
                "2024-03-01,2,40,4,12,30,5,2,0.40,1",
                "2024-03-01,2,40,4,12,30,5,2,0.40,1",
            ),
        ];

        for (row, rendered) in rows {
            let record = parse(row).unwrap();

            let line = record.to_csv_line();
            assert_eq!(line, rendered);
            assert_eq!(parse(&line).unwrap(), record);

            let json = serde_json::to_string(&record).unwrap();
            let back: PatentRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(back, record);
            assert_eq!(back.to_csv_line(), rendered);

            let copy = record.clone();
            assert_eq!(copy, record);
            assert_eq!(copy.end_time() - copy.time, Duration::days(1));
        }
    }

    #[test]
    fn test_display() {
        let record = parse(LINE).unwrap();
        assert_eq!(
            record.to_string(),
            "AAPL - Patents Filed: 5, Tech Diversity: 0.75, 90d Patents: 150"
        );
    }
}
