//! CSV-backed patent data source.

use chrono::NaiveDate;
use csv::{FromUtf8Error, StringRecord};
use patents_core::error::DataError;
use patents_core::parse::csv_reader_builder;
use patents_core::{
    PatentData, PatentRecord, PatentUniverseRecord, RecordResult, SourceLocation, SourceLocator,
    Symbol, SymbolResolver, UniverseSnapshot,
};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::RecordCache;

/// What to do with a file that contains an unparseable line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Log the line and keep the rest of the file
    #[default]
    SkipLine,
    /// Log the line and drop the whole file
    SkipFile,
    /// Fail the request
    Abort,
}

/// Patent data source reading vendor CSV files.
pub struct PatentDataSource {
    locator: Box<dyn SourceLocator>,
    resolver: Box<dyn SymbolResolver>,
    policy: ErrorPolicy,
    cache: RwLock<RecordCache>,
}

impl PatentDataSource {
    /// Create a new data source.
    pub fn new(
        locator: impl SourceLocator + 'static,
        resolver: impl SymbolResolver + 'static,
    ) -> Self {
        Self {
            locator: Box::new(locator),
            resolver: Box::new(resolver),
            policy: ErrorPolicy::default(),
            cache: RwLock::new(RecordCache::new()),
        }
    }

    /// Set the policy applied to unparseable lines.
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Load the time series for a symbol.
    ///
    /// Records are returned in date order and filtered to those that become
    /// available within `[start, end]` when bounds are given.
    pub async fn load_time_series(
        &self,
        symbol: &Symbol,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<PatentRecord>, DataError> {
        let cached = self.cache.read().await.series(symbol);
        let records = match cached {
            Some(records) => records,
            None => {
                let records = self.read_time_series(symbol, end).await?;
                self.cache
                    .write()
                    .await
                    .put_series(symbol.clone(), records.clone());
                records
            }
        };

        Ok(records
            .into_iter()
            .filter(|r| start.map_or(true, |s| r.end_time() >= s))
            .filter(|r| end.map_or(true, |e| r.end_time() <= e))
            .collect())
    }

    /// Load the universe for one date, `None` when no file exists for it.
    pub async fn load_universe(&self, date: NaiveDate) -> Result<Option<UniverseSnapshot>, DataError> {
        if let Some(snapshot) = self.cache.read().await.universe(date) {
            return Ok(Some(snapshot));
        }

        let location = self.locator.universe_source(date);
        let Some(rows) = read_rows(&location).await? else {
            debug!("No universe file for {}", date);
            return Ok(None);
        };

        let records = self.collect(&location, rows, |fields| {
            PatentUniverseRecord::from_fields(fields, date, self.resolver.as_ref())
        })?;

        let snapshot = UniverseSnapshot::new(date, records);
        debug!("Loaded {} universe records for {}", snapshot.len(), date);
        self.cache.write().await.put_universe(snapshot.clone());
        Ok(Some(snapshot))
    }

    /// Load every available universe between `start` and `end` inclusive.
    pub async fn universe_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<UniverseSnapshot>, DataError> {
        let mut history = Vec::new();
        for date in start.iter_days().take_while(|d| *d <= end) {
            if let Some(snapshot) = self.load_universe(date).await? {
                history.push(snapshot);
            }
        }
        Ok(history)
    }

    /// Drop everything cached so far.
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear_all();
    }

    async fn read_time_series(
        &self,
        symbol: &Symbol,
        context: Option<NaiveDate>,
    ) -> Result<Vec<PatentRecord>, DataError> {
        let location = self.locator.time_series_source(symbol);
        let rows = read_rows(&location)
            .await?
            .ok_or_else(|| DataError::SourceNotFound(location.to_string()))?;

        let context = context.unwrap_or(NaiveDate::MAX);
        let mut records = self.collect(&location, rows, |fields| {
            PatentRecord::from_fields(symbol, fields, context)
        })?;
        records.sort_by_key(|r| r.time);

        debug!("Loaded {} records for {} from {}", records.len(), symbol, location);
        Ok(records)
    }

    /// Parse rows under the configured error policy.
    ///
    /// Rows that are not valid UTF-8 are handled like any other bad line.
    fn collect<T: PatentData>(
        &self,
        location: &SourceLocation,
        rows: Rows,
        parse: impl Fn(&[&str]) -> RecordResult<T>,
    ) -> Result<Vec<T>, DataError> {
        let mut records = Vec::with_capacity(rows.len());

        for (line, row) in rows {
            let parsed = row
                .map_err(|e| DataError::Encoding {
                    source_name: location.to_string(),
                    line,
                    reason: e.to_string(),
                })
                .and_then(|row| {
                    let fields: Vec<&str> = row.iter().collect();
                    parse(&fields).map_err(|error| DataError::Record {
                        source_name: location.to_string(),
                        line,
                        error,
                    })
                });

            match parsed {
                Ok(record) => {
                    let violations = record.metrics().violations();
                    if !violations.is_empty() {
                        warn!(
                            "{} line {}: {} has inconsistent metrics: {:?}",
                            location,
                            line,
                            record.symbol(),
                            violations
                        );
                    }
                    records.push(record);
                }
                Err(error) => match self.policy {
                    ErrorPolicy::SkipLine => {
                        warn!("Skipping line: {}", error);
                    }
                    ErrorPolicy::SkipFile => {
                        warn!("Skipping file: {}", error);
                        return Ok(Vec::new());
                    }
                    ErrorPolicy::Abort => return Err(error),
                },
            }
        }

        Ok(records)
    }
}

type Rows = Vec<(u64, Result<StringRecord, FromUtf8Error>)>;

/// Read all rows of a headerless CSV file, `None` when the file is absent.
///
/// Rows are decoded one at a time so a single bad line does not fail the file.
async fn read_rows(location: &SourceLocation) -> Result<Option<Rows>, DataError> {
    let path = match location {
        SourceLocation::File(path) => path,
        SourceLocation::Remote(url) => return Err(DataError::Unsupported(url.clone())),
    };

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut reader = csv_reader_builder().from_reader(bytes.as_slice());

    let mut rows = Vec::new();
    for result in reader.byte_records() {
        let row = result.map_err(|e| DataError::Csv(e.to_string()))?;
        let line = row.position().map_or(0, |p| p.line());
        rows.push((line, StringRecord::from_byte_record(row)));
    }

    Ok(Some(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileLocator, IdentifierResolver};
    use patents_core::error::{ParseError, RecordError};
    use rust_decimal_macros::dec;
    use std::path::PathBuf;

    const DATASET: &str = "alternative/granted_patents";

    /// Fresh data root under the system temp directory.
    fn data_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "patents-data-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(root.join(DATASET).join("universe")).unwrap();
        root
    }

    fn write(root: &PathBuf, relative: &str, contents: &str) {
        std::fs::write(root.join(DATASET).join(relative), contents).unwrap();
    }

    fn source(root: &PathBuf) -> PatentDataSource {
        PatentDataSource::new(FileLocator::new(root, DATASET), IdentifierResolver::new())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_load_time_series_sorted_and_filtered() {
        let root = data_root("series");
        write(
            &root,
            "aapl.csv",
            "2022-02-16,1,1236,52,152,502,8,3,0.70,2\n\
             2022-02-15,5,1234,50,150,500,8,3,0.75,2\n\
             2022-02-17,0,1236,52,152,502,8,3,0.70,2\n",
        );

        let source = source(&root);
        let symbol = Symbol::equity("AAPL");

        let all = source.load_time_series(&symbol, None, None).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].time, date(2022, 2, 14));
        assert_eq!(all[0].metrics.patents_filed, dec!(5));

        let window = source
            .load_time_series(&symbol, Some(date(2022, 2, 16)), Some(date(2022, 2, 16)))
            .await
            .unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].end_time(), date(2022, 2, 16));
    }

    #[tokio::test]
    async fn test_missing_time_series_file() {
        let root = data_root("missing");
        let result = source(&root)
            .load_time_series(&Symbol::equity("MSFT"), None, None)
            .await;
        assert!(matches!(result, Err(DataError::SourceNotFound(_))));
    }

    #[tokio::test]
    async fn test_load_universe() {
        let root = data_root("universe");
        write(
            &root,
            "universe/20220215.csv",
            "AAPL US EQUITY,AAPL,5,1234,50,150,500,8,3,0.75,2\n\
             MSFT US EQUITY,MSFT,2,900,20,60,240,6,4,0.60,3\n",
        );

        let source = source(&root);
        let snapshot = source.load_universe(date(2022, 2, 15)).await.unwrap().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.records[0].symbol.ticker, "AAPL");
        assert_eq!(snapshot.records[0].time, date(2022, 2, 14));
        assert_eq!(snapshot.records[1].metrics.tech_diversity, dec!(0.60));

        assert!(source.load_universe(date(2022, 2, 16)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_universe_history_skips_missing_dates() {
        let root = data_root("history");
        let row = "AAPL US EQUITY,AAPL,5,1234,50,150,500,8,3,0.75,2\n";
        write(&root, "universe/20220214.csv", row);
        write(&root, "universe/20220216.csv", row);

        let history = source(&root)
            .universe_history(date(2022, 2, 14), date(2022, 2, 18))
            .await
            .unwrap();
        let dates: Vec<NaiveDate> = history.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![date(2022, 2, 14), date(2022, 2, 16)]);
    }

    #[tokio::test]
    async fn test_error_policies() {
        let root = data_root("policy");
        write(
            &root,
            "universe/20220215.csv",
            "AAPL US EQUITY,AAPL,5,1234,50,150,500,8,3,0.75,2\n\
             MSFT US EQUITY,MSFT,2,900,20,60,240,6,4,0.60\n",
        );
        let day = date(2022, 2, 15);

        let skip_line = source(&root).with_policy(ErrorPolicy::SkipLine);
        let snapshot = skip_line.load_universe(day).await.unwrap().unwrap();
        assert_eq!(snapshot.len(), 1);

        let skip_file = source(&root).with_policy(ErrorPolicy::SkipFile);
        let snapshot = skip_file.load_universe(day).await.unwrap().unwrap();
        assert!(snapshot.is_empty());

        let abort = source(&root).with_policy(ErrorPolicy::Abort);
        match abort.load_universe(day).await {
            Err(DataError::Record { line, error, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(
                    error,
                    RecordError::Parse(ParseError::ColumnCount {
                        expected: 11,
                        found: 10
                    })
                );
            }
            other => panic!("expected record error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_follows_policy() {
        let root = data_root("encoding");
        let mut contents = b"AAPL US EQUITY,AAPL,5,1234,50,150,500,8,3,0.75,2\n".to_vec();
        contents.extend_from_slice(b"MSFT US EQUITY,MS\xffT,2,900,20,60,240,6,4,0.60,3\n");
        contents.extend_from_slice(b"IBM US EQUITY,IBM,1,800,10,40,200,5,2,0.55,1\n");
        std::fs::write(root.join(DATASET).join("universe/20220215.csv"), contents).unwrap();
        let day = date(2022, 2, 15);

        let skip_line = source(&root).with_policy(ErrorPolicy::SkipLine);
        let snapshot = skip_line.load_universe(day).await.unwrap().unwrap();
        let tickers: Vec<&str> = snapshot.iter().map(|r| r.symbol.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["AAPL", "IBM"]);

        let skip_file = source(&root).with_policy(ErrorPolicy::SkipFile);
        assert!(skip_file.load_universe(day).await.unwrap().unwrap().is_empty());

        let abort = source(&root).with_policy(ErrorPolicy::Abort);
        match abort.load_universe(day).await {
            Err(DataError::Encoding { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected encoding error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_remote_source_unsupported() {
        let location = SourceLocation::Remote("https://example.com/aapl.csv".to_string());
        assert!(matches!(
            read_rows(&location).await,
            Err(DataError::Unsupported(_))
        ));
    }

    #[test]
    fn test_policy_serde() {
        let policy: ErrorPolicy = serde_json::from_str("\"skip_file\"").unwrap();
        assert_eq!(policy, ErrorPolicy::SkipFile);
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::SkipLine);
    }
}
