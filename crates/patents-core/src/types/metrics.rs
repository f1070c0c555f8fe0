//! Patent filing metrics shared by both record kinds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParseError;
use crate::parse::parse_decimal;

/// Number of metric columns in every vendor row.
pub const METRIC_COLUMNS: usize = 9;

/// Patent filing activity for one company on one date.
///
/// Integer-valued counts are kept as `Decimal` so rows round-trip exactly
/// with the vendor feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PatentMetrics {
    /// Patents filed on the date
    pub patents_filed: Decimal,
    /// Total patents filed to date
    pub cumulative_patents: Decimal,
    /// Patents filed over the trailing 30 days
    pub patents_30d: Decimal,
    /// Patents filed over the trailing 90 days
    pub patents_90d: Decimal,
    /// Patents filed over the trailing 365 days
    pub patents_365d: Decimal,
    /// Distinct IPC classification codes
    pub unique_ipc_codes: Decimal,
    /// Distinct IPC sections (1 to 9)
    pub unique_sections: Decimal,
    /// Breadth of technology codes, 0 to 1
    pub tech_diversity: Decimal,
    /// Distinct inventor locations
    pub unique_locations: Decimal,
}

/// A broken value-range invariant on a metrics row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricViolation {
    /// A metric is negative
    Negative(&'static str),
    /// The trailing windows are not nested (`cumulative >= 365d >= 90d >= 30d`)
    WindowOrder,
    /// `tech_diversity` outside `[0, 1]`
    DiversityRange,
    /// `unique_sections` above 9
    SectionRange,
}

impl fmt::Display for MetricViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricViolation::Negative(name) => write!(f, "{} is negative", name),
            MetricViolation::WindowOrder => {
                write!(f, "trailing windows are not nested within the cumulative count")
            }
            MetricViolation::DiversityRange => write!(f, "tech_diversity outside [0, 1]"),
            MetricViolation::SectionRange => write!(f, "unique_sections above 9"),
        }
    }
}

impl PatentMetrics {
    /// Parse the nine metric columns.
    ///
    /// `first_column` is the index of `fields[0]` in the original line and is
    /// used to report the failing column.
    pub fn from_fields<S: AsRef<str>>(
        fields: &[S],
        first_column: usize,
    ) -> Result<Self, ParseError> {
        if fields.len() != METRIC_COLUMNS {
            return Err(ParseError::ColumnCount {
                expected: first_column + METRIC_COLUMNS,
                found: first_column + fields.len(),
            });
        }

        let column = |i: usize| parse_decimal(first_column + i, fields[i].as_ref());

        Ok(Self {
            patents_filed: column(0)?,
            cumulative_patents: column(1)?,
            patents_30d: column(2)?,
            patents_90d: column(3)?,
            patents_365d: column(4)?,
            unique_ipc_codes: column(5)?,
            unique_sections: column(6)?,
            tech_diversity: column(7)?,
            unique_locations: column(8)?,
        })
    }

    /// The metrics in column order.
    pub fn columns(&self) -> [Decimal; METRIC_COLUMNS] {
        [
            self.patents_filed,
            self.cumulative_patents,
            self.patents_30d,
            self.patents_90d,
            self.patents_365d,
            self.unique_ipc_codes,
            self.unique_sections,
            self.tech_diversity,
            self.unique_locations,
        ]
    }

    /// Render the metrics as comma-separated columns.
    pub fn to_csv_columns(&self) -> String {
        self.columns()
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// List every value-range invariant the row breaks.
    pub fn violations(&self) -> Vec<MetricViolation> {
        const NAMES: [&str; METRIC_COLUMNS] = [
            "patents_filed",
            "cumulative_patents",
            "patents_30d",
            "patents_90d",
            "patents_365d",
            "unique_ipc_codes",
            "unique_sections",
            "tech_diversity",
            "unique_locations",
        ];

        let mut violations: Vec<MetricViolation> = self
            .columns()
            .iter()
            .zip(NAMES)
            .filter(|(value, _)| value.is_sign_negative() && !value.is_zero())
            .map(|(_, name)| MetricViolation::Negative(name))
            .collect();

        if !(self.cumulative_patents >= self.patents_365d
            && self.patents_365d >= self.patents_90d
            && self.patents_90d >= self.patents_30d)
        {
            violations.push(MetricViolation::WindowOrder);
        }
        if self.tech_diversity < Decimal::ZERO || self.tech_diversity > Decimal::ONE {
            violations.push(MetricViolation::DiversityRange);
        }
        if self.unique_sections > Decimal::from(9) {
            violations.push(MetricViolation::SectionRange);
        }

        violations
    }

    /// Check whether the row satisfies every value-range invariant.
    pub fn is_consistent(&self) -> bool {
        self.violations().is_empty()
    }
}
