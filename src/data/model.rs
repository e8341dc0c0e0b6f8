use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::columns;

// ---------------------------------------------------------------------------
// Cell parsing
// ---------------------------------------------------------------------------

/// Parse a cell as a finite decimal number.
///
/// Surrounding whitespace is ignored; empty cells, `NaN` and infinities
/// yield `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce a cell to a number the lenient way: a blank cell reads as `0`,
/// anything else must parse as a finite decimal.
pub fn coerce_number(raw: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        return Some(0.0);
    }
    parse_number(raw)
}

/// Whether a raw cell counts as "present" (non-empty after trimming).
pub fn is_present(raw: &str) -> bool {
    !raw.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// A single row: column name → raw cell text, in file column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    cells: IndexMap<String, String>,
}

impl Record {
    pub fn new(cells: IndexMap<String, String>) -> Self {
        Self { cells }
    }

    /// Raw cell text, `None` when the row has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Column names of this row in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Cell parsed as a finite number.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(parse_number)
    }

    /// Cell coerced with [`coerce_number`]; `None` when the row has no such
    /// column or the text is not a number.
    pub fn coerced(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(coerce_number)
    }

    /// Cell as a summand: unparseable and missing cells contribute zero.
    pub fn amount(&self, column: &str) -> f64 {
        self.number(column).unwrap_or(0.0)
    }

    /// Cell as a grouping label, falling back to [`columns::UNKNOWN`].
    pub fn category(&self, column: &str) -> &str {
        match self.get(column) {
            Some(v) if is_present(v) => v,
            _ => columns::UNKNOWN,
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All loaded records plus the schema taken from the first one.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Columns of the first record; empty for an empty dataset.
    pub column_names: Vec<String>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        let column_names = records
            .first()
            .map(|r| r.columns().map(str::to_string).collect())
            .unwrap_or_default();
        Dataset {
            records,
            column_names,
        }
    }

    /// Whether `column` is part of the schema.
    pub fn has_column(&self, column: &str) -> bool {
        self.column_names.iter().any(|c| c == column)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Coerced values of `column` in record order; blank cells count as `0`,
    /// unparseable ones are skipped.
    pub fn numbers<'a>(&'a self, column: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.records.iter().filter_map(move |r| r.coerced(column))
    }
}

// ---------------------------------------------------------------------------
// Column classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    /// Numeric values with a natural order but no magnitude (the year).
    Ordinal,
    Categorical,
}

impl ColumnKind {
    /// Numeric and ordinal columns get summary statistics.
    pub fn is_quantitative(self) -> bool {
        !matches!(self, ColumnKind::Categorical)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Ordinal => write!(f, "ordinal"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnClassification {
    pub name: String,
    pub kind: ColumnKind,
}
