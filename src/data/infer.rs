use super::model::{is_present, parse_number, ColumnClassification, ColumnKind, Dataset};
use crate::columns;

/// Minimum fraction of present cells that must parse for a numeric column.
pub const NUMERIC_THRESHOLD: f64 = 0.5;

/// Classify every schema column of `dataset`, in schema order.
pub fn classify_columns(dataset: &Dataset) -> Vec<ColumnClassification> {
    dataset
        .column_names
        .iter()
        .map(|name| ColumnClassification {
            name: name.clone(),
            kind: classify_column(dataset, name),
        })
        .collect()
}

/// Classify a single column.
///
/// A column is numeric when at least half of its present cells parse as
/// finite numbers; the year column is reported as ordinal instead. A column
/// without any present cell is categorical.
pub fn classify_column(dataset: &Dataset, name: &str) -> ColumnKind {
    let mut seen = 0usize;
    let mut ok = 0usize;
    for cell in dataset.records.iter().filter_map(|r| r.get(name)) {
        if !is_present(cell) {
            continue;
        }
        seen += 1;
        if parse_number(cell).is_some() {
            ok += 1;
        }
    }

    let numeric = seen > 0 && ok as f64 / seen as f64 >= NUMERIC_THRESHOLD;
    match (numeric, columns::is_year(name)) {
        (true, true) => ColumnKind::Ordinal,
        (true, false) => ColumnKind::Numeric,
        (false, _) => ColumnKind::Categorical,
    }
}

/// Names of the numeric and ordinal columns, in schema order.
pub fn quantitative_columns(classes: &[ColumnClassification]) -> Vec<&str> {
    classes
        .iter()
        .filter(|c| c.kind.is_quantitative())
        .map(|c| c.name.as_str())
        .collect()
}
