//! Summary statistics per numeric column.

use serde::Serialize;

use crate::data::model::Dataset;
use crate::format::format_stat;

/// Raw statistics of a column's parseable values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    /// Population standard deviation (divisor = count).
    pub stdev: f64,
}

impl ColumnStats {
    /// Statistics of `values`, `None` when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mean = mean(values);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        Some(ColumnStats {
            count: values.len(),
            mean,
            median: median(values),
            min,
            max,
            range: max - min,
            stdev: variance.sqrt(),
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle value, or the mean of the two middle values for an even count.
/// `values` must not be empty.
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// One line of the summary table, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub column: String,
    pub mean: String,
    pub median: String,
    pub min: String,
    pub max: String,
    pub range: String,
    pub stdev: String,
}

impl SummaryRow {
    pub fn new(column: &str, stats: &ColumnStats) -> Self {
        let fmt = |v: f64| format_stat(column, Some(v));
        SummaryRow {
            column: column.to_string(),
            mean: fmt(stats.mean),
            median: fmt(stats.median),
            min: fmt(stats.min),
            max: fmt(stats.max),
            range: fmt(stats.range),
            stdev: fmt(stats.stdev),
        }
    }
}

/// Summary rows for `columns`, skipping those without a usable value.
///
/// Blank cells enter the statistics as `0`. Unparseable cells are left out
/// of every statistic, including the count.
pub fn summarize(dataset: &Dataset, columns: &[&str]) -> Vec<SummaryRow> {
    columns
        .iter()
        .filter_map(|&column| {
            let values: Vec<f64> = dataset.numbers(column).collect();
            let Some(stats) = ColumnStats::from_values(&values) else {
                log::debug!("no parseable values in '{column}', omitted from summary");
                return None;
            };
            Some(SummaryRow::new(column, &stats))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn population_stdev() {
        let stats = ColumnStats::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.stdev, 2.0);
        assert_eq!(stats.range, 7.0);
        assert_eq!(stats.count, 8);
    }

    #[test]
    fn stdev_zero_for_identical_values() {
        let stats = ColumnStats::from_values(&[2.5, 2.5, 2.5]).unwrap();
        assert_eq!(stats.stdev, 0.0);
        assert_eq!(stats.range, 0.0);
    }

    #[test]
    fn empty_values_have_no_stats() {
        assert!(ColumnStats::from_values(&[]).is_none());
    }

    #[test]
    fn unparseable_cells_do_not_count() {
        let ds = Dataset::from_records(
            ["1", "N/A", "3"]
                .iter()
                .map(|v| [("Global_Sales", *v)].into_iter().collect::<Record>())
                .collect(),
        );
        let rows = summarize(&ds, &["Global_Sales"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].mean, "2.00");
        assert_eq!(rows[0].median, "2.00");
        assert_eq!(rows[0].stdev, "1.00");
    }

    #[test]
    fn blank_cells_count_as_zero() {
        let ds = Dataset::from_records(
            ["4", "", "2"]
                .iter()
                .map(|v| [("x", *v)].into_iter().collect::<Record>())
                .collect(),
        );
        let rows = summarize(&ds, &["x"]);
        assert_eq!(rows[0].mean, "2.00");
        assert_eq!(rows[0].median, "2.00");
        assert_eq!(rows[0].min, "0.00");
        assert_eq!(rows[0].max, "4.00");
    }

    #[test]
    fn year_rows_have_no_decimals() {
        let ds = Dataset::from_records(
            ["2000", "2001", "2003"]
                .iter()
                .map(|v| [("Year", *v)].into_iter().collect::<Record>())
                .collect(),
        );
        let rows = summarize(&ds, &["Year"]);
        assert_eq!(
            rows[0],
            SummaryRow {
                column: "Year".into(),
                mean: "2001".into(),
                median: "2001".into(),
                min: "2000".into(),
                max: "2003".into(),
                range: "3".into(),
                stdev: "1".into(),
            }
        );
    }

    #[test]
    fn column_without_values_is_omitted() {
        let ds = Dataset::from_records(vec![[("x", "abc")].into_iter().collect::<Record>()]);
        assert!(summarize(&ds, &["x"]).is_empty());
    }
}
