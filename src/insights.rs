//! Headline facts shown under the summary table.

use serde::Serialize;

use crate::columns::{GENRE, GLOBAL_SALES, PLATFORM, PUBLISHER};
use crate::data::model::Dataset;
use crate::summary::SummaryRow;
use crate::tables::GroupedSum;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Insights {
    /// Formatted mean of the global sales column.
    pub average_global_sales: Option<String>,
    pub top_genre: Option<String>,
    pub top_platform: Option<String>,
    pub top_publisher: Option<String>,
}

impl Insights {
    pub fn is_empty(&self) -> bool {
        self.average_global_sales.is_none()
            && self.top_genre.is_none()
            && self.top_platform.is_none()
            && self.top_publisher.is_none()
    }
}

pub fn extract_insights(dataset: &Dataset, summary: &[SummaryRow]) -> Insights {
    Insights {
        average_global_sales: summary
            .iter()
            .find(|r| r.column.eq_ignore_ascii_case(GLOBAL_SALES))
            .map(|r| r.mean.clone()),
        top_genre: top_category(dataset, GENRE),
        top_platform: top_category(dataset, PLATFORM),
        top_publisher: top_category(dataset, PUBLISHER),
    }
}

/// Category of `column` with the largest summed global sales.
///
/// `None` when either column is missing from the schema. Exact ties go to
/// the category seen first.
pub fn top_category(dataset: &Dataset, column: &str) -> Option<String> {
    if !dataset.has_column(column) || !dataset.has_column(GLOBAL_SALES) {
        return None;
    }
    let mut sums = GroupedSum::new();
    for rec in &dataset.records {
        sums.add(rec.category(column), rec.amount(GLOBAL_SALES));
    }
    sums.top().map(|(category, _)| category.to_string())
}
