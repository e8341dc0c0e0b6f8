use serde::Serialize;

use super::GroupedSum;
use crate::columns::{GENRE, GLOBAL_SALES, PLATFORM};
use crate::data::model::Dataset;
use crate::format::{round_to, to_fixed};

/// Global sales of one (Platform, Genre) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformGenreRow {
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    /// Total rounded to two decimals.
    #[serde(rename = "GlobalSum")]
    pub global_sum: f64,
    /// Same total as display text, for tooltips.
    #[serde(rename = "Global_Sales_Sum")]
    pub global_sales_sum: String,
}

/// Sum `Global_Sales` per observed (Platform, Genre) pair.
pub fn sales_by_platform_genre(dataset: &Dataset) -> Vec<PlatformGenreRow> {
    let mut sums = GroupedSum::new();
    for rec in &dataset.records {
        let key = (
            rec.category(PLATFORM).to_string(),
            rec.category(GENRE).to_string(),
        );
        sums.add(key, rec.amount(GLOBAL_SALES));
    }
    log::debug!("platform x genre: {} groups", sums.len());

    sums.into_iter()
        .map(|((platform, genre), total)| {
            let global_sum = round_to(total, 2);
            PlatformGenreRow {
                platform,
                genre,
                global_sum,
                global_sales_sum: to_fixed(global_sum, 2),
            }
        })
        .collect()
}
