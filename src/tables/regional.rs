use serde::Serialize;

use super::GroupedSum;
use crate::columns::{Region, PLATFORM};
use crate::data::model::Dataset;
use crate::format::{percent_label, round_to};

/// Sales of one platform in one region, with its share of the platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionRow {
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Region")]
    pub region: Region,
    /// Rounded to two decimals.
    #[serde(rename = "SalesSum")]
    pub sales_sum: f64,
    /// `sales_sum` over the platform's total across all regions.
    #[serde(rename = "Percent")]
    pub percent: f64,
    #[serde(rename = "PercentLabel")]
    pub percent_label: String,
}

/// Sum each region's sales per platform and attach per-platform shares.
///
/// Platform totals are taken over the rounded region sums. A platform with
/// no sales at all gets a share of zero in every region.
pub fn sales_by_platform_region(dataset: &Dataset) -> Vec<RegionRow> {
    let mut sums = GroupedSum::new();
    for rec in &dataset.records {
        let platform = rec.category(PLATFORM);
        for region in Region::ALL {
            sums.add((platform.to_string(), region), rec.amount(region.column()));
        }
    }

    let summed: Vec<(String, Region, f64)> = sums
        .into_iter()
        .map(|((platform, region), total)| (platform, region, round_to(total, 2)))
        .collect();

    let mut platform_totals = GroupedSum::new();
    for (platform, _, sales_sum) in &summed {
        platform_totals.add(platform.as_str(), *sales_sum);
    }
    log::debug!(
        "platform x region: {} rows over {} platforms",
        summed.len(),
        platform_totals.len()
    );

    summed
        .iter()
        .map(|(platform, region, sales_sum)| {
            let total = match platform_totals.get(&platform.as_str()) {
                Some(t) if t != 0.0 => t,
                _ => 1.0,
            };
            let percent = sales_sum / total;
            RegionRow {
                platform: platform.clone(),
                region: *region,
                sales_sum: *sales_sum,
                percent,
                percent_label: percent_label(percent),
            }
        })
        .collect()
}
