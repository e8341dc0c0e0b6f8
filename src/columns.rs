//! Column names the sales dataset is expected to carry.
//!
//! Every one of them is optional; computations that need an absent column
//! are skipped.

use serde::Serialize;

pub const PLATFORM: &str = "Platform";
pub const GENRE: &str = "Genre";
pub const YEAR: &str = "Year";
pub const PUBLISHER: &str = "Publisher";
pub const GLOBAL_SALES: &str = "Global_Sales";
pub const NA_SALES: &str = "NA_Sales";
pub const EU_SALES: &str = "EU_Sales";
pub const JP_SALES: &str = "JP_Sales";
pub const OTHER_SALES: &str = "Other_Sales";

/// Category label used when a grouping cell is missing.
pub const UNKNOWN: &str = "Unknown";

/// Whether `name` is the (case-insensitive) year column.
pub fn is_year(name: &str) -> bool {
    name.eq_ignore_ascii_case(YEAR)
}

/// Sales regions, in the order the region table emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    #[serde(rename = "NA")]
    NorthAmerica,
    #[serde(rename = "EU")]
    Europe,
    #[serde(rename = "JP")]
    Japan,
    Other,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::Japan,
        Region::Other,
    ];

    /// Source column holding this region's sales.
    pub fn column(self) -> &'static str {
        match self {
            Region::NorthAmerica => NA_SALES,
            Region::Europe => EU_SALES,
            Region::Japan => JP_SALES,
            Region::Other => OTHER_SALES,
        }
    }

    /// Column name with the `_Sales` suffix stripped.
    pub fn label(self) -> &'static str {
        let column = self.column();
        column.strip_suffix("_Sales").unwrap_or(column)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
