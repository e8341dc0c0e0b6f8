use serde::Serialize;

use crate::columns::{self, Region, GLOBAL_SALES};
use crate::data::infer::{classify_columns, quantitative_columns};
use crate::data::model::{ColumnClassification, Dataset};
use crate::insights::{extract_insights, Insights};
use crate::summary::{summarize, SummaryRow};
use crate::tables::{
    east_west_comparison, sales_by_platform_genre, sales_by_platform_region, sales_by_year,
    EastWest, GroupField, PlatformGenreRow, RegionRow, YearlySales,
};

/// Genre limit of the East/West table when none is given.
pub const DEFAULT_TOP_N: usize = 100;

// ---------------------------------------------------------------------------
// View options
// ---------------------------------------------------------------------------

/// Knobs that change how the derived tables are cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewOptions {
    /// Category splitting the yearly series.
    pub group_field: GroupField,
    /// Show a single yearly series; `None` shows them all.
    pub series_pick: Option<String>,
    /// Present the region table as per-platform shares.
    pub as_percent: bool,
    /// Number of genres kept in the East/West table.
    pub top_n: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            group_field: GroupField::default(),
            series_pick: None,
            as_percent: false,
            top_n: DEFAULT_TOP_N,
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// Everything derived from one loaded dataset.
///
/// A table is `None` when the columns it sums are absent from the schema.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    pub options: ViewOptions,
    pub types: Vec<ColumnClassification>,
    pub summary: Vec<SummaryRow>,
    pub insights: Insights,
    pub platform_genre: Option<Vec<PlatformGenreRow>>,
    pub yearly: Option<YearlySales>,
    pub regional: Option<Vec<RegionRow>>,
    pub east_west: Option<EastWest>,
}

impl Dashboard {
    /// Derive every table for `dataset`.
    ///
    /// A series pick in `options` goes through [`Dashboard::set_series_pick`]
    /// once the yearly table exists.
    pub fn new(dataset: Dataset, mut options: ViewOptions) -> Self {
        let types = classify_columns(&dataset);
        let summary = summarize(&dataset, &quantitative_columns(&types));
        let insights = extract_insights(&dataset, &summary);

        let series_pick = options.series_pick.take();
        let mut dashboard = Dashboard {
            dataset,
            options,
            types,
            summary,
            insights,
            platform_genre: None,
            yearly: None,
            regional: None,
            east_west: None,
        };
        dashboard.platform_genre = dashboard
            .requires(&[GLOBAL_SALES], "platform x genre")
            .then(|| sales_by_platform_genre(&dashboard.dataset));
        dashboard.regional = dashboard
            .requires(&Region::ALL.map(Region::column), "platform x region")
            .then(|| sales_by_platform_region(&dashboard.dataset));
        dashboard.rebuild_yearly();
        dashboard.rebuild_east_west();
        dashboard.set_series_pick(series_pick);
        dashboard
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// True when at least one of `any_of` is in the schema; logs otherwise.
    fn requires(&self, any_of: &[&str], table: &str) -> bool {
        let present = any_of.iter().any(|c| self.dataset.has_column(c));
        if !present && !self.dataset.is_empty() {
            log::warn!("skipping {table} table: none of {any_of:?} present");
        }
        present
    }

    fn rebuild_yearly(&mut self) {
        self.yearly = self
            .requires(&[columns::YEAR], "yearly sales")
            .then(|| sales_by_year(&self.dataset, self.options.group_field));
    }

    fn rebuild_east_west(&mut self) {
        self.east_west = self
            .requires(&[columns::NA_SALES, columns::JP_SALES], "east vs west")
            .then(|| east_west_comparison(&self.dataset, self.options.top_n));
    }

    /// Switch the yearly grouping; only the yearly table is recomputed.
    ///
    /// A series pick belongs to the old grouping and is cleared.
    pub fn set_group_field(&mut self, field: GroupField) {
        if self.options.group_field == field {
            return;
        }
        self.options.group_field = field;
        self.options.series_pick = None;
        self.rebuild_yearly();
    }

    /// Isolate one yearly series, or show all with `None`.
    pub fn set_series_pick(&mut self, pick: Option<String>) {
        if let (Some(p), Some(yearly)) = (&pick, &self.yearly) {
            if !yearly.domain.contains(p) {
                log::warn!("series '{p}' does not occur in the yearly table");
            }
        }
        self.options.series_pick = pick;
    }

    pub fn set_as_percent(&mut self, as_percent: bool) {
        self.options.as_percent = as_percent;
    }

    /// Change the East/West genre limit and recompute that table.
    pub fn set_top_n(&mut self, top_n: usize) {
        if self.options.top_n == top_n {
            return;
        }
        self.options.top_n = top_n;
        self.rebuild_east_west();
    }

    /// Yearly rows after applying the series pick.
    pub fn visible_yearly(&self) -> Vec<&crate::tables::YearlyRow> {
        self.yearly
            .as_ref()
            .map(|y| y.select(self.options.series_pick.as_deref()))
            .unwrap_or_default()
    }
}
