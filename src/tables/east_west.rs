use indexmap::IndexMap;
use serde::Serialize;

use crate::columns::{Region, GENRE, JP_SALES, NA_SALES};
use crate::data::model::Dataset;
use crate::format::{percent_label, round_to};

/// How a genre's sales split between North America and Japan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreBalance {
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "NA_SalesSum")]
    pub na_sales_sum: f64,
    #[serde(rename = "JP_SalesSum")]
    pub jp_sales_sum: f64,
    /// Genre's fraction of all NA sales, four decimals.
    #[serde(rename = "NA_Share")]
    pub na_share: f64,
    #[serde(rename = "JP_Share")]
    pub jp_share: f64,
    /// `na_share - jp_share`; positive leans NA, negative leans JP.
    #[serde(rename = "Diff")]
    pub diff: f64,
}

/// One bar of the mirrored chart; JP shares are negated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EastWestRow {
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Region")]
    pub region: Region,
    #[serde(rename = "ShareSigned")]
    pub share_signed: f64,
    #[serde(rename = "Shares")]
    pub shares: String,
    #[serde(rename = "SalesSum")]
    pub sales_sum: f64,
    #[serde(rename = "Diff")]
    pub diff: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EastWest {
    /// Retained genres, most skewed first.
    pub genres: Vec<GenreBalance>,
    /// Two rows per retained genre, NA then JP.
    pub rows: Vec<EastWestRow>,
}

#[derive(Default)]
struct RegionTotals {
    na: f64,
    jp: f64,
}

/// Compare each genre's share of NA sales against its share of JP sales and
/// keep the `top_n` most skewed genres.
pub fn east_west_comparison(dataset: &Dataset, top_n: usize) -> EastWest {
    let mut per_genre: IndexMap<String, RegionTotals> = IndexMap::new();
    let mut grand = RegionTotals::default();

    for rec in &dataset.records {
        let na = rec.amount(NA_SALES);
        let jp = rec.amount(JP_SALES);
        grand.na += na;
        grand.jp += jp;
        let entry = per_genre.entry(rec.category(GENRE).to_string()).or_default();
        entry.na += na;
        entry.jp += jp;
    }

    let share = |part: f64, total: f64| if total != 0.0 { part / total } else { 0.0 };

    let mut genres: Vec<GenreBalance> = per_genre
        .into_iter()
        .map(|(genre, sums)| {
            let na_share = share(sums.na, grand.na);
            let jp_share = share(sums.jp, grand.jp);
            GenreBalance {
                genre,
                na_sales_sum: round_to(sums.na, 2),
                jp_sales_sum: round_to(sums.jp, 2),
                na_share: round_to(na_share, 4),
                jp_share: round_to(jp_share, 4),
                diff: round_to(na_share - jp_share, 4),
            }
        })
        .collect();

    // stable: equal skews keep first-seen order
    genres.sort_by(|a, b| b.diff.abs().total_cmp(&a.diff.abs()));
    genres.truncate(top_n);
    log::debug!("east vs west: kept {} genres (limit {top_n})", genres.len());

    let rows = genres
        .iter()
        .flat_map(|g| {
            [
                EastWestRow {
                    genre: g.genre.clone(),
                    region: Region::NorthAmerica,
                    share_signed: g.na_share,
                    shares: percent_label(g.na_share),
                    sales_sum: g.na_sales_sum,
                    diff: g.diff,
                },
                EastWestRow {
                    genre: g.genre.clone(),
                    region: Region::Japan,
                    share_signed: -g.jp_share,
                    shares: percent_label(g.jp_share),
                    sales_sum: g.jp_sales_sum,
                    diff: g.diff,
                },
            ]
        })
        .collect();

    EastWest { genres, rows }
}
