use std::hash::{Hash, Hasher};

use clap::ValueEnum;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::GroupedSum;
use crate::columns::{GENRE, GLOBAL_SALES, PLATFORM, YEAR};
use crate::data::model::Dataset;
use crate::format::round_to;

// ---------------------------------------------------------------------------
// GroupField – which category splits the yearly series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
pub enum GroupField {
    #[default]
    Platform,
    Genre,
}

impl GroupField {
    /// Source column for this grouping.
    pub fn column(self) -> &'static str {
        match self {
            GroupField::Platform => PLATFORM,
            GroupField::Genre => GENRE,
        }
    }
}

// ---------------------------------------------------------------------------
// YearKey – a finite year usable as a map key
// ---------------------------------------------------------------------------

/// A finite year value with bitwise equality (`-0.0` folds into `0.0`).
#[derive(Debug, Clone, Copy)]
pub struct YearKey(f64);

impl YearKey {
    /// `None` for non-finite input.
    pub fn new(year: f64) -> Option<Self> {
        year.is_finite().then_some(YearKey(year + 0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for YearKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for YearKey {}

impl Hash for YearKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Serialize for YearKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() < i64::MAX as f64 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

// ---------------------------------------------------------------------------
// Yearly series
// ---------------------------------------------------------------------------

/// Global sales of one series value in one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyRow {
    pub year: YearKey,
    pub field: GroupField,
    pub value: String,
    /// Rounded to two decimals.
    pub total: f64,
}

/// Emitted as `{"Year": .., "<field column>": .., "Total": ..}`.
impl Serialize for YearlyRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("Year", &self.year)?;
        map.serialize_entry(self.field.column(), &self.value)?;
        map.serialize_entry("Total", &self.total)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlySales {
    pub field: GroupField,
    pub rows: Vec<YearlyRow>,
    /// Distinct series values in first-seen order, so colours stay put when
    /// the view is filtered.
    pub domain: Vec<String>,
}

impl YearlySales {
    /// Rows of a single series, or every row when `pick` is `None`.
    pub fn select(&self, pick: Option<&str>) -> Vec<&YearlyRow> {
        self.rows
            .iter()
            .filter(|row| pick.map_or(true, |p| row.value == p))
            .collect()
    }
}

/// Sum `Global_Sales` per (Year, `field`) pair.
///
/// Records whose year is not a number are skipped entirely; a blank year
/// reads as year `0`.
pub fn sales_by_year(dataset: &Dataset, field: GroupField) -> YearlySales {
    let column = field.column();
    let mut sums = GroupedSum::new();
    let mut domain = indexmap::IndexSet::new();
    let mut skipped = 0usize;

    for rec in &dataset.records {
        let Some(year) = rec.coerced(YEAR).and_then(YearKey::new) else {
            skipped += 1;
            continue;
        };
        let value = rec.category(column);
        domain.insert(value.to_string());
        sums.add((year, value.to_string()), rec.amount(GLOBAL_SALES));
    }
    log::debug!(
        "year x {column}: {} groups, {skipped} records without a year",
        sums.len()
    );

    let rows = sums
        .into_iter()
        .map(|((year, value), total)| YearlyRow {
            year,
            field,
            value,
            total: round_to(total, 2),
        })
        .collect();

    YearlySales {
        field,
        rows,
        domain: domain.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn record(year: &str, platform: &str, genre: &str, sales: &str) -> Record {
        [
            ("Year", year),
            ("Platform", platform),
            ("Genre", genre),
            ("Global_Sales", sales),
        ]
        .into_iter()
        .collect()
    }

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            record("2006", "Wii", "Sports", "82.74"),
            record("N/A", "PS2", "Action", "20"),
            record("2006", "Wii", "Racing", "1.26"),
            record("2008", "DS", "Racing", "35.82"),
            record("", "GB", "Puzzle", "30.26"),
        ])
    }

    #[test]
    fn skips_records_with_unparseable_year() {
        let yearly = sales_by_year(&sample(), GroupField::Platform);
        assert_eq!(yearly.rows.len(), 3);
        assert_eq!(yearly.rows[0].year.value(), 2006.0);
        assert_eq!(yearly.rows[0].value, "Wii");
        assert_eq!(yearly.rows[0].total, 84.0);
        assert_eq!(yearly.domain, vec!["Wii", "DS", "GB"]);
    }

    #[test]
    fn blank_year_groups_under_zero() {
        let yearly = sales_by_year(&sample(), GroupField::Platform);
        let gb = &yearly.rows[2];
        assert_eq!(gb.year.value(), 0.0);
        assert_eq!(gb.value, "GB");
        assert_eq!(gb.total, 30.26);
    }

    #[test]
    fn groups_by_genre_when_selected() {
        let yearly = sales_by_year(&sample(), GroupField::Genre);
        let keys: Vec<(f64, &str)> = yearly
            .rows
            .iter()
            .map(|r| (r.year.value(), r.value.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (2006.0, "Sports"),
                (2006.0, "Racing"),
                (2008.0, "Racing"),
                (0.0, "Puzzle")
            ]
        );
        assert_eq!(yearly.domain, vec!["Sports", "Racing", "Puzzle"]);
    }

    #[test]
    fn select_keeps_domain_untouched() {
        let yearly = sales_by_year(&sample(), GroupField::Genre);
        let racing = yearly.select(Some("Racing"));
        assert_eq!(racing.len(), 2);
        assert_eq!(yearly.select(None).len(), 4);
        assert!(yearly.select(Some("Shooter")).is_empty());
        assert_eq!(yearly.domain.len(), 3);
    }

    #[test]
    fn row_serializes_with_field_column() {
        let yearly = sales_by_year(&sample(), GroupField::Genre);
        let json = serde_json::to_value(&yearly.rows[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Year": 2006, "Genre": "Sports", "Total": 82.74})
        );
    }

    #[test]
    fn year_key_rejects_non_finite() {
        assert!(YearKey::new(f64::NAN).is_none());
        assert_eq!(YearKey::new(-0.0), YearKey::new(0.0));
    }
}
