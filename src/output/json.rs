use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::Section;
use crate::state::Dashboard;
use crate::tables::{GroupField, YearlyRow};

/// The yearly table as the chart sees it: picked rows, full colour domain.
#[derive(Serialize)]
struct YearlyView<'a> {
    field: GroupField,
    domain: &'a [String],
    pick: Option<&'a str>,
    rows: Vec<&'a YearlyRow>,
}

/// JSON value of one report section; `Section::All` nests every section
/// under its own key.
pub fn section_value(dashboard: &Dashboard, section: Section) -> Result<Value> {
    let value = match section {
        Section::All => json!({
            "options": dashboard.options,
            "describe": section_value(dashboard, Section::Describe)?,
            "platform_genre": section_value(dashboard, Section::PlatformGenre)?,
            "yearly": section_value(dashboard, Section::Yearly)?,
            "regional": section_value(dashboard, Section::Regional)?,
            "east_west": section_value(dashboard, Section::EastWest)?,
        }),
        Section::Describe => json!({
            "types": dashboard.types,
            "summary": dashboard.summary,
            "insights": dashboard.insights,
        }),
        Section::PlatformGenre => serde_json::to_value(&dashboard.platform_genre)?,
        Section::Yearly => match &dashboard.yearly {
            Some(yearly) => serde_json::to_value(YearlyView {
                field: yearly.field,
                domain: &yearly.domain,
                pick: dashboard.options.series_pick.as_deref(),
                rows: dashboard.visible_yearly(),
            })?,
            None => Value::Null,
        },
        Section::Regional => serde_json::to_value(&dashboard.regional)?,
        Section::EastWest => serde_json::to_value(&dashboard.east_west)?,
    };
    Ok(value)
}

pub fn write_sections<W: Write>(
    out: &mut W,
    dashboard: &Dashboard,
    section: Section,
) -> Result<()> {
    let value = section_value(dashboard, section)?;
    serde_json::to_writer_pretty(&mut *out, &value).context("writing JSON report")?;
    writeln!(out)?;
    Ok(())
}
