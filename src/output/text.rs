use std::io::{self, Write};

use crate::cli::Section;
use crate::columns::YEAR;
use crate::format::{format_stat, to_fixed};
use crate::state::Dashboard;

// ---------------------------------------------------------------------------
// Aligned table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Minimal column-aligned table for terminal output.
struct TextTable {
    headers: Vec<(&'static str, Align)>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    fn new(headers: Vec<(&'static str, Align)>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, (h, _))| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let widths = self.widths();
        let header: Vec<String> = self.headers.iter().map(|(h, _)| h.to_string()).collect();
        self.write_line(out, &header, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        self.write_line(out, &rule, &widths)?;
        for row in &self.rows {
            self.write_line(out, row, &widths)?;
        }
        Ok(())
    }

    fn write_line<W: Write>(
        &self,
        out: &mut W,
        cells: &[String],
        widths: &[usize],
    ) -> io::Result<()> {
        let mut line = String::new();
        for (i, ((_, align), width)) in self.headers.iter().zip(widths).enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            // pad by chars, not bytes: cells may hold "—"
            let pad = " ".repeat(width.saturating_sub(cell.chars().count()));
            if i > 0 {
                line.push_str("  ");
            }
            match align {
                Align::Left => {
                    line.push_str(cell);
                    line.push_str(&pad);
                }
                Align::Right => {
                    line.push_str(&pad);
                    line.push_str(cell);
                }
            }
        }
        writeln!(out, "{}", line.trim_end())
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

pub fn write_sections<W: Write>(
    out: &mut W,
    dashboard: &Dashboard,
    section: Section,
) -> io::Result<()> {
    match section {
        Section::All => {
            write_describe(out, dashboard)?;
            writeln!(out)?;
            write_platform_genre(out, dashboard)?;
            writeln!(out)?;
            write_yearly(out, dashboard)?;
            writeln!(out)?;
            write_regional(out, dashboard)?;
            writeln!(out)?;
            write_east_west(out, dashboard)
        }
        Section::Describe => write_describe(out, dashboard),
        Section::PlatformGenre => write_platform_genre(out, dashboard),
        Section::Yearly => write_yearly(out, dashboard),
        Section::Regional => write_regional(out, dashboard),
        Section::EastWest => write_east_west(out, dashboard),
    }
}

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))
}

fn unavailable<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "(not available: required sales columns are missing)")
}

pub fn write_describe<W: Write>(out: &mut W, dashboard: &Dashboard) -> io::Result<()> {
    heading(out, "Variables & Data Types")?;
    for t in &dashboard.types {
        writeln!(out, "  {}: {}", t.name, t.kind)?;
    }
    writeln!(out)?;

    heading(out, "Summary Statistics")?;
    let mut table = TextTable::new(vec![
        ("Column", Align::Left),
        ("Mean", Align::Right),
        ("Median", Align::Right),
        ("Min", Align::Right),
        ("Max", Align::Right),
        ("Range", Align::Right),
        ("Std Dev", Align::Right),
    ]);
    for r in &dashboard.summary {
        table.push(vec![
            r.column.clone(),
            r.mean.clone(),
            r.median.clone(),
            r.min.clone(),
            r.max.clone(),
            r.range.clone(),
            r.stdev.clone(),
        ]);
    }
    table.write(out)?;

    let insights = &dashboard.insights;
    if insights.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Insights from the summary:")?;
    if let Some(avg) = &insights.average_global_sales {
        writeln!(out, "1.) The average global sales per record ≈ {avg}.")?;
    }
    if let Some(genre) = &insights.top_genre {
        writeln!(out, "2.) Top genre by total global sales is {genre}.")?;
    }
    if let Some(platform) = &insights.top_platform {
        writeln!(out, "3.) Top platform is {platform}.")?;
    }
    if let Some(publisher) = &insights.top_publisher {
        writeln!(out, "4.) Top publisher: {publisher}.")?;
    }
    Ok(())
}

pub fn write_platform_genre<W: Write>(out: &mut W, dashboard: &Dashboard) -> io::Result<()> {
    heading(out, "Global Sales by Platform and Genre")?;
    let Some(rows) = &dashboard.platform_genre else {
        return unavailable(out);
    };
    let mut table = TextTable::new(vec![
        ("Platform", Align::Left),
        ("Genre", Align::Left),
        ("Global Sales", Align::Right),
    ]);
    for r in rows {
        table.push(vec![r.platform.clone(), r.genre.clone(), r.global_sales_sum.clone()]);
    }
    table.write(out)
}

pub fn write_yearly<W: Write>(out: &mut W, dashboard: &Dashboard) -> io::Result<()> {
    let field = dashboard.options.group_field.column();
    heading(out, &format!("Global Sales over Time by {field}"))?;
    let Some(yearly) = &dashboard.yearly else {
        return unavailable(out);
    };
    writeln!(out, "Series: {}", yearly.domain.join(", "))?;
    if let Some(pick) = &dashboard.options.series_pick {
        writeln!(out, "Showing: {pick}")?;
    }
    let mut table = TextTable::new(vec![
        ("Year", Align::Right),
        (field, Align::Left),
        ("Total", Align::Right),
    ]);
    for r in dashboard.visible_yearly() {
        table.push(vec![
            format_stat(YEAR, Some(r.year.value())),
            r.value.clone(),
            to_fixed(r.total, 2),
        ]);
    }
    table.write(out)
}

pub fn write_regional<W: Write>(out: &mut W, dashboard: &Dashboard) -> io::Result<()> {
    let as_percent = dashboard.options.as_percent;
    heading(
        out,
        if as_percent {
            "Regional Share by Platform"
        } else {
            "Regional Sales by Platform"
        },
    )?;
    let Some(rows) = &dashboard.regional else {
        return unavailable(out);
    };
    let mut headers = vec![
        ("Platform", Align::Left),
        ("Region", Align::Left),
        ("Sales", Align::Right),
    ];
    if as_percent {
        headers.push(("Share", Align::Right));
    }
    let mut table = TextTable::new(headers);
    for r in rows {
        let mut cells = vec![r.platform.clone(), r.region.to_string(), to_fixed(r.sales_sum, 2)];
        if as_percent {
            cells.push(r.percent_label.clone());
        }
        table.push(cells);
    }
    table.write(out)
}

pub fn write_east_west<W: Write>(out: &mut W, dashboard: &Dashboard) -> io::Result<()> {
    heading(out, "East vs West: Genre Share in NA and JP")?;
    let Some(ew) = &dashboard.east_west else {
        return unavailable(out);
    };
    let mut table = TextTable::new(vec![
        ("Genre", Align::Left),
        ("Region", Align::Left),
        ("Share", Align::Right),
        ("Sales", Align::Right),
        ("Diff", Align::Right),
    ]);
    for r in &ew.rows {
        table.push(vec![
            r.genre.clone(),
            r.region.to_string(),
            r.shares.clone(),
            to_fixed(r.sales_sum, 2),
            to_fixed(r.diff, 4),
        ]);
    }
    table.write(out)
}
