//! Report writers for the presentation and chart-building collaborators.

use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::{OutputFormat, Section};
use crate::state::Dashboard;

pub mod json;
pub mod text;

/// Write the requested `section` of the dashboard in `format`.
///
/// Failures are returned with context and left to the caller to report.
pub fn write_report<W: Write>(
    out: &mut W,
    dashboard: &Dashboard,
    format: OutputFormat,
    section: Section,
) -> Result<()> {
    match format {
        OutputFormat::Text => text::write_sections(out, dashboard, section)
            .with_context(|| format!("writing {section:?} report as text"))?,
        OutputFormat::Json => json::write_sections(out, dashboard, section)
            .with_context(|| format!("writing {section:?} report as JSON"))?,
    }
    out.flush().context("flushing report")?;
    Ok(())
}
