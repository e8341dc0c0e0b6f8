use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::data::loader::LoadOptions;
use crate::state::{ViewOptions, DEFAULT_TOP_N};
use crate::tables::GroupField;

/// Output format of the report
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned plain-text tables
    #[default]
    Text,
    /// One pretty-printed JSON document, for chart builders
    Json,
}

/// Part of the report to print
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Section {
    #[default]
    All,
    /// Column types, summary statistics and insights
    Describe,
    /// Global sales by platform and genre
    PlatformGenre,
    /// Global sales over time
    Yearly,
    /// Regional sales per platform
    Regional,
    /// NA vs JP genre preferences
    EastWest,
}

/// Command-line arguments for vgstats
#[derive(Parser, Debug)]
#[command(version, about = "Describe a video-game sales dataset")]
pub struct Args {
    /// Data file (.csv, .tsv, .json, .parquet)
    pub path: PathBuf,

    /// Specify the delimiter to use when reading a text file
    #[arg(long = "delimiter")]
    pub delimiter: Option<char>,

    /// Category splitting the yearly sales series
    #[arg(long = "group-by", value_enum, default_value_t = GroupField::Platform)]
    pub group_by: GroupField,

    /// Show only this yearly series (e.g. "Wii")
    #[arg(long = "pick")]
    pub pick: Option<String>,

    /// Show regional sales as shares of each platform's total
    #[arg(long = "as-percent", action)]
    pub as_percent: bool,

    /// Number of genres in the East vs West comparison
    #[arg(long = "top-n", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long = "section", value_enum, default_value_t = Section::All)]
    pub section: Section,

    /// Log aggregation details (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose", action)]
    pub verbose: bool,
}

impl From<&Args> for LoadOptions {
    fn from(args: &Args) -> Self {
        let mut opts = LoadOptions::new();
        // only single-byte delimiters are meaningful to the csv reader
        if let Some(delimiter) = args.delimiter.filter(char::is_ascii) {
            opts = opts.with_delimiter(delimiter as u8);
        }
        opts
    }
}

impl From<&Args> for ViewOptions {
    fn from(args: &Args) -> Self {
        ViewOptions {
            group_field: args.group_by,
            series_pick: args.pick.clone(),
            as_percent: args.as_percent,
            top_n: args.top_n,
        }
    }
}
