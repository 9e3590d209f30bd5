//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taxa_domain::OutputFormat;

/// Output format for lookup results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Aligned table, printed row by row as lookups finish
    Table,
    /// JSON array of rows
    Json,
    /// HTML results table
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

/// CLI arguments for taxa-check
#[derive(Parser, Debug)]
#[command(name = "taxa-check")]
#[command(author, version, about = "Check species names against the iNaturalist taxonomy")]
#[command(long_about = r#"
taxa-check looks up species names on iNaturalist one at a time and reports,
in input order, the matched taxon or why no match was found.

Names are read from the command line, from --file, or from stdin, one per
line. Requests are paced (300ms apart by default).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./taxa.toml         Project-level config
3. ~/.config/taxa-check/config.toml   Global config

Example:
  taxa-check lookup "Homo sapiens" "Puma concolor"
  taxa-check --format html lookup --file species.txt > results.html
  taxa-check jobs --output jobs.xml --max-pages 2
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the config file value, then table)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up species names
    Lookup(LookupArgs),
    /// Export the job board to an XML file
    Jobs(JobsArgs),
}

#[derive(Args, Debug, Default)]
pub struct LookupArgs {
    /// Species names; each argument may hold several names, one per line
    #[arg(value_name = "SPECIES")]
    pub species: Vec<String>,

    /// Read species names from a file, one per line
    #[arg(long, value_name = "PATH", conflicts_with = "species")]
    pub file: Option<PathBuf>,

    /// Pause between lookups in milliseconds (minimum 300)
    #[arg(long, value_name = "MS")]
    pub pacing_ms: Option<u64>,
}

impl LookupArgs {
    /// Names given on the command line as one newline-separated block.
    pub fn inline_input(&self) -> Option<String> {
        if self.species.is_empty() {
            None
        } else {
            Some(self.species.join("\n"))
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct JobsArgs {
    /// Output XML path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Postings requested per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    /// Stop after this many pages (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub max_pages: Option<u32>,

    /// Skip the per-posting detail requests
    #[arg(long)]
    pub no_details: bool,

    /// Pause between page requests in milliseconds
    #[arg(long, value_name = "MS")]
    pub page_delay_ms: Option<u64>,

    /// Pause after each detail request in milliseconds
    #[arg(long, value_name = "MS")]
    pub detail_delay_ms: Option<u64>,
}
