//! CLI argument definitions.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "osm-wrangle",
    version,
    about = "Shape OpenStreetMap XML into correlated CSV tables",
    long_about = "Stream an OpenStreetMap XML document and write its nodes, ways, \
                  way-node references and tags to five CSV tables.\n\n\
                  Street names and postcodes are normalized on the way, and shaped \
                  elements can be checked against a JSON Schema before they are written."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow tag values and rejected elements to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Shape a document into CSV tables.
    Convert(ConvertArgs),

    /// Report street types and postcodes that need attention.
    Audit(AuditArgs),

    /// Print the built-in element schema.
    Schema,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// OSM XML document (overrides `input` in the config file).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// TOML run configuration.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory for the CSV tables.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Check shaped elements against the schema; the first violation aborts.
    ///
    /// Validation is noticeably slower; combine with --validate-every to
    /// check a sample.
    #[arg(long = "validate")]
    pub validate: bool,

    /// Turn validation off, even when the config file enables it.
    #[arg(
        long = "no-validate",
        conflicts_with_all = ["validate", "validate_every", "schema"]
    )]
    pub no_validate: bool,

    /// Validate only every N-th element (implies --validate).
    #[arg(long = "validate-every", value_name = "N")]
    pub validate_every: Option<NonZeroUsize>,

    /// JSON Schema file replacing the built-in one (implies --validate).
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// OSM XML document.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Example street names listed per street type.
    #[arg(long = "limit", value_name = "N", default_value_t = 3)]
    pub limit: usize,

    /// TOML run configuration supplying extra street suffixes.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
