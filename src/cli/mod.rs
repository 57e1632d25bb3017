//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// edprof - Validate, inspect and convert rich-text editor toolbar profiles.
///
/// Robot Mode: Use --robot or --format=json for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "edprof", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (text for humans, json for agents/scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "EDPROF_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts and agents
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a profile document and list its errors and warnings
    Validate(ValidateArgs),

    /// List the toolbar items a profile may reference
    Catalog(CatalogArgs),

    /// Show a profile as the flat item list used by the visual builder
    Builder(BuilderArgs),

    /// Convert a JSON/YAML/TOML profile into the JSON string to persist
    Export(ExportArgs),

    /// List starter templates, or print one
    Template(TemplateArgs),

    /// Resolve the profiles assigned to each site in a sites API dump
    Sites(SitesArgs),

    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Profile file (.json, .yaml, .yml, .toml), or '-' for JSON on stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Only list items of this category (e.g. "links", "media-tables")
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

#[derive(Parser, Debug)]
pub struct BuilderArgs {
    /// Profile file (.json, .yaml, .yml, .toml)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Profile file (.json, .yaml, .yml, .toml)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Pretty-print instead of the compact persisted form
    #[arg(long, short = 'p')]
    pub pretty: bool,

    /// Also write the profile to this file (format from its extension)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct TemplateArgs {
    /// Template id (blank, standard, minimal)
    pub id: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SitesArgs {
    /// JSON response of the sites listing endpoint
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Report which sites use this profile and whether it can be deleted
    #[arg(long, short = 'p', value_name = "ID")]
    pub profile: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
