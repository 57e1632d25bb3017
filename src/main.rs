//! edprof - Validate, inspect and convert rich-text editor toolbar profiles.
//!
//! Provides both human-friendly and agent-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io::{self, Read};
use std::path::Path;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use edprof::builder::to_builder_items;
use edprof::catalog::{Catalog, ItemCategory};
use edprof::cli::{self, Cli, Commands};
use edprof::config::{
    ConfigFormat, load_config, parse_document, save_config, stringify_profile_config,
    template_by_id, templates,
};
use edprof::error::{ProfileError, Result};
use edprof::logging::init_logging;
use edprof::output::{ExportedProfile, Output, OutputMode, ProfileUsage, SiteProfiles};
use edprof::sites::{decode_site_list, resolve_profile_ids, sites_with_profile};
use edprof::validate::{ValidationResult, Validator};

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> Option<&'static str> {
        option_env!("VERGEN_GIT_SHA")
    }

    pub fn build_timestamp() -> Option<&'static str> {
        option_env!("VERGEN_BUILD_TIMESTAMP")
    }
}

/// Outcome of a command that ran to completion. `Failed` still exits 1.
enum Outcome {
    Ok,
    Failed,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.robot, cli.verbose, cli.quiet);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let output = OutputMode::from_cli(&cli).into_output();
    match run(&cli, output.as_ref()) {
        Ok(Outcome::Ok) => {}
        Ok(Outcome::Failed) => std::process::exit(1),
        Err(e) => {
            output.error(&e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, out: &dyn Output) -> Result<Outcome> {
    let catalog = Catalog::builtin();
    match &cli.command {
        None => print_quick_start(cli),
        Some(Commands::Validate(args)) => cmd_validate(args, catalog, out),
        Some(Commands::Catalog(args)) => cmd_catalog(args, catalog, out),
        Some(Commands::Builder(args)) => cmd_builder(args, catalog, out),
        Some(Commands::Export(args)) => cmd_export(args, catalog, out),
        Some(Commands::Template(args)) => cmd_template(args, out),
        Some(Commands::Sites(args)) => cmd_sites(args, out),
        Some(Commands::Version) => {
            out.version_info(
                build_info::VERSION,
                build_info::git_sha(),
                build_info::build_timestamp(),
            );
            Ok(Outcome::Ok)
        }
        Some(Commands::Completions(args)) => cmd_completions(args),
    }
}

// === Quick Start ===

#[derive(Serialize)]
struct RobotQuickStart {
    tool: &'static str,
    version: &'static str,
    description: &'static str,
    commands: Vec<(&'static str, &'static str)>,
    output_modes: OutputModes,
}

#[derive(Serialize)]
struct OutputModes {
    human: &'static str,
    robot: &'static str,
    compact: &'static str,
}

const QUICK_START: [(&str, &str); 6] = [
    ("edprof validate profile.json", "Validate a profile document"),
    ("edprof catalog", "List available toolbar items"),
    ("edprof template standard", "Print a starter profile"),
    ("edprof export profile.yaml", "Convert to the JSON string to persist"),
    ("edprof builder profile.json", "Show builder items"),
    ("edprof sites sites.json --profile ID", "Check where a profile is used"),
];

fn print_quick_start(cli: &Cli) -> Result<Outcome> {
    if cli.use_json() {
        let help = RobotQuickStart {
            tool: "edprof",
            version: build_info::VERSION,
            description: "Editor toolbar profile validator and converter",
            commands: QUICK_START.to_vec(),
            output_modes: OutputModes {
                human: "--format=text (default)",
                robot: "--robot or --format=json",
                compact: "--format=json-compact",
            },
        };
        println!("{}", serde_json::to_string_pretty(&help)?);
    } else {
        let bold = console::Style::new().bold();
        let cmd = console::Style::new().green();
        println!("{} {}\n", bold.apply_to("edprof"), build_info::VERSION);
        println!("{}\n", bold.apply_to("QUICK START"));
        for (command, what) in QUICK_START {
            println!("  {:<40} {what}", cmd.apply_to(command));
        }
        println!("\nRun {} for full help", console::style("edprof --help").yellow());
    }
    Ok(Outcome::Ok)
}

// === Commands ===

/// Read a whole file, or stdin for `-`.
fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ProfileError::ProfileNotFound {
                path: path.display().to_string(),
            }
        } else {
            ProfileError::Io(e)
        }
    })
}

fn cmd_validate(args: &cli::ValidateArgs, catalog: &Catalog, out: &dyn Output) -> Result<Outcome> {
    let content = read_source(&args.file)?;
    let validator = Validator::new(catalog);

    // Non-JSON formats go through the loader's parser; JSON text is validated
    // as-is so syntax errors surface as validation errors.
    let result: ValidationResult = match ConfigFormat::from_extension(&args.file) {
        Some(format @ (ConfigFormat::Yaml | ConfigFormat::Toml)) => {
            validator.validate_value(&parse_document(&content, format)?)
        }
        _ => validator.validate(&content),
    };
    info!(
        valid = result.valid,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "Validated profile"
    );

    out.validation_report(&args.file.display().to_string(), &result);
    Ok(if result.valid { Outcome::Ok } else { Outcome::Failed })
}

fn cmd_catalog(args: &cli::CatalogArgs, catalog: &Catalog, out: &dyn Output) -> Result<Outcome> {
    let items = match &args.category {
        Some(raw) => catalog.by_category(raw.parse::<ItemCategory>()?),
        None => catalog.iter().collect(),
    };
    debug!(count = items.len(), "Listing catalog items");
    out.catalog(&items);
    Ok(Outcome::Ok)
}

fn cmd_builder(args: &cli::BuilderArgs, catalog: &Catalog, out: &dyn Output) -> Result<Outcome> {
    let loaded = load_config(&args.file, catalog)?;
    out.builder_items(&to_builder_items(&loaded.config));
    Ok(Outcome::Ok)
}

fn cmd_export(args: &cli::ExportArgs, catalog: &Catalog, out: &dyn Output) -> Result<Outcome> {
    let loaded = load_config(&args.file, catalog)?;
    let config = loaded.config.normalized();

    if let Some(path) = &args.output {
        save_config(&config, path)?;
        info!(path = %path.display(), "Wrote exported profile");
    }

    let exported = ExportedProfile {
        value: stringify_profile_config(&config)?,
        config,
        warnings: loaded.report.warnings,
    };
    out.exported_profile(&exported, args.pretty);
    Ok(Outcome::Ok)
}

fn cmd_template(args: &cli::TemplateArgs, out: &dyn Output) -> Result<Outcome> {
    match &args.id {
        None => out.template_list(&templates()),
        Some(id) => {
            let template =
                template_by_id(id).ok_or_else(|| ProfileError::UnknownTemplate { id: id.clone() })?;
            out.template(&template);
        }
    }
    Ok(Outcome::Ok)
}

fn cmd_sites(args: &cli::SitesArgs, out: &dyn Output) -> Result<Outcome> {
    let content = read_source(&args.file)?;
    let response: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| ProfileError::SiteData(format!("{}: {e}", args.file.display())))?;
    let sites = decode_site_list(&response);

    if let Some(profile) = &args.profile {
        let users: Vec<String> = sites_with_profile(&sites, profile)
            .iter()
            .map(|s| s.label().to_string())
            .collect();
        out.profile_usage(&ProfileUsage {
            profile: profile.clone(),
            deletable: users.is_empty(),
            sites: users,
        });
        return Ok(Outcome::Ok);
    }

    let rows: Vec<SiteProfiles> = sites
        .iter()
        .map(|site| {
            let profiles = resolve_profile_ids(site);
            SiteProfiles {
                id: site.id.clone(),
                name: site.label().to_string(),
                default_profile: profiles.first().cloned(),
                profiles,
            }
        })
        .collect();
    out.site_profiles(&rows);
    Ok(Outcome::Ok)
}

fn cmd_completions(args: &cli::CompletionsArgs) -> Result<Outcome> {
    use clap::CommandFactory;
    clap_complete::generate(args.shell, &mut Cli::command(), "edprof", &mut io::stdout());
    Ok(Outcome::Ok)
}
