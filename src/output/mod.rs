//! Output mode abstraction for robot and human output.

use serde::Serialize;

use crate::builder::BuilderItem;
use crate::catalog::ItemDefinition;
use crate::cli::Cli;
use crate::config::ProfileTemplate;
use crate::error::ProfileError;
use crate::validate::ValidationResult;

pub mod human;
pub mod robot;

pub use human::HumanOutput;
pub use robot::RobotOutput;

/// Profile ids resolved for one site.
#[derive(Debug, Clone, Serialize)]
pub struct SiteProfiles {
    pub id: String,
    pub name: String,
    pub profiles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
}

/// Which sites use a profile, and whether it may be deleted.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUsage {
    pub profile: String,
    pub sites: Vec<String>,
    pub deletable: bool,
}

/// Canonical profile document ready to persist.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedProfile {
    /// The exact string to store in the profile's `value` field.
    pub value: String,
    pub config: crate::config::EditorProfileConfig,
    pub warnings: Vec<String>,
}

/// JSON formatting options for robot mode.
#[derive(Debug, Clone, Copy)]
pub enum RobotFormat {
    /// Pretty-printed JSON (default for --robot).
    Json,
    /// Single-line JSON (--format=json-compact).
    JsonCompact,
}

/// Determines how command output is rendered.
#[derive(Debug)]
pub enum OutputMode {
    /// JSON output for AI agents and scripting.
    Robot(RobotFormat),
    /// Styled terminal output; the flag says whether color is allowed.
    Human { color: bool },
}

impl OutputMode {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.use_json() {
            let format = if cli.use_compact_json() {
                RobotFormat::JsonCompact
            } else {
                RobotFormat::Json
            };
            Self::Robot(format)
        } else {
            Self::Human {
                color: !cli.no_color && console::colors_enabled(),
            }
        }
    }

    #[must_use]
    pub const fn is_robot(&self) -> bool {
        matches!(self, Self::Robot(_))
    }

    #[must_use]
    pub fn into_output(self) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human { color } => Box::new(HumanOutput::new(color)),
        }
    }
}

/// Trait for all output operations.
///
/// Commands call these methods without knowing the output mode.
pub trait Output {
    fn success(&self, message: &str);
    fn error(&self, error: &ProfileError);
    fn warning(&self, message: &str);
    fn info(&self, message: &str);

    /// Report of validating the document read from `source`.
    fn validation_report(&self, source: &str, result: &ValidationResult);

    fn catalog(&self, items: &[&ItemDefinition]);
    fn builder_items(&self, items: &[BuilderItem]);
    fn exported_profile(&self, profile: &ExportedProfile, pretty: bool);

    fn template_list(&self, templates: &[ProfileTemplate]);
    fn template(&self, template: &ProfileTemplate);

    fn site_profiles(&self, sites: &[SiteProfiles]);
    fn profile_usage(&self, usage: &ProfileUsage);

    fn version_info(&self, version: &str, git_sha: Option<&str>, build_time: Option<&str>);
}
