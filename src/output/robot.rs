//! Robot mode JSON output implementation.

use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, instrument, trace};

use crate::builder::BuilderItem;
use crate::catalog::ItemDefinition;
use crate::config::ProfileTemplate;
use crate::error::ProfileError;
use crate::validate::ValidationResult;

use super::{ExportedProfile, Output, ProfileUsage, RobotFormat, SiteProfiles};

/// JSON output implementation for AI agents and scripting.
///
/// Results go to stdout, errors to stderr, one document per call.
pub struct RobotOutput {
    format: RobotFormat,
}

fn render<T: Serialize + ?Sized>(data: &T, pretty: bool) -> Option<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    };
    match rendered {
        Ok(json) => Some(json),
        Err(e) => {
            error!(error = %e, "Failed to serialize output");
            None
        }
    }
}

impl RobotOutput {
    #[instrument]
    pub fn new(format: RobotFormat) -> Self {
        debug!(?format, "Creating RobotOutput");
        Self { format }
    }

    const fn pretty(&self) -> bool {
        matches!(self.format, RobotFormat::Json)
    }

    #[instrument(skip(self, data), fields(format = ?self.format))]
    fn output_json<T: Serialize + ?Sized>(&self, data: &T) {
        if let Some(json) = render(data, self.pretty()) {
            trace!(json_len = json.len(), "JSON serialized");
            println!("{json}");
        }
    }

    fn output_json_stderr<T: Serialize>(&self, data: &T) {
        if let Some(json) = render(data, true) {
            eprintln!("{json}");
        }
    }
}

impl Output for RobotOutput {
    fn success(&self, message: &str) {
        self.output_json(&json!({ "success": true, "message": message }));
    }

    #[instrument(skip(self))]
    fn error(&self, error: &ProfileError) {
        debug!(error = %error, "Robot: error");
        self.output_json_stderr(&json!({
            "error": true,
            "message": error.to_string(),
            "suggestion": error.suggestion(),
            "recoverable": error.is_user_recoverable(),
        }));
    }

    fn warning(&self, message: &str) {
        self.output_json(&json!({ "warning": true, "message": message }));
    }

    fn info(&self, message: &str) {
        self.output_json(&json!({ "info": true, "message": message }));
    }

    #[instrument(skip(self, result), fields(valid = result.valid))]
    fn validation_report(&self, source: &str, result: &ValidationResult) {
        self.output_json(&json!({
            "source": source,
            "valid": result.valid,
            "errors": result.errors,
            "warnings": result.warnings,
        }));
    }

    fn catalog(&self, items: &[&ItemDefinition]) {
        self.output_json(items);
    }

    fn builder_items(&self, items: &[BuilderItem]) {
        self.output_json(items);
    }

    fn exported_profile(&self, profile: &ExportedProfile, _pretty: bool) {
        self.output_json(profile);
    }

    fn template_list(&self, templates: &[ProfileTemplate]) {
        let summary: Vec<_> = templates
            .iter()
            .map(|t| {
                json!({
                    "id": t.id,
                    "name": t.name,
                    "description": t.description,
                    "items": t.config.item_count(),
                })
            })
            .collect();
        self.output_json(&summary);
    }

    fn template(&self, template: &ProfileTemplate) {
        self.output_json(template);
    }

    fn site_profiles(&self, sites: &[SiteProfiles]) {
        self.output_json(sites);
    }

    fn profile_usage(&self, usage: &ProfileUsage) {
        self.output_json(usage);
    }

    fn version_info(&self, version: &str, git_sha: Option<&str>, build_time: Option<&str>) {
        self.output_json(&json!({
            "version": version,
            "git_sha": git_sha,
            "build_timestamp": build_time,
            "rustc_version": option_env!("VERGEN_RUSTC_SEMVER"),
            "target": option_env!("VERGEN_CARGO_TARGET_TRIPLE"),
        }));
    }
}
