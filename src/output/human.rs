//! Human-friendly terminal output using `console` styles.

use console::Term;
use tracing::{debug, instrument, trace};

use crate::builder::{BuilderItem, BuilderItemKind};
use crate::catalog::{ItemCategory, ItemDefinition};
use crate::config::{GroupEntry, ProfileTemplate};
use crate::error::ProfileError;
use crate::theme::ProfileTheme;
use crate::validate::ValidationResult;

use super::{ExportedProfile, Output, ProfileUsage, SiteProfiles};

/// Styled terminal output implementation for human users.
pub struct HumanOutput {
    out: Term,
    err: Term,
    theme: ProfileTheme,
}

impl HumanOutput {
    #[instrument]
    pub fn new(color: bool) -> Self {
        debug!("Creating HumanOutput");
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: if color {
                ProfileTheme::default()
            } else {
                ProfileTheme::plain()
            },
        }
    }

    fn line(&self, text: &str) {
        // A closed stdout (e.g. `| head`) is not worth failing the command over.
        if let Err(e) = self.out.write_line(text) {
            trace!(error = %e, "stdout write failed");
        }
    }

    fn err_line(&self, text: &str) {
        if let Err(e) = self.err.write_line(text) {
            trace!(error = %e, "stderr write failed");
        }
    }

    fn heading(&self, title: &str) {
        self.line(&self.theme.header.apply_to(title).to_string());
    }

    fn group_items(&self, items: &[GroupEntry]) -> String {
        items
            .iter()
            .map(|e| match e {
                GroupEntry::Separator => self.theme.separator.apply_to("|").to_string(),
                GroupEntry::Item(id) => self.theme.item_id.apply_to(id).to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Output for HumanOutput {
    fn success(&self, message: &str) {
        self.line(&format!("{} {message}", self.theme.success.apply_to("[OK]")));
    }

    #[instrument(skip(self))]
    fn error(&self, error: &ProfileError) {
        debug!(
            error = %error,
            recoverable = error.is_user_recoverable(),
            "Outputting error"
        );
        self.err_line(&format!("{}: {error}", self.theme.error.apply_to("Error")));
        if let ProfileError::InvalidProfile { errors } = error {
            for message in errors {
                self.err_line(&format!("  - {message}"));
            }
        }
        if let Some(suggestion) = error.suggestion() {
            self.err_line(&format!("{}: {suggestion}", self.theme.warning.apply_to("Hint")));
        }
    }

    fn warning(&self, message: &str) {
        self.line(&format!("{} {message}", self.theme.warning.apply_to("[WARN]")));
    }

    fn info(&self, message: &str) {
        self.line(&format!("{} {message}", self.theme.accent.apply_to("[INFO]")));
    }

    #[instrument(skip(self, result), fields(errors = result.errors.len(), warnings = result.warnings.len()))]
    fn validation_report(&self, source: &str, result: &ValidationResult) {
        if result.valid {
            self.success(&format!("{source}: configuration is valid"));
        } else {
            self.line(&format!(
                "{} {source}: {} error(s)",
                self.theme.error.apply_to("[FAIL]"),
                result.errors.len()
            ));
        }
        for error in &result.errors {
            self.line(&format!("  {} {error}", self.theme.error.apply_to("error:")));
        }
        for warning in &result.warnings {
            self.line(&format!("  {} {warning}", self.theme.warning.apply_to("warning:")));
        }
    }

    fn catalog(&self, items: &[&ItemDefinition]) {
        if items.is_empty() {
            self.warning("No toolbar items in this category");
            return;
        }
        for category in ItemCategory::ALL {
            let in_category: Vec<_> = items.iter().filter(|i| i.category == category).collect();
            if in_category.is_empty() {
                continue;
            }
            self.heading(category.label());
            for item in in_category {
                self.line(&format!(
                    "  {:<26} {:<24} {}",
                    self.theme.item_id.apply_to(&item.id),
                    item.label,
                    self.theme.muted.apply_to(&item.description)
                ));
            }
            self.line("");
        }
    }

    fn builder_items(&self, items: &[BuilderItem]) {
        for (index, item) in items.iter().enumerate() {
            let body = match item.kind {
                BuilderItemKind::Separator => self.theme.separator.apply_to("|").to_string(),
                BuilderItemKind::Item => self
                    .theme
                    .item_id
                    .apply_to(item.item_id.as_deref().unwrap_or_default())
                    .to_string(),
                BuilderItemKind::Group => match &item.group {
                    Some(group) => format!(
                        "{} {} [{}]",
                        self.theme.group.apply_to(&group.group),
                        group.label,
                        self.group_items(&group.items)
                    ),
                    None => self.theme.muted.apply_to("(empty group)").to_string(),
                },
            };
            self.line(&format!(
                "{:>3}. {body}  {}",
                index + 1,
                self.theme.muted.apply_to(&item.id)
            ));
        }
    }

    fn exported_profile(&self, profile: &ExportedProfile, pretty: bool) {
        for warning in &profile.warnings {
            self.err_line(&format!("{} {warning}", self.theme.warning.apply_to("[WARN]")));
        }
        if pretty {
            match serde_json::to_string_pretty(&profile.config) {
                Ok(json) => self.line(&json),
                Err(_) => self.line(&profile.value),
            }
        } else {
            self.line(&profile.value);
        }
    }

    fn template_list(&self, templates: &[ProfileTemplate]) {
        self.heading("Templates");
        for template in templates {
            self.line(&format!(
                "  {:<10} {:<18} {}",
                self.theme.item_id.apply_to(template.id),
                template.name,
                self.theme.muted.apply_to(template.description)
            ));
        }
    }

    fn template(&self, template: &ProfileTemplate) {
        self.heading(template.name);
        self.line(&self.theme.muted.apply_to(template.description).to_string());
        match serde_json::to_string_pretty(&template.config) {
            Ok(json) => self.line(&json),
            Err(e) => self.err_line(&e.to_string()),
        }
    }

    fn site_profiles(&self, sites: &[SiteProfiles]) {
        if sites.is_empty() {
            self.warning("No sites found");
            return;
        }
        for site in sites {
            let profiles = if site.profiles.is_empty() {
                self.theme.muted.apply_to("(none)").to_string()
            } else {
                site.profiles
                    .iter()
                    .enumerate()
                    .map(|(i, id)| {
                        if i == 0 {
                            format!("{} {}", self.theme.item_id.apply_to(id), self.theme.label.apply_to("(default)"))
                        } else {
                            self.theme.item_id.apply_to(id).to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            self.line(&format!("  {:<28} {profiles}", self.theme.value.apply_to(&site.name)));
        }
    }

    fn profile_usage(&self, usage: &ProfileUsage) {
        if usage.sites.is_empty() {
            self.success(&format!(
                "Profile '{}' is not assigned to any site and can be deleted",
                usage.profile
            ));
            return;
        }
        self.warning(&format!(
            "Profile '{}' is assigned to {} site(s):",
            usage.profile,
            usage.sites.len()
        ));
        for site in &usage.sites {
            self.line(&format!("  - {site}"));
        }
    }

    fn version_info(&self, version: &str, git_sha: Option<&str>, build_time: Option<&str>) {
        let label = |name: &str| self.theme.label.apply_to(format!("{name:<8}")).to_string();
        self.line(&format!("{}{}", label("edprof"), self.theme.value.apply_to(version)));
        if let Some(sha) = git_sha {
            let dirty = matches!(option_env!("VERGEN_GIT_DIRTY"), Some("true"));
            let suffix = if dirty {
                self.theme.warning.apply_to(" (dirty)").to_string()
            } else {
                String::new()
            };
            self.line(&format!("{}{sha}{suffix}", label("git")));
        }
        if let Some(time) = build_time {
            self.line(&format!("{}{time}", label("built")));
        }
        if let Some(rustc) = option_env!("VERGEN_RUSTC_SEMVER") {
            self.line(&format!("{}{rustc}", label("rustc")));
        }
        if let Some(target) = option_env!("VERGEN_CARGO_TARGET_TRIPLE") {
            self.line(&format!("{}{target}", label("target")));
        }
    }
}
