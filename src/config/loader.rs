//! Loading and saving profile documents from JSON, YAML or TOML files.
//!
//! Whatever the file format, the document is first turned into a generic
//! JSON value and run through the [`Validator`], so a YAML or TOML profile
//! gets exactly the same errors and warnings as the JSON stored by the CMS.
//! Documents with validation errors are refused.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, instrument, trace, warn};

use super::EditorProfileConfig;
use crate::catalog::Catalog;
use crate::error::{ProfileError, Result};
use crate::validate::{ValidationResult, Validator};

/// Profile document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON (.json), the persisted form.
    Json,
    /// YAML (.yaml, .yml).
    Yaml,
    /// TOML (.toml).
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension.
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        trace!(extension = %ext, "Detecting profile format from extension");
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }

    fn for_path(path: &Path) -> Result<Self> {
        Self::from_extension(path).ok_or_else(|| {
            ProfileError::ProfileParse(format!(
                "Unknown profile format for '{}': expected .json, .yaml, .yml, or .toml",
                path.display()
            ))
        })
    }
}

/// A profile that passed validation, with its (error-free) report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProfile {
    pub config: EditorProfileConfig,
    /// Always valid; may still carry warnings.
    pub report: ValidationResult,
}

/// Load and validate a profile file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_config<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<LoadedProfile> {
    let path = path.as_ref();
    info!("Loading profile file");

    let format = ConfigFormat::for_path(path)?;
    debug!(format = ?format, "Detected profile format");

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProfileError::ProfileNotFound {
                path: path.display().to_string(),
            }
        } else {
            ProfileError::Io(e)
        }
    })?;
    debug!(bytes = content.len(), "Read profile file");

    load_config_from_str(&content, format, catalog)
}

/// Parse profile text of any supported format into a generic JSON value,
/// without validating it.
pub fn parse_document(content: &str, format: ConfigFormat) -> Result<Value> {
    let document = match format {
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| ProfileError::ProfileParse(format!("JSON: {e}")))?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| ProfileError::ProfileParse(format!("YAML: {e}")))?,
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| ProfileError::ProfileParse(format!("TOML: {e}")))?,
    };
    trace!(?format, "Parsed profile document");
    Ok(document)
}

/// Load and validate a profile from text in the given format.
#[instrument(skip(content, catalog), fields(format = ?format, content_len = content.len()))]
pub fn load_config_from_str(
    content: &str,
    format: ConfigFormat,
    catalog: &Catalog,
) -> Result<LoadedProfile> {
    let document = parse_document(content, format)?;
    let report = Validator::new(catalog).validate_value(&document);
    if !report.valid {
        debug!(errors = report.errors.len(), "Profile failed validation");
        return Err(ProfileError::InvalidProfile {
            errors: report.errors,
        });
    }
    for warning in &report.warnings {
        warn!(%warning, "Profile validation warning");
    }

    let config: EditorProfileConfig = serde_json::from_value(document)
        .map_err(|e| ProfileError::ProfileParse(e.to_string()))?;

    info!(
        entries = config.toolbar.items.len(),
        items = config.item_count(),
        styles = config.styles().len(),
        "Profile loaded and validated"
    );
    Ok(LoadedProfile { config, report })
}

/// Save a profile in the format implied by the file extension.
#[instrument(skip(config), fields(path = %path.as_ref().display()))]
pub fn save_config<P: AsRef<Path>>(config: &EditorProfileConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = ConfigFormat::for_path(path)?;

    let content = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)
            .map_err(|e| ProfileError::ProfileParse(format!("YAML: {e}")))?,
        ConfigFormat::Toml => toml::to_string_pretty(config)
            .map_err(|e| ProfileError::ProfileParse(format!("TOML: {e}")))?,
    };

    std::fs::write(path, &content)?;
    info!(bytes = content.len(), "Profile saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GroupIcon, ToolbarEntry, template_by_id};

    fn builtin() -> &'static Catalog {
        Catalog::builtin()
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ConfigFormat::from_extension(Path::new("p.JSON")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_extension(Path::new("p.yml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_extension(Path::new("p.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(ConfigFormat::from_extension(Path::new("p.txt")), None);
        assert_eq!(ConfigFormat::from_extension(Path::new("profile")), None);
        assert_eq!(ConfigFormat::Yaml.extension(), "yaml");
    }

    #[test]
    fn test_load_yaml() {
        let yaml = r#"
toolbar:
  items:
    - bold
    - "|"
    - group: insert
      label: Insert
      icon: plus
      items: [insertTable, horizontalLine]
disableContentWrap: true
"#;
        let loaded = load_config_from_str(yaml, ConfigFormat::Yaml, builtin()).unwrap();
        assert_eq!(loaded.config.toolbar.items.len(), 3);
        assert_eq!(loaded.config.toolbar.items[1], ToolbarEntry::Separator);
        let group = loaded.config.toolbar.items[2].as_group().unwrap();
        assert_eq!(group.icon, Some(GroupIcon::Plus));
        assert!(loaded.report.valid);
        assert_eq!(loaded.report.warnings.len(), 1);
    }

    #[test]
    fn test_load_toml() {
        let toml_str = r#"
[toolbar]
items = ["bold", "italic", "|", "link"]
"#;
        let loaded = load_config_from_str(toml_str, ConfigFormat::Toml, builtin()).unwrap();
        assert_eq!(loaded.config.item_count(), 4);
        assert!(loaded.report.is_clean());
    }

    #[test]
    fn test_invalid_document_is_refused() {
        let err = load_config_from_str(
            r#"{"toolbar":{"items":["ghost"]}}"#,
            ConfigFormat::Json,
            builtin(),
        )
        .unwrap_err();
        match err {
            ProfileError::InvalidProfile { errors } => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("Unknown toolbar item \"ghost\""));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = load_config_from_str("toolbar: [", ConfigFormat::Yaml, builtin()).unwrap_err();
        assert!(matches!(err, ProfileError::ProfileParse(_)));
    }

    #[test]
    fn test_parse_document_does_not_validate() {
        let doc = parse_document("toolbar:\n  items: [ghost]\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(doc["toolbar"]["items"][0], "ghost");
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/definitely/not/here.json", builtin()).unwrap_err();
        assert!(matches!(err, ProfileError::ProfileNotFound { .. }));
    }

    #[test]
    fn test_unknown_extension() {
        let err = load_config("profile.ini", builtin()).unwrap_err();
        assert!(matches!(err, ProfileError::ProfileParse(_)));
    }

    #[test]
    fn test_save_and_reload_each_format() {
        let dir = tempfile::tempdir().unwrap();
        let config = template_by_id("standard").unwrap().config;

        for ext in ["json", "yaml"] {
            let path = dir.path().join(format!("standard.{ext}"));
            save_config(&config, &path).unwrap();
            let loaded = load_config(&path, builtin()).unwrap();
            assert_eq!(loaded.config, config, "format {ext}");
        }
    }
}
