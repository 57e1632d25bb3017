//! Persisted profile entity and the payloads sent to the profiles API.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::schema::{EditorProfileConfig, parse_profile_value, stringify_profile_config};
use crate::error::{ProfileError, Result};

/// A named profile as returned by the profiles API.
///
/// The API has returned the serialized configuration under both `profile`
/// and `value`; [`EditorProfile::profile_value`] reads whichever is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorProfile {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl EditorProfile {
    /// Raw JSON text of the configuration, or "" when neither field is set.
    pub fn profile_value(&self) -> &str {
        [self.profile.as_deref(), self.value.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }

    /// Tolerantly parsed configuration, for previews.
    pub fn config(&self) -> Option<EditorProfileConfig> {
        parse_profile_value(self.profile_value())
    }
}

/// Payload for creating a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEditorProfileInput {
    pub name: String,
    pub value: String,
}

impl CreateEditorProfileInput {
    /// Build a create payload, enforcing the save rules.
    pub fn new(name: &str, config: &EditorProfileConfig) -> Result<Self> {
        let name = ensure_save_ready(name, config)?;
        Ok(Self {
            name,
            value: stringify_profile_config(config)?,
        })
    }
}

/// Payload for a full replace of an existing profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEditorProfileInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl UpdateEditorProfileInput {
    /// Replace both name and configuration, enforcing the save rules.
    pub fn replace(name: &str, config: &EditorProfileConfig) -> Result<Self> {
        let name = ensure_save_ready(name, config)?;
        Ok(Self {
            name: Some(name),
            profile: Some(stringify_profile_config(config)?),
        })
    }
}

/// Check that a profile may be saved and return its trimmed name.
///
/// A profile needs a non-blank name and at least one toolbar entry.
pub fn ensure_save_ready(name: &str, config: &EditorProfileConfig) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProfileError::NameRequired);
    }
    if !config.is_complete() {
        return Err(ProfileError::EmptyToolbar);
    }
    debug!(name, items = config.item_count(), "Profile is ready to save");
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolbarEntry;

    fn profile(profile: Option<&str>, value: Option<&str>) -> EditorProfile {
        EditorProfile {
            id: "p1".to_string(),
            name: "Test".to_string(),
            profile: profile.map(str::to_string),
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn test_profile_value_prefers_profile() {
        assert_eq!(profile(Some("a"), Some("b")).profile_value(), "a");
        assert_eq!(profile(Some(""), Some("b")).profile_value(), "b");
        assert_eq!(profile(None, Some("b")).profile_value(), "b");
        assert_eq!(profile(None, None).profile_value(), "");
    }

    #[test]
    fn test_config_parses_alias() {
        let p = profile(None, Some(r#"{"toolbar":{"items":["bold"]}}"#));
        assert_eq!(p.config().unwrap().item_count(), 1);
        assert!(profile(Some("{oops"), None).config().is_none());
    }

    #[test]
    fn test_entity_deserializes_without_config() {
        let p: EditorProfile = serde_json::from_str(r#"{"id":"x","name":"Bare"}"#).unwrap();
        assert!(p.profile.is_none());
        assert_eq!(p.profile_value(), "");
    }

    #[test]
    fn test_create_input_requires_name() {
        let config = EditorProfileConfig::new(vec![ToolbarEntry::item("bold")]);
        assert!(matches!(
            CreateEditorProfileInput::new("   ", &config),
            Err(ProfileError::NameRequired)
        ));
    }

    #[test]
    fn test_create_input_requires_items() {
        assert!(matches!(
            CreateEditorProfileInput::new("Blank", &EditorProfileConfig::default()),
            Err(ProfileError::EmptyToolbar)
        ));
    }

    #[test]
    fn test_create_input_serializes_config() {
        let config = EditorProfileConfig::new(vec![ToolbarEntry::item("bold")]);
        let input = CreateEditorProfileInput::new("  Minimal ", &config).unwrap();
        assert_eq!(input.name, "Minimal");
        assert_eq!(input.value, r#"{"toolbar":{"items":["bold"]}}"#);
    }

    #[test]
    fn test_update_input_replaces_both_fields() {
        let config = EditorProfileConfig::new(vec![ToolbarEntry::Separator]);
        let input = UpdateEditorProfileInput::replace("Renamed", &config).unwrap();
        assert_eq!(input.name.as_deref(), Some("Renamed"));
        assert_eq!(input.profile.as_deref(), Some(r#"{"toolbar":{"items":["|"]}}"#));

        let empty = serde_json::to_string(&UpdateEditorProfileInput::default()).unwrap();
        assert_eq!(empty, "{}");
    }
}
