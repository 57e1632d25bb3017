//! Sites and the editor profiles assigned to them.
//!
//! A site stores its profile ids in one of several historical shapes: a
//! single id, a comma-joined string, or a list (whose elements may
//! themselves be comma-joined). The nested `settings.editorProfiles` value
//! takes precedence over the top-level one. [`resolve_profile_ids`] flattens
//! all of this into one ordered list whose first element is the default.
//!
//! Duplicates are kept as found; callers that need uniqueness dedupe.

mod assignment;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument, trace, warn};

pub use assignment::{ProfileAssignment, ensure_profile_deletable, sites_with_profile};

/// Persisted shape of a profile id association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileIdsValue {
    Single(String),
    /// Elements that are not strings are skipped when normalizing.
    List(Vec<Value>),
    /// Anything else the API handed back. Treated as no assignment.
    Other(Value),
}

impl ProfileIdsValue {
    /// Flatten into ordered, trimmed, non-empty ids.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            Self::Single(raw) => split_ids(raw).collect(),
            Self::List(values) => values
                .iter()
                .filter_map(|v| {
                    let id = v.as_str();
                    if id.is_none() {
                        trace!(value = ?v, "Skipping non-string profile id");
                    }
                    id
                })
                .flat_map(|v| {
                    if v.contains(',') {
                        split_ids(v).collect::<Vec<_>>()
                    } else {
                        vec![v.to_string()]
                    }
                })
                .filter(|id| !id.is_empty())
                .collect(),
            Self::Other(value) => {
                warn!(?value, "Ignoring editor profile value of unexpected shape");
                Vec::new()
            }
        }
    }
}

fn split_ids(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteHost {
    pub id: String,
    pub name: String,
}

/// Free-form site settings bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_profiles: Option<ProfileIdsValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A site as returned by the sites API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_profiles: Option<ProfileIdsValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<SiteHost>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SiteSettings>,
}

impl Site {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            display_name: Some(name.clone()),
            name,
            ..Self::default()
        }
    }

    /// Name to show in listings: the display name when set, else `name`.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.name)
    }

    pub fn profile_ids(&self) -> Vec<String> {
        resolve_profile_ids(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCollection {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sites: Option<Vec<Site>>,
}

/// Ordered profile ids assigned to a site. The first one is the default.
#[instrument(level = "trace", skip_all, fields(site = %site.id))]
pub fn resolve_profile_ids(site: &Site) -> Vec<String> {
    let from_settings = site
        .settings
        .as_ref()
        .and_then(|s| s.editor_profiles.as_ref())
        .map(ProfileIdsValue::normalize)
        .unwrap_or_default();
    if !from_settings.is_empty() {
        trace!(count = from_settings.len(), "Using settings.editorProfiles");
        return from_settings;
    }

    site.editor_profiles
        .as_ref()
        .map(ProfileIdsValue::normalize)
        .unwrap_or_default()
}

pub fn has_profile(site: &Site, profile_id: &str) -> bool {
    resolve_profile_ids(site).iter().any(|id| id == profile_id)
}

pub fn default_profile_id(site: &Site) -> Option<String> {
    resolve_profile_ids(site).into_iter().next()
}

/// Extract the site list from a sites API response.
///
/// Accepts `{"data":{"data":[..]}}`, `{"data":[..]}` or a bare array.
/// Entries that do not decode as a site are skipped.
#[instrument(skip_all)]
pub fn decode_site_list(response: &Value) -> Vec<Site> {
    let list = response
        .get("data")
        .and_then(|d| d.get("data"))
        .and_then(Value::as_array)
        .or_else(|| response.get("data").and_then(Value::as_array))
        .or_else(|| response.as_array());

    let Some(list) = list else {
        debug!("Sites response has no recognised list");
        return Vec::new();
    };

    let sites: Vec<Site> = list
        .iter()
        .filter_map(|entry| match serde_json::from_value::<Site>(entry.clone()) {
            Ok(site) => Some(site),
            Err(e) => {
                warn!(error = %e, "Skipping undecodable site entry");
                None
            }
        })
        .collect();
    debug!(count = sites.len(), "Decoded sites");
    sites
}
