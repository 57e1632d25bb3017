use serde_json::{Value, json};
use tracing::{debug, info};

use super::{Site, has_profile, resolve_profile_ids};
use crate::error::{ProfileError, Result};

/// Ordered profile ids being edited for one site. The first id is the
/// site's default profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileAssignment {
    ids: Vec<String>,
}

impl ProfileAssignment {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_site(site: &Site) -> Self {
        Self {
            ids: resolve_profile_ids(site),
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn default_id(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Append a profile. Returns false if it was already assigned.
    pub fn add(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove every occurrence of `id`. Returns false if it was not present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|i| i != id);
        self.ids.len() != before
    }

    /// Move `active` to the position held by `over`.
    pub fn move_item(&mut self, active: &str, over: &str) -> bool {
        if active == over {
            return false;
        }
        let from = self.ids.iter().position(|i| i == active);
        let to = self.ids.iter().position(|i| i == over);
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };
        let id = self.ids.remove(from);
        self.ids.insert(to, id);
        true
    }

    /// Move `id` to the front.
    pub fn make_default(&mut self, id: &str) -> bool {
        let Some(index) = self.ids.iter().position(|i| i == id) else {
            return false;
        };
        let id = self.ids.remove(index);
        self.ids.insert(0, id);
        true
    }

    /// List form written back to the site.
    pub fn to_value(&self) -> Value {
        json!(self.ids)
    }

    /// Body of a site update request.
    pub fn update_body(&self) -> Value {
        json!({ "editorProfiles": self.ids })
    }
}

/// Sites whose resolved assignment includes `profile_id`.
pub fn sites_with_profile<'s>(sites: &'s [Site], profile_id: &str) -> Vec<&'s Site> {
    sites.iter().filter(|s| has_profile(s, profile_id)).collect()
}

/// Refuse to delete a profile that any site still references.
pub fn ensure_profile_deletable(profile_id: &str, sites: &[Site]) -> Result<()> {
    let users = sites_with_profile(sites, profile_id);
    if users.is_empty() {
        debug!(profile = profile_id, "Profile is unused");
        return Ok(());
    }
    info!(profile = profile_id, sites = users.len(), "Profile still assigned");
    Err(ProfileError::ProfileInUse {
        id: profile_id.to_string(),
        sites: users.iter().map(|s| s.label().to_string()).collect(),
    })
}
