//! Mapping between a profile configuration and the flat, uniquely keyed
//! item list driven by the visual toolbar editor.
//!
//! Every [`BuilderItem`] gets a fresh token when it is created. Tokens are
//! per position, not per content: two items carrying the same catalog id, or
//! two separators, are still independently addressable.
//!
//! [`from_builder_items`] is the inverse of [`to_builder_items`]. It drops
//! items that do not resolve to a toolbar entry and only writes `style` and
//! `disableContentWrap` when they differ from their defaults.

mod draft;
mod session;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};
use uuid::Uuid;

use crate::config::{EditorProfileConfig, StyleDefinition, Toolbar, ToolbarEntry, ToolbarGroup};

pub use draft::{GroupDraft, StyleDraft, parse_class_list, slugify_group_id};
pub use session::BuilderSession;

/// Kind of a builder item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuilderItemKind {
    Item,
    Separator,
    Group,
}

/// Ephemeral wrapper around one toolbar entry during an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderItem {
    /// Editing-session token, unrelated to the item's content.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BuilderItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<ToolbarGroup>,
}

/// Generate a new builder item token.
pub fn new_token() -> String {
    format!("builder-item-{}", Uuid::new_v4().simple())
}

impl BuilderItem {
    pub fn item(item_id: impl Into<String>) -> Self {
        Self {
            id: new_token(),
            kind: BuilderItemKind::Item,
            item_id: Some(item_id.into()),
            group: None,
        }
    }

    pub fn separator() -> Self {
        Self {
            id: new_token(),
            kind: BuilderItemKind::Separator,
            item_id: None,
            group: None,
        }
    }

    pub fn group(group: ToolbarGroup) -> Self {
        Self {
            id: new_token(),
            kind: BuilderItemKind::Group,
            item_id: None,
            group: Some(group),
        }
    }

    pub fn from_entry(entry: &ToolbarEntry) -> Self {
        match entry {
            ToolbarEntry::Item(id) => Self::item(id.clone()),
            ToolbarEntry::Separator => Self::separator(),
            ToolbarEntry::Group(group) => Self::group(group.clone()),
        }
    }

    /// Toolbar entry this item stands for, if it resolves to one.
    pub fn to_entry(&self) -> Option<ToolbarEntry> {
        match self.kind {
            BuilderItemKind::Separator => Some(ToolbarEntry::Separator),
            BuilderItemKind::Group => self.group.clone().map(ToolbarEntry::Group),
            BuilderItemKind::Item => self
                .item_id
                .as_deref()
                .filter(|id| !id.is_empty())
                .map(ToolbarEntry::item),
        }
    }
}

/// Expand a configuration into builder items, one per toolbar entry.
#[instrument(skip_all, fields(entries = config.toolbar.items.len()))]
pub fn to_builder_items(config: &EditorProfileConfig) -> Vec<BuilderItem> {
    let items: Vec<BuilderItem> = config
        .toolbar
        .items
        .iter()
        .map(BuilderItem::from_entry)
        .collect();
    trace!(count = items.len(), "Built builder items");
    items
}

/// Collapse builder items back into a configuration.
#[instrument(skip_all, fields(items = items.len(), styles = styles.len(), disable_content_wrap = disable_content_wrap))]
pub fn from_builder_items(
    items: &[BuilderItem],
    styles: &[StyleDefinition],
    disable_content_wrap: bool,
) -> EditorProfileConfig {
    let entries: Vec<ToolbarEntry> = items.iter().filter_map(BuilderItem::to_entry).collect();
    if entries.len() != items.len() {
        debug!(
            dropped = items.len() - entries.len(),
            "Dropped builder items without a toolbar value"
        );
    }

    EditorProfileConfig {
        toolbar: Toolbar { items: entries },
        style: (!styles.is_empty()).then(|| styles.to_vec()),
        disable_content_wrap: disable_content_wrap.then_some(true),
    }
}
