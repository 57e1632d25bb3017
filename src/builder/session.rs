//! Interactive editing session over a toolbar.

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::{BuilderItem, BuilderItemKind, from_builder_items, to_builder_items};
use crate::catalog::{Catalog, STYLE_ITEM_ID};
use crate::config::{EditorProfileConfig, StyleDefinition, ToolbarGroup};
use crate::error::{ProfileError, Result};
use crate::validate::{ValidationResult, Validator};

/// Editing state of the visual toolbar builder.
///
/// Holds the flat item list plus the settings that live outside the
/// toolbar (custom styles, content-wrap flag). [`BuilderSession::config`]
/// always reflects the current state.
#[derive(Debug, Clone)]
pub struct BuilderSession<'a> {
    validator: Validator<'a>,
    items: Vec<BuilderItem>,
    styles: Vec<StyleDefinition>,
    disable_content_wrap: bool,
}

impl<'a> BuilderSession<'a> {
    /// Start a blank session.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            validator: Validator::new(catalog),
            items: Vec::new(),
            styles: Vec::new(),
            disable_content_wrap: false,
        }
    }

    /// Start a session from an existing configuration.
    pub fn load(catalog: &'a Catalog, config: &EditorProfileConfig) -> Self {
        let mut session = Self::new(catalog);
        session.replace(config);
        session
    }

    fn replace(&mut self, config: &EditorProfileConfig) {
        self.items = to_builder_items(config);
        self.styles = config.styles().to_vec();
        self.disable_content_wrap = config.content_wrap_disabled();
    }

    pub fn items(&self) -> &[BuilderItem] {
        &self.items
    }

    pub fn styles(&self) -> &[StyleDefinition] {
        &self.styles
    }

    pub const fn content_wrap_disabled(&self) -> bool {
        self.disable_content_wrap
    }

    /// Current configuration.
    pub fn config(&self) -> EditorProfileConfig {
        from_builder_items(&self.items, &self.styles, self.disable_content_wrap)
    }

    /// Current configuration as indented JSON, as shown in the JSON tab.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.config())?)
    }

    /// Validate the current configuration.
    pub fn validate(&self) -> ValidationResult {
        self.validator.validate_config(&self.config())
    }

    fn add(&mut self, index: Option<usize>, item: BuilderItem) -> String {
        let id = item.id.clone();
        match index {
            Some(i) => self.items.insert(i.min(self.items.len()), item),
            None => self.items.push(item),
        }
        debug!(id = %id, count = self.items.len(), "Builder item added");
        id
    }

    /// Append a catalog item and return its token.
    pub fn push_item(&mut self, item_id: impl Into<String>) -> String {
        self.add(None, BuilderItem::item(item_id))
    }

    /// Insert a catalog item at `index` (clamped to the end).
    pub fn insert_item(&mut self, index: usize, item_id: impl Into<String>) -> String {
        self.add(Some(index), BuilderItem::item(item_id))
    }

    pub fn push_separator(&mut self) -> String {
        self.add(None, BuilderItem::separator())
    }

    pub fn push_group(&mut self, group: ToolbarGroup) -> String {
        self.add(None, BuilderItem::group(group))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// Move the item `active` to the position currently held by `over`.
    ///
    /// Returns false (and changes nothing) if either token is unknown or
    /// both are the same.
    pub fn move_item(&mut self, active: &str, over: &str) -> bool {
        if active == over {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(active), self.position(over)) else {
            return false;
        };
        let item = self.items.remove(from);
        self.items.insert(to, item);
        debug!(from, to, "Builder item moved");
        true
    }

    pub fn remove(&mut self, id: &str) -> Result<BuilderItem> {
        let index = self
            .position(id)
            .ok_or_else(|| ProfileError::BuilderItemNotFound { id: id.to_string() })?;
        Ok(self.items.remove(index))
    }

    pub fn group(&self, id: &str) -> Option<&ToolbarGroup> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .and_then(|i| i.group.as_ref())
    }

    /// Replace the contents of an existing group item.
    pub fn update_group(&mut self, id: &str, group: ToolbarGroup) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id && i.kind == BuilderItemKind::Group)
            .ok_or_else(|| ProfileError::BuilderItemNotFound { id: id.to_string() })?;
        item.group = Some(group);
        Ok(())
    }

    pub fn set_styles(&mut self, styles: Vec<StyleDefinition>) {
        self.styles = styles;
    }

    pub fn set_disable_content_wrap(&mut self, disable: bool) {
        self.disable_content_wrap = disable;
    }

    /// Whether the "style" item sits directly on the toolbar.
    pub fn has_style_item(&self) -> bool {
        self.items
            .iter()
            .any(|i| i.item_id.as_deref() == Some(STYLE_ITEM_ID))
    }

    /// Replace the session with a hand-edited JSON document.
    ///
    /// The session is only touched when the document is valid; all builder
    /// items are then regenerated with fresh tokens. The document is parsed
    /// once, so the imported configuration is exactly what was validated
    /// (for a repeated key, the last occurrence).
    #[instrument(skip_all, fields(len = raw.len()))]
    pub fn import_json(&mut self, raw: &str) -> ValidationResult {
        let Ok(document) = serde_json::from_str::<Value>(raw) else {
            return self.validator.validate(raw);
        };
        let result = self.validator.validate_value(&document);
        if !result.valid {
            debug!(errors = result.errors.len(), "Import rejected");
            return result;
        }
        match serde_json::from_value::<EditorProfileConfig>(document) {
            Ok(config) => {
                self.replace(&config);
                info!(items = self.items.len(), "Imported profile JSON");
            }
            Err(e) => warn!(error = %e, "Valid profile JSON could not be decoded; session unchanged"),
        }
        result
    }
}
