//! Data types representing an editor profile configuration.
//!
//! These types map 1:1 onto the JSON document persisted by the profiles API:
//!
//! ```json
//! {
//!   "toolbar": {
//!     "items": [
//!       "bold", "italic", "|",
//!       { "group": "insert", "label": "Insert", "icon": "plus",
//!         "items": ["insertTable", "|", "horizontalLine"], "withText": false }
//!     ]
//!   },
//!   "style": [{ "name": "Lead", "element": "p", "classes": ["lead"] }],
//!   "disableContentWrap": true
//! }
//! ```
//!
//! Optional keys are omitted when they hold their default, so a round trip
//! never introduces `"style": []` or `"disableContentWrap": false`.
//!
//! Catalog membership of item ids is not enforced here; that is the
//! [validator's](crate::validate) job.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::catalog::SEPARATOR;
use crate::error::Result;

/// Complete toolbar profile document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorProfileConfig {
    pub toolbar: Toolbar,

    /// Custom entries for the "Styles" dropdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Vec<StyleDefinition>>,

    /// When true the consuming editor must not wrap its output in the
    /// default content container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_content_wrap: Option<bool>,
}

impl EditorProfileConfig {
    /// Create a configuration with the given toolbar entries and no extras.
    #[must_use]
    pub fn new(items: Vec<ToolbarEntry>) -> Self {
        Self {
            toolbar: Toolbar { items },
            ..Self::default()
        }
    }

    /// A profile with an empty toolbar is blank and cannot be saved.
    pub fn is_complete(&self) -> bool {
        !self.toolbar.items.is_empty()
    }

    /// Number of top-level toolbar entries (groups count once).
    pub fn item_count(&self) -> usize {
        self.toolbar.items.len()
    }

    /// Whether `id` appears anywhere in the toolbar, including inside groups.
    pub fn uses_item(&self, id: &str) -> bool {
        self.toolbar.items.iter().any(|entry| match entry {
            ToolbarEntry::Item(item) => item == id,
            ToolbarEntry::Separator => id == SEPARATOR,
            ToolbarEntry::Group(group) => group.items.iter().any(|e| e.as_str() == id),
        })
    }

    /// Custom styles, empty when none are configured.
    pub fn styles(&self) -> &[StyleDefinition] {
        self.style.as_deref().unwrap_or_default()
    }

    pub fn content_wrap_disabled(&self) -> bool {
        self.disable_content_wrap.unwrap_or(false)
    }

    /// Collapse `style: []` to absent and `disableContentWrap: false` to
    /// absent, giving the form that is written to the wire.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.style.as_ref().is_some_and(Vec::is_empty) {
            self.style = None;
        }
        if self.disable_content_wrap == Some(false) {
            self.disable_content_wrap = None;
        }
        self
    }
}

/// Toolbar section of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolbar {
    #[serde(default)]
    pub items: Vec<ToolbarEntry>,
}

/// One position in the toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntry", into = "RawEntry")]
pub enum ToolbarEntry {
    /// Reference to a catalog item by id.
    Item(String),
    /// Visual divider (`"|"` on the wire).
    Separator,
    /// Dropdown container.
    Group(ToolbarGroup),
}

/// Wire shape of a toolbar entry: a bare string or a group object.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Text(String),
    Group(ToolbarGroup),
}

impl From<RawEntry> for ToolbarEntry {
    fn from(raw: RawEntry) -> Self {
        match raw {
            RawEntry::Text(s) if s == SEPARATOR => Self::Separator,
            RawEntry::Text(s) => Self::Item(s),
            RawEntry::Group(g) => Self::Group(g),
        }
    }
}

impl From<ToolbarEntry> for RawEntry {
    fn from(entry: ToolbarEntry) -> Self {
        match entry {
            ToolbarEntry::Item(s) => Self::Text(s),
            ToolbarEntry::Separator => Self::Text(SEPARATOR.to_string()),
            ToolbarEntry::Group(g) => Self::Group(g),
        }
    }
}

impl ToolbarEntry {
    pub fn item(id: impl Into<String>) -> Self {
        let id = id.into();
        if id == SEPARATOR {
            Self::Separator
        } else {
            Self::Item(id)
        }
    }

    pub fn as_item_id(&self) -> Option<&str> {
        match self {
            Self::Item(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&ToolbarGroup> {
        match self {
            Self::Group(g) => Some(g),
            _ => None,
        }
    }

    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }
}

/// One position inside a group. Groups do not nest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GroupEntry {
    Item(String),
    Separator,
}

impl From<String> for GroupEntry {
    fn from(s: String) -> Self {
        if s == SEPARATOR {
            Self::Separator
        } else {
            Self::Item(s)
        }
    }
}

impl From<&str> for GroupEntry {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<GroupEntry> for String {
    fn from(entry: GroupEntry) -> Self {
        match entry {
            GroupEntry::Item(s) => s,
            GroupEntry::Separator => SEPARATOR.to_string(),
        }
    }
}

impl GroupEntry {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Item(s) => s,
            Self::Separator => SEPARATOR,
        }
    }

    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }
}

/// Dropdown container bundling catalog items and separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarGroup {
    /// Identifier, expected to be unique within a toolbar.
    pub group: String,
    /// Dropdown display name.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<GroupIcon>,
    pub items: Vec<GroupEntry>,
    /// Show the label next to the icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_text: Option<bool>,
}

impl ToolbarGroup {
    pub fn new<I, E>(group: impl Into<String>, label: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<GroupEntry>,
    {
        Self {
            group: group.into(),
            label: label.into(),
            icon: None,
            items: items.into_iter().map(Into::into).collect(),
            with_text: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: GroupIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn with_text(mut self, with_text: bool) -> Self {
        self.with_text = Some(with_text);
        self
    }

    /// Catalog ids inside the group, separators excluded.
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|e| match e {
            GroupEntry::Item(id) => Some(id.as_str()),
            GroupEntry::Separator => None,
        })
    }
}

/// Icon shown on a group's dropdown button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupIcon {
    Text,
    Plus,
}

impl GroupIcon {
    pub const ALL: [Self; 2] = [Self::Text, Self::Plus];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Plus => "plus",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == name)
    }
}

impl fmt::Display for GroupIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry of the "Styles" dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDefinition {
    pub name: String,
    pub element: StyleElement,
    pub classes: Vec<String>,
}

impl StyleDefinition {
    pub fn new<I, S>(name: impl Into<String>, element: StyleElement, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            element,
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }
}

/// HTML elements a custom style may render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleElement {
    P,
    Span,
    Div,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Blockquote,
    Pre,
    Code,
}

impl StyleElement {
    pub const ALL: [Self; 12] = [
        Self::P,
        Self::Span,
        Self::Div,
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::H5,
        Self::H6,
        Self::Blockquote,
        Self::Pre,
        Self::Code,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P => "p",
            Self::Span => "span",
            Self::Div => "div",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Blockquote => "blockquote",
            Self::Pre => "pre",
            Self::Code => "code",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == name)
    }
}

impl fmt::Display for StyleElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-effort parse for previews.
///
/// Returns `None` on any parse or shape failure instead of reporting why;
/// use the [validator](crate::validate) when diagnostics are needed.
pub fn parse_profile_value(raw: &str) -> Option<EditorProfileConfig> {
    match serde_json::from_str(raw) {
        Ok(config) => Some(config),
        Err(e) => {
            trace!(error = %e, "Profile value is not a readable configuration");
            None
        }
    }
}

/// Serialize a configuration to the compact JSON persisted by the API.
pub fn stringify_profile_config(config: &EditorProfileConfig) -> Result<String> {
    Ok(serde_json::to_string(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "toolbar": {
                "items": [
                    "bold", "|",
                    {
                        "group": "insert",
                        "label": "Insert",
                        "icon": "plus",
                        "items": ["insertTable", "|", "horizontalLine"],
                        "withText": false
                    }
                ]
            },
            "style": [{ "name": "Lead", "element": "p", "classes": ["lead", "big"] }],
            "disableContentWrap": true
        }"#;

        let config = parse_profile_value(json).unwrap();
        assert_eq!(config.item_count(), 3);
        assert_eq!(config.toolbar.items[0], ToolbarEntry::Item("bold".to_string()));
        assert!(config.toolbar.items[1].is_separator());

        let group = config.toolbar.items[2].as_group().unwrap();
        assert_eq!(group.icon, Some(GroupIcon::Plus));
        assert_eq!(group.with_text, Some(false));
        assert_eq!(group.items[1], GroupEntry::Separator);
        assert_eq!(
            group.item_ids().collect::<Vec<_>>(),
            vec!["insertTable", "horizontalLine"]
        );

        assert_eq!(config.styles()[0].element, StyleElement::P);
        assert!(config.content_wrap_disabled());
    }

    #[test]
    fn test_defaults_are_omitted_on_serialize() {
        let config = EditorProfileConfig::new(vec![ToolbarEntry::item("bold")]);
        let json = stringify_profile_config(&config).unwrap();
        assert_eq!(json, r#"{"toolbar":{"items":["bold"]}}"#);
    }

    #[test]
    fn test_group_serializes_in_wire_order() {
        let group = ToolbarGroup::new("fmt", "Formatting", ["bold", "|"])
            .with_icon(GroupIcon::Text)
            .with_text(true);
        let json = serde_json::to_string(&ToolbarEntry::Group(group)).unwrap();
        assert_eq!(
            json,
            r#"{"group":"fmt","label":"Formatting","icon":"text","items":["bold","|"],"withText":true}"#
        );
    }

    #[test]
    fn test_parse_profile_value_tolerates_garbage() {
        assert!(parse_profile_value("not json").is_none());
        assert!(parse_profile_value("").is_none());
        assert!(parse_profile_value("[1,2]").is_none());
        assert!(parse_profile_value(r#"{"toolbar":{"items":[42]}}"#).is_none());
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let config = parse_profile_value(r#"{"toolbar":{}}"#).unwrap();
        assert!(!config.is_complete());
    }

    #[test]
    fn test_uses_item_looks_inside_groups() {
        let config = EditorProfileConfig::new(vec![
            ToolbarEntry::item("bold"),
            ToolbarEntry::Group(ToolbarGroup::new("g", "G", ["style"])),
        ]);
        assert!(config.uses_item("bold"));
        assert!(config.uses_item("style"));
        assert!(!config.uses_item("italic"));
    }

    #[test]
    fn test_normalized_drops_defaults() {
        let config = EditorProfileConfig {
            toolbar: Toolbar::default(),
            style: Some(Vec::new()),
            disable_content_wrap: Some(false),
        };
        let normalized = config.normalized();
        assert_eq!(normalized.style, None);
        assert_eq!(normalized.disable_content_wrap, None);
    }

    #[test]
    fn test_entry_item_constructor_maps_separator() {
        assert!(ToolbarEntry::item(SEPARATOR).is_separator());
        assert_eq!(GroupEntry::from("|"), GroupEntry::Separator);
        assert_eq!(GroupEntry::Separator.as_str(), "|");
    }

    #[test]
    fn test_enum_names() {
        assert_eq!(StyleElement::from_name("blockquote"), Some(StyleElement::Blockquote));
        assert_eq!(StyleElement::from_name("section"), None);
        assert_eq!(GroupIcon::from_name("plus"), Some(GroupIcon::Plus));
        assert_eq!(GroupIcon::from_name("star"), None);
        assert_eq!(StyleElement::H4.to_string(), "h4");
    }
}
