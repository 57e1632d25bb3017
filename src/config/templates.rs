//! Starter templates and predefined groups offered when creating a profile.

use serde::Serialize;

use super::schema::{EditorProfileConfig, GroupIcon, ToolbarEntry, ToolbarGroup};
use crate::catalog::SEPARATOR;

/// A named starting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub config: EditorProfileConfig,
}

fn entries(ids: &[&str]) -> Vec<ToolbarEntry> {
    ids.iter().map(|id| ToolbarEntry::item(*id)).collect()
}

fn formatting_group() -> ToolbarGroup {
    ToolbarGroup::new(
        "formatting",
        "Formatting",
        ["strikethrough", "subscript", "superscript", "removeFormat"],
    )
    .with_icon(GroupIcon::Text)
}

fn insert_group() -> ToolbarGroup {
    ToolbarGroup::new(
        "insert",
        "Insert",
        ["sitecoreSelectMedia", "insertTable", "horizontalLine"],
    )
    .with_icon(GroupIcon::Plus)
    .with_text(false)
}

/// Groups offered in the group dialog as ready-made starting points.
pub fn predefined_groups() -> Vec<ToolbarGroup> {
    vec![formatting_group(), insert_group()]
}

fn standard_config() -> EditorProfileConfig {
    let mut items = entries(&[SEPARATOR, "bold", "italic", "emphasis", "underline", "blockQuote", SEPARATOR]);
    items.push(ToolbarEntry::Group(formatting_group().with_text(false)));
    items.extend(entries(&[
        "fontColor",
        "fontBackgroundColor",
        SEPARATOR,
        "heading",
        SEPARATOR,
        "alignment",
        "bulletedList",
        "numberedList",
        SEPARATOR,
        "indent",
        "outdent",
        "link",
        "internalLink",
        "phoneLink",
        SEPARATOR,
    ]));
    items.push(ToolbarEntry::Group(insert_group()));
    items.extend(entries(&[SEPARATOR, "sourceEditing", SEPARATOR, "sitecoreResetFieldValue"]));
    EditorProfileConfig::new(items)
}

/// All templates, blank first.
pub fn templates() -> Vec<ProfileTemplate> {
    vec![
        ProfileTemplate {
            id: "blank",
            name: "Blank",
            description: "Start from scratch with an empty toolbar",
            config: EditorProfileConfig::default(),
        },
        ProfileTemplate {
            id: "standard",
            name: "Standard",
            description: "Replica of the standard RTE profile: formatting, lists, links and media insertion",
            config: standard_config(),
        },
        ProfileTemplate {
            id: "minimal",
            name: "Minimal",
            description: "Basic formatting only - bold, italic, and links",
            config: EditorProfileConfig::new(entries(&["bold", "italic", "underline", SEPARATOR, "link"])),
        },
    ]
}

pub fn template_by_id(id: &str) -> Option<ProfileTemplate> {
    templates().into_iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_lookup() {
        assert_eq!(template_by_id("minimal").unwrap().config.item_count(), 5);
        assert!(template_by_id("blank").unwrap().config.toolbar.items.is_empty());
        assert!(template_by_id("nope").is_none());
    }

    #[test]
    fn test_standard_template_shape() {
        let standard = template_by_id("standard").unwrap().config;
        assert!(standard.toolbar.items[0].is_separator());
        let groups: Vec<&str> = standard
            .toolbar
            .items
            .iter()
            .filter_map(ToolbarEntry::as_group)
            .map(|g| g.group.as_str())
            .collect();
        assert_eq!(groups, vec!["formatting", "insert"]);
        assert!(standard.uses_item("sitecoreResetFieldValue"));
    }

    #[test]
    fn test_predefined_groups() {
        let groups = predefined_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].icon, Some(GroupIcon::Text));
        assert_eq!(groups[1].with_text, Some(false));
    }
}
