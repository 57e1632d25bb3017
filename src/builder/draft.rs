//! Form state for the group and style editors.

use crate::config::{GroupEntry, GroupIcon, StyleDefinition, StyleElement, ToolbarGroup};
use crate::error::{ProfileError, Result};

/// Normalise free text into a group identifier: lowercase, with every
/// whitespace run replaced by `-`.
pub fn slugify_group_id(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut in_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    slug
}

/// Split a class list typed by the user on whitespace and commas.
pub fn parse_class_list(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Group being created or edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDraft {
    pub group: String,
    pub label: String,
    pub icon: GroupIcon,
    pub with_text: bool,
    pub items: Vec<GroupEntry>,
}

impl Default for GroupDraft {
    fn default() -> Self {
        Self {
            group: String::new(),
            label: String::new(),
            icon: GroupIcon::Text,
            with_text: true,
            items: Vec::new(),
        }
    }
}

impl GroupDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing group.
    pub fn from_group(group: &ToolbarGroup) -> Self {
        Self {
            group: group.group.clone(),
            label: group.label.clone(),
            icon: group.icon.unwrap_or(GroupIcon::Text),
            with_text: group.with_text != Some(false),
            items: group.items.clone(),
        }
    }

    pub fn set_group_id(&mut self, input: &str) {
        self.group = slugify_group_id(input);
    }

    /// Add a catalog item unless it is already in the group.
    pub fn add_item(&mut self, item_id: &str) -> bool {
        let entry = GroupEntry::from(item_id);
        if !entry.is_separator() && self.items.contains(&entry) {
            return false;
        }
        self.items.push(entry);
        true
    }

    pub fn add_separator(&mut self) {
        self.items.push(GroupEntry::Separator);
    }

    pub fn remove_at(&mut self, index: usize) -> Option<GroupEntry> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Number of entries that are not separators.
    pub fn item_count(&self) -> usize {
        self.items.iter().filter(|e| !e.is_separator()).count()
    }

    /// Finish the draft. Needs an id, a label and at least one real item.
    pub fn build(&self) -> Result<ToolbarGroup> {
        if self.group.is_empty() {
            return Err(ProfileError::IncompleteGroup("group id is required".to_string()));
        }
        if self.label.is_empty() {
            return Err(ProfileError::IncompleteGroup("label is required".to_string()));
        }
        if self.item_count() == 0 {
            return Err(ProfileError::IncompleteGroup(
                "add at least one item".to_string(),
            ));
        }
        Ok(ToolbarGroup {
            group: self.group.clone(),
            label: self.label.clone(),
            icon: Some(self.icon),
            items: self.items.clone(),
            with_text: Some(self.with_text),
        })
    }
}

/// Custom style being created or edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDraft {
    pub name: String,
    pub element: StyleElement,
    /// Raw class input, e.g. `"lead, text-large"`.
    pub classes: String,
}

impl Default for StyleDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            element: StyleElement::P,
            classes: String::new(),
        }
    }
}

impl StyleDraft {
    pub fn from_style(style: &StyleDefinition) -> Self {
        Self {
            name: style.name.clone(),
            element: style.element,
            classes: style.classes.join(" "),
        }
    }

    pub fn build(&self) -> Result<StyleDefinition> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProfileError::IncompleteStyle("name is required".to_string()));
        }
        let classes = parse_class_list(&self.classes);
        if classes.is_empty() {
            return Err(ProfileError::IncompleteStyle(
                "at least one class is required".to_string(),
            ));
        }
        Ok(StyleDefinition::new(name, self.element, classes))
    }
}
