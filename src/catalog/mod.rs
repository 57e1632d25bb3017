//! Registry of known toolbar items.
//!
//! A [`Catalog`] is an immutable table of [`ItemDefinition`]s. The built-in
//! table is initialised once per process and shared read-only; alternate
//! catalogs can be constructed with [`Catalog::new`] and handed to the
//! validator and builder session instead.

mod builtins;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::ProfileError;

pub use builtins::builtin_definitions;

/// Token used for a visual divider, both at the top level and inside groups.
pub const SEPARATOR: &str = "|";

/// Catalog id of the item that enables the custom "Styles" dropdown.
pub const STYLE_ITEM_ID: &str = "style";

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(builtin_definitions()));

/// Grouping used by the item palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemCategory {
    TextFormatting,
    ColorControls,
    Structure,
    ListsIndentation,
    Links,
    MediaTables,
    Advanced,
}

impl ItemCategory {
    /// All categories in palette order.
    pub const ALL: [Self; 7] = [
        Self::TextFormatting,
        Self::ColorControls,
        Self::Structure,
        Self::ListsIndentation,
        Self::Links,
        Self::MediaTables,
        Self::Advanced,
    ];

    /// Wire identifier (kebab-case).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextFormatting => "text-formatting",
            Self::ColorControls => "color-controls",
            Self::Structure => "structure",
            Self::ListsIndentation => "lists-indentation",
            Self::Links => "links",
            Self::MediaTables => "media-tables",
            Self::Advanced => "advanced",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TextFormatting => "Text Formatting",
            Self::ColorControls => "Color Controls",
            Self::Structure => "Structure",
            Self::ListsIndentation => "Lists & Indentation",
            Self::Links => "Links",
            Self::MediaTables => "Media & Tables",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProfileError::UnknownCategory(s.to_string()))
    }
}

/// A single toolbar capability the editor knows how to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Stable identifier used in profile documents (e.g. "bold").
    pub id: String,
    /// Display label.
    pub label: String,
    /// One-line description for the palette tooltip.
    pub description: String,
    pub category: ItemCategory,
}

impl ItemDefinition {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        category: ItemCategory,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            category,
        }
    }
}

/// Immutable, ordered table of toolbar item definitions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ItemDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from definitions, keeping their order.
    ///
    /// A repeated id keeps the first definition. The separator token is never
    /// a catalog item and is skipped.
    pub fn new<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = ItemDefinition>,
    {
        let mut items = Vec::new();
        let mut index = HashMap::new();

        for def in definitions {
            if def.id == SEPARATOR {
                warn!("Separator token cannot be registered as a catalog item");
                continue;
            }
            if index.contains_key(&def.id) {
                warn!(id = %def.id, "Duplicate catalog item ignored");
                continue;
            }
            index.insert(def.id.clone(), items.len());
            items.push(def);
        }

        trace!(count = items.len(), "Catalog built");
        Self { items, index }
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn lookup(&self, id: &str) -> Option<&ItemDefinition> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Item ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|d| d.id.as_str())
    }

    /// Item ids as a set.
    pub fn all_ids(&self) -> HashSet<&str> {
        self.ids().collect()
    }

    /// Definitions in a category, in catalog order.
    pub fn by_category(&self, category: ItemCategory) -> Vec<&ItemDefinition> {
        self.items
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
