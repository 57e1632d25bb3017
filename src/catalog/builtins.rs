//! Built-in toolbar item definitions.

use super::{ItemCategory, ItemDefinition};

type Row = (&'static str, &'static str, &'static str, ItemCategory);

const BUILTIN_ITEMS: &[Row] = &[
    // Text formatting
    ("bold", "Bold", "Bold text", ItemCategory::TextFormatting),
    ("italic", "Italic", "Italic text", ItemCategory::TextFormatting),
    ("emphasis", "Emphasis", "Custom emphasis style", ItemCategory::TextFormatting),
    ("underline", "Underline", "Underline text", ItemCategory::TextFormatting),
    ("strikethrough", "Strikethrough", "Strikethrough text", ItemCategory::TextFormatting),
    ("subscript", "Subscript", "Subscript formatting", ItemCategory::TextFormatting),
    ("superscript", "Superscript", "Superscript formatting", ItemCategory::TextFormatting),
    ("removeFormat", "Remove Format", "Clear all formatting", ItemCategory::TextFormatting),
    // Color controls
    ("fontColor", "Font Color", "Text color picker", ItemCategory::ColorControls),
    ("fontBackgroundColor", "Background Color", "Highlight color", ItemCategory::ColorControls),
    // Structure
    ("heading", "Heading", "Heading dropdown (H1-H6, paragraph)", ItemCategory::Structure),
    ("alignment", "Alignment", "Align left, center, right, justify", ItemCategory::Structure),
    ("blockQuote", "Block Quote", "Block quotation", ItemCategory::Structure),
    // Lists and indentation
    ("bulletedList", "Bulleted List", "Unordered list", ItemCategory::ListsIndentation),
    ("numberedList", "Numbered List", "Ordered list", ItemCategory::ListsIndentation),
    ("indent", "Indent", "Increase indent", ItemCategory::ListsIndentation),
    ("outdent", "Outdent", "Decrease indent", ItemCategory::ListsIndentation),
    // Links
    ("link", "Link", "External hyperlink", ItemCategory::Links),
    ("internalLink", "Internal Link", "Internal Sitecore item link", ItemCategory::Links),
    ("phoneLink", "Phone Link", "Phone number link", ItemCategory::Links),
    // Media and tables
    ("sitecoreSelectMedia", "Media", "Insert media library item", ItemCategory::MediaTables),
    ("insertTable", "Table", "Insert table", ItemCategory::MediaTables),
    ("horizontalLine", "Horizontal Line", "Insert horizontal rule", ItemCategory::MediaTables),
    // Advanced
    ("style", "Styles", "Custom styles dropdown (requires style config)", ItemCategory::Advanced),
    ("sourceEditing", "Source", "Raw HTML source editor", ItemCategory::Advanced),
    ("sitecoreResetFieldValue", "Reset Value", "Clear value", ItemCategory::Advanced),
];

/// Definitions backing [`Catalog::builtin`](super::Catalog::builtin).
pub fn builtin_definitions() -> Vec<ItemDefinition> {
    BUILTIN_ITEMS
        .iter()
        .map(|&(id, label, description, category)| {
            ItemDefinition::new(id, label, description, category)
        })
        .collect()
}
