//! Editor profile configuration model.
//!
//! Covers the persisted document shape, the profile entity as exchanged with
//! the profiles API, starter templates, and file loading for profiles
//! authored as JSON, YAML or TOML.

mod loader;
mod profile;
mod schema;
mod templates;

pub use schema::{
    EditorProfileConfig, GroupEntry, GroupIcon, StyleDefinition, StyleElement, Toolbar,
    ToolbarEntry, ToolbarGroup, parse_profile_value, stringify_profile_config,
};

pub use profile::{
    CreateEditorProfileInput, EditorProfile, UpdateEditorProfileInput, ensure_save_ready,
};

pub use templates::{ProfileTemplate, predefined_groups, template_by_id, templates};

pub use loader::{
    ConfigFormat, LoadedProfile, load_config, load_config_from_str, parse_document, save_config,
};
