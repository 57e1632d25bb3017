//! Validation of hand-edited profile documents.
//!
//! [`Validator::validate`] accepts arbitrary text and never fails: every
//! problem is reported in the returned [`ValidationResult`]. Errors are
//! fatal (the document must not be saved); warnings are advisory and never
//! affect [`ValidationResult::valid`].
//!
//! The root checks short-circuit (unparseable text, non-object root, missing
//! or mistyped `toolbar` / `toolbar.items`). Past that point every entry is
//! checked and all problems are accumulated.
//!
//! Presence checks follow the loose truthiness the profile documents were
//! always written against: a key holding `null`, `false`, `0` or `""` counts
//! as missing.

mod group;
mod style;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument, trace};

use crate::catalog::{Catalog, SEPARATOR};
use crate::config::EditorProfileConfig;

/// Outcome of validating a profile document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no errors were found. Warnings do not count.
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn failed(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![error.into()],
            warnings: Vec::new(),
        }
    }

    /// Valid and without warnings.
    pub fn is_clean(&self) -> bool {
        self.valid && self.warnings.is_empty()
    }
}

/// Accumulator shared by the per-section checks.
#[derive(Debug, Default)]
struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Findings {
    fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        trace!(%message, "Validation error");
        self.errors.push(message);
    }

    fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        trace!(%message, "Validation warning");
        self.warnings.push(message);
    }

    fn finish(self) -> ValidationResult {
        ValidationResult {
            valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

/// Shape of one `toolbar.items` entry.
enum EntryShape<'v> {
    Separator,
    Item(&'v str),
    Group(&'v Map<String, Value>),
    Other,
}

impl<'v> EntryShape<'v> {
    fn of(value: &'v Value) -> Self {
        match value {
            Value::String(s) if s == SEPARATOR => Self::Separator,
            Value::String(s) => Self::Item(s),
            Value::Object(map) => Self::Group(map),
            _ => Self::Other,
        }
    }
}

/// Absent, or holding a value that reads as "nothing".
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

/// Non-empty string value of `key`, if any.
fn non_empty_str<'v>(map: &'v Map<String, Value>, key: &str) -> Option<&'v str> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Profile document validator bound to an item catalog.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    catalog: &'a Catalog,
}

impl Validator<'static> {
    /// Validator over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<'a> Validator<'a> {
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Validate raw JSON text.
    #[instrument(skip_all, fields(len = raw.len()))]
    pub fn validate(&self, raw: &str) -> ValidationResult {
        match serde_json::from_str::<Value>(raw) {
            Ok(root) => self.validate_value(&root),
            Err(e) => {
                debug!(error = %e, "Profile text is not JSON");
                ValidationResult::failed(format!("Invalid JSON: {e}"))
            }
        }
    }

    /// Validate an already-parsed JSON document.
    pub fn validate_value(&self, root: &Value) -> ValidationResult {
        let Some(config) = root.as_object() else {
            return ValidationResult::failed("Configuration must be an object");
        };

        let toolbar = config.get("toolbar");
        if is_missing(toolbar) {
            return ValidationResult::failed("Missing required \"toolbar\" property");
        }
        let Some(toolbar) = toolbar.and_then(Value::as_object) else {
            return ValidationResult::failed("\"toolbar\" must be an object");
        };

        let items = toolbar.get("items");
        if is_missing(items) {
            return ValidationResult::failed("Missing required \"toolbar.items\" array");
        }
        let Some(items) = items.and_then(Value::as_array) else {
            return ValidationResult::failed("\"toolbar.items\" must be an array");
        };

        let mut findings = Findings::default();
        self.check_items(items, &mut findings);
        check_toolbar_warnings(items, &mut findings);

        if let Some(styles) = config.get("style") {
            style::check_styles(styles, items, &mut findings);
        }

        if let Some(flag) = config.get("disableContentWrap") {
            match flag {
                Value::Bool(true) => findings.warn(
                    "Content wrapper is disabled. Ensure your site provides equivalent CSS \
                     styling for RTE content.",
                ),
                Value::Bool(false) => {}
                _ => findings.error("\"disableContentWrap\" must be a boolean value"),
            }
        }

        let result = findings.finish();
        debug!(
            items = items.len(),
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "Validation finished"
        );
        result
    }

    /// Validate a typed configuration.
    ///
    /// Useful for configurations assembled in code, which are always
    /// structurally sound but may still reference unknown items.
    pub fn validate_config(&self, config: &EditorProfileConfig) -> ValidationResult {
        match serde_json::to_value(config) {
            Ok(root) => self.validate_value(&root),
            Err(e) => ValidationResult::failed(format!("Invalid JSON: {e}")),
        }
    }

    fn check_items(&self, items: &[Value], findings: &mut Findings) {
        for (index, entry) in items.iter().enumerate() {
            let position = index + 1;
            match EntryShape::of(entry) {
                EntryShape::Separator => {}
                EntryShape::Item(id) => {
                    if !self.catalog.contains(id) {
                        findings.error(format!(
                            "Item {position}: Unknown toolbar item \"{id}\". Valid items: {}",
                            self.valid_ids()
                        ));
                    }
                }
                EntryShape::Group(map) => group::check_group(self, map, position, findings),
                EntryShape::Other => findings.error(format!(
                    "Item {position}: Must be a string (item ID) or object (group)"
                )),
            }
        }
    }

    fn valid_ids(&self) -> String {
        self.catalog.ids().collect::<Vec<_>>().join(", ")
    }
}

/// Validate raw JSON text against the built-in catalog.
pub fn validate_profile_config(raw: &str) -> ValidationResult {
    Validator::builtin().validate(raw)
}

fn check_toolbar_warnings(items: &[Value], findings: &mut Findings) {
    if items.is_empty() {
        findings.warn("Toolbar has no items configured");
    }

    // Group contents are not considered.
    let mut seen = std::collections::HashSet::new();
    for id in items.iter().filter_map(Value::as_str) {
        if id != SEPARATOR && !seen.insert(id) {
            findings.warn(format!("Duplicate item \"{id}\" found"));
        }
    }
}
