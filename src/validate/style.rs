//! Checks for the optional `style` section.

use serde_json::{Map, Value};

use super::{Findings, is_missing, non_empty_str};
use crate::catalog::STYLE_ITEM_ID;
use crate::config::StyleElement;

pub(super) fn check_styles(styles: &Value, toolbar_items: &[Value], findings: &mut Findings) {
    let Some(styles) = styles.as_array() else {
        findings.error("\"style\" must be an array of style definitions");
        return;
    };

    for (index, style) in styles.iter().enumerate() {
        let prefix = format!("Style {}", index + 1);
        match style.as_object() {
            Some(map) => check_style(map, &prefix, findings),
            None => findings.error(format!("{prefix}: Must be an object")),
        }
    }

    // Only top-level entries enable the dropdown; a "style" item inside a
    // group does not suppress this warning.
    let has_style_item = toolbar_items
        .iter()
        .any(|item| item.as_str() == Some(STYLE_ITEM_ID));
    if !styles.is_empty() && !has_style_item {
        findings.warn(
            "Custom styles defined but \"style\" item not in toolbar. Add \"style\" to \
             toolbar.items to enable the Styles dropdown.",
        );
    }
}

fn check_style(style: &Map<String, Value>, prefix: &str, findings: &mut Findings) {
    match non_empty_str(style, "name") {
        None => findings.error(format!("{prefix}: Missing required \"name\" (string)")),
        Some(name) if name.trim().is_empty() => {
            findings.error(format!("{prefix}: \"name\" cannot be empty"));
        }
        Some(_) => {}
    }

    match non_empty_str(style, "element") {
        None => findings.error(format!("{prefix}: Missing required \"element\" (string)")),
        Some(element) if StyleElement::from_name(element).is_none() => {
            let valid: Vec<&str> = StyleElement::ALL.iter().map(|e| e.as_str()).collect();
            findings.error(format!(
                "{prefix}: Invalid element \"{element}\". Valid elements: {}",
                valid.join(", ")
            ));
        }
        Some(_) => {}
    }

    let classes = style.get("classes");
    if is_missing(classes) {
        findings.error(format!("{prefix}: Missing required \"classes\" array"));
        return;
    }
    let Some(classes) = classes.and_then(Value::as_array) else {
        findings.error(format!("{prefix}: \"classes\" must be an array"));
        return;
    };

    if classes.is_empty() {
        findings.error(format!("{prefix}: \"classes\" array cannot be empty"));
    }
    for (index, class) in classes.iter().enumerate() {
        let position = index + 1;
        match class.as_str() {
            None => findings.error(format!("{prefix}: Class {position} must be a string")),
            Some(name) if name.trim().is_empty() => {
                findings.error(format!("{prefix}: Class {position} cannot be empty"));
            }
            Some(_) => {}
        }
    }
}
