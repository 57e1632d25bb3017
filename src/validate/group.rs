//! Checks for group entries of `toolbar.items`.

use serde_json::{Map, Value};

use super::{Findings, Validator, is_missing, non_empty_str};
use crate::catalog::SEPARATOR;
use crate::config::GroupIcon;

pub(super) fn check_group(
    validator: &Validator<'_>,
    group: &Map<String, Value>,
    position: usize,
    findings: &mut Findings,
) {
    let prefix = format!("Item {position} (group)");

    if non_empty_str(group, "group").is_none() {
        findings.error(format!(
            "{prefix}: Missing required \"group\" identifier (string)"
        ));
    }

    if non_empty_str(group, "label").is_none() {
        findings.error(format!("{prefix}: Missing required \"label\" (string)"));
    }

    if let Some(icon) = group.get("icon") {
        match icon.as_str() {
            None => findings.error(format!("{prefix}: \"icon\" must be a string")),
            Some(name) if GroupIcon::from_name(name).is_none() => {
                let options: Vec<&str> = GroupIcon::ALL.iter().map(|i| i.as_str()).collect();
                findings.error(format!(
                    "{prefix}: Invalid icon \"{name}\". Valid options: {}",
                    options.join(", ")
                ));
            }
            Some(_) => {}
        }
    }

    let items = group.get("items");
    if is_missing(items) {
        findings.error(format!("{prefix}: Missing required \"items\" array"));
    } else if let Some(items) = items.and_then(Value::as_array) {
        for (index, entry) in items.iter().enumerate() {
            let nested = index + 1;
            match entry.as_str() {
                None => findings.error(format!(
                    "{prefix}: Item {nested} in group must be a string"
                )),
                Some(id) if id != SEPARATOR && !validator.catalog().contains(id) => {
                    findings.error(format!(
                        "{prefix}: Unknown item \"{id}\" in group. Valid items: {}",
                        validator.valid_ids()
                    ));
                }
                Some(_) => {}
            }
        }
    } else {
        findings.error(format!("{prefix}: \"items\" must be an array"));
    }

    if group.get("withText").is_some_and(|v| !v.is_boolean()) {
        findings.error(format!("{prefix}: \"withText\" must be a boolean"));
    }
}
