//! Site decoding and profile assignment against a realistic API dump.

use serde_json::{Value, json};

use edprof::error::ProfileError;
use edprof::sites::{
    ProfileAssignment, Site, decode_site_list, default_profile_id, ensure_profile_deletable,
    has_profile, resolve_profile_ids, sites_with_profile,
};

use crate::common::{fixture, init_test_logging};

fn fixture_sites() -> Vec<Site> {
    let response: Value = serde_json::from_str(&fixture("sites.json")).unwrap();
    decode_site_list(&response)
}

#[test]
fn decodes_double_nested_envelope() {
    init_test_logging();
    let sites = fixture_sites();
    assert_eq!(sites.len(), 4);
    assert_eq!(sites[0].label(), "Corporate");
    assert_eq!(sites[3].label(), "landing");
}

#[test]
fn resolves_each_storage_shape() {
    let sites = fixture_sites();
    assert_eq!(resolve_profile_ids(&sites[0]), vec!["p-standard", "p-minimal"]);
    assert_eq!(resolve_profile_ids(&sites[1]), vec!["p-minimal"]);
    // Empty settings list falls back to the comma-joined top-level element.
    assert_eq!(resolve_profile_ids(&sites[2]), vec!["p-standard", "p-legacy"]);
    assert!(resolve_profile_ids(&sites[3]).is_empty());

    assert_eq!(default_profile_id(&sites[0]).as_deref(), Some("p-standard"));
    assert!(has_profile(&sites[0], "p-minimal"));
    assert_eq!(default_profile_id(&sites[3]), None);
}

#[test]
fn deletion_guard_names_the_sites() {
    let sites = fixture_sites();
    assert_eq!(sites_with_profile(&sites, "p-minimal").len(), 2);
    assert!(ensure_profile_deletable("p-unused", &sites).is_ok());

    let err = ensure_profile_deletable("p-standard", &sites).unwrap_err();
    assert!(err.is_user_recoverable());
    assert_eq!(
        err.to_string(),
        "Profile 'p-standard' is still assigned to 2 site(s): Corporate, Intranet"
    );
    assert!(matches!(err, ProfileError::ProfileInUse { .. }));
}

#[test]
fn assignment_edit_writes_list_form() {
    let sites = fixture_sites();
    let mut assignment = ProfileAssignment::from_site(&sites[0]);
    assert!(assignment.add("p-legacy"));
    assert!(assignment.make_default("p-legacy"));
    assert!(assignment.remove("p-standard"));

    assert_eq!(assignment.to_value(), json!(["p-legacy", "p-minimal"]));

    // Writing the list back and resolving again gives the same order.
    let mut site = sites[0].clone();
    site.settings = None;
    site.editor_profiles = serde_json::from_value(assignment.to_value()).ok();
    assert_eq!(resolve_profile_ids(&site), assignment.ids());
}

#[test]
fn site_serialisation_keeps_unknown_settings() {
    let sites = fixture_sites();
    let value = serde_json::to_value(&sites[0]).unwrap();
    assert_eq!(value["settings"]["theme"], "dark");
    assert_eq!(value["displayName"], "Corporate");
    assert!(value.get("thumbnailUrl").is_none());
}

#[test]
fn loosely_typed_sites_still_block_deletion() {
    init_test_logging();
    let response = json!({"data": {"data": [
        {"id": "s1", "name": "corp", "displayName": null, "editorProfiles": ["p1"]},
        {"id": "s2", "name": "shop", "editorProfiles": [null, "p2"]}
    ]}});
    let sites = decode_site_list(&response);
    assert_eq!(sites.len(), 2);

    let err = ensure_profile_deletable("p1", &sites).unwrap_err();
    assert!(err.to_string().ends_with(": corp"), "{err}");

    assert_eq!(default_profile_id(&sites[1]).as_deref(), Some("p2"));
    assert!(ensure_profile_deletable("p2", &sites).is_err());
}
