//! Validator behaviour on whole documents.

use edprof::catalog::{Catalog, ItemCategory, ItemDefinition};
use edprof::config::{
    ConfigFormat, EditorProfileConfig, load_config, load_config_from_str, stringify_profile_config,
    templates,
};
use edprof::error::ProfileError;
use edprof::validate::{Validator, validate_profile_config};

use crate::common::{fixture, fixture_path, init_test_logging};

#[test]
fn fixture_standard_profile_is_clean() {
    init_test_logging();
    let result = validate_profile_config(&fixture("standard.json"));
    assert!(result.is_clean(), "{result:?}");
}

#[test]
fn fixture_invalid_profile_reports_every_problem() {
    init_test_logging();
    let result = validate_profile_config(&fixture("invalid.json"));
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 4, "{:?}", result.errors);
    assert!(result.errors[0].starts_with("Item 2: Unknown toolbar item \"ghost\""));
    assert!(result.errors[1].starts_with("Item 3 (group)"));
    assert!(result.errors[2].starts_with("Item 4: Must be a string"));
    assert_eq!(result.errors[3], "\"disableContentWrap\" must be a boolean value");
}

#[test]
fn root_shape_errors_short_circuit() {
    let cases = [
        ("not json", "Invalid JSON"),
        ("[]", "Configuration must be an object"),
        ("42", "Configuration must be an object"),
        ("{}", "Missing required \"toolbar\" property"),
        (r#"{"toolbar":[]}"#, "\"toolbar\" must be an object"),
        (r#"{"toolbar":{}}"#, "Missing required \"toolbar.items\" array"),
        (r#"{"toolbar":{"items":"bold"}}"#, "\"toolbar.items\" must be an array"),
    ];
    for (raw, expected) in cases {
        let result = validate_profile_config(raw);
        assert!(!result.valid, "{raw}");
        assert_eq!(result.errors.len(), 1, "{raw}: {:?}", result.errors);
        assert!(result.errors[0].starts_with(expected), "{raw}: {}", result.errors[0]);
        assert!(result.warnings.is_empty());
    }
}

#[test]
fn warnings_never_invalidate() {
    let result = validate_profile_config(
        r#"{"toolbar":{"items":["bold","bold"]},"style":[{"name":"A","element":"p","classes":["a"]}],"disableContentWrap":true}"#,
    );
    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings.len(), 3, "{:?}", result.warnings);
}

#[test]
fn every_template_validates() {
    for template in templates() {
        let raw = stringify_profile_config(&template.config).unwrap();
        let result = validate_profile_config(&raw);
        assert!(result.valid, "{}: {:?}", template.id, result.errors);
    }
}

#[test]
fn custom_catalog_restricts_items() {
    let catalog = Catalog::new([
        ItemDefinition::new("bold", "Bold", "Bold text", ItemCategory::TextFormatting),
        ItemDefinition::new("link", "Link", "Hyperlink", ItemCategory::Links),
    ]);
    let validator = Validator::new(&catalog);

    assert!(validator.validate(r#"{"toolbar":{"items":["bold","|","link"]}}"#).is_clean());

    let result = validator.validate(r#"{"toolbar":{"items":["italic"]}}"#);
    assert!(!result.valid);
    assert!(result.errors[0].ends_with("Valid items: bold, link"));
}

#[test]
fn typed_config_validation_matches_raw() {
    let config = EditorProfileConfig::default();
    let typed = Validator::builtin().validate_config(&config);
    let raw = validate_profile_config(r#"{"toolbar":{"items":[]}}"#);
    assert_eq!(typed, raw);
}

#[test]
fn yaml_and_toml_fixtures_load() {
    init_test_logging();
    let yaml = load_config(fixture_path("minimal.yaml"), Catalog::builtin()).unwrap();
    assert_eq!(yaml.config.item_count(), 5);
    assert!(yaml.config.content_wrap_disabled());
    assert_eq!(yaml.report.warnings.len(), 1);

    let toml = load_config(fixture_path("minimal.toml"), Catalog::builtin()).unwrap();
    assert!(toml.report.is_clean());
}

#[test]
fn loader_refuses_what_the_validator_rejects() {
    let err = load_config(fixture_path("invalid.json"), Catalog::builtin()).unwrap_err();
    match err {
        ProfileError::InvalidProfile { errors } => assert_eq!(errors.len(), 4),
        other => panic!("unexpected error: {other}"),
    }

    let err = load_config_from_str("toolbar = 3", ConfigFormat::Toml, Catalog::builtin())
        .unwrap_err();
    assert!(err.to_string().contains("\"toolbar\" must be an object"));
}
