//! Builder transform properties and editing-session workflows.

use std::collections::HashSet;

use proptest::prelude::*;
use regex::Regex;

use edprof::builder::{
    BuilderSession, GroupDraft, StyleDraft, from_builder_items, to_builder_items,
};
use edprof::catalog::{Catalog, SEPARATOR};
use edprof::config::{
    EditorProfileConfig, GroupEntry, GroupIcon, StyleDefinition, StyleElement, ToolbarEntry,
    ToolbarGroup, parse_profile_value, stringify_profile_config, template_by_id,
};
use edprof::validate::validate_profile_config;

use crate::common::init_test_logging;

fn catalog_ids() -> Vec<String> {
    Catalog::builtin().ids().map(str::to_string).collect()
}

fn group_entry() -> impl Strategy<Value = GroupEntry> {
    prop_oneof![
        1 => Just(GroupEntry::Separator),
        4 => proptest::sample::select(catalog_ids()).prop_map(GroupEntry::Item),
    ]
}

fn group() -> impl Strategy<Value = ToolbarGroup> {
    (
        "[a-z]{1,8}",
        "[A-Z][a-z]{0,8}",
        proptest::option::of(prop_oneof![Just(GroupIcon::Text), Just(GroupIcon::Plus)]),
        proptest::collection::vec(group_entry(), 0..5),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(id, label, icon, items, with_text)| ToolbarGroup {
            group: id,
            label,
            icon,
            items,
            with_text,
        })
}

fn entry() -> impl Strategy<Value = ToolbarEntry> {
    prop_oneof![
        2 => Just(ToolbarEntry::Separator),
        6 => proptest::sample::select(catalog_ids()).prop_map(ToolbarEntry::Item),
        1 => group().prop_map(ToolbarEntry::Group),
    ]
}

fn style() -> impl Strategy<Value = StyleDefinition> {
    (
        "[A-Z][a-z]{0,10}",
        proptest::sample::select(StyleElement::ALL.to_vec()),
        proptest::collection::vec("[a-z][a-z-]{0,8}", 1..4),
    )
        .prop_map(|(name, element, classes)| StyleDefinition::new(name, element, classes))
}

// Includes the explicit-default states `style: []` and
// `disableContentWrap: false`, which the builder writes back as absent.
fn config() -> impl Strategy<Value = EditorProfileConfig> {
    (
        proptest::collection::vec(entry(), 0..12),
        proptest::option::of(proptest::collection::vec(style(), 0..3)),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(items, style, disable_content_wrap)| EditorProfileConfig {
            toolbar: edprof::config::Toolbar { items },
            style,
            disable_content_wrap,
        })
}

proptest! {
    #[test]
    fn builder_round_trip_is_identity(config in config()) {
        let items = to_builder_items(&config);
        prop_assert_eq!(items.len(), config.toolbar.items.len());

        let back = from_builder_items(&items, config.styles(), config.content_wrap_disabled());
        prop_assert_eq!(back, config.normalized());
    }

    #[test]
    fn explicit_defaults_never_reach_the_wire(config in config()) {
        let items = to_builder_items(&config);
        let back = from_builder_items(&items, config.styles(), config.content_wrap_disabled());
        let raw = stringify_profile_config(&back).unwrap();
        prop_assert!(!raw.contains(r#""style":[]"#), "{}", raw);
        prop_assert!(!raw.contains(r#""disableContentWrap":false"#), "{}", raw);
    }

    #[test]
    fn builder_tokens_are_unique(config in config()) {
        let items = to_builder_items(&config);
        let tokens: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        prop_assert_eq!(tokens.len(), items.len());
    }

    #[test]
    fn generated_configs_are_valid(config in config()) {
        let raw = stringify_profile_config(&config).unwrap();
        let result = validate_profile_config(&raw);
        prop_assert!(result.valid, "{:?}", result.errors);
    }

    #[test]
    fn tolerant_parse_reads_back_what_was_written(config in config()) {
        let raw = stringify_profile_config(&config).unwrap();
        prop_assert_eq!(parse_profile_value(&raw), Some(config));
    }
}

#[test]
fn builder_tokens_have_stable_shape() {
    let pattern = Regex::new(r"^builder-item-[0-9a-f]{32}$").unwrap();
    let config = template_by_id("standard").unwrap().config;
    for item in to_builder_items(&config) {
        assert!(pattern.is_match(&item.id), "{}", item.id);
    }
}

#[test]
fn session_builds_a_profile_from_scratch() {
    init_test_logging();
    let mut session = BuilderSession::new(Catalog::builtin());
    let bold = session.push_item("bold");
    session.push_item("italic");
    session.push_separator();

    let mut draft = GroupDraft::new();
    draft.set_group_id("Insert Things");
    draft.label = "Insert".to_string();
    draft.icon = GroupIcon::Plus;
    draft.add_item("insertTable");
    draft.add_item("horizontalLine");
    session.push_group(draft.build().unwrap());

    session.push_item("style");
    let lead = StyleDraft {
        name: "Lead".to_string(),
        element: StyleElement::P,
        classes: "lead, large".to_string(),
    };
    session.set_styles(vec![lead.build().unwrap()]);

    let last = session.items().last().unwrap().id.clone();
    assert!(session.move_item(&bold, &last));

    let config = session.config();
    let ids: Vec<&str> = config
        .toolbar
        .items
        .iter()
        .map(|e| match e {
            ToolbarEntry::Item(id) => id.as_str(),
            ToolbarEntry::Separator => SEPARATOR,
            ToolbarEntry::Group(g) => g.group.as_str(),
        })
        .collect();
    assert_eq!(ids, vec!["italic", "|", "insert-things", "style", "bold"]);

    let result = session.validate();
    assert!(result.is_clean(), "{result:?}");

    let json = session.to_json_pretty().unwrap();
    assert_eq!(validate_profile_config(&json), result);
}

#[test]
fn session_import_then_edit_group() {
    let mut session = BuilderSession::new(Catalog::builtin());
    let raw = stringify_profile_config(&template_by_id("standard").unwrap().config).unwrap();
    assert!(session.import_json(&raw).valid);

    let token = session
        .items()
        .iter()
        .find(|i| i.group.is_some())
        .map(|i| i.id.clone())
        .unwrap();
    let mut draft = GroupDraft::from_group(session.group(&token).unwrap());
    draft.label = "More".to_string();
    assert!(!draft.add_item("strikethrough"));
    session.update_group(&token, draft.build().unwrap()).unwrap();

    assert_eq!(session.group(&token).unwrap().label, "More");
    assert!(session.validate().valid);
}
