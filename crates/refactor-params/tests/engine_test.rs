//! Rewrite engine tests: per-rule output, ordering, idempotence, no-op.

use proptest::prelude::*;
use refactor_params::engine::{apply_all_rules, RuleSet, DEFAULT_INDENT};

const I: &str = DEFAULT_INDENT;

#[test]
fn test_add_attribute() {
    let input = "add_attribute(cfg, myattr, crate::attributes::AddAttributeParams {";
    assert_eq!(
        apply_all_rules(input),
        format!("add_attribute(cfg, crate::attributes::AddAttributeParams {{\n{I}attribute: myattr,")
    );
}

#[test]
fn test_add_feature() {
    let input = "add_feature(config, feat, crate::features::AddFeatureParams {";
    assert_eq!(
        apply_all_rules(input),
        format!("add_feature(config, crate::features::AddFeatureParams {{\n{I}feature: feat,")
    );
}

#[test]
fn test_set_feature() {
    let input = "set_feature(config, feature, crate::features::SetFeatureParams {";
    assert_eq!(
        apply_all_rules(input),
        format!("set_feature(config, crate::features::SetFeatureParams {{\n{I}feature: feature,")
    );
}

#[test]
fn test_add_data_source() {
    let input = "add_data_source(config, code, crate::datasources::AddDataSourceParams {";
    assert_eq!(
        apply_all_rules(input),
        format!("add_data_source(config, crate::datasources::AddDataSourceParams {{\n{I}code: code,")
    );
}

#[test]
fn test_set_feature_element_keeps_argument_order() {
    let input = "set_feature_element(config, ftype, felem, crate::elements::SetFeatureElementParams {";
    assert_eq!(
        apply_all_rules(input),
        format!(
            "set_feature_element(config, crate::elements::SetFeatureElementParams {{\n\
             {I}ftype_id: ftype,\n{I}felem_id: felem,"
        )
    );
}

#[test]
fn test_add_feature_comparison_keeps_argument_order() {
    let input =
        "add_feature_comparison(config, b_type, a_elem, crate::features::AddFeatureComparisonParams {";
    assert_eq!(
        apply_all_rules(input),
        format!(
            "add_feature_comparison(config, crate::features::AddFeatureComparisonParams {{\n\
             {I}ftype_id: b_type,\n{I}felem_id: a_elem,"
        )
    );
}

#[test]
fn test_multiline_call_site_is_matched() {
    let input = concat!(
        "let (config, _) = add_attribute(\n",
        "    config,\n",
        "    attr_code,\n",
        "    crate::attributes::AddAttributeParams {\n",
        "        feature: \"NAME\",\n",
        "    },\n",
        ")?;\n",
    );
    let expected = format!(
        concat!(
            "let (config, _) = add_attribute(config, crate::attributes::AddAttributeParams {{\n",
            "{I}attribute: attr_code,\n",
            "        feature: \"NAME\",\n",
            "    }},\n",
            ")?;\n",
        ),
        I = I
    );
    assert_eq!(apply_all_rules(input), expected);
}

#[test]
fn test_non_identifier_arguments_are_left_alone() {
    let input = "add_attribute(&config, attr, crate::attributes::AddAttributeParams {";
    assert_eq!(apply_all_rules(input), input);
}

#[test]
fn test_whitespace_around_commas_and_parens() {
    let input = "add_feature (  cfg ,\n\tfeat ,\n  crate::features::AddFeatureParams\n{";
    assert_eq!(
        apply_all_rules(input),
        format!("add_feature(cfg, crate::features::AddFeatureParams {{\n{I}feature: feat,")
    );
}

#[test]
fn test_all_six_shapes_in_one_document() {
    let input = "\
fn migrate() {
    add_attribute(c, a, crate::attributes::AddAttributeParams { class: \"X\" });
    add_feature(c, f, crate::features::AddFeatureParams { behavior: \"F1\" });
    set_feature(c, f, crate::features::SetFeatureParams { candidates: None });
    add_data_source(c, ds, crate::datasources::AddDataSourceParams { id: None });
    set_feature_element(c, t, e, crate::elements::SetFeatureElementParams { derived: None });
    add_feature_comparison(c, t, e, crate::features::AddFeatureComparisonParams { exec_order: None });
}
";
    let out = RuleSet::builtin().with_indent("  ").apply_with_stats(input);

    assert_eq!(out.total(), 6);
    for rule in RuleSet::builtin().names() {
        assert_eq!(out.counts.get(rule), Some(&1), "{rule} should fire once");
    }
    assert!(out.text.contains("add_attribute(c, crate::attributes::AddAttributeParams {\n  attribute: a, class: \"X\" });"));
    assert!(out.text.contains("add_feature(c, crate::features::AddFeatureParams {\n  feature: f, behavior"));
    assert!(out.text.contains("set_feature(c, crate::features::SetFeatureParams {\n  feature: f, candidates"));
    assert!(out.text.contains("add_data_source(c, crate::datasources::AddDataSourceParams {\n  code: ds, id"));
    assert!(out.text.contains(
        "set_feature_element(c, crate::elements::SetFeatureElementParams {\n  ftype_id: t,\n  felem_id: e, derived"
    ));
    assert!(out.text.contains(
        "add_feature_comparison(c, crate::features::AddFeatureComparisonParams {\n  ftype_id: t,\n  felem_id: e, exec_order"
    ));
}

#[test]
fn test_rule_order_does_not_change_outcome() {
    let input = "\
set_feature_element(c, t, e, crate::elements::SetFeatureElementParams {
add_attribute(c, a, crate::attributes::AddAttributeParams {
add_feature_comparison(c, t, e, crate::features::AddFeatureComparisonParams {
";
    let forward = RuleSet::builtin();
    let mut reversed = RuleSet::new(Vec::new());
    for rule in forward.rules().iter().rev() {
        reversed.push(rule.clone()).unwrap();
    }
    assert_eq!(forward.apply(input), reversed.apply(input));
}

#[test]
fn test_already_migrated_text_is_untouched() {
    let migrated = format!(
        "add_attribute(cfg, crate::attributes::AddAttributeParams {{\n{I}attribute: myattr,\n\
         set_feature_element(config, crate::elements::SetFeatureElementParams {{\n{I}ftype_id: t,\n{I}felem_id: e,"
    );
    assert_eq!(apply_all_rules(&migrated), migrated);
}

#[test]
fn test_other_struct_paths_are_ignored() {
    let input = "add_attribute(cfg, attr, other::AddAttributeParams {";
    assert_eq!(apply_all_rules(input), input);
}

#[test]
fn test_matches_inside_comments_and_strings() {
    let input = "// add_feature(c, f, crate::features::AddFeatureParams {";
    assert_ne!(apply_all_rules(input), input);

    let input = "\"set_feature(c, f, crate::features::SetFeatureParams {\"";
    assert_ne!(apply_all_rules(input), input);
}

#[test]
fn test_set_feature_does_not_match_set_feature_element() {
    let input = "set_feature_element(c, t, e, crate::features::SetFeatureParams {";
    assert_eq!(apply_all_rules(input), input);
}

#[test]
fn test_empty_input() {
    assert_eq!(apply_all_rules(""), "");
}

const CALL_SHAPES: &[&str] = &[
    "add_attribute(c, a, crate::attributes::AddAttributeParams {",
    "add_feature(c, f, crate::features::AddFeatureParams {",
    "set_feature(c, f, crate::features::SetFeatureParams {",
    "add_data_source(c, d, crate::datasources::AddDataSourceParams {",
    "set_feature_element(c, t, e, crate::elements::SetFeatureElementParams {",
    "add_feature_comparison(c, t, e, crate::features::AddFeatureComparisonParams {",
];

proptest! {
    #[test]
    fn prop_idempotent(
        chunks in proptest::collection::vec(
            prop_oneof![
                "[a-z_(){},: \n]{0,24}",
                proptest::sample::select(CALL_SHAPES).prop_map(str::to_string),
            ],
            0..12,
        )
    ) {
        let text = chunks.concat();
        let once = apply_all_rules(&text);
        let twice = apply_all_rules(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_noop_without_params_types(text in "[a-zA-Z0-9_(){},;:&\n \t]{0,200}") {
        // Every shape ends in a `...Params {` struct path; none can occur here.
        prop_assume!(!text.contains("Params"));
        prop_assert_eq!(apply_all_rules(&text), text);
    }
}
