//! Built-in rules for the params-struct migration of the config tool SDK.
//!
//! Each entry moves the trailing positional identifiers of one SDK call into
//! named fields of that call's params struct.

use super::rule::RewriteRule;

/// `(call name, params struct, bundled fields)`, in application order.
const BUILTIN_TABLE: &[(&str, &str, &[&str])] = &[
    (
        "add_attribute",
        "crate::attributes::AddAttributeParams",
        &["attribute"],
    ),
    (
        "add_feature",
        "crate::features::AddFeatureParams",
        &["feature"],
    ),
    (
        "set_feature",
        "crate::features::SetFeatureParams",
        &["feature"],
    ),
    (
        "add_data_source",
        "crate::datasources::AddDataSourceParams",
        &["code"],
    ),
    (
        "set_feature_element",
        "crate::elements::SetFeatureElementParams",
        &["ftype_id", "felem_id"],
    ),
    (
        "add_feature_comparison",
        "crate::features::AddFeatureComparisonParams",
        &["ftype_id", "felem_id"],
    ),
];

/// The six built-in rules, named after the call they rewrite.
pub fn builtin_rules() -> Vec<RewriteRule> {
    BUILTIN_TABLE
        .iter()
        .map(|(call, params_type, fields)| RewriteRule::new(*call, *call, *params_type, fields))
        .collect()
}
