// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;

use super::{VariableExpander, expand_plist_environment_variables, expand_setting};
use crate::error::ExpandError;
use crate::plist::env::Environment;
use crate::plist::node::Node;

fn env(pairs: &[(&str, &str)]) -> Environment {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn expand_one(input: &str, vars: &[(&str, &str)]) -> String {
    let node = Node::dict([("a", input)]);
    VariableExpander::new().expand(&node, &env(vars));
    node.get_str("a").unwrap()
}

#[test]
fn test_token_free_string_is_untouched() {
    assert_eq!(expand_one("plain value", &[("x", "X")]), "plain value");
    assert_eq!(expand_one("", &[]), "");
}

#[test]
fn test_all_three_syntaxes() {
    assert_eq!(expand_one("${x}-$(x)-@x@", &[("x", "V")]), "V-V-V");
}

#[test]
fn test_inserted_text_is_not_rescanned() {
    assert_eq!(expand_one("$(x)", &[("x", "$(y)"), ("y", "Y")]), "$(y)");
    assert_eq!(expand_one("@x@", &[("x", "@x@")]), "@x@");
}

#[test]
fn test_dollar_before_reference() {
    // From the darwin-tools usage notes: "$(x)3$$(y)" keeps the lone '$'.
    assert_eq!(expand_one("$(x)3$$(y)", &[("x", "X"), ("y", "Y")]), "X3$Y");
}

#[test]
fn test_unterminated_reference_stops_scanning() {
    assert_eq!(expand_one("$(x) and $(y", &[("x", "X"), ("y", "Y")]), "X and $(y");
    // Nothing after the dangling open delimiter is looked at.
    assert_eq!(expand_one("${x $(x)", &[("x", "X")]), "${x $(x)");
}

#[test]
fn test_undefined_reference_is_skipped_and_scan_resumes() {
    assert_eq!(
        expand_one("$(missing)/$(x)", &[("x", "X")]),
        "$(missing)/X"
    );
}

#[test]
fn test_formatter() {
    assert_eq!(
        expand_one("$(x:rfc1034identifier)", &[("x", "My App!")]),
        "My-App-"
    );
    assert_eq!(
        expand_one("${x:RFC1034Identifier}", &[("x", "a_b")]),
        "a-b"
    );
    assert_eq!(expand_one("$(x:unknown)", &[("x", "a_b")]), "a_b");
    assert_eq!(
        expand_one("$(x:rfc1034identifier:extra)", &[("x", "a b")]),
        "a-b"
    );
}

#[test]
fn test_resume_position_after_longer_and_shorter_values() {
    assert_eq!(
        expand_one("$(a)$(b)@c@", &[("a", "long value"), ("b", ""), ("c", "C")]),
        "long valueC"
    );
}

#[test]
fn test_non_ascii_values() {
    assert_eq!(
        expand_one("«$(x)» @y@", &[("x", "données"), ("y", "ü")]),
        "«données» ü"
    );
}

#[test]
fn test_notifier_receives_key_and_name() {
    let node = Node::dict([("first", "$(missing) @also@"), ("second", "$(x)")]);
    let mut calls = Vec::new();
    {
        let mut expander = VariableExpander::with_handler(|key: &str, name: &str| {
            calls.push(format!("{key}:{name}"));
        });
        expander.expand(&node, &env(&[("x", "X")]));
    }
    assert_eq!(calls, ["first:missing", "first:also"]);
    assert_eq!(node.get_str("first").unwrap(), "$(missing) @also@");
    assert_eq!(node.get_str("second").unwrap(), "X");
}

#[test]
fn test_non_string_leaves_are_ignored() {
    let node = Node::dict([
        ("flag", Node::Bool(true)),
        ("count", Node::Integer(3)),
        ("nothing", Node::Null),
    ]);
    VariableExpander::new().expand(&node, &env(&[("x", "X")]));
    assert_eq!(node.get("flag"), Some(Node::Bool(true)));
    assert_eq!(node.get("count"), Some(Node::Integer(3)));
}

#[test]
fn test_expand_returns_same_root() {
    let node = Node::dict([("a", "$(x)")]);
    let mut expander = VariableExpander::new();
    let returned = expander.expand(&node, &env(&[("x", "X")]));
    assert!(returned.ptr_eq(&node));
}

#[test]
fn test_string_root_is_left_alone() {
    let node = Node::from("$(x)");
    VariableExpander::new().expand(&node, &env(&[("x", "X")]));
    assert_eq!(node, Node::from("$(x)"));
}

#[test]
fn test_display_values_from_btreemap() {
    let node = Node::dict([("build", "$(VERSION).@BUILD@")]);
    let vars = BTreeMap::from([("VERSION".to_string(), 2), ("BUILD".to_string(), 17)]);
    VariableExpander::new().expand(&node, &vars);
    assert_eq!(node.get_str("build").unwrap(), "2.17");
}

#[test]
fn test_expand_string_reports_no_change() {
    let mut expander = VariableExpander::new();
    let vars = env(&[]);
    assert_eq!(expander.expand_string("k", "$(nope)", &vars), None);
    assert_eq!(expander.expand_string("k", "no refs", &vars), None);
}

#[test]
fn test_wrapper_expands_with_and_without_warnings() {
    let node = Node::dict([("a", Node::from("$(x)3$$(y)")), ("b", Node::dict([("t", "%$(y) $(k)")]))]);
    expand_plist_environment_variables(&node, &env(&[("x", "X"), ("y", "Y")]), true);
    assert_eq!(node.get_str("a").unwrap(), "X3$Y");
    assert_eq!(node.get("b").unwrap().get_str("t").unwrap(), "%Y $(k)");
}

#[test]
fn test_expand_setting_follows_chain() {
    let vars = env(&[("A", "$(B)-a"), ("B", "$(C)-b"), ("C", "c")]);
    assert_eq!(expand_setting("$(A)", &vars, 8).unwrap(), "c-b-a");
}

#[test]
fn test_expand_setting_against_dictionary() {
    let settings = Node::dict([
        ("PRODUCT_NAME", "Viewer"),
        ("PRODUCT_BUNDLE_IDENTIFIER", "org.example.$(PRODUCT_NAME:rfc1034identifier)"),
    ]);
    assert_eq!(
        expand_setting("$(PRODUCT_BUNDLE_IDENTIFIER)", &settings, 4).unwrap(),
        "org.example.Viewer"
    );
}

#[test]
fn test_expand_setting_leaves_unresolved() {
    assert_eq!(
        expand_setting("$(UNSET)/bin", &env(&[]), 4).unwrap(),
        "$(UNSET)/bin"
    );
}

#[test]
fn test_expand_setting_cycle_is_reported() {
    let vars = env(&[("A", "$(B)"), ("B", "$(A)")]);
    let err = expand_setting("$(A)", &vars, 5).unwrap_err();
    assert!(matches!(err, ExpandError::NoFixpoint { rounds: 5, .. }));
}

#[test]
fn test_dictionary_expands_against_itself() {
    let settings = Node::dict([
        ("PRODUCT_NAME", "Viewer"),
        ("CFBundleName", "$(PRODUCT_NAME)"),
    ]);
    VariableExpander::new().expand(&settings, &settings);
    assert_eq!(settings.get_str("CFBundleName").as_deref(), Some("Viewer"));
    assert_eq!(settings.get_str("PRODUCT_NAME").as_deref(), Some("Viewer"));
}

#[test]
fn test_nested_dictionary_resolves_against_root() {
    let nested = Node::dict([("Identifier", "org.example.$(PRODUCT_NAME:rfc1034identifier)")]);
    let root = Node::dict([("PRODUCT_NAME", Node::from("My App")), ("Bundle", nested.clone())]);
    VariableExpander::new().expand(&root, &root);
    assert_eq!(
        nested.get_str("Identifier").as_deref(),
        Some("org.example.My-App")
    );
}
