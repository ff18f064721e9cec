//! Component analyzer behaviour on well-formed components.

use nesc_refactor::syntax::{AccessDirection, AstNode, ComponentDecl, InterfaceDecl};
use nesc_refactor::{AstAnalyzer, ComponentAnalyzer};
use rstest::rstest;

use crate::helpers::analyzer_helpers::{analyze, analyzer_for, file_of, names};
use crate::helpers::component_fixtures::{
    commands_only, empty_module, logger, logger_with_body, radio_stack,
};

#[test]
fn test_component_name() {
    let (_tree, analyzer) = analyze(&radio_stack());
    assert_eq!(analyzer.component_name().unwrap(), "RadioStackC");
    assert_eq!(
        analyzer.component_identifier().name().unwrap(),
        analyzer.component_name().unwrap()
    );
}

#[test]
fn test_new_binds_given_nodes() {
    let tree = logger().build();
    let unit = tree.translation_unit().unwrap();
    let component = unit.components().next().unwrap();
    let analyzer = ComponentAnalyzer::new(
        unit.clone(),
        component.name().unwrap(),
        component.specification().unwrap(),
    );

    assert_eq!(analyzer.translation_unit(), &unit);
    assert_eq!(analyzer.specification(), &component.specification().unwrap());
    assert_eq!(analyzer.component(), Some(component));
    assert_eq!(analyzer.interface_references().len(), 2);
}

#[test]
fn test_radio_stack_references_in_declaration_order() {
    let (_tree, analyzer) = analyze(&radio_stack());

    assert_eq!(
        names(analyzer.referenced_interface_identifiers()),
        vec!["SplitControl", "AMSend", "Receive", "Timer", "Leds"]
    );
    assert_eq!(
        names(analyzer.referenced_interface_alias_identifiers()),
        vec!["Control", "Send", "BackoffTimer"]
    );
}

#[test]
fn test_alias_map_is_in_declaration_order() {
    let (_tree, analyzer) = analyze(&radio_stack());
    let pairs: Vec<(String, String)> = analyzer
        .alias_to_interface_name()
        .iter()
        .map(|(alias, interface)| {
            (
                alias.name().unwrap().to_string(),
                interface.name().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Control".to_string(), "SplitControl".to_string()),
            ("Send".to_string(), "AMSend".to_string()),
            ("BackoffTimer".to_string(), "Timer".to_string()),
        ]
    );
}

#[rstest]
#[case("Control", Some("SplitControl"))]
#[case("Send", Some("AMSend"))]
#[case("BackoffTimer", Some("Timer"))]
#[case("Receive", None)]
#[case("Timer", None)]
#[case("overflow", None)]
#[case("", None)]
fn test_interface_name_for_alias_name(#[case] alias: &str, #[case] expected: Option<&str>) {
    let (_tree, analyzer) = analyze(&radio_stack());
    assert_eq!(
        analyzer.interface_name_for_alias_name(alias).unwrap().as_deref(),
        expected
    );
    assert_eq!(analyzer.is_alias_name(alias).unwrap(), expected.is_some());
}

#[test]
fn test_interface_identifier_for_alias_name_returns_tree_node() {
    let (tree, analyzer) = analyze(&radio_stack());
    let interface = analyzer
        .interface_identifier_for_alias_name("BackoffTimer")
        .unwrap()
        .unwrap();
    assert_eq!(&tree.text()[interface.range()], "Timer");
    assert!(analyzer.referenced_interface_identifiers().contains(interface));
}

#[test]
fn test_duplicate_interface_references_are_kept() {
    let decl = ComponentDecl::module("TwoTimers")
        .uses(InterfaceDecl::new("Timer").alias("A"))
        .uses(InterfaceDecl::new("Timer").alias("B"));
    let (_tree, analyzer) = analyze(&decl);

    assert_eq!(names(analyzer.referenced_interface_identifiers()), vec!["Timer", "Timer"]);
    let identifiers = analyzer.referenced_interface_identifiers();
    assert_ne!(identifiers[0], identifiers[1]);
}

#[test]
fn test_declaration_clauses_are_skipped() {
    let (_tree, analyzer) = analyze(&commands_only());
    assert!(analyzer.interface_references().is_empty());
    assert!(analyzer.specification().accesses().count() == 2);
}

#[test]
fn test_empty_module() {
    let (_tree, analyzer) = analyze(&empty_module());
    assert!(analyzer.interface_references().is_empty());
    assert!(analyzer.referenced_interface_names().unwrap().is_empty());
    assert!(analyzer.local_interface_names().unwrap().is_empty());
}

#[test]
fn test_local_interface_names_prefer_alias() {
    let (_tree, analyzer) = analyze(&radio_stack());
    assert_eq!(
        analyzer.local_interface_names().unwrap(),
        &["Control", "Send", "Receive", "BackoffTimer", "Leds"]
    );
}

#[test]
fn test_analyzer_sees_only_its_component() {
    let tree = file_of(&[logger(), radio_stack()]);
    let logger_analyzer = analyzer_for(&tree, "Logger");
    let radio_analyzer = analyzer_for(&tree, "RadioStackC");

    assert_eq!(logger_analyzer.interface_references().len(), 2);
    assert_eq!(radio_analyzer.interface_references().len(), 5);
    assert!(!logger_analyzer.is_alias_name("Control").unwrap());
    assert!(radio_analyzer.is_alias_name("Control").unwrap());
    assert_eq!(logger_analyzer.translation_unit(), radio_analyzer.translation_unit());
}

#[test]
fn test_collect_fields_across_accesses() {
    let (_tree, analyzer) = analyze(&radio_stack());
    let accesses: Vec<nesc_refactor::syntax::Access> = analyzer
        .ast_query()
        .descendants_of_type(analyzer.specification().syntax());
    assert_eq!(accesses.len(), 4);
    assert_eq!(accesses[0].direction(), Some(AccessDirection::Provides));

    let directions: Vec<nesc_refactor::syntax::SyntaxNode> = accesses
        .iter()
        .filter_map(|a| {
            analyzer
                .ast_query()
                .field_by_name(a.syntax(), nesc_refactor::syntax::Access::DIRECTION)
        })
        .filter_map(|value| value.into_token())
        .filter_map(|token| token.parent())
        .collect();
    assert_eq!(directions.len(), 4);

    let lists: Vec<nesc_refactor::syntax::ParameterizedInterfaceList> =
        analyzer.collect_fields(&accesses, nesc_refactor::syntax::Access::INTERFACES);
    assert_eq!(lists.len(), 3);
}

#[test]
fn test_body_statements_do_not_count_as_references() {
    let (_tree, analyzer) = analyze(&logger_with_body());
    assert_eq!(names(analyzer.referenced_interface_identifiers()), vec!["Read", "Write", "Timer"]);
    assert_eq!(names(analyzer.referenced_interface_alias_identifiers()), vec!["R", "T"]);
}
