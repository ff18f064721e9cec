//! End-to-end scenarios over small components.

use nesc_refactor::syntax::{SyntaxKind, TreeBuilder};

use crate::helpers::analyzer_helpers::{analyze, analyzer_for, names};
use crate::helpers::component_fixtures::{duplicate_alias, logger, partial_reference};

#[test]
fn test_logger_alias_and_plain_reference() {
    let (_tree, analyzer) = analyze(&logger());

    assert_eq!(names(analyzer.referenced_interface_identifiers()), vec!["Read", "Write"]);
    assert_eq!(names(analyzer.referenced_interface_alias_identifiers()), vec!["R"]);
    assert!(analyzer.is_alias_name("R").unwrap());
    assert_eq!(
        analyzer.interface_name_for_alias_name("R").unwrap().as_deref(),
        Some("Read")
    );
    assert!(!analyzer.is_alias_name("Write").unwrap());
    assert!(!analyzer.is_alias_name("Read").unwrap());
    assert_eq!(analyzer.interface_name_for_alias_name("Write").unwrap(), None);
}

#[test]
fn test_duplicate_alias_first_declared_wins() {
    let (_tree, analyzer) = analyze(&duplicate_alias());

    let aliases = analyzer.referenced_interface_alias_identifiers();
    assert_eq!(aliases.len(), 2);

    let found = analyzer.alias_identifier_for_alias_name("X").unwrap().unwrap();
    assert_eq!(found, &aliases[0]);
    assert_ne!(found, &aliases[1]);
    assert_eq!(
        analyzer.interface_name_for_alias_name("X").unwrap().as_deref(),
        Some("Read")
    );

    // Both aliases are still distinct entries of the map.
    let map = analyzer.alias_to_interface_name();
    assert_eq!(map.len(), 2);
    assert_eq!(map[&aliases[1]].name().unwrap(), "Write");
}

#[test]
fn test_reference_without_name_contributes_nothing() {
    let (_tree, analyzer) = analyze(&partial_reference());

    assert_eq!(analyzer.interface_references().len(), 3);
    assert_eq!(names(analyzer.referenced_interface_identifiers()), vec!["Read", "Write"]);

    // The orphan alias is still an alias identifier...
    assert_eq!(names(analyzer.referenced_interface_alias_identifiers()), vec!["R", "Orphan"]);
    // ...but it has no entry in the alias map and resolves to nothing.
    let map = analyzer.alias_to_interface_name();
    assert_eq!(map.len(), 1);
    let orphan = &analyzer.referenced_interface_alias_identifiers()[1];
    assert!(!map.contains_key(orphan));
    assert_eq!(analyzer.interface_identifier_for_alias(orphan), None);
    assert_eq!(analyzer.interface_name_for_alias_name("Orphan").unwrap(), None);
}

#[test]
fn test_interface_type_without_name_contributes_nothing() {
    // module M { provides interface <type without name> as R; }
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::TRANSLATION_UNIT)
        .start_node(SyntaxKind::COMPONENT)
        .keyword("module")
        .space()
        .identifier("M")
        .start_node(SyntaxKind::ACCESS_LIST)
        .start_node(SyntaxKind::ACCESS)
        .keyword("provides")
        .space()
        .start_node(SyntaxKind::PARAMETERIZED_INTERFACE_LIST)
        .start_node(SyntaxKind::PARAMETERIZED_INTERFACE)
        .start_node(SyntaxKind::INTERFACE_REFERENCE)
        .keyword("interface")
        .space()
        .start_node(SyntaxKind::INTERFACE_TYPE)
        .finish_node()
        .keyword("as")
        .space()
        .identifier("R")
        .finish_node()
        .finish_node()
        .finish_node()
        .finish_node()
        .finish_node()
        .finish_node()
        .finish_node();
    let tree = b.finish();
    let analyzer = analyzer_for(&tree, "M");

    assert_eq!(analyzer.interface_references().len(), 1);
    assert!(analyzer.interface_references()[0].name().is_some());
    assert!(analyzer.referenced_interface_identifiers().is_empty());
    assert!(analyzer.alias_to_interface_name().is_empty());

    assert!(analyzer.is_alias_name("R").unwrap());
    assert_eq!(analyzer.interface_identifier_for_alias_name("R").unwrap(), None);
    assert_eq!(analyzer.interface_name_for_alias_name("R").unwrap(), None);
}
