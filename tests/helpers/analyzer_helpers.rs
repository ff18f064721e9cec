//! Helpers for binding analyzers to fixture trees.

use nesc_refactor::ComponentAnalyzer;
use nesc_refactor::syntax::{ComponentDecl, SourceTree, build_source};

/// Build `decl` into its own file and bind an analyzer to it.
pub fn analyze(decl: &ComponentDecl) -> (SourceTree, ComponentAnalyzer) {
    let tree = decl.build();
    let analyzer = analyzer_for(&tree, &decl.name);
    (tree, analyzer)
}

/// Bind an analyzer to the component called `name` in `tree`.
pub fn analyzer_for(tree: &SourceTree, name: &str) -> ComponentAnalyzer {
    let unit = tree
        .translation_unit()
        .expect("fixture tree should have a translation unit root");
    let component = unit
        .component(name)
        .unwrap_or_else(|| panic!("component '{}' not found", name));
    ComponentAnalyzer::for_component(unit, &component).expect("fixture component is well formed")
}

/// Build several components into one file.
pub fn file_of(decls: &[ComponentDecl]) -> SourceTree {
    build_source(decls)
}

/// Names of a list of identifiers, unwrapping read errors.
pub fn names(identifiers: &[nesc_refactor::syntax::Identifier]) -> Vec<String> {
    identifiers
        .iter()
        .map(|ident| ident.name().expect("identifier has a name").to_string())
        .collect()
}
