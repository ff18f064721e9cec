//! Semantic analysis over component trees.
//!
//! Analyzers read an immutable tree and derive refactoring-relevant facts
//! from it. Every analyzer is built on the same two pieces:
//!
//! - [`AstQuery`]: kind-agnostic traversal (descendants of a type, fields by name)
//! - [`AstAnalyzer`]: the shared contract. One query handle, facts behind
//!   memoize-once accessors, no tree mutation
//!
//! [`ComponentAnalyzer`] derives the interface references of one component's
//! specification and the aliases (`as` renames) among them.
//!
//! ## Query Layers
//!
//! ```text
//! specification (AccessList)
//!     │
//!     ▼
//! interface_references()              ← Access → interface list → reference
//!     │
//!     ├── referenced_interface_identifiers()      ← Name → InterfaceType → Name
//!     ├── referenced_interface_alias_identifiers() ← Rename
//!     └── alias_to_interface_name()               ← Rename ↦ interface identifier
//!             │
//!             ▼
//!     alias lookups by name (first match in declaration order)
//! ```

mod analyzer;
mod component;
mod query;

pub use analyzer::AstAnalyzer;
pub use component::ComponentAnalyzer;
pub use query::AstQuery;
