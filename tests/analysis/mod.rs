//! Analysis layer tests
//!
//! Tests for the component analyzer:
//! - Interface reference and alias collection
//! - Alias lookups by name and by identity
//! - Fail-soft behaviour on partial trees
//! - Caching and per-thread use

pub mod tests_component_analyzer;
pub mod tests_scenarios;
pub mod tests_threading;
