//! Shared test helpers.

#![allow(dead_code)]

pub mod analyzer_helpers;
pub mod component_fixtures;
