//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Conflict detection scenarios
//! - Type tests (bindings, serialization)

#[cfg(test)]
mod types_tests;
