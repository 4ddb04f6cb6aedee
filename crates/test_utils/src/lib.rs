//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! portal claims test suite.
//!
//! # Modules
//!
//! - `fixtures`: The demo portfolio and other ready-made records
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
