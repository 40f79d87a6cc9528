//! # Postflow Testing
//!
//! Testing utilities and helpers for the postflow reducer architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: a Given/When/Then harness that drives a reducer directly
//! - [`assertions`]: checks over the effect descriptions a reducer returns
//!
//! Store-level behaviour (effects actually executing) is tested against
//! `postflow_runtime::Store` with a mocked environment instead.

pub mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};
