//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and a macro for declaring machines
//! with minimal boilerplate. The builder is the first half of a two-phase
//! lifecycle: declarations accumulate without locking, then [`build`]
//! produces an engine ready to be shared.
//!
//! [`build`]: EngineBuilder::build

pub mod machine;
pub mod macros;

pub use machine::EngineBuilder;
