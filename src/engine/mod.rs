//! The engine that drives a declared machine.
//!
//! # Key Concepts
//!
//! - **Definition**: validated states, inputs, rules and the four action registries
//! - **Engine**: owns a definition plus the current state, processes inputs
//! - **ProcessError**: why a step was rejected or which callback failed
//!
//! Exit and input actions run before the commit and can veto a step.
//! Transition and entry actions run after it and only report.

mod config;
mod definition;
mod error;
mod machine;

pub use config::{EngineConfig, DEFAULT_HISTORY_LIMIT};
pub use definition::Definition;
pub use error::ProcessError;
pub use machine::Engine;
