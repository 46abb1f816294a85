//! Core state machine types.
//!
//! This module contains the declarative half of a machine:
//! - Identifiers via the `Symbol` trait
//! - Compact bitset membership for states and inputs
//! - State and input registries
//! - The deterministic transition table
//! - Bounded transition history
//!
//! Nothing in this module runs callbacks or knows about the engine.

mod bitset;
mod error;
mod history;
mod registry;
mod symbol;
mod table;

pub use bitset::CompactSet;
pub use error::ConfigError;
pub use history::{StateHistory, StateTransition};
pub use registry::{InputAlphabet, StateKind, StateRegistry};
pub use symbol::Symbol;
pub use table::{RuleMiss, TransitionTable};
