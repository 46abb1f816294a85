//! Side-effecting callbacks and their registries.
//!
//! # Key Concepts
//!
//! - **Action**: a zero-argument callback returning `Result<(), E>`
//! - **Phase**: exit, input, transition or entry; fixes when a callback runs
//! - **ActionRegistry**: ordered callback lists under a key
//!
//! Registration order is execution order within every registry.

mod action;
mod registry;

pub use action::{Action, Phase, SharedAction};
pub use registry::ActionRegistry;
