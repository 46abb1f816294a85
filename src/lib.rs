//! fsmkit: a deterministic, table-driven finite state machine engine
//!
//! A host declares states, input symbols, a transition table and up to four
//! kinds of callbacks, then feeds the machine one input at a time. Each step
//! resolves the next state from the table and runs the applicable callbacks in
//! a fixed order.
//!
//! # Core Concepts
//!
//! - **Symbol**: states and inputs are small dense identifiers (integers or
//!   enums generated with [`symbol_enum!`])
//! - **TransitionTable**: at most one destination per `(state, input)` pair
//! - **Actions**: exit, input, transition and entry callbacks, run in
//!   registration order within each phase
//! - **Engine**: owns the current state and processes inputs
//!
//! # Step order
//!
//! `exit -> input -> commit -> transition -> entry`. Exit and entry actions
//! are skipped on a self-loop. Failures before the commit leave the state
//! unchanged; failures after it are reported but the new state stays.
//!
//! # Example
//!
//! ```rust
//! use fsmkit::builder::EngineBuilder;
//! use fsmkit::symbol_enum;
//!
//! symbol_enum! {
//!     enum DoorState { Opened, Closed, Locked }
//! }
//!
//! symbol_enum! {
//!     enum DoorInput { Open, Close, Lock, Unlock }
//! }
//!
//! let door = EngineBuilder::<DoorState, DoorInput, String>::new()
//!     .states(DoorState::ALL.iter().copied())
//!     .inputs(DoorInput::ALL.iter().copied())
//!     .rule(DoorState::Opened, DoorInput::Close, DoorState::Closed).unwrap()
//!     .rule(DoorState::Closed, DoorInput::Open, DoorState::Opened).unwrap()
//!     .rule(DoorState::Closed, DoorInput::Lock, DoorState::Locked).unwrap()
//!     .rule(DoorState::Locked, DoorInput::Unlock, DoorState::Closed).unwrap()
//!     .build()
//!     .unwrap();
//!
//! door.process(DoorInput::Close).unwrap();
//! door.process(DoorInput::Lock).unwrap();
//! assert!(door.process(DoorInput::Open).is_err());
//! assert_eq!(door.state(), DoorState::Locked);
//! ```

extern crate self as fsmkit;

pub mod actions;
pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use actions::{Action, Phase};
pub use builder::EngineBuilder;
pub use crate::core::{ConfigError, InputAlphabet, StateRegistry, Symbol};
pub use engine::{Engine, EngineConfig, ProcessError};

#[doc(hidden)]
pub use serde;
