//! Configuration errors raised while declaring a machine.

use thiserror::Error;

/// Errors from registering states, inputs, rules and actions.
///
/// These are host programming mistakes detected at registration time. They are
/// returned rather than raised so the host decides between failing fast and
/// logging and continuing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("undefined state '{state}'")]
    UndefinedState { state: String },

    #[error("undefined input '{input}'")]
    UndefinedInput { input: String },

    #[error("initial state already set to '{existing}', cannot also mark '{state}' initial")]
    DuplicateInitialState { existing: String, state: String },

    #[error("rule for ('{state}', '{input}') already targets '{target}'")]
    DuplicateRule {
        state: String,
        input: String,
        target: String,
    },

    #[error("no states declared. Add at least one state before building")]
    NoStates,

    #[error("identifier index {index} is out of range (limit {limit})")]
    IndexTooLarge { index: usize, limit: usize },
}
