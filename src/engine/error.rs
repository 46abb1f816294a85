//! Errors returned from a processing step.

use crate::actions::Phase;
use thiserror::Error;

/// Errors from [`Engine::process`](crate::engine::Engine::process).
///
/// `UndefinedInput`, `NoRuleForState` and `NoRuleForInput` are operational:
/// the step was rejected and the current state is untouched. `Action` carries
/// a callback's failure value exactly as the callback returned it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProcessError<E> {
    #[error("undefined input '{input}'")]
    UndefinedInput { input: String },

    #[error("no rules left for current state '{state}'")]
    NoRuleForState { state: String },

    #[error("no rule for ('{state}', '{input}') pair")]
    NoRuleForInput { state: String, input: String },

    #[error("{phase} action failed: {error}")]
    Action { phase: Phase, error: E },
}

impl<E> ProcessError<E> {
    /// True when no rule matched the current state and input.
    pub fn is_no_transition(&self) -> bool {
        matches!(
            self,
            ProcessError::NoRuleForState { .. } | ProcessError::NoRuleForInput { .. }
        )
    }

    /// True when the state change happened before the failure was reported.
    pub fn is_committed(&self) -> bool {
        self.phase().is_some_and(|phase| phase.is_post_commit())
    }

    /// The phase of the failing callback, if a callback failed.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            ProcessError::Action { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    /// The callback's failure value, if a callback failed.
    pub fn into_action_error(self) -> Option<E> {
        match self {
            ProcessError::Action { error, .. } => Some(error),
            _ => None,
        }
    }
}
