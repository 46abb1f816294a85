//! Bounded record of committed transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single committed transition.
///
/// A record is written when the engine commits the new state, so a step whose
/// transition or entry action later failed is still recorded, while a step
/// vetoed by an exit or input action is not.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: 0u32,
///     input: 3u32,
///     to: 1u32,
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_self_loop());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S, I> {
    /// The state being left
    pub from: S,
    /// The input that triggered the transition
    pub input: I,
    /// The state committed to
    pub to: S,
    /// When the commit happened
    pub timestamp: DateTime<Utc>,
}

impl<S: PartialEq, I> StateTransition<S, I> {
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered, bounded history of transitions.
///
/// Once `limit` records are held, recording another drops the oldest.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_limit(8);
/// history.record(StateTransition { from: 0u32, input: 0u32, to: 1, timestamp: Utc::now() });
/// history.record(StateTransition { from: 1, input: 1, to: 2, timestamp: Utc::now() });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&0u32, &1, &2]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S, I> {
    limit: usize,
    transitions: VecDeque<StateTransition<S, I>>,
}

impl<S, I> StateHistory<S, I> {
    /// Create an empty history holding at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            transitions: VecDeque::new(),
        }
    }

    /// Append a transition, evicting the oldest record when full.
    pub fn record(&mut self, transition: StateTransition<S, I>) {
        if self.limit == 0 {
            return;
        }
        while self.transitions.len() >= self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record, then the `to`
    /// state of each record. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest retained records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Retained records, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S, I>> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&StateTransition<S, I>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}
