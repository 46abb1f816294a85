//! Callback capability and execution phases.

use std::fmt;
use std::sync::Arc;

/// A side-effecting callback run by the engine.
///
/// The engine treats an action opaquely: it invokes it and forwards any
/// failure value unchanged. Every `Fn() -> Result<(), E> + Send + Sync`
/// closure is an action, so most hosts never implement this by hand.
///
/// # Example
///
/// ```rust
/// use fsmkit::actions::Action;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// struct Counter(AtomicUsize);
///
/// impl Action<String> for Counter {
///     fn invoke(&self) -> Result<(), String> {
///         self.0.fetch_add(1, Ordering::SeqCst);
///         Ok(())
///     }
/// }
///
/// let counter = Counter(AtomicUsize::new(0));
/// counter.invoke().unwrap();
/// assert_eq!(counter.0.load(Ordering::SeqCst), 1);
///
/// let refuse = || -> Result<(), String> { Err("jammed".to_string()) };
/// assert_eq!(refuse.invoke(), Err("jammed".to_string()));
/// ```
pub trait Action<E>: Send + Sync {
    fn invoke(&self) -> Result<(), E>;
}

impl<E, F> Action<E> for F
where
    F: Fn() -> Result<(), E> + Send + Sync,
{
    fn invoke(&self) -> Result<(), E> {
        self()
    }
}

/// Type alias for stored actions.
/// Shared so one callback can be registered under several keys.
pub type SharedAction<E> = Arc<dyn Action<E>>;

/// Which callback category is running.
///
/// Exit and input actions run before the new state is committed and can veto
/// the step. Transition and entry actions run after the commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Exit,
    Input,
    Transition,
    Entry,
}

impl Phase {
    /// True for phases that run after the state change is committed.
    pub fn is_post_commit(&self) -> bool {
        matches!(self, Self::Transition | Self::Entry)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exit => "exit",
            Self::Input => "input",
            Self::Transition => "transition",
            Self::Entry => "entry",
        };
        f.write_str(name)
    }
}
