//! Declared states and input symbols.

use super::bitset::CompactSet;
use super::error::ConfigError;
use super::symbol::Symbol;

/// Role of a declared state.
///
/// `Initial` only decides which state construction and `reset()` select; it
/// has no other behavioral effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateKind {
    Initial,
    Normal,
}

/// The set of declared states plus exactly one initial state.
///
/// The initial state is whichever state was flagged with
/// [`add_initial`](Self::add_initial), or else the first state ever added.
/// States are never removed.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::{StateKind, StateRegistry};
///
/// let mut states = StateRegistry::new();
/// states.add(0u32)?.add(1)?.add(2)?;
///
/// assert_eq!(states.initial(), Some(0));
/// assert_eq!(states.kind(&1), Some(StateKind::Normal));
///
/// states.add_initial(2).unwrap();
/// assert_eq!(states.initial(), Some(2));
/// assert!(states.add_initial(1).is_err());
/// # Ok::<(), fsmkit::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct StateRegistry<S: Symbol> {
    members: CompactSet,
    order: Vec<S>,
    initial: Option<S>,
    explicit_initial: bool,
}

impl<S: Symbol> StateRegistry<S> {
    pub fn new() -> Self {
        Self {
            members: CompactSet::new(),
            order: Vec::new(),
            initial: None,
            explicit_initial: false,
        }
    }

    /// Declare a normal state. Re-adding a state is a no-op.
    ///
    /// Fails with [`ConfigError::IndexTooLarge`] when the state's index does
    /// not fit in a [`CompactSet`].
    pub fn add(&mut self, state: S) -> Result<&mut Self, ConfigError> {
        if !self.members.contains(state.index()) {
            self.members.add(state.index())?;
            self.order.push(state);
        }
        if self.initial.is_none() {
            self.initial = Some(state);
        }
        Ok(self)
    }

    /// Declare a state and flag it initial.
    ///
    /// Fails with [`ConfigError::DuplicateInitialState`] when a different
    /// state was already flagged.
    pub fn add_initial(&mut self, state: S) -> Result<&mut Self, ConfigError> {
        if let Some(existing) = self.initial.filter(|_| self.explicit_initial) {
            if existing != state {
                return Err(ConfigError::DuplicateInitialState {
                    existing: existing.name().into_owned(),
                    state: state.name().into_owned(),
                });
            }
        }
        self.add(state)?;
        self.initial = Some(state);
        self.explicit_initial = true;
        Ok(self)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.members.contains(state.index())
    }

    /// The designated initial state, `None` until a state is declared.
    pub fn initial(&self) -> Option<S> {
        self.initial
    }

    pub fn kind(&self, state: &S) -> Option<StateKind> {
        if !self.contains(state) {
            return None;
        }
        if self.initial.as_ref() == Some(state) {
            Some(StateKind::Initial)
        } else {
            Some(StateKind::Normal)
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// States in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.order.iter()
    }

    /// Fail with [`ConfigError::UndefinedState`] unless `state` is declared.
    pub fn require(&self, state: &S) -> Result<(), ConfigError> {
        if self.contains(state) {
            Ok(())
        } else {
            Err(ConfigError::UndefinedState {
                state: state.name().into_owned(),
            })
        }
    }
}

impl<S: Symbol> Default for StateRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> StateRegistry<S> {
    /// Declare every state of `iter` in order; the first becomes initial.
    pub fn try_from_iter(iter: impl IntoIterator<Item = S>) -> Result<Self, ConfigError> {
        let mut states = Self::new();
        for state in iter {
            states.add(state)?;
        }
        Ok(states)
    }
}

/// The set of declared input symbols.
#[derive(Clone, Debug)]
pub struct InputAlphabet<I: Symbol> {
    members: CompactSet,
    order: Vec<I>,
}

impl<I: Symbol> InputAlphabet<I> {
    pub fn new() -> Self {
        Self {
            members: CompactSet::new(),
            order: Vec::new(),
        }
    }

    /// Declare an input. Re-adding an input is a no-op.
    pub fn add(&mut self, input: I) -> Result<&mut Self, ConfigError> {
        if !self.members.contains(input.index()) {
            self.members.add(input.index())?;
            self.order.push(input);
        }
        Ok(self)
    }

    pub fn contains(&self, input: &I) -> bool {
        self.members.contains(input.index())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inputs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &I> {
        self.order.iter()
    }

    /// Fail with [`ConfigError::UndefinedInput`] unless `input` is declared.
    pub fn require(&self, input: &I) -> Result<(), ConfigError> {
        if self.contains(input) {
            Ok(())
        } else {
            Err(ConfigError::UndefinedInput {
                input: input.name().into_owned(),
            })
        }
    }
}

impl<I: Symbol> Default for InputAlphabet<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Symbol> InputAlphabet<I> {
    /// Declare every input of `iter` in order.
    pub fn try_from_iter(iter: impl IntoIterator<Item = I>) -> Result<Self, ConfigError> {
        let mut inputs = Self::new();
        for input in iter {
            inputs.add(input)?;
        }
        Ok(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_state_added_is_initial() {
        let mut states = StateRegistry::new();
        states.add(4u32).unwrap().add(1).unwrap().add(9).unwrap();

        assert_eq!(states.initial(), Some(4));
        assert_eq!(states.kind(&4), Some(StateKind::Initial));
        assert_eq!(states.kind(&9), Some(StateKind::Normal));
        assert_eq!(states.kind(&5), None);
    }

    #[test]
    fn explicit_initial_overrides_first_added() {
        let mut states = StateRegistry::new();
        states.add(0u32).unwrap().add(1).unwrap();
        states.add_initial(1).unwrap();

        assert_eq!(states.initial(), Some(1));
        assert_eq!(states.kind(&0), Some(StateKind::Normal));
    }

    #[test]
    fn second_explicit_initial_is_rejected() {
        let mut states = StateRegistry::new();
        states.add_initial(0u32).unwrap();

        let result = states.add_initial(1);
        assert!(matches!(
            result,
            Err(ConfigError::DuplicateInitialState { .. })
        ));
        assert_eq!(states.initial(), Some(0));
        assert!(!states.contains(&1));
    }

    #[test]
    fn re_flagging_the_same_initial_is_idempotent() {
        let mut states = StateRegistry::new();
        states.add_initial(3u32).unwrap();
        assert!(states.add_initial(3).is_ok());
        assert_eq!(states.len(), 1);
    }

    #[test]
    fn duplicate_add_keeps_set_semantics() {
        let mut states = StateRegistry::new();
        states.add(2u32).unwrap().add(2).unwrap().add(7).unwrap();

        assert_eq!(states.len(), 2);
        let order: Vec<u32> = states.iter().copied().collect();
        assert_eq!(order, vec![2u32, 7]);
    }

    #[test]
    fn empty_registry_has_no_initial() {
        let states: StateRegistry<u32> = StateRegistry::new();
        assert!(states.is_empty());
        assert_eq!(states.initial(), None);
    }

    #[test]
    fn require_reports_undefined_state() {
        let states = StateRegistry::try_from_iter([0u32, 1]).unwrap();
        assert!(states.require(&1).is_ok());
        assert_eq!(
            states.require(&8),
            Err(ConfigError::UndefinedState {
                state: "8".to_string()
            })
        );
    }

    #[test]
    fn alphabet_membership() {
        let inputs = InputAlphabet::try_from_iter([3u8, 0, 3]).unwrap();

        assert_eq!(inputs.len(), 2);
        assert!(inputs.contains(&0));
        assert!(inputs.contains(&3));
        assert!(!inputs.contains(&1));
        assert!(matches!(
            inputs.require(&1),
            Err(ConfigError::UndefinedInput { .. })
        ));
    }

    #[test]
    fn out_of_range_identifiers_are_rejected() {
        let mut states = StateRegistry::new();
        let result = states.add(usize::MAX);

        assert!(matches!(result, Err(ConfigError::IndexTooLarge { .. })));
        assert!(states.is_empty());
        assert_eq!(states.initial(), None);
        assert!(!states.contains(&usize::MAX));

        assert!(states.add_initial(3_000_000_000usize).is_err());
        assert_eq!(states.initial(), None);

        let inputs = InputAlphabet::try_from_iter([0u32, 3_000_000_000]);
        assert!(matches!(inputs, Err(ConfigError::IndexTooLarge { .. })));
    }
}
