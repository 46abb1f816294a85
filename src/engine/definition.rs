//! Validated machine definition: states, inputs, rules and actions.

use crate::actions::{ActionRegistry, SharedAction};
use crate::core::{ConfigError, InputAlphabet, StateRegistry, Symbol, TransitionTable};

/// Everything a host declares about a machine.
///
/// Every registration validates the identifiers it references before
/// touching any registry, so a failed call leaves the definition unchanged.
pub struct Definition<S: Symbol, I: Symbol, E> {
    pub(crate) states: StateRegistry<S>,
    pub(crate) inputs: InputAlphabet<I>,
    pub(crate) table: TransitionTable<S, I>,
    pub(crate) entry_actions: ActionRegistry<S, E>,
    pub(crate) exit_actions: ActionRegistry<S, E>,
    pub(crate) input_actions: ActionRegistry<(S, I), E>,
    pub(crate) transition_actions: ActionRegistry<(S, S), E>,
}

impl<S: Symbol, I: Symbol, E> Definition<S, I, E> {
    pub fn new(states: StateRegistry<S>, inputs: InputAlphabet<I>) -> Self {
        Self {
            states,
            inputs,
            table: TransitionTable::new(),
            entry_actions: ActionRegistry::new(),
            exit_actions: ActionRegistry::new(),
            input_actions: ActionRegistry::new(),
            transition_actions: ActionRegistry::new(),
        }
    }

    /// Add a rule and, optionally, an input action for `(source, input)`.
    pub fn add_rule(
        &mut self,
        source: S,
        input: I,
        target: S,
        input_action: Option<SharedAction<E>>,
    ) -> Result<(), ConfigError> {
        self.states.require(&source)?;
        self.states.require(&target)?;
        self.inputs.require(&input)?;

        self.table.add_rule(source, input, target)?;
        tracing::debug!(
            "rule added: ({:?}, {:?}) -> {:?}",
            source,
            input,
            target
        );

        if let Some(action) = input_action {
            self.input_actions.register((source, input), action);
        }
        Ok(())
    }

    pub fn add_entry_action(
        &mut self,
        state: S,
        action: SharedAction<E>,
    ) -> Result<(), ConfigError> {
        self.states.require(&state)?;
        self.entry_actions.register(state, action);
        Ok(())
    }

    pub fn add_exit_action(
        &mut self,
        state: S,
        action: SharedAction<E>,
    ) -> Result<(), ConfigError> {
        self.states.require(&state)?;
        self.exit_actions.register(state, action);
        Ok(())
    }

    pub fn add_input_action(
        &mut self,
        state: S,
        input: I,
        action: SharedAction<E>,
    ) -> Result<(), ConfigError> {
        self.states.require(&state)?;
        self.inputs.require(&input)?;
        self.input_actions.register((state, input), action);
        Ok(())
    }

    pub fn add_transition_action(
        &mut self,
        source: S,
        target: S,
        action: SharedAction<E>,
    ) -> Result<(), ConfigError> {
        self.states.require(&source)?;
        self.states.require(&target)?;
        self.transition_actions.register((source, target), action);
        Ok(())
    }

    pub fn states(&self) -> &StateRegistry<S> {
        &self.states
    }

    pub fn inputs(&self) -> &InputAlphabet<I> {
        &self.inputs
    }

    pub fn table(&self) -> &TransitionTable<S, I> {
        &self.table
    }
}

impl<S: Symbol, I: Symbol, E> Default for Definition<S, I, E> {
    fn default() -> Self {
        Self::new(StateRegistry::new(), InputAlphabet::new())
    }
}
