//! The state machine controller.

use crate::actions::{Action, Phase, SharedAction};
use crate::builder::EngineBuilder;
use crate::core::{
    ConfigError, InputAlphabet, RuleMiss, StateHistory, StateRegistry, StateTransition, Symbol,
    TransitionTable,
};
use crate::engine::config::EngineConfig;
use crate::engine::definition::Definition;
use crate::engine::error::ProcessError;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;

/// Mutable part of an engine, guarded by one lock.
struct Runtime<S, I> {
    current: S,
    history: StateHistory<S, I>,
}

/// Deterministic finite state machine.
///
/// Registration methods take `&mut self`, so they can never interleave with
/// [`process`](Self::process). Once shared (for example through `Arc`), the
/// engine is driven through `&self`: `process`, `set_state` and `reset` take
/// an exclusive lock for the whole step, `state`, `can` and `history` take a
/// shared one.
///
/// # Re-entrancy
///
/// Callbacks run while the step's exclusive lock is held. A callback must not
/// call back into the same engine (`process`, `state`, `can`, ...): doing so
/// deadlocks.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::{InputAlphabet, StateRegistry};
/// use fsmkit::engine::Engine;
///
/// const OPENED: u32 = 0;
/// const CLOSED: u32 = 1;
/// const OPEN: u32 = 0;
/// const CLOSE: u32 = 1;
///
/// let states = StateRegistry::try_from_iter([OPENED, CLOSED]).unwrap();
/// let inputs = InputAlphabet::try_from_iter([OPEN, CLOSE]).unwrap();
///
/// let mut door: Engine<u32, u32, String> = Engine::new(states, inputs).unwrap();
/// door.add_rule(OPENED, CLOSE, CLOSED, None).unwrap();
/// door.add_rule(CLOSED, OPEN, OPENED, None).unwrap();
///
/// assert!(door.can(CLOSE));
/// door.process(CLOSE).unwrap();
/// assert_eq!(door.state(), CLOSED);
/// assert!(door.process(CLOSE).unwrap_err().is_no_transition());
/// ```
pub struct Engine<S: Symbol, I: Symbol, E> {
    definition: Definition<S, I, E>,
    initial: S,
    config: EngineConfig,
    runtime: RwLock<Runtime<S, I>>,
}

impl<S: Symbol, I: Symbol, E> Engine<S, I, E> {
    /// Create an engine over the given states and inputs, in the initial state.
    ///
    /// Fails with [`ConfigError::NoStates`] when `states` is empty.
    pub fn new(states: StateRegistry<S>, inputs: InputAlphabet<I>) -> Result<Self, ConfigError> {
        Self::with_config(states, inputs, EngineConfig::default())
    }

    /// Like [`new`](Self::new) with explicit configuration.
    pub fn with_config(
        states: StateRegistry<S>,
        inputs: InputAlphabet<I>,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        Self::from_definition(Definition::new(states, inputs), config)
    }

    /// Start a builder.
    pub fn builder() -> EngineBuilder<S, I, E> {
        EngineBuilder::new()
    }

    pub(crate) fn from_definition(
        definition: Definition<S, I, E>,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        let initial = definition.states.initial().ok_or(ConfigError::NoStates)?;
        let history = StateHistory::with_limit(config.history_limit);

        tracing::debug!(
            "engine created: {} states, {} inputs, {} rules, initial {:?}",
            definition.states.len(),
            definition.inputs.len(),
            definition.table.len(),
            initial
        );

        Ok(Self {
            definition,
            initial,
            config,
            runtime: RwLock::new(Runtime {
                current: initial,
                history,
            }),
        })
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Add the rule `(source, input) -> target`.
    ///
    /// When `input_action` is given it is also registered as an input action
    /// for `(source, input)`. A rejected rule registers nothing.
    pub fn add_rule(
        &mut self,
        source: S,
        input: I,
        target: S,
        input_action: Option<SharedAction<E>>,
    ) -> Result<(), ConfigError> {
        self.definition.add_rule(source, input, target, input_action)
    }

    /// Add the rule `(source, input) -> target` together with an input action.
    pub fn add_rule_with_action<A>(
        &mut self,
        source: S,
        input: I,
        target: S,
        action: A,
    ) -> Result<(), ConfigError>
    where
        A: Action<E> + 'static,
    {
        self.add_rule(source, input, target, Some(Arc::new(action)))
    }

    /// Run `action` whenever the machine enters `state` from another state.
    pub fn add_entry_action<A>(&mut self, state: S, action: A) -> Result<(), ConfigError>
    where
        A: Action<E> + 'static,
    {
        self.definition.add_entry_action(state, Arc::new(action))
    }

    /// Run `action` whenever the machine leaves `state` for another state.
    pub fn add_exit_action<A>(&mut self, state: S, action: A) -> Result<(), ConfigError>
    where
        A: Action<E> + 'static,
    {
        self.definition.add_exit_action(state, Arc::new(action))
    }

    /// Run `action` when `input` is accepted in `state`, before the commit.
    pub fn add_input_action<A>(&mut self, state: S, input: I, action: A) -> Result<(), ConfigError>
    where
        A: Action<E> + 'static,
    {
        self.definition.add_input_action(state, input, Arc::new(action))
    }

    /// Run `action` after every committed transition from `source` to `target`.
    pub fn add_transition_action<A>(
        &mut self,
        source: S,
        target: S,
        action: A,
    ) -> Result<(), ConfigError>
    where
        A: Action<E> + 'static,
    {
        self.definition.add_transition_action(source, target, Arc::new(action))
    }

    // =========================================================================
    // Operation
    // =========================================================================

    /// Feed one input to the machine.
    ///
    /// Phases run in a fixed order: exit actions of the current state, input
    /// actions for `(current, input)`, commit, transition actions for
    /// `(current, target)`, entry actions of the target. Exit and entry
    /// actions are skipped on a self-loop.
    ///
    /// The first failing callback ends the step. A failure in the exit or
    /// input phase leaves the state unchanged; a failure in the transition or
    /// entry phase is reported after the new state was committed, and the
    /// commit is not rolled back.
    pub fn process(&self, input: I) -> Result<(), ProcessError<E>> {
        if !self.definition.inputs.contains(&input) {
            tracing::debug!("rejected undefined input {:?}", input);
            return Err(ProcessError::UndefinedInput {
                input: input.name().into_owned(),
            });
        }

        let mut runtime = self.runtime.write();
        let source = runtime.current;
        let target = self
            .definition
            .table
            .lookup(&source, &input)
            .map_err(|miss| match miss {
                RuleMiss::NoRuleForState => ProcessError::NoRuleForState {
                    state: source.name().into_owned(),
                },
                RuleMiss::NoRuleForInput => ProcessError::NoRuleForInput {
                    state: source.name().into_owned(),
                    input: input.name().into_owned(),
                },
            })?;
        let self_loop = source == target;

        if !self_loop {
            self.run_phase(Phase::Exit, &source, &input, &target)?;
        }
        self.run_phase(Phase::Input, &source, &input, &target)?;

        runtime.current = target;
        if self.config.record_history {
            runtime.history.record(StateTransition {
                from: source,
                input,
                to: target,
                timestamp: Utc::now(),
            });
        }
        tracing::debug!(
            "transition committed: {:?} --{:?}--> {:?}",
            source,
            input,
            target
        );

        self.run_phase(Phase::Transition, &source, &input, &target)?;
        if !self_loop {
            self.run_phase(Phase::Entry, &source, &input, &target)?;
        }
        Ok(())
    }

    fn run_phase(
        &self,
        phase: Phase,
        source: &S,
        input: &I,
        target: &S,
    ) -> Result<(), ProcessError<E>> {
        let def = &self.definition;
        tracing::trace!("{} phase: {:?} --{:?}--> {:?}", phase, source, input, target);
        let result = match phase {
            Phase::Exit => def.exit_actions.run(source),
            Phase::Input => def.input_actions.run(&(*source, *input)),
            Phase::Transition => def.transition_actions.run(&(*source, *target)),
            Phase::Entry => def.entry_actions.run(target),
        };

        result.map_err(|error| {
            tracing::warn!(
                "{} action failed on {:?} --{:?}--> {:?} (committed: {})",
                phase,
                source,
                input,
                target,
                phase.is_post_commit()
            );
            ProcessError::Action { phase, error }
        })
    }

    /// Whether `input` has a rule from the current state.
    ///
    /// Never runs callbacks or changes state.
    pub fn can(&self, input: I) -> bool {
        let runtime = self.runtime.read();
        self.definition.table.can(&runtime.current, &input)
    }

    /// The current state.
    pub fn state(&self) -> S {
        self.runtime.read().current
    }

    /// Jump to `state` without running any callbacks.
    pub fn set_state(&self, state: S) -> Result<(), ConfigError> {
        self.definition.states.require(&state)?;
        let mut runtime = self.runtime.write();
        tracing::debug!("state forced: {:?} -> {:?}", runtime.current, state);
        runtime.current = state;
        Ok(())
    }

    /// Return to the initial state without running any callbacks.
    pub fn reset(&self) {
        let mut runtime = self.runtime.write();
        tracing::debug!("reset: {:?} -> {:?}", runtime.current, self.initial);
        runtime.current = self.initial;
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn initial_state(&self) -> S {
        self.initial
    }

    pub fn states(&self) -> &StateRegistry<S> {
        self.definition.states()
    }

    pub fn inputs(&self) -> &InputAlphabet<I> {
        self.definition.inputs()
    }

    pub fn rules(&self) -> &TransitionTable<S, I> {
        self.definition.table()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Snapshot of the recorded transitions.
    ///
    /// Always empty unless history recording is enabled in the config.
    pub fn history(&self) -> StateHistory<S, I> {
        self.runtime.read().history.clone()
    }

    pub fn clear_history(&self) {
        self.runtime.write().history.clear();
    }
}
