//! Builder for constructing engines.

use crate::actions::{Action, SharedAction};
use crate::core::{ConfigError, Symbol};
use crate::engine::{Definition, Engine, EngineConfig};
use std::sync::Arc;

/// Builder for constructing an [`Engine`] with a fluent API.
///
/// Declarations accumulate without any locking. Each registration validates
/// the identifiers it references, so states and inputs must be declared before
/// the rules and actions that use them.
///
/// `state`, `states`, `input` and `inputs` chain without a `Result`. The first
/// identifier they reject (see [`ConfigError::IndexTooLarge`]) is kept and
/// returned by the next fallible call or by [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use fsmkit::builder::EngineBuilder;
/// use fsmkit::core::ConfigError;
/// use fsmkit::symbol_enum;
///
/// symbol_enum! {
///     enum Light { Red, Green, Yellow }
/// }
///
/// symbol_enum! {
///     enum Tick { Next }
/// }
///
/// fn build() -> Result<fsmkit::engine::Engine<Light, Tick, String>, ConfigError> {
///     EngineBuilder::new()
///         .states(Light::ALL.iter().copied())
///         .input(Tick::Next)
///         .rule(Light::Red, Tick::Next, Light::Green)?
///         .rule(Light::Green, Tick::Next, Light::Yellow)?
///         .rule(Light::Yellow, Tick::Next, Light::Red)?
///         .build()
/// }
///
/// let light = build().unwrap();
/// light.process(Tick::Next).unwrap();
/// assert_eq!(light.state(), Light::Green);
/// ```
pub struct EngineBuilder<S: Symbol, I: Symbol, E> {
    definition: Definition<S, I, E>,
    config: EngineConfig,
    error: Option<ConfigError>,
}

impl<S: Symbol, I: Symbol, E> EngineBuilder<S, I, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            definition: Definition::default(),
            config: EngineConfig::default(),
            error: None,
        }
    }

    /// Declare a state. The first state declared is initial unless one is
    /// flagged with [`initial_state`](Self::initial_state).
    pub fn state(mut self, state: S) -> Self {
        if let Err(e) = self.definition.states.add(state) {
            self.defer(e);
        }
        self
    }

    /// Declare several states in order.
    pub fn states(self, states: impl IntoIterator<Item = S>) -> Self {
        states.into_iter().fold(self, Self::state)
    }

    /// Declare a state and flag it initial.
    pub fn initial_state(mut self, state: S) -> Result<Self, ConfigError> {
        self.check()?;
        self.definition.states.add_initial(state)?;
        Ok(self)
    }

    /// Declare an input.
    pub fn input(mut self, input: I) -> Self {
        if let Err(e) = self.definition.inputs.add(input) {
            self.defer(e);
        }
        self
    }

    /// Declare several inputs in order.
    pub fn inputs(self, inputs: impl IntoIterator<Item = I>) -> Self {
        inputs.into_iter().fold(self, Self::input)
    }

    /// Add the rule `(source, input) -> target`.
    pub fn rule(mut self, source: S, input: I, target: S) -> Result<Self, ConfigError> {
        self.check()?;
        self.definition.add_rule(source, input, target, None)?;
        Ok(self)
    }

    /// Add a rule carrying an inline input action.
    pub fn rule_with_action<A>(
        mut self,
        source: S,
        input: I,
        target: S,
        action: A,
    ) -> Result<Self, ConfigError>
    where
        A: Action<E> + 'static,
    {
        self.check()?;
        let action: SharedAction<E> = Arc::new(action);
        self.definition.add_rule(source, input, target, Some(action))?;
        Ok(self)
    }

    pub fn entry_action<A>(mut self, state: S, action: A) -> Result<Self, ConfigError>
    where
        A: Action<E> + 'static,
    {
        self.check()?;
        self.definition.add_entry_action(state, Arc::new(action))?;
        Ok(self)
    }

    pub fn exit_action<A>(mut self, state: S, action: A) -> Result<Self, ConfigError>
    where
        A: Action<E> + 'static,
    {
        self.check()?;
        self.definition.add_exit_action(state, Arc::new(action))?;
        Ok(self)
    }

    pub fn input_action<A>(mut self, state: S, input: I, action: A) -> Result<Self, ConfigError>
    where
        A: Action<E> + 'static,
    {
        self.check()?;
        self.definition.add_input_action(state, input, Arc::new(action))?;
        Ok(self)
    }

    pub fn transition_action<A>(
        mut self,
        source: S,
        target: S,
        action: A,
    ) -> Result<Self, ConfigError>
    where
        A: Action<E> + 'static,
    {
        self.check()?;
        self.definition.add_transition_action(source, target, Arc::new(action))?;
        Ok(self)
    }

    /// Replace the engine configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Record up to `limit` committed transitions.
    pub fn history(mut self, limit: usize) -> Self {
        self.config = EngineConfig::with_history(limit);
        self
    }

    /// Build the engine.
    /// Returns an error if no state was declared or a declaration was rejected.
    pub fn build(mut self) -> Result<Engine<S, I, E>, ConfigError> {
        self.check()?;
        Engine::from_definition(self.definition, self.config)
    }

    fn defer(&mut self, error: ConfigError) {
        self.error.get_or_insert(error);
    }

    fn check(&mut self) -> Result<(), ConfigError> {
        self.error.take().map_or(Ok(()), Err)
    }
}

impl<S: Symbol, I: Symbol, E> Default for EngineBuilder<S, I, E> {
    fn default() -> Self {
        Self::new()
    }
}
