//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{MachineConfig, StateDefinition, StateMap};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// States are declared in the order they are first mentioned, either through
/// [`state`](Self::state) or as the source of a [`transition`](Self::transition).
/// Destinations are not declared implicitly.
///
/// # Example
///
/// ```
/// use retrace::builder::StateMachineBuilder;
///
/// let machine = StateMachineBuilder::new()
///     .initial("green")
///     .transition("green", "timer", "yellow")
///     .transition("yellow", "timer", "red")
///     .transition("red", "timer", "green")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), "green");
/// assert_eq!(machine.states(Some("timer")), vec!["green", "yellow", "red"]);
/// ```
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<String>,
    states: StateMap,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with an empty transition table.
    /// Declaring an existing state leaves it untouched.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.states.contains(&name) {
            self.states.insert(name, StateDefinition::new());
        }
        self
    }

    /// Declare a state with a prepared definition, replacing any earlier one.
    pub fn definition(mut self, name: impl Into<String>, definition: StateDefinition) -> Self {
        self.states.insert(name, definition);
        self
    }

    /// Add an `event` transition from `from` to `to`.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let from = from.into();
        let definition = self.states.get(&from).cloned().unwrap_or_default();
        self.states.insert(from, definition.on(event, to));
        self
    }

    /// Finish the configuration without constructing a machine.
    pub fn build_config(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(MachineConfig::new(initial, self.states))
    }

    /// Build the state machine.
    /// Returns an error if the initial state was never set.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        self.build_config().map(StateMachine::new)
    }
}
