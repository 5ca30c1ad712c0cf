//! State machine engine with undo/redo.

use crate::core::{History, MachineConfig, MachineError, Result};
use log::{debug, trace, warn};

/// Finite state machine over a declarative configuration.
///
/// The machine owns its configuration, the current state name and a
/// two-stack [`History`]. Only [`trigger`](Self::trigger) follows the
/// declared transition graph; [`change_state`](Self::change_state) jumps
/// to any declared state unconditionally.
///
/// # Example
///
/// ```rust
/// use retrace::StateMachine;
///
/// let mut machine = StateMachine::from_json(r#"{
///     "initial": "idle",
///     "states": {
///         "idle": { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }"#).unwrap();
///
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "idle");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    current: String,
    history: History,
}

impl StateMachine {
    /// Create a machine positioned at `config.initial`.
    ///
    /// An initial state missing from `config.states` is accepted; operations
    /// that need it fail later.
    pub fn new(config: MachineConfig) -> Self {
        if !config.initial_is_declared() {
            warn!(
                "Initial state '{}' is not declared in the configuration",
                config.initial
            );
        }
        let current = config.initial.clone();
        let history = History::seeded(current.clone());
        Self {
            config,
            current,
            history,
        }
    }

    /// Create a machine from a configuration that may be absent.
    pub fn try_new(config: Option<MachineConfig>) -> Result<Self> {
        config
            .map(Self::new)
            .ok_or_else(|| MachineError::Config("no configuration supplied".to_string()))
    }

    /// Create a machine from a JSON value.
    ///
    /// `null` and non-object values are rejected; an object with missing
    /// fields is accepted with defaults.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Err(MachineError::Config(
                "no configuration supplied".to_string(),
            )),
            serde_json::Value::Object(_) => serde_json::from_value(value)
                .map(Self::new)
                .map_err(|e| MachineError::Config(e.to_string())),
            other => Err(MachineError::Config(format!(
                "expected an object, found {other}"
            ))),
        }
    }

    /// Parse a JSON document and create a machine from it.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| MachineError::Config(e.to_string()))?;
        Self::from_value(value)
    }

    /// Current state name.
    pub fn state(&self) -> &str {
        &self.current
    }

    /// The state the machine was constructed in and resets to.
    pub fn initial(&self) -> &str {
        &self.config.initial
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Jump to `state`, ignoring the transition graph.
    ///
    /// Fails with [`MachineError::InvalidState`] when `state` is empty or not
    /// declared. Clears any pending redo path.
    pub fn change_state(&mut self, state: &str) -> Result<()> {
        if state.is_empty() || !self.config.states.contains(state) {
            trace!("Rejected change to unknown state '{state}'");
            return Err(MachineError::InvalidState {
                state: state.to_string(),
            });
        }
        debug!("State changed '{}' -> '{state}'", self.current);
        self.enter(state.to_string());
        Ok(())
    }

    /// Follow the transition for `event` out of the current state.
    ///
    /// Fails with [`MachineError::InvalidEvent`] when the current state is
    /// undeclared, has no transition table, or has no entry for `event`.
    pub fn trigger(&mut self, event: &str) -> Result<()> {
        let destination = self
            .config
            .states
            .get(&self.current)
            .and_then(|definition| definition.destination(event))
            .map(str::to_owned);

        let Some(destination) = destination else {
            trace!("Rejected event '{event}' in state '{}'", self.current);
            return Err(MachineError::InvalidEvent {
                event: event.to_string(),
                state: self.current.clone(),
            });
        };

        debug!(
            "Event '{event}' moved '{}' -> '{destination}'",
            self.current
        );
        self.enter(destination);
        Ok(())
    }

    fn enter(&mut self, state: String) {
        self.history.record(state.clone());
        self.current = state;
    }

    /// Return to the initial state and empty both history stacks.
    ///
    /// Unlike construction, `past` is left empty, so `undo` reports `false`
    /// until another state change is recorded.
    pub fn reset(&mut self) {
        debug!("Reset '{}' -> '{}'", self.current, self.config.initial);
        self.current = self.config.initial.clone();
        self.history.clear();
    }

    /// Same effect as [`reset`](Self::reset).
    pub fn clear_history(&mut self) {
        self.reset();
    }

    /// Declared state names, optionally filtered to those defining `event`.
    ///
    /// `None` or an empty event returns every state. Order follows the
    /// configuration's declaration order.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event.filter(|e| !e.is_empty()) {
            None => self.all_states(),
            Some(event) => self.states_for(event),
        }
    }

    /// Every declared state name.
    pub fn all_states(&self) -> Vec<&str> {
        self.config.states.names().collect()
    }

    /// States from which `event` is a valid trigger.
    pub fn states_for(&self, event: &str) -> Vec<&str> {
        self.config
            .states
            .iter()
            .filter(|(_, definition)| definition.destination(event).is_some())
            .map(|(name, _)| name)
            .collect()
    }

    /// Events that can be triggered from the current state.
    pub fn events(&self) -> Vec<&str> {
        self.config
            .states
            .get(&self.current)
            .map(|definition| definition.events().collect())
            .unwrap_or_default()
    }

    /// Whether `event` has a destination from the current state.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.config
            .states
            .get(&self.current)
            .and_then(|definition| definition.destination(event))
            .is_some()
    }

    /// Whether [`undo`](Self::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    /// Whether [`redo`](Self::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_step_forward()
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `false` without mutating when fewer than two states are
    /// recorded.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.step_back() else {
            return false;
        };
        debug!("Undo '{}' -> '{previous}'", self.current);
        self.current = previous.to_owned();
        true
    }

    /// Re-apply the most recently undone state.
    ///
    /// Returns `false` without mutating when nothing is pending.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.step_forward() else {
            return false;
        };
        debug!("Redo '{}' -> '{next}'", self.current);
        self.current = next.to_owned();
        true
    }
}
