//! Error types for state machine operations.

use thiserror::Error;

/// Errors raised by state machine construction and mutation.
///
/// A failed operation never changes the machine: the current state and
/// both history stacks are left exactly as they were.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// No usable configuration was supplied at construction.
    #[error("Invalid config: {0}")]
    Config(String),

    /// `change_state` targeted an empty or undeclared state.
    #[error("Invalid state '{state}'")]
    InvalidState { state: String },

    /// `trigger` named an event with no transition from the current state.
    #[error("Invalid event '{event}' in state '{state}'")]
    InvalidEvent { event: String, state: String },
}

/// Convenience alias for results returned by the machine.
pub type Result<T> = std::result::Result<T, MachineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = MachineError::InvalidEvent {
            event: "launch".to_string(),
            state: "idle".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid event 'launch' in state 'idle'");

        let err = MachineError::InvalidState {
            state: "nowhere".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid state 'nowhere'");

        let err = MachineError::Config("missing".to_string());
        assert_eq!(err.to_string(), "Invalid config: missing");
    }
}
