//! The state machine engine.
//!
//! [`StateMachine`] combines an immutable [`MachineConfig`](crate::core::MachineConfig)
//! with the current state and a [`History`](crate::core::History), and exposes
//! the query, mutation and undo/redo operations.

mod state_machine;

pub use state_machine::StateMachine;
