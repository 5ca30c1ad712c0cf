//! Retrace: a minimal finite state machine with undo/redo
//!
//! A machine is built from a declarative map of states and their
//! event-triggered transitions. It tracks a single current state, moves
//! between states in response to named events, and keeps a linear history
//! so state changes can be undone and redone.
//!
//! # Core Concepts
//!
//! - **Configuration**: `initial` state plus a declaration-ordered map of states
//! - **Trigger**: follow an event out of the current state
//! - **History**: `past`/`future` stacks backing undo and redo
//!
//! # Example
//!
//! ```rust
//! use retrace::{MachineError, StateMachine};
//!
//! let mut machine = StateMachine::from_json(r#"{
//!     "initial": "idle",
//!     "states": {
//!         "idle": { "transitions": { "start": "running" } },
//!         "running": { "transitions": { "stop": "idle" } }
//!     }
//! }"#).unwrap();
//!
//! machine.trigger("start").unwrap();
//! machine.trigger("stop").unwrap();
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "running");
//!
//! let err = machine.trigger("launch").unwrap_err();
//! assert!(matches!(err, MachineError::InvalidEvent { .. }));
//! assert_eq!(machine.state(), "running");
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use crate::core::{History, MachineConfig, MachineError, StateDefinition, StateMap};
pub use machine::StateMachine;
