//! Core data model of the state machine.
//!
//! This module contains the plain values the engine is built from:
//! - Declarative configuration (`MachineConfig`, `StateMap`, `StateDefinition`)
//! - The two-stack undo/redo `History`
//! - The `MachineError` taxonomy
//!
//! Nothing here knows about the current state; that lives in
//! [`crate::machine::StateMachine`].

mod config;
mod error;
mod history;

pub use config::{MachineConfig, StateDefinition, StateMap};
pub use error::{MachineError, Result};
pub use history::History;
