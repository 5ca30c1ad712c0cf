//! Builder API for declaring state machines in code.
//!
//! This module provides a fluent builder and the [`machine_config!`](crate::machine_config)
//! macro as alternatives to loading a JSON configuration.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
