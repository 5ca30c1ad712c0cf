//! Traffic Light
//!
//! This example drives a traffic light through its cycle, then walks the
//! history backwards and forwards.
//!
//! Key concepts:
//! - Loading a configuration from JSON
//! - Triggering events and handling invalid ones
//! - Undo/redo over visited states
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use retrace::{MachineError, StateMachine};

const CONFIG: &str = r#"{
    "initial": "red",
    "states": {
        "red": { "transitions": { "timer": "green" } },
        "green": { "transitions": { "timer": "yellow", "emergency": "red" } },
        "yellow": { "transitions": { "timer": "red", "emergency": "red" } }
    }
}"#;

fn main() -> Result<(), MachineError> {
    env_logger::init();

    println!("=== Traffic Light Example ===\n");

    let mut light = StateMachine::from_json(CONFIG)?;
    println!("Initial state: {}", light.state());
    println!("States: {:?}", light.states(None));
    println!("Emergency-capable: {:?}\n", light.states(Some("emergency")));

    for _ in 0..3 {
        light.trigger("timer")?;
        println!("timer -> {}", light.state());
    }

    match light.trigger("emergency") {
        Ok(()) => println!("emergency -> {}", light.state()),
        Err(err) => println!("emergency rejected: {err}"),
    }

    println!("\nWalking back:");
    while light.undo() {
        println!("  undo -> {}", light.state());
    }

    println!("Walking forward:");
    while light.redo() {
        println!("  redo -> {}", light.state());
    }

    light.reset();
    println!("\nAfter reset: {} (can undo: {})", light.state(), light.can_undo());

    println!("\n=== Example Complete ===");
    Ok(())
}
