//! Door State Machine
//!
//! This example demonstrates guards, named hooks and change notification.
//!
//! Key concepts:
//! - Host data exposing named methods to the machine
//! - A guard that reads host data
//! - The `changing_state` observer
//!
//! Run with: cargo run --example door

use serde_json::Value;
use turnstile::{
    CallbackError, EventArgs, MachineError, Methods, State, StateMachineBuilder, TransitionBuilder,
};

#[derive(Default)]
struct Door {
    locked: bool,
    state_changes: Vec<(String, String)>,
}

impl Methods for Door {
    fn call_method(&mut self, name: &str, _args: &EventArgs) -> Option<Result<Value, CallbackError>> {
        match name {
            "unlocked" => Some(Ok(Value::Bool(!self.locked))),
            "creak" => {
                println!("  *creak*");
                Some(Ok(Value::Null))
            }
            _ => None,
        }
    }

    fn changing_state(&mut self, from: &str, to: &str) -> Result<(), CallbackError> {
        self.state_changes.push((from.to_string(), to.to_string()));
        Ok(())
    }
}

fn main() -> Result<(), MachineError> {
    println!("=== Door State Machine ===\n");

    let definition = StateMachineBuilder::<Door>::new()
        .named("door")
        .state(State::new("closed"))
        .state(State::new("open").on_enter("creak"))
        .state(State::new("broken"))
        .initial("closed")
        .transition(
            TransitionBuilder::new("open")
                .from("closed")
                .to("open")
                .guard("unlocked"),
        )
        .transition(TransitionBuilder::new("close").from("open").to("closed"))
        .transition(TransitionBuilder::new("crack").from("closed").to("broken"))
        .build()?;

    let mut door = definition.instantiate(Door {
        locked: true,
        ..Door::default()
    })?;
    println!("Initial state: {}", door.current_state());

    match door.fire("open") {
        Err(error) => println!("Locked door: {error}"),
        Ok(()) => println!("Unexpectedly opened a locked door"),
    }

    door.context_mut().locked = false;
    door.fire("open")?;
    println!("After open: {}", door.current_state());

    door.fire("close")?;
    door.fire("crack")?;
    println!("After crack: {}", door.current_state());

    println!("\nState changes:");
    for (from, to) in &door.context().state_changes {
        println!("  {from} -> {to}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
