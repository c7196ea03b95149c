//! Jumper Guy
//!
//! This example demonstrates generated event methods and per-instance
//! extension.
//!
//! Key concepts:
//! - `machine_methods!` for `jump()` / `is_falling()` style access
//! - States and transitions added to a single instance
//! - Instances of the same type staying independent
//!
//! Run with: cargo run --example jumper_guy

use turnstile::{machine_methods, MachineError, State, StateMachineBuilder, TransitionBuilder};

machine_methods! {
    trait JumperGuy {
        events { jump, land }
        states { is_looking => looking, is_falling => falling, is_squashed => squashed }
    }
}

fn main() -> Result<(), MachineError> {
    println!("=== Jumper Guy ===\n");

    let definition = StateMachineBuilder::<()>::new()
        .named("jumper_guy")
        .state(State::new("looking"))
        .state(State::new("falling"))
        .initial("looking")
        .transition(TransitionBuilder::new("jump").from("looking").to("falling"))
        .build()?;

    let mut unlucky = definition.instantiate(())?;
    let mut lucky = definition.instantiate(())?;

    unlucky.add_state(State::new("squashed"))?;
    unlucky.add_transition(TransitionBuilder::new("land").from("falling").to("squashed"))?;

    println!("Looking before the jump: {}", unlucky.is_looking());

    unlucky.jump()?;
    lucky.jump()?;
    println!("Both falling: {} {}", unlucky.is_falling(), lucky.is_falling());

    unlucky.land()?;
    println!("Unlucky squashed: {}", unlucky.is_squashed());

    match lucky.land() {
        Err(error) => println!("Lucky cannot land: {error}"),
        Ok(()) => println!("Lucky landed"),
    }

    println!("\nUnlucky knows states: {:?}", unlucky.states());
    println!("Lucky knows states:   {:?}", lucky.states());

    println!("\n=== Example Complete ===");
    Ok(())
}
