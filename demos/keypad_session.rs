//! Keypad Session
//!
//! This demo drives a calculator the way a button grid would: each button
//! carries an action identifier and an optional payload.
//!
//! Key concepts:
//! - Dispatching UI actions into typed key presses
//! - Rendering through a closure
//! - Left-to-right chaining and the division by zero display
//! - Checkpointing a live session and resuming it
//!
//! Run with: RUST_LOG=abacus=debug cargo run --example keypad_session

use abacus::checkpoint::Checkpoint;
use abacus::dispatch::dispatch;
use abacus::effects::FnRenderer;
use abacus::{Calculator, CalculatorBuilder};

const BUTTONS: &[(&str, Option<&str>)] = &[
    ("digit", Some("1")),
    ("digit", Some("2")),
    ("operator", Some("add")),
    ("digit", Some("3")),
    ("operator", Some("multiply")),
    ("digit", Some("4")),
    ("equal", None),
    ("operator", Some("divide")),
    ("digit", Some("0")),
    ("equal", None),
    ("percent", None),
    ("clear", None),
    ("decimal", None),
    ("digit", Some("1")),
    ("operator", Some("add")),
    ("decimal", None),
    ("digit", Some("2")),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Keypad Session Example ===\n");

    let mut calc = CalculatorBuilder::new()
        .renderer(FnRenderer(|text: &str| println!("  [display] {text}")))
        .record_history(true)
        .build()
        .expect("default configuration is valid");

    for (action, payload) in BUTTONS {
        match dispatch(action, *payload) {
            Ok(input) => {
                println!("press {input}");
                calc.press(input);
            }
            Err(e) => println!("  [ignored] {e}"),
        }
    }

    let checkpoint = calc.checkpoint();
    let json = checkpoint.to_json().expect("checkpoint serializes");
    println!("\nCheckpoint:\n{json}\n");

    let mut resumed = Calculator::new(FnRenderer(|text: &str| println!("  [resumed] {text}")));
    resumed
        .restore(Checkpoint::from_json(&json).expect("checkpoint parses"))
        .expect("checkpoint is valid");
    resumed.compute();

    if let Some(history) = calc.history() {
        let phases = history.get_path();
        let path: Vec<&str> = phases.iter().map(|p| p.name()).collect();
        println!("\nPhases visited: {}", path.join(" -> "));
    }

    println!("\n=== Example Complete ===");
}
