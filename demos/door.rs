//! Door Lock
//!
//! This demo embeds the engine in a domain type by composition. The `Door`
//! owns an engine and forwards the operations it needs; its callbacks close
//! over the door's own shared counters.
//!
//! Key concepts:
//! - Symbolic states and inputs via `symbol_enum!`
//! - Input, transition, entry and exit actions
//! - Rejected inputs leave the state unchanged
//!
//! Run with: RUST_LOG=fsmkit=debug cargo run --example door

use fsmkit::builder::EngineBuilder;
use fsmkit::engine::{Engine, ProcessError};
use fsmkit::{symbol_enum, ConfigError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

symbol_enum! {
    enum DoorState {
        Opened,
        Closed,
        Locked,
    }
}

symbol_enum! {
    enum DoorInput {
        Open,
        Close,
        Lock,
        Unlock,
    }
}

#[derive(Default)]
struct Counters {
    unlocks: AtomicUsize,
    closings: AtomicUsize,
}

struct Door {
    engine: Engine<DoorState, DoorInput, String>,
    counters: Arc<Counters>,
}

impl Door {
    fn new() -> Result<Self, ConfigError> {
        let counters = Arc::new(Counters::default());
        let unlocks = Arc::clone(&counters);
        let closings = Arc::clone(&counters);

        let engine = EngineBuilder::new()
            .states(DoorState::ALL.iter().copied())
            .inputs(DoorInput::ALL.iter().copied())
            .history(16)
            .rule(DoorState::Opened, DoorInput::Close, DoorState::Closed)?
            .rule(DoorState::Closed, DoorInput::Open, DoorState::Opened)?
            .rule(DoorState::Closed, DoorInput::Lock, DoorState::Locked)?
            .rule_with_action(
                DoorState::Locked,
                DoorInput::Unlock,
                DoorState::Closed,
                move || -> Result<(), String> {
                    unlocks.unlocks.fetch_add(1, Ordering::SeqCst);
                    println!("unlocking action.");
                    Ok(())
                },
            )?
            .transition_action(DoorState::Closed, DoorState::Opened, || -> Result<(), String> {
                println!("open action.");
                Ok(())
            })?
            .entry_action(DoorState::Closed, move || -> Result<(), String> {
                closings.closings.fetch_add(1, Ordering::SeqCst);
                println!("close entry action.");
                Ok(())
            })?
            .exit_action(DoorState::Closed, || -> Result<(), String> {
                println!("close exit action.");
                Ok(())
            })?
            .build()?;

        Ok(Self { engine, counters })
    }

    fn press(&self, input: DoorInput) -> Result<(), ProcessError<String>> {
        self.engine.process(input)
    }

    fn state(&self) -> DoorState {
        self.engine.state()
    }
}

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Door Lock Example ===\n");

    let door = Door::new()?;

    let script = [
        DoorInput::Close,
        DoorInput::Lock,
        DoorInput::Unlock,
        DoorInput::Open,
        // rejected: an open door cannot be locked
        DoorInput::Lock,
        DoorInput::Close,
        // rejected: a closed door is not locked
        DoorInput::Unlock,
    ];

    for input in script {
        match door.press(input) {
            Ok(()) => println!("{:?} -> {:?}\n", input, door.state()),
            Err(e) => println!("{:?} rejected: {} (still {:?})\n", input, e, door.state()),
        }
    }

    let history = door.engine.history();
    println!("Path: {:?}", history.get_path());
    println!(
        "Unlocks: {}, closings: {}",
        door.counters.unlocks.load(Ordering::SeqCst),
        door.counters.closings.load(Ordering::SeqCst)
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
