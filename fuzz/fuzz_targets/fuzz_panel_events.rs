//! Fuzz target for the front panel state machine.
//!
//! Drives a complete simulator with arbitrary key and command sequences.
//! The panel must reject bad digits gracefully, keep its buffer bounded,
//! and never panic - including Execute commands that run whatever program
//! the earlier events happened to deposit.

#![no_main]

use arbitrary::Arbitrary;
use lib8085::{Command, Simulator};
use libfuzzer_sys::fuzz_target;

/// One keypad event.
#[derive(Debug, Arbitrary)]
enum FuzzEvent {
    /// Any character at all - most are invalid digits the panel must reject.
    Key(char),
    Reset,
    ExamineMemory,
    Next,
    Previous,
    Go,
    Execute,
}

fuzz_target!(|events: Vec<FuzzEvent>| {
    let mut sim = Simulator::new();

    for event in events {
        match event {
            FuzzEvent::Key(key) => {
                // Errors are expected for non-hex input; panics are not.
                let _ = sim.key(key);
            }
            FuzzEvent::Reset => {
                sim.command(Command::Reset);
            }
            FuzzEvent::ExamineMemory => {
                sim.command(Command::ExamineMemory);
            }
            FuzzEvent::Next => {
                sim.command(Command::Next);
            }
            FuzzEvent::Previous => {
                sim.command(Command::Previous);
            }
            FuzzEvent::Go => {
                sim.command(Command::Go);
            }
            FuzzEvent::Execute => {
                if let Some(result) = sim.command(Command::Execute) {
                    assert_eq!(result.accumulator, sim.registers().a());
                }
            }
        }

        // Invariants that must hold after every event
        assert!(sim.panel().buffer().len() <= 4);
        let display = sim.display();
        assert!(display.address_field.len() <= 4);
        assert!(display.data_field.len() <= 2);
    }
});
