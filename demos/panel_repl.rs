//! Interactive front-panel REPL.
//!
//! Drives the trainer kit from stdin: single hex characters are digit keys,
//! keypad labels (RES, EX MEM, NEXT, PREV, GO, EXEC) are command buttons,
//! and `quit` exits. The two display fields are printed after every event.
//!
//! Run with: cargo run --example panel_repl
//! Set RUST_LOG=trace to watch the state machine.

use std::io::{self, BufRead, Write};

use lib8085::{Command, Simulator};

fn main() {
    env_logger::init();

    let mut sim = Simulator::new();
    let stdin = io::stdin();

    print_display(&sim);

    loop {
        print!("> ");
        io::stdout().flush().expect("flush stdout");

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).expect("read stdin") == 0 {
            break; // EOF
        }
        let input = line.trim();

        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        if let Some(command) = Command::from_label(input) {
            if let Some(result) = sim.command(command) {
                println!(
                    "ran {} steps ({:?}), A = 0x{:02X}",
                    result.steps, result.outcome, result.accumulator
                );
                for unknown in &result.unknown_opcodes {
                    println!(
                        "  unknown opcode 0x{:02X} at 0x{:04X}",
                        unknown.opcode, unknown.address
                    );
                }
            }
        } else if input.len() == 1 {
            let key = input.chars().next().expect("len checked");
            if let Err(err) = sim.key(key) {
                println!("{err}");
            }
        } else if !input.is_empty() {
            println!("unrecognized input {input:?} (hex digit, keypad label, or quit)");
        }

        print_display(&sim);
    }
}

fn print_display(sim: &Simulator) {
    let display = sim.display();
    println!("[{:>4}] [{:>2}]", display.address_field, display.data_field);
}
