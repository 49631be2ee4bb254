//! # Simulator Context
//!
//! An owning context that bundles the machine: flat memory, register file,
//! and front panel behind a single keypad-shaped API. Callers that want to
//! wire the pieces themselves (custom memory, shared registers) can use the
//! parts directly; the wasm bindings and the demo REPL sit on top of this.

use crate::cpu::ExecutionResult;
use crate::display::{format_display, DisplayState};
use crate::memory::FlatMemory;
use crate::panel::{Command, FrontPanel};
use crate::registers::RegisterFile;
use crate::PanelError;

/// A complete trainer kit: memory, registers, and front panel.
///
/// # Examples
///
/// ```
/// use lib8085::{Command, Simulator};
///
/// let mut sim = Simulator::new();
///
/// // Deposit MVI A,5; HLT at address 0 and run it
/// sim.command(Command::ExamineMemory);
/// sim.key('0').unwrap();
/// sim.command(Command::Next);
/// for key in ['3', 'E'] { sim.key(key).unwrap(); }
/// sim.command(Command::Next);
/// for key in ['0', '5'] { sim.key(key).unwrap(); }
/// sim.command(Command::Next);
/// for key in ['7', '6'] { sim.key(key).unwrap(); }
/// sim.command(Command::Next);
///
/// sim.command(Command::ExamineMemory);
/// sim.key('0').unwrap();
/// let result = sim.command(Command::Execute).expect("program ran");
/// assert_eq!(result.accumulator, 5);
///
/// let display = sim.display();
/// assert_eq!(display.address_field, "E   ");
/// assert_eq!(display.data_field, "05");
/// ```
#[derive(Default)]
pub struct Simulator {
    memory: FlatMemory,
    registers: RegisterFile,
    panel: FrontPanel,
}

impl Simulator {
    /// Creates a powered-on kit: zeroed memory, power-on registers, panel
    /// showing the boot banner.
    pub fn new() -> Self {
        Self {
            memory: FlatMemory::new(),
            registers: RegisterFile::new(),
            panel: FrontPanel::new(),
        }
    }

    /// Forwards a digit key to the front panel.
    pub fn key(&mut self, key: char) -> Result<(), PanelError> {
        self.panel.handle_key(key)
    }

    /// Forwards a command key to the front panel.
    ///
    /// Returns `Some(result)` when the command was an Execute that ran.
    pub fn command(&mut self, command: Command) -> Option<ExecutionResult> {
        self.panel
            .handle_command(command, &mut self.memory, &mut self.registers)
    }

    /// Formats the current display fields.
    pub fn display(&self) -> DisplayState {
        format_display(&self.panel, &self.registers, &self.memory)
    }

    /// Borrows the memory.
    pub fn memory(&self) -> &FlatMemory {
        &self.memory
    }

    /// Mutably borrows the memory (program loaders, tests).
    pub fn memory_mut(&mut self) -> &mut FlatMemory {
        &mut self.memory
    }

    /// Borrows the register file.
    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// Borrows the front panel.
    pub fn panel(&self) -> &FrontPanel {
        &self.panel
    }
}
