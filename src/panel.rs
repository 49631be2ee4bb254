//! # Front Panel State Machine
//!
//! This module contains the hex-keypad input state machine: the part of the
//! trainer kit that turns keystrokes into memory contents and run commands.
//!
//! ## States and events
//!
//! The panel is in one of three modes - `Idle` (boot/reset), `AddressEntry`,
//! or `DataEntry` - and reacts to two event kinds: hex digit keys and
//! command keys. The full transition relation:
//!
//! | State | Event | Action | Next state |
//! |---|---|---|---|
//! | any | Reset | clear registers, buffer, working address | Idle |
//! | Idle | digit | ignored | Idle |
//! | AddressEntry/DataEntry | digit | append, keep last 4 | unchanged |
//! | any | ExamineMemory | clear buffer | AddressEntry |
//! | AddressEntry | Next | commit buffer as working address (empty = 0) | DataEntry |
//! | DataEntry | Next | write buffer byte if non-empty, address += 1 | DataEntry |
//! | DataEntry | Previous | write buffer byte if non-empty, address -= 1 | DataEntry |
//! | other | Previous | ignored | unchanged |
//! | any | Go | clear buffer | AddressEntry |
//! | AddressEntry/DataEntry | Execute | resolve start address, run program | Idle |
//! | Idle | Execute | ignored | Idle |
//!
//! Working-address arithmetic wraps modulo 2^16. The input buffer holds at
//! most 4 hex digits; a fifth keystroke discards the oldest (FIFO), so the
//! buffer always holds the most recent 4 digits entered.
//!
//! Keys are validated at this boundary: anything that is not an ASCII hex
//! digit is rejected with [`PanelError::InvalidDigit`] before it can reach
//! the buffer. External keypads deliver pre-filtered digits, but the check
//! keeps arbitrary hosts (a REPL, a web page) honest.

use crate::cpu::{ExecutionCore, ExecutionResult};
use crate::memory::MemoryBus;
use crate::registers::RegisterFile;
use crate::PanelError;

/// Front panel mode tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Boot/reset state; digit keys and Execute are ignored.
    Idle,

    /// Accumulating a 16-bit address in the buffer.
    AddressEntry,

    /// Depositing bytes at the working address.
    DataEntry,
}

/// Command key events, one per keypad command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// RES: reset registers and panel state (memory survives).
    Reset,

    /// EX MEM: begin address entry.
    ExamineMemory,

    /// NEXT: commit the buffer and advance.
    Next,

    /// PREV: commit the buffer and step back.
    Previous,

    /// GO: begin address entry with the GO prompt.
    Go,

    /// EXEC: run the program at the resolved start address.
    Execute,
}

impl Command {
    /// Maps a keypad label ("RES", "EX MEM", "NEXT", "PREV", "GO", "EXEC")
    /// to its command, or `None` for an unrecognized label.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8085::Command;
    ///
    /// assert_eq!(Command::from_label("EX MEM"), Some(Command::ExamineMemory));
    /// assert_eq!(Command::from_label("COFFEE"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Command> {
        match label {
            "RES" => Some(Command::Reset),
            "EX MEM" => Some(Command::ExamineMemory),
            "NEXT" => Some(Command::Next),
            "PREV" => Some(Command::Previous),
            "GO" => Some(Command::Go),
            "EXEC" => Some(Command::Execute),
            _ => None,
        }
    }
}

/// How the panel entered AddressEntry, for display purposes only.
///
/// ExamineMemory shows a blank address field while the buffer is empty; Go
/// shows the `GO` prompt. The FSM itself treats both identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddressPrompt {
    Blank,
    Go,
}

/// The front panel input state machine.
///
/// Owns only panel state (mode, working address, input buffer) and the
/// execution core it triggers; memory and registers belong to the caller and
/// are borrowed per event.
///
/// # Examples
///
/// Deposit a program and run it:
///
/// ```
/// use lib8085::{Command, FlatMemory, FrontPanel, RegisterFile};
///
/// let mut memory = FlatMemory::new();
/// let mut registers = RegisterFile::new();
/// let mut panel = FrontPanel::new();
///
/// // EX MEM, address 0000, NEXT
/// panel.handle_command(Command::ExamineMemory, &mut memory, &mut registers);
/// panel.handle_key('0').unwrap();
/// panel.handle_command(Command::Next, &mut memory, &mut registers);
///
/// // Deposit MVI A,7; HLT
/// for key in ['3', 'E'] { panel.handle_key(key).unwrap(); }
/// panel.handle_command(Command::Next, &mut memory, &mut registers);
/// for key in ['0', '7'] { panel.handle_key(key).unwrap(); }
/// panel.handle_command(Command::Next, &mut memory, &mut registers);
/// for key in ['7', '6'] { panel.handle_key(key).unwrap(); }
/// panel.handle_command(Command::Next, &mut memory, &mut registers);
///
/// // EXEC in DataEntry would start at the working address (now 0x0003),
/// // so return to address entry and run from 0.
/// panel.handle_command(Command::ExamineMemory, &mut memory, &mut registers);
/// panel.handle_key('0').unwrap();
/// let result = panel
///     .handle_command(Command::Execute, &mut memory, &mut registers)
///     .expect("EXEC in AddressEntry runs");
/// assert_eq!(result.accumulator, 7);
/// ```
#[derive(Debug)]
pub struct FrontPanel {
    core: ExecutionCore,
    pub(crate) mode: Mode,
    pub(crate) working_addr: u16,
    pub(crate) buffer: String,
    pub(crate) prompt: AddressPrompt,
    pub(crate) last_run: Option<u8>,
}

impl FrontPanel {
    /// Creates a panel in the Idle (boot) state with a default-budget core.
    pub fn new() -> Self {
        Self::with_core(ExecutionCore::new())
    }

    /// Creates a panel around a custom execution core.
    pub fn with_core(core: ExecutionCore) -> Self {
        Self {
            core,
            mode: Mode::Idle,
            working_addr: 0x0000,
            buffer: String::new(),
            prompt: AddressPrompt::Blank,
            last_run: None,
        }
    }

    /// Returns the current mode tag.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the working address.
    ///
    /// Meaningful after the first address commit; starts at 0x0000.
    pub fn working_addr(&self) -> u16 {
        self.working_addr
    }

    /// Returns the current input buffer contents (uppercase hex digits).
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns the accumulator from the most recent Execute, if any run has
    /// happened since the last Reset.
    pub fn last_run(&self) -> Option<u8> {
        self.last_run
    }

    /// Handles a digit key event.
    ///
    /// Rejects non-hex characters with [`PanelError::InvalidDigit`]. Valid
    /// digits are stored uppercase; in Idle mode they are accepted and
    /// discarded (the kit's keypad is dead until EX MEM or GO).
    pub fn handle_key(&mut self, key: char) -> Result<(), PanelError> {
        if !key.is_ascii_hexdigit() {
            return Err(PanelError::InvalidDigit(key));
        }

        if self.mode == Mode::Idle {
            log::trace!("key '{}' ignored in Idle", key);
            return Ok(());
        }

        self.buffer.push(key.to_ascii_uppercase());
        // FIFO truncation: keep the most recent 4 digits
        while self.buffer.len() > 4 {
            self.buffer.remove(0);
        }
        log::trace!("buffer now {:?}", self.buffer);
        Ok(())
    }

    /// Handles a command key event.
    ///
    /// Borrows the machine (memory + registers) for the duration of the
    /// event. Returns `Some(result)` only when an Execute actually ran a
    /// program; every other command returns `None`.
    pub fn handle_command<M: MemoryBus>(
        &mut self,
        command: Command,
        memory: &mut M,
        registers: &mut RegisterFile,
    ) -> Option<ExecutionResult> {
        log::trace!("command {:?} in {:?}", command, self.mode);
        match command {
            Command::Reset => {
                registers.reset();
                self.mode = Mode::Idle;
                self.working_addr = 0x0000;
                self.buffer.clear();
                self.prompt = AddressPrompt::Blank;
                self.last_run = None;
                None
            }

            Command::ExamineMemory => {
                self.buffer.clear();
                self.prompt = AddressPrompt::Blank;
                self.mode = Mode::AddressEntry;
                None
            }

            Command::Next => {
                match self.mode {
                    Mode::AddressEntry => {
                        self.working_addr = self.buffer_value();
                        self.buffer.clear();
                        self.mode = Mode::DataEntry;
                    }
                    Mode::DataEntry => {
                        self.commit_data(memory);
                        self.working_addr = self.working_addr.wrapping_add(1);
                    }
                    Mode::Idle => {}
                }
                None
            }

            Command::Previous => {
                if self.mode == Mode::DataEntry {
                    self.commit_data(memory);
                    self.working_addr = self.working_addr.wrapping_sub(1);
                }
                None
            }

            Command::Go => {
                self.buffer.clear();
                self.prompt = AddressPrompt::Go;
                self.mode = Mode::AddressEntry;
                None
            }

            Command::Execute => {
                let start = match self.mode {
                    Mode::Idle => return None,
                    Mode::AddressEntry => self.buffer_value(),
                    Mode::DataEntry => self.working_addr,
                };
                log::debug!("EXEC from 0x{:04X}", start);

                let result = self.core.run(memory, registers, start);
                self.last_run = Some(result.accumulator);
                self.buffer.clear();
                self.mode = Mode::Idle;
                Some(result)
            }
        }
    }

    /// Parses the buffer as hex; empty commits as 0.
    ///
    /// The buffer invariant (at most 4 validated hex digits) makes the parse
    /// total and in range.
    fn buffer_value(&self) -> u16 {
        if self.buffer.is_empty() {
            0
        } else {
            u16::from_str_radix(&self.buffer, 16).unwrap_or(0)
        }
    }

    /// Writes the buffered byte at the working address, then clears the
    /// buffer. A commit with an empty buffer writes nothing (examine-only
    /// stepping).
    fn commit_data<M: MemoryBus>(&mut self, memory: &mut M) {
        if !self.buffer.is_empty() {
            let value = (self.buffer_value() & 0x00FF) as u8;
            memory.write(self.working_addr, value);
        }
        self.buffer.clear();
    }
}

impl Default for FrontPanel {
    fn default() -> Self {
        Self::new()
    }
}
