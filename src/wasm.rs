//! WebAssembly bindings for the 8085 trainer-kit emulator.
//!
//! Provides a JavaScript-callable wrapper over [`Simulator`], shaped like
//! the physical kit: press keys, press command buttons, read the two
//! display fields. Built with `wasm-pack build --features wasm`.

use crate::display::DisplayState;
use crate::panel::Command;
use crate::simulator::Simulator;
use wasm_bindgen::prelude::*;

/// JavaScript-facing trainer kit.
///
/// ```js
/// const kit = new Emulator8085();
/// kit.press_command("EX MEM");
/// kit.press_key("2");
/// kit.press_command("NEXT");
/// document.querySelector("#addr").textContent = kit.display_addr();
/// ```
#[wasm_bindgen]
pub struct Emulator8085 {
    sim: Simulator,
}

#[wasm_bindgen]
impl Emulator8085 {
    /// Creates a powered-on kit showing the boot banner.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Emulator8085 {
        Emulator8085 {
            sim: Simulator::new(),
        }
    }

    /// Presses a digit key. Returns false for non-hex input.
    pub fn press_key(&mut self, key: char) -> bool {
        self.sim.key(key).is_ok()
    }

    /// Presses a command button by its keypad label
    /// ("RES", "EX MEM", "NEXT", "PREV", "GO", "EXEC").
    ///
    /// Returns false for an unrecognized label.
    pub fn press_command(&mut self, label: &str) -> bool {
        match Command::from_label(label) {
            Some(command) => {
                self.sim.command(command);
                true
            }
            None => false,
        }
    }

    /// Current address display field.
    pub fn display_addr(&self) -> String {
        self.display().address_field
    }

    /// Current data display field.
    pub fn display_data(&self) -> String {
        self.display().data_field
    }

    /// Current accumulator value.
    pub fn accumulator(&self) -> u8 {
        self.sim.registers().a()
    }

    /// Reads one memory cell (debug/monitor views).
    pub fn read_memory(&self, addr: u16) -> u8 {
        use crate::memory::MemoryBus;
        self.sim.memory().read(addr)
    }

    /// Writes one memory cell (program loaders).
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        use crate::memory::MemoryBus;
        self.sim.memory_mut().write(addr, value);
    }

    /// Snapshot of all 64KB as a Uint8Array (memory viewer panes).
    pub fn memory_snapshot(&self) -> js_sys::Uint8Array {
        use crate::memory::MemoryBus;
        let snapshot = js_sys::Uint8Array::new_with_length(0x10000);
        for addr in 0..=0xFFFFu16 {
            snapshot.set_index(addr as u32, self.sim.memory().read(addr));
        }
        snapshot
    }
}

impl Emulator8085 {
    fn display(&self) -> DisplayState {
        self.sim.display()
    }
}

impl Default for Emulator8085 {
    fn default() -> Self {
        Self::new()
    }
}
