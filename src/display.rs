//! # Display Formatting
//!
//! Pure functions turning panel and register state into the trainer kit's
//! two seven-segment display fields: a 4-character address field and a
//! 2-character data field. Rendering (segments, LEDs, HTML) is an external
//! collaborator's job; this module only decides what the fields say.
//!
//! ## Field contract
//!
//! | Panel state | Address field | Data field |
//! |---|---|---|
//! | Idle, no run since reset | `"UP"` | `"85"` (boot banner) |
//! | Idle after a run | `"E   "` | accumulator as hex |
//! | AddressEntry, empty buffer, via EX MEM | `"    "` | empty |
//! | AddressEntry, empty buffer, via GO | `"GO  "` | empty |
//! | AddressEntry, digits buffered | buffer, left-padded to 4 | empty |
//! | DataEntry, empty buffer | working address | byte at working address |
//! | DataEntry, digits buffered | working address | last 2 buffered digits |
//!
//! Hex is always uppercase and zero-padded.

use crate::memory::MemoryBus;
use crate::panel::{AddressPrompt, FrontPanel, Mode};
use crate::registers::RegisterFile;

/// The two display fields, ready for an external renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// 4-character address field.
    pub address_field: String,

    /// 2-character data field (empty during address entry).
    pub data_field: String,
}

/// Formats a 16-bit address as 4 uppercase hex digits.
///
/// # Examples
///
/// ```
/// use lib8085::format_addr;
///
/// assert_eq!(format_addr(0x0000), "0000");
/// assert_eq!(format_addr(0x3AB), "03AB");
/// ```
pub fn format_addr(addr: u16) -> String {
    format!("{addr:04X}")
}

/// Formats a byte as 2 uppercase hex digits.
///
/// # Examples
///
/// ```
/// use lib8085::format_byte;
///
/// assert_eq!(format_byte(0x0F), "0F");
/// assert_eq!(format_byte(0xFF), "FF");
/// ```
pub fn format_byte(value: u8) -> String {
    format!("{value:02X}")
}

/// Produces the display fields for the current machine state.
///
/// Pure: mutates nothing. Reads the byte at the working address (for the
/// DataEntry data field) but never writes.
///
/// # Examples
///
/// ```
/// use lib8085::{format_display, FlatMemory, FrontPanel, RegisterFile};
///
/// let memory = FlatMemory::new();
/// let registers = RegisterFile::new();
/// let panel = FrontPanel::new();
///
/// // Boot banner
/// let display = format_display(&panel, &registers, &memory);
/// assert_eq!(display.address_field, "UP");
/// assert_eq!(display.data_field, "85");
/// ```
pub fn format_display(
    panel: &FrontPanel,
    registers: &RegisterFile,
    memory: &dyn MemoryBus,
) -> DisplayState {
    match panel.mode {
        Mode::Idle => match panel.last_run {
            Some(_) => DisplayState {
                address_field: "E   ".to_string(),
                data_field: format_byte(registers.a()),
            },
            None => DisplayState {
                address_field: "UP".to_string(),
                data_field: "85".to_string(),
            },
        },

        Mode::AddressEntry => {
            let address_field = if panel.buffer.is_empty() {
                match panel.prompt {
                    AddressPrompt::Go => "GO  ".to_string(),
                    AddressPrompt::Blank => "    ".to_string(),
                }
            } else {
                format!("{:>4}", panel.buffer)
            };
            DisplayState {
                address_field,
                data_field: String::new(),
            }
        }

        Mode::DataEntry => {
            let data_field = if panel.buffer.is_empty() {
                format_byte(memory.read(panel.working_addr))
            } else {
                // Only the low byte of the buffer is committed, so only the
                // last two digits are shown.
                let split = panel.buffer.len().saturating_sub(2);
                panel.buffer[split..].to_string()
            };
            DisplayState {
                address_field: format_addr(panel.working_addr),
                data_field,
            }
        }
    }
}
