//! Display formatting tests
//!
//! Verifies the full placeholder contract for both seven-segment fields
//! across every panel state.

use lib8085::{
    format_addr, format_byte, format_display, Command, FlatMemory, FrontPanel, MemoryBus,
    RegisterFile,
};

struct Kit {
    memory: FlatMemory,
    registers: RegisterFile,
    panel: FrontPanel,
}

fn setup() -> Kit {
    Kit {
        memory: FlatMemory::new(),
        registers: RegisterFile::new(),
        panel: FrontPanel::new(),
    }
}

impl Kit {
    fn cmd(&mut self, command: Command) {
        self.panel
            .handle_command(command, &mut self.memory, &mut self.registers);
    }

    fn keys(&mut self, digits: &str) {
        for key in digits.chars() {
            self.panel.handle_key(key).expect("valid hex digit");
        }
    }

    fn fields(&self) -> (String, String) {
        let display = format_display(&self.panel, &self.registers, &self.memory);
        (display.address_field, display.data_field)
    }
}

// ========== Idle ==========

#[test]
fn test_boot_banner() {
    let kit = setup();
    assert_eq!(kit.fields(), ("UP".to_string(), "85".to_string()));
}

#[test]
fn test_banner_returns_after_reset() {
    let mut kit = setup();
    kit.memory.write(0x0000, 0x76);
    kit.cmd(Command::ExamineMemory);
    kit.cmd(Command::Execute);
    kit.cmd(Command::Reset);

    assert_eq!(kit.fields(), ("UP".to_string(), "85".to_string()));
}

#[test]
fn test_run_result_shown_after_execute() {
    let mut kit = setup();
    kit.memory.load(0x0000, &[0x3E, 0x4D, 0x76]); // MVI A,0x4D; HLT

    kit.cmd(Command::ExamineMemory);
    kit.cmd(Command::Execute);

    assert_eq!(kit.fields(), ("E   ".to_string(), "4D".to_string()));
}

// ========== Address Entry ==========

#[test]
fn test_examine_memory_blanks_address_field() {
    let mut kit = setup();
    kit.cmd(Command::ExamineMemory);

    assert_eq!(kit.fields(), ("    ".to_string(), String::new()));
}

#[test]
fn test_go_prompt() {
    let mut kit = setup();
    kit.cmd(Command::Go);

    assert_eq!(kit.fields(), ("GO  ".to_string(), String::new()));
}

#[test]
fn test_address_digits_padded_left() {
    let mut kit = setup();
    kit.cmd(Command::ExamineMemory);

    kit.keys("2");
    assert_eq!(kit.fields().0, "   2");

    kit.keys("0");
    assert_eq!(kit.fields().0, "  20");

    kit.keys("00");
    assert_eq!(kit.fields().0, "2000");
}

#[test]
fn test_go_prompt_replaced_by_typed_digits() {
    let mut kit = setup();
    kit.cmd(Command::Go);
    kit.keys("A");

    assert_eq!(kit.fields().0, "   A");
}

// ========== Data Entry ==========

#[test]
fn test_data_entry_shows_address_and_cell_contents() {
    let mut kit = setup();
    kit.memory.write(0x1234, 0xC9);

    kit.cmd(Command::ExamineMemory);
    kit.keys("1234");
    kit.cmd(Command::Next);

    assert_eq!(kit.fields(), ("1234".to_string(), "C9".to_string()));
}

#[test]
fn test_data_entry_shows_typed_digits() {
    let mut kit = setup();
    kit.cmd(Command::ExamineMemory);
    kit.keys("1000");
    kit.cmd(Command::Next);

    kit.keys("7");
    assert_eq!(kit.fields().1, "7");

    kit.keys("6");
    assert_eq!(kit.fields().1, "76");
}

#[test]
fn test_data_entry_shows_last_two_of_long_buffer() {
    let mut kit = setup();
    kit.cmd(Command::ExamineMemory);
    kit.cmd(Command::Next);

    kit.keys("1234");
    assert_eq!(kit.fields().1, "34");
}

#[test]
fn test_data_field_follows_working_address() {
    let mut kit = setup();
    kit.memory.write(0x0000, 0xAA);
    kit.memory.write(0x0001, 0xBB);

    kit.cmd(Command::ExamineMemory);
    kit.cmd(Command::Next);
    assert_eq!(kit.fields(), ("0000".to_string(), "AA".to_string()));

    kit.cmd(Command::Next);
    assert_eq!(kit.fields(), ("0001".to_string(), "BB".to_string()));
}

// ========== Helpers ==========

#[test]
fn test_format_helpers_uppercase_and_pad() {
    assert_eq!(format_addr(0x0), "0000");
    assert_eq!(format_addr(0xfade), "FADE");
    assert_eq!(format_byte(0x0), "00");
    assert_eq!(format_byte(0xfe), "FE");
}
