//! Tests for the MVI immediate-load instructions.
//!
//! MVI A,d8 (0x3E) and MVI B,d8 (0x06): one operand byte each, no flags.

use lib8085::{ExecutionCore, FlatMemory, RegisterFile, RunOutcome};

#[test]
fn test_mvi_a_loads_immediate() {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &[0x3E, 0x9A, 0x76]);

    let mut registers = RegisterFile::new();
    let result = ExecutionCore::new().run(&mut memory, &mut registers, 0x0000);

    assert_eq!(result.accumulator, 0x9A);
}

#[test]
fn test_mvi_b_loads_immediate() {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &[0x06, 0x3C, 0x76]);

    let mut registers = RegisterFile::new();
    ExecutionCore::new().run(&mut memory, &mut registers, 0x0000);

    assert_eq!(registers.b(), 0x3C);
    assert_eq!(registers.a(), 0x00, "MVI B must not touch A");
}

#[test]
fn test_mvi_operand_is_not_decoded_as_opcode() {
    let mut memory = FlatMemory::new();
    // Operand 0x76 is HLT's encoding, but as MVI data it must load, not halt
    memory.load(0x0000, &[0x3E, 0x76, 0x76]);

    let mut registers = RegisterFile::new();
    let result = ExecutionCore::new().run(&mut memory, &mut registers, 0x0000);

    assert_eq!(result.accumulator, 0x76);
    assert_eq!(result.steps, 2, "MVI then the real HLT");
    assert_eq!(result.outcome, RunOutcome::Halted);
}

#[test]
fn test_consecutive_mvi_overwrite() {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &[0x3E, 0x01, 0x3E, 0x02, 0x76]);

    let mut registers = RegisterFile::new();
    let result = ExecutionCore::new().run(&mut memory, &mut registers, 0x0000);

    assert_eq!(result.accumulator, 0x02);
}

#[test]
fn test_mvi_does_not_touch_flags() {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &[0x3E, 0x00, 0x76]); // load zero

    let mut registers = RegisterFile::new();
    ExecutionCore::new().run(&mut memory, &mut registers, 0x0000);

    assert!(!registers.flag_z(), "MVI of zero must not set Zero flag");
}
