//! Tests for the ADI (Add Immediate) instruction.
//!
//! ADI d8 (0xC6): A ← A + d8 with the full flag set (Z, S, P, CY, AC).

use lib8085::{ExecutionCore, FlatMemory, RegisterFile};

fn run_adi(a: u8, value: u8) -> RegisterFile {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &[0xC6, value, 0x76]);

    let mut registers = RegisterFile::new();
    registers.set_a(a);
    ExecutionCore::new().run(&mut memory, &mut registers, 0x0000);
    registers
}

#[test]
fn test_adi_adds_immediate() {
    let registers = run_adi(0x10, 0x22);
    assert_eq!(registers.a(), 0x32);
}

#[test]
fn test_adi_sets_carry_on_overflow() {
    let registers = run_adi(0xF0, 0x20);

    assert_eq!(registers.a(), 0x10);
    assert!(registers.flag_cy());
}

#[test]
fn test_adi_clears_carry_without_overflow() {
    let registers = run_adi(0x10, 0x10);
    assert!(!registers.flag_cy());
}

#[test]
fn test_adi_sets_aux_carry_on_nibble_overflow() {
    // 0x0F + 0x01 carries out of bit 3 but not bit 7
    let registers = run_adi(0x0F, 0x01);

    assert_eq!(registers.a(), 0x10);
    assert!(registers.flag_ac());
    assert!(!registers.flag_cy());
}

#[test]
fn test_adi_zero_result_sets_zero_and_parity() {
    // 0xFF + 0x01 = 0x00 with carry
    let registers = run_adi(0xFF, 0x01);

    assert_eq!(registers.a(), 0x00);
    assert!(registers.flag_z());
    assert!(registers.flag_p(), "zero has an even ones-count");
    assert!(registers.flag_cy());
    assert!(registers.flag_ac());
    assert!(!registers.flag_s());
}

#[test]
fn test_adi_sets_sign_on_bit7() {
    let registers = run_adi(0x70, 0x20);

    assert_eq!(registers.a(), 0x90);
    assert!(registers.flag_s());
}

#[test]
fn test_adi_parity_on_odd_ones_count() {
    // 0x00 + 0x07 = 0b0000_0111: three set bits, parity flag clear
    let registers = run_adi(0x00, 0x07);

    assert!(!registers.flag_p());
}
