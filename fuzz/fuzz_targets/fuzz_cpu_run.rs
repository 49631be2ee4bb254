//! Fuzz target for the execution core.
//!
//! Loads an arbitrary memory image, seeds arbitrary register state, and
//! runs from an arbitrary start address. The loop must terminate within
//! the step budget and never panic.

#![no_main]

use arbitrary::Arbitrary;
use lib8085::{ExecutionCore, FlatMemory, RegisterFile, STEP_BUDGET};
use libfuzzer_sys::fuzz_target;

/// Arbitrary register seed for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    b: u8,
    c: u8,
    d: u8,
    e: u8,
    h: u8,
    l: u8,
    sp: u16,
    flag_z: bool,
    flag_s: bool,
    flag_p: bool,
    flag_cy: bool,
    flag_ac: bool,
}

/// Complete fuzz input.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    /// Program image deposited at the start address.
    image: Vec<u8>,
    start: u16,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(input.start, &input.image);

    let mut registers = RegisterFile::new();
    registers.set_a(input.registers.a);
    registers.set_b(input.registers.b);
    registers.set_c(input.registers.c);
    registers.set_d(input.registers.d);
    registers.set_e(input.registers.e);
    registers.set_h(input.registers.h);
    registers.set_l(input.registers.l);
    registers.set_sp(input.registers.sp);
    registers.set_flag_z(input.registers.flag_z);
    registers.set_flag_s(input.registers.flag_s);
    registers.set_flag_p(input.registers.flag_p);
    registers.set_flag_cy(input.registers.flag_cy);
    registers.set_flag_ac(input.registers.flag_ac);

    let result = ExecutionCore::new().run(&mut memory, &mut registers, input.start);

    // Sanity checks after execution (these should never fail)
    assert!(result.steps <= STEP_BUDGET);
    assert_eq!(result.accumulator, registers.a());
    assert!(result.unknown_opcodes.len() as u64 <= result.steps);
});
