//! # Data Transfer Instructions
//!
//! Register-to-register moves, immediate loads, and the direct store:
//! - MOV A,B / MOV B,A: register copies
//! - MVI A,d8 / MVI B,d8: load immediate byte
//! - STA a16: store accumulator to a direct address
//!
//! Data transfers never affect flags.

use crate::memory::MemoryBus;
use crate::opcodes::OpcodeOutcome;
use crate::registers::RegisterFile;

/// Executes MOV A,B (0x78): A ← B.
pub(crate) fn exec_mov_a_b(
    registers: &mut RegisterFile,
    _memory: &mut dyn MemoryBus,
    _operands: &[u8],
) -> OpcodeOutcome {
    registers.a = registers.b;
    OpcodeOutcome::Continue
}

/// Executes MOV B,A (0x47): B ← A.
pub(crate) fn exec_mov_b_a(
    registers: &mut RegisterFile,
    _memory: &mut dyn MemoryBus,
    _operands: &[u8],
) -> OpcodeOutcome {
    registers.b = registers.a;
    OpcodeOutcome::Continue
}

/// Executes MVI A,d8 (0x3E): A ← immediate operand byte.
pub(crate) fn exec_mvi_a(
    registers: &mut RegisterFile,
    _memory: &mut dyn MemoryBus,
    operands: &[u8],
) -> OpcodeOutcome {
    registers.a = operands[0];
    OpcodeOutcome::Continue
}

/// Executes MVI B,d8 (0x06): B ← immediate operand byte.
pub(crate) fn exec_mvi_b(
    registers: &mut RegisterFile,
    _memory: &mut dyn MemoryBus,
    operands: &[u8],
) -> OpcodeOutcome {
    registers.b = operands[0];
    OpcodeOutcome::Continue
}

/// Executes STA a16 (0x32): Memory[a16] ← A.
///
/// The operand bytes arrive in fetch order, low byte first. A program may
/// store over its own bytes (including the STA operands just consumed);
/// that is legal and simply changes what a later fetch sees.
pub(crate) fn exec_sta(
    registers: &mut RegisterFile,
    memory: &mut dyn MemoryBus,
    operands: &[u8],
) -> OpcodeOutcome {
    let addr = u16::from_le_bytes([operands[0], operands[1]]);
    memory.write(addr, registers.a);
    OpcodeOutcome::Continue
}
