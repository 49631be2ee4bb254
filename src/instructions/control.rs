//! # Control Flow Instructions
//!
//! - NOP: consume one step, change nothing
//! - HLT: terminal instruction, ends the run
//! - JMP a16: unconditional jump
//! - JZ a16 / JNZ a16: conditional jumps on the Zero flag
//!
//! Jump targets arrive as two operand bytes in fetch order (low, high).
//! A jump writes the program counter directly; the core resumes fetching
//! from the new address on the next step. None of these affect flags.

use crate::memory::MemoryBus;
use crate::opcodes::OpcodeOutcome;
use crate::registers::RegisterFile;

/// Executes NOP (0x00): no effect.
pub(crate) fn exec_nop(
    _registers: &mut RegisterFile,
    _memory: &mut dyn MemoryBus,
    _operands: &[u8],
) -> OpcodeOutcome {
    OpcodeOutcome::Continue
}

/// Executes HLT (0x76): stops the run.
pub(crate) fn exec_hlt(
    _registers: &mut RegisterFile,
    _memory: &mut dyn MemoryBus,
    _operands: &[u8],
) -> OpcodeOutcome {
    OpcodeOutcome::Halt
}

/// Executes JMP a16 (0xC3): PC ← a16.
pub(crate) fn exec_jmp(
    registers: &mut RegisterFile,
    _memory: &mut dyn MemoryBus,
    operands: &[u8],
) -> OpcodeOutcome {
    registers.pc = u16::from_le_bytes([operands[0], operands[1]]);
    OpcodeOutcome::Continue
}

/// Executes JZ a16 (0xCA): PC ← a16 if the Zero flag is set.
///
/// When the jump is not taken, the PC already points past the operand bytes
/// (the core advanced it during fetch), so execution falls through.
pub(crate) fn exec_jz(
    registers: &mut RegisterFile,
    _memory: &mut dyn MemoryBus,
    operands: &[u8],
) -> OpcodeOutcome {
    if registers.flag_z {
        registers.pc = u16::from_le_bytes([operands[0], operands[1]]);
    }
    OpcodeOutcome::Continue
}

/// Executes JNZ a16 (0xC2): PC ← a16 if the Zero flag is clear.
pub(crate) fn exec_jnz(
    registers: &mut RegisterFile,
    _memory: &mut dyn MemoryBus,
    operands: &[u8],
) -> OpcodeOutcome {
    if !registers.flag_z {
        registers.pc = u16::from_le_bytes([operands[0], operands[1]]);
    }
    OpcodeOutcome::Continue
}
