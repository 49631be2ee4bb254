//! # Opcode Dispatch Table
//!
//! This module contains the 256-entry opcode table that serves as the single
//! source of truth for instruction dispatch. Each entry is a handler record:
//! mnemonic, operand-byte count, and the function implementing the
//! instruction's semantics.
//!
//! Extending the instruction set is mechanical: write a handler in the
//! appropriate `instructions` submodule and add one line to
//! [`build_table`]. The core loop never changes.
//!
//! ## Unknown opcodes
//!
//! Opcodes without an implemented entry share a single fallback record
//! (`known: false`, mnemonic `"???"`, zero operand bytes, no-op handler).
//! The execution core treats them as one-byte no-ops but records an
//! [`UnknownOpcode`](crate::UnknownOpcode) diagnostic for each fetch, so a
//! mistyped program is debuggable without halting execution.

use crate::instructions::{arith, control, transfer};
use crate::memory::MemoryBus;
use crate::registers::RegisterFile;

/// Maximum operand bytes any instruction consumes after its opcode byte.
pub const MAX_OPERAND_BYTES: usize = 2;

/// What an instruction handler tells the execution loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeOutcome {
    /// Keep fetching at the (possibly handler-modified) program counter.
    Continue,

    /// Terminal instruction: stop the run.
    Halt,
}

/// Instruction handler function.
///
/// Receives the register file, the memory bus, and the operand bytes that
/// the core already fetched (in fetch order: low byte first for 16-bit
/// operands). Handlers mutate registers/memory directly; jump handlers
/// write the program counter.
pub type OpcodeHandler =
    fn(registers: &mut RegisterFile, memory: &mut dyn MemoryBus, operands: &[u8]) -> OpcodeOutcome;

/// Handler record for a single opcode.
///
/// # Examples
///
/// ```
/// use lib8085::OPCODE_TABLE;
///
/// // Look up MVI A,d8 (opcode 0x3E)
/// let mvi_a = &OPCODE_TABLE[0x3E];
/// assert_eq!(mvi_a.mnemonic, "MVI A");
/// assert_eq!(mvi_a.operand_bytes, 1);
/// assert!(mvi_a.known);
///
/// // Undefined opcodes share the fallback record
/// let illegal = &OPCODE_TABLE[0x08];
/// assert_eq!(illegal.mnemonic, "???");
/// assert!(!illegal.known);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "MVI A", "HLT", "???" for undefined).
    pub mnemonic: &'static str,

    /// Operand bytes consumed after the opcode byte (0-2).
    pub operand_bytes: u8,

    /// Whether this opcode has defined semantics.
    ///
    /// `false` entries execute as no-ops; the core surfaces each fetch of
    /// one as a diagnostic.
    pub known: bool,

    /// Function implementing the instruction's effect.
    pub execute: OpcodeHandler,
}

/// No-op handler for undefined opcodes.
fn exec_unknown(
    _registers: &mut RegisterFile,
    _memory: &mut dyn MemoryBus,
    _operands: &[u8],
) -> OpcodeOutcome {
    OpcodeOutcome::Continue
}

/// Shared fallback record for every opcode without defined semantics.
const UNKNOWN: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "???",
    operand_bytes: 0,
    known: false,
    execute: exec_unknown,
};

const fn entry(mnemonic: &'static str, operand_bytes: u8, execute: OpcodeHandler) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operand_bytes,
        known: true,
        execute,
    }
}

const fn build_table() -> [OpcodeMetadata; 256] {
    let mut table = [UNKNOWN; 256];

    table[0x00] = entry("NOP", 0, control::exec_nop);
    table[0x06] = entry("MVI B", 1, transfer::exec_mvi_b);
    table[0x32] = entry("STA", 2, transfer::exec_sta);
    table[0x3C] = entry("INR A", 0, arith::exec_inr_a);
    table[0x3D] = entry("DCR A", 0, arith::exec_dcr_a);
    table[0x3E] = entry("MVI A", 1, transfer::exec_mvi_a);
    table[0x47] = entry("MOV B,A", 0, transfer::exec_mov_b_a);
    table[0x76] = entry("HLT", 0, control::exec_hlt);
    table[0x78] = entry("MOV A,B", 0, transfer::exec_mov_a_b);
    table[0x80] = entry("ADD B", 0, arith::exec_add_b);
    table[0x90] = entry("SUB B", 0, arith::exec_sub_b);
    table[0xC2] = entry("JNZ", 2, control::exec_jnz);
    table[0xC3] = entry("JMP", 2, control::exec_jmp);
    table[0xC6] = entry("ADI", 1, arith::exec_adi);
    table[0xCA] = entry("JZ", 2, control::exec_jz);

    table
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Index with the opcode byte to retrieve its handler record. Every entry is
/// executable: defined opcodes dispatch to their semantics, undefined ones
/// to the shared no-op fallback.
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();
