//! # 8085 Instruction Implementations
//!
//! This module contains the opcode handler implementations, organized by
//! category. Each handler is a standalone function matching
//! [`OpcodeHandler`](crate::opcodes::OpcodeHandler): it receives the
//! register file, the memory bus, and the operand bytes the core already
//! fetched, and returns whether execution continues or halts.
//!
//! ## Categories
//!
//! - **transfer**: data movement (MOV, MVI, STA)
//! - **arith**: arithmetic (ADD, ADI, SUB, INR, DCR)
//! - **control**: control flow (NOP, HLT, JMP, JZ, JNZ)
//!
//! ## Flag policy
//!
//! The original trainer kit's six-opcode baseline (HLT, MOV A,B, MVI A,
//! MVI B, ADD B, STA) computes no flags, and those handlers preserve that
//! behavior exactly. Every opcode added beyond the baseline follows the
//! 8085 convention: Zero on result == 0, Sign on bit 7, Parity on an even
//! ones-count, Carry on carry/borrow out of bit 7, AuxCarry on carry/borrow
//! out of bit 3 (INR/DCR leave Carry untouched, as on real silicon).

pub(crate) mod arith;
pub(crate) mod control;
pub(crate) mod transfer;
