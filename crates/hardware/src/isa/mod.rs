//! E20 instruction set.
//!
//! Bit-field extraction, instruction decoding, and halt-sentinel detection
//! for the fixed 13-opcode E20 set.

/// Instruction decoding into the tagged shape union.
pub mod decode;

/// Bit-field extraction and sign extension over 16-bit words.
pub mod instruction;

pub use decode::{Instruction, ThreeRegOp, TwoRegOp, ZeroRegOp, decode, is_halt};
pub use instruction::{InstructionBits, sign_extend7};
