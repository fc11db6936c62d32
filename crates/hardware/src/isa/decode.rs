//! E20 Instruction Decoder.
//!
//! Classifies a 16-bit word into one of the three instruction shapes by its
//! leading 3 bits and extracts the operand fields. Decode is deliberately
//! permissive: an opcode/funct combination outside the table yields
//! [`Instruction::Undefined`], which executes as a no-op that advances the
//! program counter. A malformed word is never an error.

use std::fmt;

use crate::common::constants::ADDR_MASK;
use crate::isa::instruction::InstructionBits;

/// Opcode of the three-register shape.
const OP_THREE_REG: u16 = 0b000;
/// Opcode of `j`, also the leading bits of the halt sentinel.
const OP_J: u16 = 0b010;
/// Opcode of `jal`.
const OP_JAL: u16 = 0b011;
/// Opcode of `addi`.
const OP_ADDI: u16 = 0b001;
/// Opcode of `lw`.
const OP_LW: u16 = 0b100;
/// Opcode of `sw`.
const OP_SW: u16 = 0b101;
/// Opcode of `jeq`.
const OP_JEQ: u16 = 0b110;
/// Opcode of `slti`.
const OP_SLTI: u16 = 0b111;

/// Operations of the three-register shape, selected by the 4-bit funct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreeRegOp {
    /// `reg3 = reg1 + reg2` (mod 65536).
    Add,
    /// `reg3 = reg1 - reg2` (mod 65536).
    Sub,
    /// `reg3 = reg1 | reg2`.
    Or,
    /// `reg3 = reg1 & reg2`.
    And,
    /// `reg3 = 1` if `reg1 < reg2` (unsigned), else `0`.
    Slt,
    /// `pc = reg1`.
    Jr,
}

/// Operations of the two-register-plus-immediate shape, selected by opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoRegOp {
    /// `reg2 = reg1 + sign_extend(imm)` (mod 65536).
    Addi,
    /// `reg2 = mem[low13(reg1 + sign_extend(imm))]`.
    Lw,
    /// `mem[low13(reg1 + sign_extend(imm))] = reg2`.
    Sw,
    /// `pc = pc + 1 + sign_extend(imm)` if `reg1 == reg2`.
    Jeq,
    /// `reg2 = 1` if `reg1 < sign_extend(imm)` (unsigned), else `0`.
    Slti,
}

/// Operations of the zero-register shape, selected by opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroRegOp {
    /// `pc = imm`.
    J,
    /// `$7 = pc + 1`; `pc = imm`.
    Jal,
}

/// A decoded instruction, tagged by shape.
///
/// The exhaustive variant set replaces the implicit falls-through-to-undefined
/// behavior of a value match with an explicit `Undefined` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Opcode `000`: two source registers and one destination register.
    ThreeReg {
        /// Operation selected by the funct field.
        op: ThreeRegOp,
        /// First source register.
        reg1: usize,
        /// Second source register.
        reg2: usize,
        /// Destination register (source for `jr`).
        reg3: usize,
    },
    /// Opcodes `001`/`100`/`101`/`110`/`111`: two registers and a 7-bit
    /// immediate (unsigned as carried; consumers sign-extend as needed).
    TwoRegImm {
        /// Operation selected by the opcode.
        op: TwoRegOp,
        /// First register (base/source).
        reg1: usize,
        /// Second register (destination/source/comparand).
        reg2: usize,
        /// Raw 7-bit immediate.
        imm: u16,
    },
    /// Opcodes `010`/`011`: a 13-bit absolute jump target.
    ZeroRegImm {
        /// Operation selected by the opcode.
        op: ZeroRegOp,
        /// 13-bit immediate (jump target).
        imm: u16,
    },
    /// Any opcode/funct combination outside the table; executes as a no-op.
    Undefined,
}

/// Decodes a 16-bit word into its instruction shape and operand fields.
pub fn decode(word: u16) -> Instruction {
    match word.opcode() {
        OP_THREE_REG => {
            let op = match word.funct() {
                0b0000 => ThreeRegOp::Add,
                0b0001 => ThreeRegOp::Sub,
                0b0010 => ThreeRegOp::Or,
                0b0011 => ThreeRegOp::And,
                0b0100 => ThreeRegOp::Slt,
                0b1000 => ThreeRegOp::Jr,
                _ => return Instruction::Undefined,
            };
            Instruction::ThreeReg {
                op,
                reg1: word.reg1(),
                reg2: word.reg2(),
                reg3: word.reg3(),
            }
        }
        OP_J | OP_JAL => {
            let op = if word.opcode() == OP_J {
                ZeroRegOp::J
            } else {
                ZeroRegOp::Jal
            };
            Instruction::ZeroRegImm {
                op,
                imm: word.imm13(),
            }
        }
        opcode => {
            let op = match opcode {
                OP_ADDI => TwoRegOp::Addi,
                OP_LW => TwoRegOp::Lw,
                OP_SW => TwoRegOp::Sw,
                OP_JEQ => TwoRegOp::Jeq,
                OP_SLTI => TwoRegOp::Slti,
                // All eight opcode values are covered above; unreachable only
                // by a widened opcode, which cannot come from a 3-bit shift.
                _ => return Instruction::Undefined,
            };
            Instruction::TwoRegImm {
                op,
                reg1: word.reg1(),
                reg2: word.reg2(),
                imm: word.imm7(),
            }
        }
    }
}

/// Reports whether `word` is the halt sentinel for the given program counter.
///
/// The sentinel is a jump to self: opcode `010` followed by the 13-bit binary
/// representation of the current program counter. Checked before execution,
/// every step.
#[inline]
pub fn is_halt(word: u16, pc: u16) -> bool {
    word == (OP_J << 13) | (pc & ADDR_MASK)
}

impl fmt::Display for Instruction {
    /// Formats the instruction as an assembly-style mnemonic for tracing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreeReg {
                op,
                reg1,
                reg2,
                reg3,
            } => match op {
                ThreeRegOp::Add => write!(f, "add ${reg3}, ${reg1}, ${reg2}"),
                ThreeRegOp::Sub => write!(f, "sub ${reg3}, ${reg1}, ${reg2}"),
                ThreeRegOp::Or => write!(f, "or ${reg3}, ${reg1}, ${reg2}"),
                ThreeRegOp::And => write!(f, "and ${reg3}, ${reg1}, ${reg2}"),
                ThreeRegOp::Slt => write!(f, "slt ${reg3}, ${reg1}, ${reg2}"),
                ThreeRegOp::Jr => write!(f, "jr ${reg1}"),
            },
            Self::TwoRegImm {
                op,
                reg1,
                reg2,
                imm,
            } => match op {
                TwoRegOp::Addi => write!(f, "addi ${reg2}, ${reg1}, {imm}"),
                TwoRegOp::Lw => write!(f, "lw ${reg2}, {imm}(${reg1})"),
                TwoRegOp::Sw => write!(f, "sw ${reg2}, {imm}(${reg1})"),
                TwoRegOp::Jeq => write!(f, "jeq ${reg1}, ${reg2}, {imm}"),
                TwoRegOp::Slti => write!(f, "slti ${reg2}, ${reg1}, {imm}"),
            },
            Self::ZeroRegImm { op, imm } => match op {
                ZeroRegOp::J => write!(f, "j {imm}"),
                ZeroRegOp::Jal => write!(f, "jal {imm}"),
            },
            Self::Undefined => write!(f, "undefined"),
        }
    }
}
