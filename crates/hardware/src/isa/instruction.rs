//! Instruction encoding utilities.
//!
//! Provides bit extraction for the three E20 instruction shapes and the 7-bit
//! sign extension rule shared by every consumer that needs a signed immediate.
//!
//! Bit positions follow the E20 manual: bit 0 is the most significant of the
//! 16-bit word, so the opcode occupies bits 0-2.

use crate::common::constants::WORD_BITS;

/// Bit mask for the register fields (3 bits each).
pub const REG_MASK: u16 = 0x7;
/// Bit mask for the funct field of three-register instructions (bits 12-15).
pub const FUNCT_MASK: u16 = 0xF;
/// Bit mask for the 7-bit immediate of two-register instructions (bits 9-15).
pub const IMM7_MASK: u16 = 0x7F;
/// Bit mask for the 13-bit immediate of zero-register instructions (bits 3-15).
pub const IMM13_MASK: u16 = 0x1FFF;

/// Threshold above which a 7-bit immediate is negative in two's complement.
const IMM7_SIGN_BOUND: u16 = 64;
/// Bits OR'd in to extend a negative 7-bit immediate to 16 bits (65408).
const IMM7_SIGN_EXTENSION: u16 = 0xFF80;

/// Trait for extracting instruction fields from an encoded 16-bit word.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-2).
    ///
    /// The opcode selects the instruction shape: `000` three-register,
    /// `010`/`011` zero-register, everything else two-register-plus-immediate.
    fn opcode(&self) -> u16;

    /// Extracts the first register field (bits 3-5).
    fn reg1(&self) -> usize;

    /// Extracts the second register field (bits 6-8).
    fn reg2(&self) -> usize;

    /// Extracts the third register field (bits 9-11, three-register shape only).
    fn reg3(&self) -> usize;

    /// Extracts the funct field (bits 12-15, three-register shape only).
    ///
    /// Selects among add/sub/or/and/slt/jr; unmapped values decode to the
    /// undefined instruction.
    fn funct(&self) -> u16;

    /// Extracts the unsigned 7-bit immediate (bits 9-15).
    ///
    /// Sign extension is applied only by consumers that need a signed value;
    /// see [`sign_extend7`].
    fn imm7(&self) -> u16;

    /// Extracts the 13-bit immediate (bits 3-15, zero-register shape only).
    fn imm13(&self) -> u16;

    /// Renders the word as its zero-padded 16-character bit string,
    /// most-significant bit first.
    fn bit_string(&self) -> String;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u16 {
        self >> 13
    }

    #[inline(always)]
    fn reg1(&self) -> usize {
        usize::from((self >> 10) & REG_MASK)
    }

    #[inline(always)]
    fn reg2(&self) -> usize {
        usize::from((self >> 7) & REG_MASK)
    }

    #[inline(always)]
    fn reg3(&self) -> usize {
        usize::from((self >> 4) & REG_MASK)
    }

    #[inline(always)]
    fn funct(&self) -> u16 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm7(&self) -> u16 {
        self & IMM7_MASK
    }

    #[inline(always)]
    fn imm13(&self) -> u16 {
        self & IMM13_MASK
    }

    fn bit_string(&self) -> String {
        format!("{self:0width$b}", width = WORD_BITS as usize)
    }
}

/// Sign-extends a 7-bit immediate to a full 16-bit two's-complement value.
///
/// Values below 64 are returned unchanged; values with bit 6 set gain the
/// upper nine bits (equivalently, 65408 is added). Bit-exact by contract:
/// `63` stays `63`, `64` becomes `65472`, `127` becomes `65535`.
#[inline]
pub fn sign_extend7(imm: u16) -> u16 {
    if imm >= IMM7_SIGN_BOUND {
        imm | IMM7_SIGN_EXTENSION
    } else {
        imm
    }
}
