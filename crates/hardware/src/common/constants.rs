//! Machine-wide constants for the E20 architecture.

/// Number of architectural general-purpose registers.
pub const NUM_REGS: usize = 8;

/// Number of 16-bit memory cells (the E20 has a 13-bit address space).
pub const MEM_SIZE: usize = 1 << 13;

/// Mask reducing a 16-bit address to the 13 bits that index memory.
pub const ADDR_MASK: u16 = 0x1FFF;

/// Register that receives the return address on `jal`.
pub const LINK_REG: usize = 7;

/// Width of a machine word in bits.
pub const WORD_BITS: u32 = 16;
