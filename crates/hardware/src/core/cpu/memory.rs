//! Flat Memory.
//!
//! The E20 has a single 8192-cell memory shared by instructions and data
//! (von Neumann model). Every 16-bit address is reduced to its low 13 bits
//! before indexing, so out-of-range accesses cannot occur by construction.

use crate::common::constants::{ADDR_MASK, MEM_SIZE};
use crate::isa::sign_extend7;

/// Flat array of 8192 unsigned 16-bit cells.
///
/// Populated once by the loader; thereafter mutated only by `sw`.
#[derive(Debug, Clone)]
pub struct Memory {
    cells: Vec<u16>,
}

impl Memory {
    /// Creates a zero-filled memory image.
    pub fn new() -> Self {
        Self {
            cells: vec![0; MEM_SIZE],
        }
    }

    /// Reads the cell addressed by the low 13 bits of `addr`.
    #[inline]
    pub fn read(&self, addr: u16) -> u16 {
        self.cells[usize::from(addr & ADDR_MASK)]
    }

    /// Writes the cell addressed by the low 13 bits of `addr`.
    #[inline]
    pub fn write(&mut self, addr: u16, val: u16) {
        self.cells[usize::from(addr & ADDR_MASK)] = val;
    }

    /// Returns the full memory contents in address order.
    pub fn cells(&self) -> &[u16] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the effective address shared by `lw`, `sw`, and the cache model.
///
/// The signed-offset sum wraps modulo 65536, then the low 13 bits select the
/// memory cell.
#[inline]
pub fn effective_address(base: u16, imm7: u16) -> u16 {
    base.wrapping_add(sign_extend7(imm7)) & ADDR_MASK
}
