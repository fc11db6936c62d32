//! E20 Register File.
//!
//! This module implements the architectural register file. It performs the
//! following:
//! 1. **Storage:** Maintains 8 unsigned 16-bit registers (`$0`-`$7`).
//! 2. **Invariant Enforcement:** Ensures that register `$0` is hardwired to
//!    zero; every write targeting it is suppressed, with no exceptions.

use crate::common::constants::NUM_REGS;

/// Architectural register file.
///
/// Contains 8 general-purpose registers holding unsigned 16-bit values.
/// Register `$0` is hardwired to zero and cannot be modified.
#[derive(Debug, Clone)]
pub struct RegisterFile {
    regs: [u16; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7). Register `$0` always returns 0.
    pub fn read(&self, idx: usize) -> u16 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a register.
    ///
    /// Writes to `$0` are ignored, including the unconditional zero written
    /// by `slti`'s false branch.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The 16-bit value to write.
    pub fn write(&mut self, idx: usize, val: u16) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns all register values in index order.
    pub fn snapshot(&self) -> [u16; NUM_REGS] {
        self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
