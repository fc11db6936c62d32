//! CPU Core Definition.
//!
//! This module defines the `Cpu` structure holding the architectural state of
//! the E20: the register file and the program counter. The state is an owned
//! aggregate passed by exclusive mutable reference into the execution engine
//! and cache model, so independent simulator instances never share state.

/// Instruction execution (the effect table for all 13 operations).
pub mod execution;

/// Flat memory and effective-address computation.
pub mod memory;

use crate::common::RegisterFile;

/// Architectural CPU state.
///
/// The program counter is carried as a full 16-bit value; only its low 13
/// bits index memory. All pc arithmetic wraps modulo 65536.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// General-purpose registers (`$0` hardwired to zero).
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: u16,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and the program counter at 0.
    pub fn new() -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
