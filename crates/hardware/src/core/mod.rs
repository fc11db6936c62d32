//! CPU core: architectural state, execution, memory, and cache units.

/// CPU state, execution engine, and flat memory.
pub mod cpu;

/// Hardware model units (cache hierarchy).
pub mod units;

pub use cpu::Cpu;
