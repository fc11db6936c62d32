//! E20 system simulator library.
//!
//! This crate implements a functional simulator for the E20 16-bit educational
//! processor with the following:
//! 1. **Core:** Register file, program counter, and flat 8 KiW memory.
//! 2. **ISA:** Decoding and execution for the fixed 13-instruction E20 set.
//! 3. **Memory hierarchy:** An optional one- or two-level cache model
//!    (direct-mapped or set-associative, LRU eviction) that classifies every
//!    load/store as HIT, MISS, or SW.
//! 4. **Simulation:** Machine-code loader, step/run driver, and statistics
//!    collection.

/// Common types and constants (registers, errors, machine constants).
pub mod common;
/// Simulator configuration (cache geometry and hierarchy parsing).
pub mod config;
/// CPU core (architectural state, execution, memory, cache units).
pub mod core;
/// Instruction set (bit fields, decoding, halt detection).
pub mod isa;
/// Machine-code loader and simulation driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Cache hierarchy configuration; parse from `size,assoc,blocksize[,...]`.
pub use crate::config::CacheSpec;
/// Architectural CPU state (register file + program counter).
pub use crate::core::cpu::Cpu;
/// Flat 8192-cell memory image.
pub use crate::core::cpu::memory::Memory;
/// Top-level simulator; construct with `Simulator::new` and drive with `step`.
pub use crate::sim::simulator::Simulator;
