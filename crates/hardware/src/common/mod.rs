//! Common utilities and types used throughout the E20 simulator.
//!
//! This module provides fundamental building blocks that are shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** Machine-wide constants for memory, registers, and words.
//! 2. **Error Handling:** The fatal error taxonomy (configuration and load).
//! 3. **Register Management:** The architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for configuration and program loading.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{ADDR_MASK, MEM_SIZE, NUM_REGS};
pub use error::SimError;
pub use reg::RegisterFile;
