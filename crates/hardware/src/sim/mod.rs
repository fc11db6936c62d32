//! Simulation layer: machine-code loading and the run driver.

/// Machine-code text-file loader.
pub mod loader;

/// Top-level simulator driving fetch/decode/execute and the cache model.
pub mod simulator;
