//! Hardware model units.

/// Cache hierarchy model (rows, lines, LRU eviction, L1/L2 routing).
pub mod cache;
