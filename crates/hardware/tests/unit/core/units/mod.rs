//! Unit tests for hardware model units.

/// Cache classification, LRU eviction, and hierarchy routing.
pub mod cache;
