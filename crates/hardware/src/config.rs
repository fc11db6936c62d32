//! Configuration system for the E20 simulator.
//!
//! This module defines the cache configuration structures. It provides:
//! 1. **Geometry:** Per-cache size, associativity, and blocksize, all measured
//!    in 16-bit memory cells.
//! 2. **Hierarchy:** Zero, one, or two cache levels (L1, then optionally L2).
//! 3. **Parsing:** The `size,assoc,blocksize[,size,assoc,blocksize]` form
//!    supplied on the command line; any other shape is a fatal error.
//!
//! Configuration may also be deserialized from JSON via `serde`.

use std::str::FromStr;

use serde::Deserialize;

use crate::common::SimError;

/// Geometry of a single cache level.
///
/// All quantities are counts of 16-bit memory cells, not bytes. The row count
/// is derived: `size / (assoc * blocksize)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Total cache capacity in cells, excluding metadata.
    pub size: usize,
    /// Lines per row; 1 means direct-mapped.
    pub assoc: usize,
    /// Cells per block (the unit of cache occupancy).
    pub blocksize: usize,
}

impl CacheConfig {
    /// Creates a validated cache geometry.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCacheGeometry`] when any parameter is zero
    /// or `assoc * blocksize` does not divide `size`.
    pub fn new(size: usize, assoc: usize, blocksize: usize) -> Result<Self, SimError> {
        let cfg = Self {
            size,
            assoc,
            blocksize,
        };
        if size == 0 || assoc == 0 || blocksize == 0 || size % (assoc * blocksize) != 0 {
            return Err(SimError::InvalidCacheGeometry {
                size,
                assoc,
                blocksize,
            });
        }
        Ok(cfg)
    }

    /// Number of rows (sets) in this cache: `size / (assoc * blocksize)`.
    pub fn num_rows(&self) -> usize {
        self.size / (self.assoc * self.blocksize)
    }
}

/// Full cache hierarchy configuration: an L1 and an optional L2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheSpec {
    /// First-level cache, always present and always checked first.
    pub l1: CacheConfig,
    /// Optional second-level cache, consulted per the routing rules.
    pub l2: Option<CacheConfig>,
}

impl FromStr for CacheSpec {
    type Err = SimError;

    /// Parses `size,assoc,blocksize` (one cache) or
    /// `size,assoc,blocksize,size,assoc,blocksize` (two caches).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SimError::InvalidCacheConfig {
            spec: s.to_string(),
        };
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;

        match parts.as_slice() {
            [size, assoc, blocksize] => Ok(Self {
                l1: CacheConfig::new(*size, *assoc, *blocksize)?,
                l2: None,
            }),
            [s1, a1, b1, s2, a2, b2] => Ok(Self {
                l1: CacheConfig::new(*s1, *a1, *b1)?,
                l2: Some(CacheConfig::new(*s2, *a2, *b2)?),
            }),
            _ => Err(invalid()),
        }
    }
}
