//! Cache Hierarchy Model.
//!
//! Models zero, one, or two cache levels sitting in front of memory, each
//! independently direct-mapped or set-associative with LRU eviction. The
//! model observes every effective address the execution engine computes for a
//! load or store and classifies the access:
//!
//! - **Loads** are HIT or MISS. With two levels, L2 is consulted only on an
//!   L1 miss (inclusive lookthrough).
//! - **Stores** are always SW, never hit-checked: the target line is written
//!   unconditionally at every configured level (write-allocate, write-through
//!   to both levels).
//!
//! Direct-mapped rows (associativity 1) and associative rows are handled by
//! separate paths; the direct path never touches the recency map, since its
//! single slot is the only replacement candidate.

/// LRU recency tracking, scoped per cache instance.
pub mod lru;

use std::fmt;

use tracing::trace;

use self::lru::LruTracker;
use crate::config::{CacheConfig, CacheSpec};

/// Identifies a level of the hierarchy in configuration and log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLevel {
    /// First-level cache, always checked first.
    L1,
    /// Optional second-level cache.
    L2,
}

impl CacheLevel {
    /// The level's display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
        }
    }
}

impl fmt::Display for CacheLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one access at one cache level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    /// The block was resident.
    Hit,
    /// The block was absent and has been installed.
    Miss,
    /// A store; written unconditionally, never hit-checked.
    Write,
}

impl AccessStatus {
    /// The status name as it appears in log records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
            Self::Write => "SW",
        }
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two cache-relevant instruction kinds; every other instruction bypasses
/// the cache model entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// `lw` — classified HIT or MISS.
    Load,
    /// `sw` — always classified SW.
    Store,
}

/// One log record, emitted per level touched, in program order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheRecord {
    /// The level where the event occurred.
    pub level: CacheLevel,
    /// HIT, MISS, or SW.
    pub status: AccessStatus,
    /// Program counter of the memory access instruction.
    pub pc: u16,
    /// Effective (13-bit) memory address accessed.
    pub addr: u16,
    /// Row (set) index the block maps to.
    pub row: usize,
}

/// A resident line: which block occupies the slot and its disambiguating tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CacheLine {
    block_id: usize,
    tag: usize,
}

/// One cache level: a fixed grid of rows × associativity slots plus the
/// recency map driving LRU eviction.
#[derive(Debug)]
pub struct Cache {
    level: CacheLevel,
    config: CacheConfig,
    rows: Vec<Vec<Option<CacheLine>>>,
    lru: LruTracker,
}

impl Cache {
    /// Creates an empty cache with the given geometry.
    pub fn new(level: CacheLevel, config: CacheConfig) -> Self {
        Self {
            level,
            config,
            rows: vec![vec![None; config.assoc]; config.num_rows()],
            lru: LruTracker::new(),
        }
    }

    /// The level this cache occupies in the hierarchy.
    pub fn level(&self) -> CacheLevel {
        self.level
    }

    /// The geometry this cache was configured with.
    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Splits an effective address into (block id, row index, tag).
    fn locate(&self, addr: u16) -> (usize, usize, usize) {
        let block_id = usize::from(addr) / self.config.blocksize;
        let num_rows = self.rows.len();
        (block_id, block_id % num_rows, block_id / num_rows)
    }

    /// Classifies a load and installs the block on a miss.
    ///
    /// Returns the classification and the row index accessed.
    pub fn load(&mut self, addr: u16) -> (AccessStatus, usize) {
        let (block_id, row, tag) = self.locate(addr);
        let status = if self.config.assoc == 1 {
            self.load_direct(block_id, tag, row)
        } else {
            self.load_associative(block_id, tag, row)
        };
        trace!(level = %self.level, %status, addr, row, "cache load");
        (status, row)
    }

    /// Applies a store: the line is written unconditionally.
    ///
    /// Returns the row index accessed.
    pub fn store(&mut self, addr: u16) -> usize {
        let (block_id, row, tag) = self.locate(addr);
        let line = CacheLine { block_id, tag };
        if self.config.assoc == 1 {
            self.rows[row][0] = Some(line);
        } else {
            self.insert_associative(row, line);
            self.lru.touch(block_id);
        }
        trace!(level = %self.level, addr, row, "cache store");
        row
    }

    /// Reports whether the block covering `addr` is resident.
    pub fn contains(&self, addr: u16) -> bool {
        let (block_id, row, _) = self.locate(addr);
        self.rows[row]
            .iter()
            .flatten()
            .any(|line| line.block_id == block_id)
    }

    /// Direct-mapped load: the sole slot is empty, matching, or overwritten.
    /// No recency bookkeeping — there is only one candidate.
    fn load_direct(&mut self, block_id: usize, tag: usize, row: usize) -> AccessStatus {
        let slot = &mut self.rows[row][0];
        match slot {
            Some(line) if line.block_id == block_id => AccessStatus::Hit,
            _ => {
                *slot = Some(CacheLine { block_id, tag });
                AccessStatus::Miss
            }
        }
    }

    /// Set-associative load: hit if resident anywhere in the row, otherwise
    /// install (empty slot first, else LRU eviction). Either outcome touches
    /// the recency map.
    fn load_associative(&mut self, block_id: usize, tag: usize, row: usize) -> AccessStatus {
        let resident = self.rows[row]
            .iter()
            .flatten()
            .any(|line| line.block_id == block_id);
        let status = if resident {
            AccessStatus::Hit
        } else {
            self.insert_associative(row, CacheLine { block_id, tag });
            AccessStatus::Miss
        };
        self.lru.touch(block_id);
        status
    }

    /// Inserts a line into the first empty slot of the row, or evicts the
    /// LRU victim when the row is full.
    fn insert_associative(&mut self, row: usize, line: CacheLine) {
        let slots = &mut self.rows[row];
        if let Some(empty) = slots.iter_mut().find(|slot| slot.is_none()) {
            *empty = Some(line);
            return;
        }
        // Full row: all slots are occupied, so the victim scan sees every
        // block id in slot order.
        let victim = self
            .lru
            .victim(slots.iter().flatten().map(|l| l.block_id));
        if let Some(old) = slots[victim] {
            self.lru.forget(old.block_id);
        }
        slots[victim] = Some(line);
    }
}

/// Zero, one, or two independently configured cache levels, wired so L1 is
/// always checked first.
#[derive(Debug, Default)]
pub struct CacheHierarchy {
    levels: Vec<Cache>,
}

impl CacheHierarchy {
    /// Builds the hierarchy described by a parsed configuration.
    pub fn new(spec: &CacheSpec) -> Self {
        let mut levels = vec![Cache::new(CacheLevel::L1, spec.l1)];
        if let Some(l2) = spec.l2 {
            levels.push(Cache::new(CacheLevel::L2, l2));
        }
        Self { levels }
    }

    /// A hierarchy with no cache levels; `observe` emits nothing.
    pub fn disabled() -> Self {
        Self { levels: Vec::new() }
    }

    /// Whether any cache level is configured.
    pub fn is_enabled(&self) -> bool {
        !self.levels.is_empty()
    }

    /// The configured levels, L1 first.
    pub fn levels(&self) -> &[Cache] {
        &self.levels
    }

    /// Presents one memory access to the hierarchy and returns the log
    /// records it produced, in program order.
    ///
    /// A load touches L1, then L2 only on an L1 miss; a store is written
    /// through to every configured level. At most two records result.
    pub fn observe(&mut self, kind: AccessKind, pc: u16, addr: u16) -> Vec<CacheRecord> {
        let mut records = Vec::with_capacity(2);
        match kind {
            AccessKind::Load => {
                let mut missed = true;
                for cache in &mut self.levels {
                    if !missed {
                        break;
                    }
                    let (status, row) = cache.load(addr);
                    missed = status == AccessStatus::Miss;
                    records.push(CacheRecord {
                        level: cache.level(),
                        status,
                        pc,
                        addr,
                        row,
                    });
                }
            }
            AccessKind::Store => {
                for cache in &mut self.levels {
                    let row = cache.store(addr);
                    records.push(CacheRecord {
                        level: cache.level(),
                        status: AccessStatus::Write,
                        pc,
                        addr,
                        row,
                    });
                }
            }
        }
        records
    }
}
