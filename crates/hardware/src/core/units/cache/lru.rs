//! Least Recently Used (LRU) recency tracking.
//!
//! Each cache owns one tracker covering every block resident anywhere in that
//! cache; recency is global per cache instance, not per row, even though
//! eviction only ever competes within one row. A block's counter is reset to
//! zero when it is touched and incremented whenever any other block is.

use std::collections::HashMap;

/// Recency map from resident block id to an age counter.
///
/// Larger counters mean staler blocks; the victim is the row line whose block
/// carries the strictly largest counter.
#[derive(Debug, Default)]
pub struct LruTracker {
    age: HashMap<usize, u64>,
}

impl LruTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            age: HashMap::new(),
        }
    }

    /// Records an access: every tracked block ages by one, then the accessed
    /// block's counter is reset to zero (registering it if new).
    pub fn touch(&mut self, block_id: usize) {
        for age in self.age.values_mut() {
            *age += 1;
        }
        let _ = self.age.insert(block_id, 0);
    }

    /// Drops a block from the tracker after it is evicted.
    pub fn forget(&mut self, block_id: usize) {
        let _ = self.age.remove(&block_id);
    }

    /// Returns a block's age counter; untracked blocks read as zero.
    pub fn age_of(&self, block_id: usize) -> u64 {
        self.age.get(&block_id).copied().unwrap_or(0)
    }

    /// Selects the victim among the row's resident blocks, given in slot
    /// order. The strictly largest counter wins; ties fall to the lowest
    /// slot index.
    pub fn victim<I>(&self, blocks: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let mut max_age = 0;
        let mut victim = 0;
        for (slot, block) in blocks.into_iter().enumerate() {
            let age = self.age_of(block);
            if age > max_age {
                max_age = age;
                victim = slot;
            }
        }
        victim
    }
}
