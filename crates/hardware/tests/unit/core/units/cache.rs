//! # Cache Model Tests
//!
//! Covers single-level classification (direct-mapped and set-associative),
//! LRU eviction order, the unconditional store path, and L1/L2 routing.
//! Geometries are chosen small so every row and slot is exercised.

use e20_core::config::{CacheConfig, CacheSpec};
use e20_core::core::units::cache::{
    AccessKind, AccessStatus, Cache, CacheHierarchy, CacheLevel,
};

fn cache(size: usize, assoc: usize, blocksize: usize) -> Cache {
    Cache::new(CacheLevel::L1, CacheConfig::new(size, assoc, blocksize).unwrap())
}

fn spec(l1: (usize, usize, usize), l2: Option<(usize, usize, usize)>) -> CacheSpec {
    CacheSpec {
        l1: CacheConfig::new(l1.0, l1.1, l1.2).unwrap(),
        l2: l2.map(|(s, a, b)| CacheConfig::new(s, a, b).unwrap()),
    }
}

#[test]
fn cold_load_misses_then_hits() {
    let mut c = cache(4, 1, 1);
    assert_eq!(c.load(3), (AccessStatus::Miss, 3));
    assert_eq!(c.load(3), (AccessStatus::Hit, 3));
}

#[test]
fn blocksize_groups_addresses_into_one_line() {
    let mut c = cache(8, 1, 4);
    assert_eq!(c.load(0).0, AccessStatus::Miss);
    // Addresses 1-3 share the block installed by address 0.
    assert_eq!(c.load(1).0, AccessStatus::Hit);
    assert_eq!(c.load(3).0, AccessStatus::Hit);
    assert_eq!(c.load(4).0, AccessStatus::Miss);
}

#[test]
fn row_index_is_block_id_modulo_rows() {
    // 8 cells, direct, blocksize 2: 4 rows; address 10 is block 5, row 1.
    let mut c = cache(8, 1, 2);
    assert_eq!(c.load(10), (AccessStatus::Miss, 1));
}

#[test]
fn direct_mapped_conflict_evicts() {
    // 4 rows; blocks 0 and 4 collide on row 0.
    let mut c = cache(4, 1, 1);
    assert_eq!(c.load(0).0, AccessStatus::Miss);
    assert_eq!(c.load(4).0, AccessStatus::Miss);
    assert!(!c.contains(0), "block 0 was evicted by the conflict");
    assert_eq!(c.load(0).0, AccessStatus::Miss);
}

#[test]
fn associative_row_holds_conflicting_blocks() {
    // 2 rows, 2 ways; blocks 0 and 2 both map to row 0 and coexist.
    let mut c = cache(4, 2, 1);
    assert_eq!(c.load(0).0, AccessStatus::Miss);
    assert_eq!(c.load(2).0, AccessStatus::Miss);
    assert_eq!(c.load(0).0, AccessStatus::Hit);
    assert_eq!(c.load(2).0, AccessStatus::Hit);
}

#[test]
fn lru_evicts_the_stalest_block() {
    // Row 0 holds two of blocks {0, 2, 4}. Touch order 0, 2, 0 leaves
    // block 2 stalest, so loading block 4 evicts 2 and keeps 0.
    let mut c = cache(4, 2, 1);
    assert_eq!(c.load(0).0, AccessStatus::Miss);
    assert_eq!(c.load(2).0, AccessStatus::Miss);
    assert_eq!(c.load(0).0, AccessStatus::Hit);
    assert_eq!(c.load(4).0, AccessStatus::Miss);
    assert_eq!(c.load(0).0, AccessStatus::Hit, "recently used block survives");
    assert_eq!(c.load(2).0, AccessStatus::Miss, "stale block was evicted");
}

#[test]
fn recency_spans_rows_within_one_cache() {
    // Fully associative, 2 ways, 1 row: classic A B A C pattern.
    let mut c = cache(2, 2, 1);
    assert_eq!(c.load(10).0, AccessStatus::Miss); // A
    assert_eq!(c.load(20).0, AccessStatus::Miss); // B
    assert_eq!(c.load(10).0, AccessStatus::Hit); // A
    assert_eq!(c.load(30).0, AccessStatus::Miss); // C evicts B
    assert_eq!(c.load(10).0, AccessStatus::Hit);
    assert_eq!(c.load(20).0, AccessStatus::Miss);
}

#[test]
fn store_is_never_hit_checked() {
    let mut c = cache(4, 2, 1);
    assert_eq!(c.load(0).0, AccessStatus::Miss);
    // Storing to a resident block still reports only the row; a later load
    // hits because the store kept (re-allocated) the line.
    assert_eq!(c.store(0), 0);
    assert_eq!(c.load(0).0, AccessStatus::Hit);
}

#[test]
fn store_allocates_on_direct_mapped() {
    let mut c = cache(4, 1, 1);
    let row = c.store(5);
    assert_eq!(row, 1);
    assert_eq!(c.load(5).0, AccessStatus::Hit, "store installed the line");
}

#[test]
fn repeated_stores_may_duplicate_a_line() {
    // The store path allocates unconditionally, so two stores to the same
    // block fill both ways of the row. Later evictions must tolerate the
    // duplicate without panicking.
    let mut c = cache(2, 2, 1);
    let _ = c.store(0);
    let _ = c.store(0);
    assert!(c.contains(0));
    assert_eq!(c.load(1).0, AccessStatus::Miss); // evicts one duplicate
    assert_eq!(c.load(0).0, AccessStatus::Hit); // the other remains
}

#[test]
fn hierarchy_routes_load_miss_to_l2() {
    let mut h = CacheHierarchy::new(&spec((4, 1, 1), Some((8, 1, 1))));
    let records = h.observe(AccessKind::Load, 0, 3);
    assert_eq!(records.len(), 2);
    assert_eq!(
        (records[0].level, records[0].status),
        (CacheLevel::L1, AccessStatus::Miss)
    );
    assert_eq!(
        (records[1].level, records[1].status),
        (CacheLevel::L2, AccessStatus::Miss)
    );
}

#[test]
fn hierarchy_skips_l2_on_l1_hit() {
    let mut h = CacheHierarchy::new(&spec((4, 1, 1), Some((8, 1, 1))));
    let _ = h.observe(AccessKind::Load, 0, 3);
    let records = h.observe(AccessKind::Load, 1, 3);
    assert_eq!(records.len(), 1, "L2 is consulted only on an L1 miss");
    assert_eq!(
        (records[0].level, records[0].status),
        (CacheLevel::L1, AccessStatus::Hit)
    );
}

#[test]
fn l1_miss_after_eviction_can_hit_l2() {
    // L1 direct with 2 rows thrashes between blocks 0 and 2; L2 is large
    // enough to keep both.
    let mut h = CacheHierarchy::new(&spec((2, 1, 1), Some((16, 1, 1))));
    let _ = h.observe(AccessKind::Load, 0, 0);
    let _ = h.observe(AccessKind::Load, 1, 2); // evicts block 0 from L1
    let records = h.observe(AccessKind::Load, 2, 0);
    assert_eq!(records.len(), 2);
    assert_eq!(
        (records[0].level, records[0].status),
        (CacheLevel::L1, AccessStatus::Miss)
    );
    assert_eq!(
        (records[1].level, records[1].status),
        (CacheLevel::L2, AccessStatus::Hit)
    );
}

#[test]
fn stores_write_through_every_level() {
    let mut h = CacheHierarchy::new(&spec((4, 1, 1), Some((8, 1, 1))));
    let records = h.observe(AccessKind::Store, 5, 100);
    assert_eq!(records.len(), 2);
    assert!(records
        .iter()
        .all(|r| r.status == AccessStatus::Write && r.pc == 5 && r.addr == 100));
    assert_eq!(records[0].level, CacheLevel::L1);
    assert_eq!(records[1].level, CacheLevel::L2);
}

#[test]
fn record_carries_pc_addr_and_row() {
    let mut h = CacheHierarchy::new(&spec((8, 1, 2), None));
    let records = h.observe(AccessKind::Load, 7, 11); // block 5, row 1
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].pc, 7);
    assert_eq!(records[0].addr, 11);
    assert_eq!(records[0].row, 1);
}

#[test]
fn disabled_hierarchy_observes_nothing() {
    let mut h = CacheHierarchy::disabled();
    assert!(!h.is_enabled());
    assert!(h.observe(AccessKind::Load, 0, 0).is_empty());
    assert!(h.observe(AccessKind::Store, 0, 0).is_empty());
}
