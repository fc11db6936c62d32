//! # Configuration Tests
//!
//! Tests for cache geometry validation and the `size,assoc,blocksize`
//! command-line form.

use e20_core::common::SimError;
use e20_core::config::{CacheConfig, CacheSpec};

#[test]
fn single_cache_spec_parses() {
    let spec: CacheSpec = "16,4,2".parse().unwrap();
    assert_eq!(spec.l1, CacheConfig::new(16, 4, 2).unwrap());
    assert!(spec.l2.is_none());
}

#[test]
fn two_cache_spec_parses() {
    let spec: CacheSpec = "32,1,4,64,8,2".parse().unwrap();
    assert_eq!(spec.l1, CacheConfig::new(32, 1, 4).unwrap());
    assert_eq!(spec.l2, Some(CacheConfig::new(64, 8, 2).unwrap()));
}

#[test]
fn spec_tolerates_whitespace() {
    let spec: CacheSpec = " 16 , 4 , 2 ".parse().unwrap();
    assert_eq!(spec.l1.size, 16);
}

#[test]
fn wrong_field_count_is_rejected() {
    for bad in ["", "16", "16,4", "1,2,3,4", "1,2,3,4,5", "1,2,3,4,5,6,7"] {
        assert!(
            matches!(
                bad.parse::<CacheSpec>(),
                Err(SimError::InvalidCacheConfig { .. })
            ),
            "'{bad}' should be rejected"
        );
    }
}

#[test]
fn non_numeric_field_is_rejected() {
    assert!(matches!(
        "16,four,2".parse::<CacheSpec>(),
        Err(SimError::InvalidCacheConfig { .. })
    ));
}

#[test]
fn zero_parameter_is_rejected() {
    assert!(matches!(
        CacheConfig::new(16, 0, 2),
        Err(SimError::InvalidCacheGeometry { .. })
    ));
    assert!(matches!(
        CacheConfig::new(0, 1, 1),
        Err(SimError::InvalidCacheGeometry { .. })
    ));
}

#[test]
fn non_dividing_geometry_is_rejected() {
    // assoc * blocksize = 6 does not divide 16
    assert!(matches!(
        CacheConfig::new(16, 2, 3),
        Err(SimError::InvalidCacheGeometry { .. })
    ));
}

#[test]
fn row_count_is_derived() {
    assert_eq!(CacheConfig::new(32, 1, 4).unwrap().num_rows(), 8);
    assert_eq!(CacheConfig::new(64, 8, 2).unwrap().num_rows(), 4);
    // Fully associative: one row.
    assert_eq!(CacheConfig::new(16, 4, 4).unwrap().num_rows(), 1);
}
