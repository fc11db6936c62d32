//! # Register Indexing Tests
//!
//! Unit tests for the `RegisterFile` structure: initialization, read/write
//! consistency, and the invariant that `$0` remains zero through every write
//! path.

use e20_core::common::reg::RegisterFile;

/// Ensures that all registers are initialized to zero upon creation.
#[test]
fn initial_values_are_zero() {
    let regs = RegisterFile::new();
    for i in 0..8 {
        assert_eq!(regs.read(i), 0, "${i} should be 0 initially");
    }
}

/// Verifies that a value written to a register can be correctly read back.
#[test]
fn write_and_read() {
    let mut regs = RegisterFile::new();
    regs.write(1, 42);
    assert_eq!(regs.read(1), 42);
}

/// Ensures that register `$0` remains zero regardless of any values written
/// to it.
#[test]
fn reg0_always_zero() {
    let mut regs = RegisterFile::new();
    regs.write(0, 0xBEEF);
    assert_eq!(regs.read(0), 0, "$0 must always read as 0");
}

/// Verifies that all registers can hold independent values simultaneously
/// while `$0` stays zero.
#[test]
fn write_all_registers() {
    let mut regs = RegisterFile::new();
    for i in 0..8 {
        regs.write(i, i as u16 * 100);
    }
    assert_eq!(regs.read(0), 0, "$0 must remain 0");
    for i in 1..8 {
        assert_eq!(regs.read(i), i as u16 * 100);
    }
}

/// Verifies that writing a new value to a register overwrites the previous
/// value.
#[test]
fn overwrite() {
    let mut regs = RegisterFile::new();
    regs.write(5, 100);
    assert_eq!(regs.read(5), 100);
    regs.write(5, 200);
    assert_eq!(regs.read(5), 200);
}

/// Verifies that registers hold the full 16-bit range.
#[test]
fn max_value() {
    let mut regs = RegisterFile::new();
    regs.write(7, u16::MAX);
    assert_eq!(regs.read(7), u16::MAX);
}

/// Verifies that `snapshot` reflects the architectural state, `$0` included.
#[test]
fn snapshot_matches_reads() {
    let mut regs = RegisterFile::new();
    regs.write(0, 1);
    regs.write(3, 77);
    regs.write(7, 9000);
    let snap = regs.snapshot();
    assert_eq!(snap, [0, 0, 0, 77, 0, 0, 0, 9000]);
}
