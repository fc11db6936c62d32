//! Fatal error definitions.
//!
//! The E20 core has exactly one tier of failure: errors that abort before
//! simulation starts (a malformed cache configuration or machine-code file).
//! Everything at run time is absorbed by defined semantics — unrecognized
//! encodings decode to a no-op and arithmetic wraps modulo 65536 — so no
//! error type exists for the execution path.

use thiserror::Error;

/// Errors that can abort the simulator before execution begins.
#[derive(Debug, Error)]
pub enum SimError {
    /// The cache configuration string did not contain 3 or 6 integers.
    #[error("invalid cache configuration '{spec}': expected 3 or 6 comma-separated integers")]
    InvalidCacheConfig {
        /// The offending configuration string.
        spec: String,
    },

    /// A cache was configured with a zero or non-dividing geometry.
    #[error("invalid cache geometry: size {size}, associativity {assoc}, blocksize {blocksize}")]
    InvalidCacheGeometry {
        /// Total cache size in memory cells.
        size: usize,
        /// Lines per row.
        assoc: usize,
        /// Cells per block.
        blocksize: usize,
    },

    /// A machine-code line did not match `ram[N] = 16'b...;`.
    #[error("can't parse line: {line}")]
    UnparseableLine {
        /// The offending source line.
        line: String,
    },

    /// Machine-code addresses must start at 0 and increase by 1 per line.
    #[error("memory addresses encountered out of sequence: {addr}")]
    OutOfSequenceAddress {
        /// The address that broke the sequence.
        addr: usize,
    },

    /// The machine-code file holds more words than memory has cells.
    #[error("program too big for memory")]
    ProgramTooBig,

    /// The machine-code file could not be read from disk.
    #[error("could not read program file '{path}': {source}")]
    ProgramRead {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
