//! Configuration error definitions.
//!
//! Every entry point validates its configuration before any simulation state
//! is created; these are the failures it can report. Out-of-range accesses
//! discovered *during* a simulation are programming-contract violations and
//! panic instead — see [`crate::mapping`].

use thiserror::Error;

/// A configuration was rejected before any simulation step ran.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A matrix dimension was zero.
    #[error("matrix dimension `{name}` must be positive")]
    ZeroDimension {
        /// Which dimension was rejected (`rows1`, `common`, or `cols2`).
        name: &'static str,
    },

    /// The cache cannot hold any lines.
    #[error("cache capacity must be at least one line")]
    ZeroCapacity,

    /// A cache line cannot hold any cells.
    #[error("cache line size must be at least one cell")]
    ZeroLineSize,

    /// The starting misalignment must fall inside the first line.
    #[error("offset {offset} is outside the first cache line [0, {line_cells})")]
    OffsetOutOfRange {
        /// The rejected offset.
        offset: usize,
        /// The configured line size, in cells.
        line_cells: usize,
    },

    /// A blocked traversal was requested with an empty tile extent.
    #[error("block size along `{axis}` must be positive")]
    ZeroBlockSize {
        /// Which tile axis was rejected (`b1`, `b2`, or `b3`).
        axis: &'static str,
    },
}
