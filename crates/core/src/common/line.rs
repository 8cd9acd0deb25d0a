//! Cache-line identifier type.
//!
//! This module defines a strong type for simulated cache-line ids to prevent
//! accidental mixing with element indices or loop counters. A line id is the
//! flattened element address divided by the cache-line size; two accesses
//! share a line id exactly when they land in the same simulated line.

/// Identifier of one simulated cache line.
///
/// Line ids are global across the three matrices: the address mapper offsets
/// each matrix far enough that their id ranges never overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

impl LineId {
    /// Creates a line id from a raw 64-bit value.
    #[inline(always)]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw 64-bit value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }
}
