//! Address mapping from matrix elements to cache-line ids.
//!
//! The three logical matrices share one simulated address space. Each matrix
//! is laid out row-major at a fixed stride from the previous one, so their
//! address ranges never overlap, and every element access flattens to
//!
//! ```text
//! line_id = (offset + row * row_stride + col + role_index * cache_step) / line_cells
//! ```
//!
//! where `cache_step = 2 * max(rows1, cols2, common)^2` — conservative: the
//! largest possible row/col extent squared, doubled for margin.

use crate::common::LineId;
use crate::config::{CacheParams, MatrixDims};

/// Which of the three matrices an access touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatrixRole {
    /// Left operand, `rows1 × common`; read at `(row, k)`.
    OperandA,
    /// Right operand, `common × cols2`; read at `(k, col)`.
    OperandB,
    /// Result accumulator, `rows1 × cols2`; updated at `(row, col)`.
    Accumulator,
}

impl MatrixRole {
    /// All roles, in address-space order.
    pub const ALL: [Self; 3] = [Self::OperandA, Self::OperandB, Self::Accumulator];

    /// Position of this matrix in the shared address space (0, 1, or 2).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::OperandA => 0,
            Self::OperandB => 1,
            Self::Accumulator => 2,
        }
    }

    /// Short label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::OperandA => "operand_a",
            Self::OperandB => "operand_b",
            Self::Accumulator => "result",
        }
    }
}

/// Pure mapper from logical matrix accesses to global [`LineId`]s.
///
/// Immutable once built; one instance may serve any number of runs over the
/// same dimensions, including every trial of the tiling optimizer.
#[derive(Clone, Copy, Debug)]
pub struct AddressMap {
    /// Per-role `(rows, cols)`; the row stride of a matrix is its column count.
    extents: [(usize, usize); 3],
    /// Address-space distance between consecutive matrices, in cells.
    cache_step: u64,
    line_cells: u64,
    offset: u64,
}

impl AddressMap {
    /// Builds the mapper for the given dimensions and cache geometry.
    ///
    /// The caller is expected to have validated both arguments; see
    /// [`crate::config::SimConfig::validate`].
    pub fn new(dims: &MatrixDims, cache: &CacheParams) -> Self {
        let max = dims.max_extent() as u64;
        Self {
            extents: [
                (dims.rows1, dims.common),
                (dims.common, dims.cols2),
                (dims.rows1, dims.cols2),
            ],
            cache_step: 2 * max * max,
            line_cells: cache.line_cells as u64,
            offset: cache.offset as u64,
        }
    }

    /// Maps one element access to its cache-line id.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the extents of `role`'s matrix.
    /// Traversal generators only ever emit in-range coordinates, so an
    /// out-of-range access is a contract violation, not a runtime error.
    pub fn line_id(&self, role: MatrixRole, row: usize, col: usize) -> LineId {
        let (rows, cols) = self.extents[role.index()];
        assert!(
            row < rows && col < cols,
            "access ({row}, {col}) outside {} matrix of {rows}x{cols}",
            role.label()
        );
        let cell =
            self.offset + row as u64 * cols as u64 + col as u64 + role.index() as u64 * self.cache_step;
        LineId::new(cell / self.line_cells)
    }

    /// Address-space distance between consecutive matrices, in cells.
    ///
    /// Exceeds the linear index range of any single matrix, so per-matrix
    /// line-id ranges are disjoint.
    pub const fn cache_step(&self) -> u64 {
        self.cache_step
    }
}
