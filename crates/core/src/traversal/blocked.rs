//! Blocked (tiled) traversal order.
//!
//! Six nested loops: the outer three advance block origins by the configured
//! block sizes, the inner three sweep within the current block. Inner sweeps
//! are clipped to `min(dimension, origin + block)` so dimensions that do not
//! divide evenly by the block size still get full coverage at the ragged
//! edge. The enumerated step set is identical to the naive order's; only the
//! visiting sequence differs.

use super::{BlockSizes, Step};
use crate::config::MatrixDims;

/// Single-use stream over all steps in tiled order.
#[derive(Clone, Debug)]
pub struct BlockedTraversal {
    rows1: usize,
    cols2: usize,
    common: usize,
    blocks: BlockSizes,
    /// Block origins.
    ii: usize,
    jj: usize,
    kk: usize,
    /// Position within the current block.
    i: usize,
    j: usize,
    k: usize,
    done: bool,
}

impl BlockedTraversal {
    /// Creates a fresh stream positioned at the first step.
    ///
    /// # Panics
    ///
    /// Panics if any block size is zero — a zero extent would never advance
    /// its loop. [`BlockSizes::validate`] rejects this at the config
    /// boundary.
    pub fn new(dims: &MatrixDims, blocks: BlockSizes) -> Self {
        assert!(
            blocks.b1 > 0 && blocks.b2 > 0 && blocks.b3 > 0,
            "block sizes must be positive"
        );
        Self {
            rows1: dims.rows1,
            cols2: dims.cols2,
            common: dims.common,
            blocks,
            ii: 0,
            jj: 0,
            kk: 0,
            i: 0,
            j: 0,
            k: 0,
            done: dims.rows1 == 0 || dims.cols2 == 0 || dims.common == 0,
        }
    }

    /// Exclusive end of the current block's row sweep.
    fn i_end(&self) -> usize {
        self.rows1.min(self.ii + self.blocks.b1)
    }

    /// Exclusive end of the current block's column sweep.
    fn j_end(&self) -> usize {
        self.cols2.min(self.jj + self.blocks.b2)
    }

    /// Exclusive end of the current block's k sweep.
    fn k_end(&self) -> usize {
        self.common.min(self.kk + self.blocks.b3)
    }

    /// Re-enters the block at its origin after the origins moved.
    fn enter_block(&mut self) {
        self.i = self.ii;
        self.j = self.jj;
        self.k = self.kk;
    }

    /// Advances to the next step, innermost loop first.
    fn advance(&mut self) {
        self.k += 1;
        if self.k < self.k_end() {
            return;
        }
        self.k = self.kk;
        self.j += 1;
        if self.j < self.j_end() {
            return;
        }
        self.j = self.jj;
        self.i += 1;
        if self.i < self.i_end() {
            return;
        }

        // Current block exhausted; move the origins.
        self.kk += self.blocks.b3;
        if self.kk < self.common {
            self.enter_block();
            return;
        }
        self.kk = 0;
        self.jj += self.blocks.b2;
        if self.jj < self.cols2 {
            self.enter_block();
            return;
        }
        self.jj = 0;
        self.ii += self.blocks.b1;
        if self.ii < self.rows1 {
            self.enter_block();
            return;
        }
        self.done = true;
    }
}

impl Iterator for BlockedTraversal {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }
        let step = Step {
            row: self.i,
            col: self.j,
            k: self.k,
        };
        self.advance();
        Some(step)
    }
}
