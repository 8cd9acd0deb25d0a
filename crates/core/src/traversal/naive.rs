//! Naive traversal order.
//!
//! Visits steps the way the textbook triple loop does: for each result row,
//! for each result column, sweep the shared dimension. The accumulator cell
//! stays fixed through each innermost sweep while both operands stream.

use super::Step;
use crate::config::MatrixDims;

/// Single-use stream over all steps in row, column, k order.
#[derive(Clone, Debug)]
pub struct NaiveTraversal {
    rows1: usize,
    cols2: usize,
    common: usize,
    row: usize,
    col: usize,
    k: usize,
    done: bool,
}

impl NaiveTraversal {
    /// Creates a fresh stream positioned at the first step.
    pub fn new(dims: &MatrixDims) -> Self {
        Self {
            rows1: dims.rows1,
            cols2: dims.cols2,
            common: dims.common,
            row: 0,
            col: 0,
            k: 0,
            done: dims.rows1 == 0 || dims.cols2 == 0 || dims.common == 0,
        }
    }
}

impl Iterator for NaiveTraversal {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }
        let step = Step {
            row: self.row,
            col: self.col,
            k: self.k,
        };

        self.k += 1;
        if self.k == self.common {
            self.k = 0;
            self.col += 1;
            if self.col == self.cols2 {
                self.col = 0;
                self.row += 1;
                if self.row == self.rows1 {
                    self.done = true;
                }
            }
        }
        Some(step)
    }
}
