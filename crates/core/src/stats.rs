//! Run statistics collection and reporting.
//!
//! This module tracks the counters of one simulation run. It provides:
//! 1. **Totals:** Shared hit/miss counts across all three matrices.
//! 2. **Per-matrix breakdown:** Miss counts for each operand and the result.
//! 3. **Reporting:** The derived hit ratio and a plain-text report.

use crate::mapping::MatrixRole;

/// Counters of one simulation run.
///
/// Consistent at every step boundary: `hits + misses` equals three times the
/// number of steps processed so far, and the per-matrix misses sum to
/// `misses`. A run stopped early leaves a valid snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Total cache hits across all three matrices.
    pub hits: u64,
    /// Total cache misses across all three matrices.
    pub misses: u64,
    /// Miss counts per matrix, indexed by [`MatrixRole::index`].
    pub matrix_misses: [u64; 3],
}

impl RunStats {
    /// Total accesses processed so far.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit ratio over all accesses so far; 1.0 when nothing was accessed.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            1.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("LOOP-TILING CACHE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("accesses                 {}", self.accesses());
        println!("cache_hits               {}", self.hits);
        println!("cache_misses             {}", self.misses);
        println!("hit_ratio                {:.5}", self.hit_ratio());
        println!("----------------------------------------------------------");
        println!("MATRIX BREAKDOWN");
        for role in MatrixRole::ALL {
            println!(
                "  {:<22} {}",
                format!("{}.misses", role.label()),
                self.matrix_misses[role.index()]
            );
        }
        println!("==========================================================");
    }
}
