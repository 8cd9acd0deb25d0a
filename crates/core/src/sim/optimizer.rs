//! Brute-force tiling search.
//!
//! Tries every block-size triple `(b1, b2, b3)` with `1 <= b1 <= rows1`,
//! `1 <= b2 <= cols2`, `1 <= b3 <= common`, replaying the full blocked
//! traversal against a fresh cache each time, and keeps the triple with the
//! best hit ratio.
//!
//! # Complexity
//!
//! O(rows1·cols2·common) trials, each costing O(rows1·cols2·common)
//! accesses — O(N^6) overall for cubic dimensions. This is a deliberate
//! ceiling: the search is an instructional tool for small matrices, not a
//! production strategy. Trials are independent (fresh cache and traversal
//! each), so a parallel variant only has to apply the tie-break below in
//! the sequential enumeration order to stay reproducible.

use tracing::debug;

use crate::cache::LruCache;
use crate::common::ConfigError;
use crate::config::SimConfig;
use crate::mapping::{AddressMap, MatrixRole};
use crate::traversal::{BlockSizes, TraversalOrder};

/// Outcome of the brute-force search.
#[derive(Clone, Copy, Debug)]
pub struct TilingResult {
    /// Best hit ratio found.
    pub best_hit_ratio: f64,
    /// Block sizes that produced it.
    pub best_blocks: BlockSizes,
}

/// Searches all block-size triples for the best cache hit ratio.
///
/// A trial whose ratio **equals** the recorded best replaces it, so among
/// equally good tilings the lexicographically last triple in `(b1, b2, b3)`
/// enumeration order is reported.
///
/// # Errors
///
/// Returns a [`ConfigError`] for an invalid configuration; no trial runs in
/// that case.
pub fn find_best_tiling(config: &SimConfig) -> Result<TilingResult, ConfigError> {
    config.validate()?;
    let dims = config.matrix;
    let map = AddressMap::new(&dims, &config.cache);

    let mut best = TilingResult {
        best_hit_ratio: 0.0,
        best_blocks: BlockSizes { b1: 1, b2: 1, b3: 1 },
    };

    for b1 in 1..=dims.rows1 {
        for b2 in 1..=dims.cols2 {
            for b3 in 1..=dims.common {
                let blocks = BlockSizes { b1, b2, b3 };
                let ratio = trial(config, &map, blocks);
                if ratio >= best.best_hit_ratio {
                    debug!(b1, b2, b3, ratio, "best tiling bumped");
                    best = TilingResult {
                        best_hit_ratio: ratio,
                        best_blocks: blocks,
                    };
                }
            }
        }
    }
    Ok(best)
}

/// Replays one blocked traversal against a fresh cache; returns the ratio.
fn trial(config: &SimConfig, map: &AddressMap, blocks: BlockSizes) -> f64 {
    let mut cache = LruCache::new(config.cache.capacity_lines);
    for step in TraversalOrder::Blocked(blocks).traverse(&config.matrix) {
        let _ = cache.access(map.line_id(MatrixRole::OperandA, step.row, step.k));
        let _ = cache.access(map.line_id(MatrixRole::OperandB, step.k, step.col));
        let _ = cache.access(map.line_id(MatrixRole::Accumulator, step.row, step.col));
    }
    cache.hit_ratio()
}
