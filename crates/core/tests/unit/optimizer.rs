//! Tiling Optimizer Unit Tests.
//!
//! Verifies the exhaustive block-size sweep, the exact tie-break policy
//! (equal ratios replace the recorded best, so the last optimum wins), and
//! fail-fast validation.

use tilesim_core::common::ConfigError;
use tilesim_core::sim::optimizer::find_best_tiling;
use tilesim_core::sim::runner::SimulationRunner;
use tilesim_core::traversal::{BlockSizes, TraversalOrder};

use crate::common::sim_config;

// ══════════════════════════════════════════════════════════
// 1. Reference Searches
// ══════════════════════════════════════════════════════════

/// A 1x1x1 multiplication has a single candidate tiling. Its three accesses
/// are all cold misses, so the best ratio is 0 — and the `>=` tie-break
/// still records the trial over the initial best.
#[test]
fn single_candidate_search() {
    let config = sim_config(1, 1, 1, 4, 1, 0);
    let result = find_best_tiling(&config).unwrap();

    assert!(result.best_hit_ratio.abs() < f64::EPSILON);
    assert_eq!(result.best_blocks, BlockSizes { b1: 1, b2: 1, b3: 1 });
}

/// With lines wide enough to hold a whole matrix and capacity for all three,
/// every trial costs exactly the three compulsory misses: all ratios equal
/// 21/24, and the lexicographically last triple (2, 2, 2) wins the tie.
#[test]
fn uniform_ratios_last_triple_wins() {
    let config = sim_config(2, 2, 2, 3, 8, 0);
    let result = find_best_tiling(&config).unwrap();

    assert!((result.best_hit_ratio - 21.0 / 24.0).abs() < 1e-12);
    assert_eq!(result.best_blocks, BlockSizes { b1: 2, b2: 2, b3: 2 });
}

// ══════════════════════════════════════════════════════════
// 2. Optimality
// ══════════════════════════════════════════════════════════

/// The reported ratio is at least as good as any individually sampled
/// tiling — including the full-size blocks that degenerate to naive order.
#[test]
fn best_dominates_sampled_tilings() {
    let config = sim_config(4, 4, 4, 4, 4, 0);
    let result = find_best_tiling(&config).unwrap();

    let samples = [
        BlockSizes { b1: 1, b2: 1, b3: 1 },
        BlockSizes { b1: 2, b2: 2, b3: 2 },
        BlockSizes { b1: 4, b2: 4, b3: 4 },
        BlockSizes { b1: 1, b2: 4, b3: 2 },
    ];
    for blocks in samples {
        let report = SimulationRunner::new(TraversalOrder::Blocked(blocks), &config)
            .map(SimulationRunner::run)
            .unwrap();
        assert!(
            result.best_hit_ratio >= report.hit_ratio,
            "search missed a better tiling: {blocks:?} scored {}",
            report.hit_ratio
        );
    }
}

/// The winning blocks reproduce the winning ratio when replayed — trials
/// run on fresh state, so the result is not an artifact of shared caches.
#[test]
fn winner_is_reproducible() {
    let config = sim_config(3, 4, 3, 5, 3, 1);
    let result = find_best_tiling(&config).unwrap();

    let replay = SimulationRunner::new(TraversalOrder::Blocked(result.best_blocks), &config)
        .map(SimulationRunner::run)
        .unwrap();
    assert!((replay.hit_ratio - result.best_hit_ratio).abs() < 1e-12);
}

// ══════════════════════════════════════════════════════════
// 3. Validation
// ══════════════════════════════════════════════════════════

/// Configuration errors surface before any trial runs.
#[test]
fn invalid_configs_are_rejected() {
    let zero_dim = sim_config(2, 0, 2, 4, 2, 0);
    assert_eq!(
        find_best_tiling(&zero_dim).err(),
        Some(ConfigError::ZeroDimension { name: "common" })
    );

    let zero_capacity = sim_config(2, 2, 2, 0, 2, 0);
    assert_eq!(
        find_best_tiling(&zero_capacity).err(),
        Some(ConfigError::ZeroCapacity)
    );

    let bad_offset = sim_config(2, 2, 2, 4, 2, 2);
    assert_eq!(
        find_best_tiling(&bad_offset).err(),
        Some(ConfigError::OffsetOutOfRange {
            offset: 2,
            line_cells: 2
        })
    );
}
