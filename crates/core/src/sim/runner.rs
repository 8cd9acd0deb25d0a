//! Step-wise simulation runner.
//!
//! Drives one traversal through the address mapper and a freshly created
//! cache. Every step performs three accesses — operand A at `(row, k)`,
//! operand B at `(k, col)`, and the accumulator at `(row, col)` — before the
//! runner yields, so an observer never sees a step half-applied.
//!
//! Pacing is pull-based: callers that want to animate or inspect a run call
//! [`SimulationRunner::step`] at their own rhythm; the kernel itself never
//! sleeps. Dropping the runner mid-run is a valid cancellation — the
//! counters in the last yielded event are exact for the steps processed.

use tracing::debug;

use crate::cache::LruCache;
use crate::common::ConfigError;
use crate::config::SimConfig;
use crate::mapping::{AddressMap, MatrixRole};
use crate::stats::RunStats;
use crate::traversal::{Step, Traversal, TraversalOrder};

/// One cache access of a step: which cell was touched and whether it hit.
///
/// The rendering layer highlights these cells; the kernel only reports them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellTouch {
    /// Matrix the cell belongs to.
    pub matrix: MatrixRole,
    /// Row of the touched cell within its matrix.
    pub row: usize,
    /// Column of the touched cell within its matrix.
    pub col: usize,
    /// Whether the access hit in the cache.
    pub hit: bool,
}

/// Everything an observer learns about one completed step.
#[derive(Clone, Copy, Debug)]
pub struct StepEvent {
    /// The multiply-accumulate step that was simulated.
    pub step: Step,
    /// The three cell accesses, in operand A, operand B, accumulator order.
    pub touched: [CellTouch; 3],
    /// Counter snapshot after this step's three accesses.
    pub counters: RunStats,
}

/// Final result of one run.
#[derive(Clone, Copy, Debug)]
pub struct RunReport {
    /// Hit ratio over the whole run (1.0 for a zero-step run).
    pub hit_ratio: f64,
    /// Total cache hits.
    pub hits: u64,
    /// Total cache misses.
    pub misses: u64,
    /// Miss counts per matrix, indexed by [`MatrixRole::index`].
    pub matrix_misses: [u64; 3],
}

impl RunReport {
    /// Builds the report from a counter snapshot.
    fn from_stats(stats: &RunStats) -> Self {
        Self {
            hit_ratio: stats.hit_ratio(),
            hits: stats.hits,
            misses: stats.misses,
            matrix_misses: stats.matrix_misses,
        }
    }
}

/// Replays one traversal through an exclusively owned cache.
///
/// The runner owns its traversal, mapper, cache, and counters; nothing is
/// shared with other runs, so two runners never interleave on the same
/// cache.
#[derive(Debug)]
pub struct SimulationRunner {
    traversal: Traversal,
    map: AddressMap,
    cache: LruCache,
    stats: RunStats,
}

impl SimulationRunner {
    /// Builds a runner for one traversal of the configured multiplication.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration or the order's block
    /// sizes are invalid; no simulation state is created in that case.
    pub fn new(order: TraversalOrder, config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        order.validate()?;
        Ok(Self {
            traversal: order.traverse(&config.matrix),
            map: AddressMap::new(&config.matrix, &config.cache),
            cache: LruCache::new(config.cache.capacity_lines),
            stats: RunStats::default(),
        })
    }

    /// Simulates the next step, or returns `None` when the traversal is done.
    ///
    /// The step's three accesses are applied atomically with respect to the
    /// caller: by the time the event is returned, all counters include them.
    pub fn step(&mut self) -> Option<StepEvent> {
        let step = self.traversal.next()?;
        let touched = [
            self.touch(MatrixRole::OperandA, step.row, step.k),
            self.touch(MatrixRole::OperandB, step.k, step.col),
            self.touch(MatrixRole::Accumulator, step.row, step.col),
        ];
        Some(StepEvent {
            step,
            touched,
            counters: self.stats,
        })
    }

    /// Counter snapshot for the steps processed so far.
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Report for the steps processed so far; valid mid-run.
    pub fn report(&self) -> RunReport {
        RunReport::from_stats(&self.stats)
    }

    /// Runs the remaining steps to completion.
    pub fn run(mut self) -> RunReport {
        while self.step().is_some() {}
        debug!(
            hits = self.stats.hits,
            misses = self.stats.misses,
            hit_ratio = self.stats.hit_ratio(),
            "run complete"
        );
        self.report()
    }

    /// Runs to completion, invoking `observer` after every step.
    pub fn run_with_observer<F>(mut self, mut observer: F) -> RunReport
    where
        F: FnMut(&StepEvent),
    {
        while let Some(event) = self.step() {
            observer(&event);
        }
        self.report()
    }

    /// Performs one mapped access and folds it into the counters.
    fn touch(&mut self, role: MatrixRole, row: usize, col: usize) -> CellTouch {
        let hit = self.cache.access(self.map.line_id(role, row, col));
        self.stats.matrix_misses[role.index()] += u64::from(!hit);
        self.stats.hits = self.cache.hits();
        self.stats.misses = self.cache.misses();
        CellTouch {
            matrix: role,
            row,
            col,
            hit,
        }
    }
}
