//! Loop-tiling cache locality simulator library.
//!
//! This crate simulates how loop-traversal orders over a triple-nested matrix
//! multiplication affect cache locality. It implements the following:
//! 1. **Cache:** A fixed-capacity LRU cache model with hit/miss accounting.
//! 2. **Mapping:** Placement of the three logical matrices into one simulated
//!    address space and translation of element accesses to cache-line ids.
//! 3. **Traversal:** Naive and blocked (tiled) enumeration of every
//!    multiply-accumulate step, behind a restartable factory.
//! 4. **Simulation:** A step-wise runner with an observer hook, and a
//!    brute-force optimizer over all tiling parameters.
//! 5. **Reporting:** Running statistics and a plain-text report.
//!
//! Matrix values are never computed — only the access pattern matters.

/// LRU cache model with hit/miss counting.
pub mod cache;
/// Shared types and errors (cache-line ids, configuration errors).
pub mod common;
/// Simulator configuration (defaults, dimensions, cache parameters).
pub mod config;
/// Address mapping from matrix elements to cache-line ids.
pub mod mapping;
/// Simulation runner and tiling optimizer.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;
/// Traversal-order generators (naive and blocked).
pub mod traversal;

/// Root configuration type; use `SimConfig::default()` or deserialize from JSON.
pub use crate::config::SimConfig;
/// LRU cache simulator; construct one fresh instance per run.
pub use crate::cache::LruCache;
/// Brute-force tiling search; returns the best hit ratio and its block sizes.
pub use crate::sim::optimizer::{TilingResult, find_best_tiling};
/// Step-wise simulation runner; drives one traversal through the cache.
pub use crate::sim::runner::{RunReport, SimulationRunner, StepEvent};
/// Traversal factory; each `traverse` call mints a fresh single-use stream.
pub use crate::traversal::{BlockSizes, Step, TraversalOrder};
