//! Configuration system for the simulator.
//!
//! This module defines the structures used to parameterize a simulation run.
//! It provides:
//! 1. **Defaults:** Baseline parameters (matrix shape, cache geometry).
//! 2. **Structures:** Matrix dimensions and cache parameters, grouped under
//!    one root config.
//! 3. **Validation:** Fail-fast checks applied before any simulation state
//!    is created.
//!
//! Configuration is supplied as JSON (e.g. from the CLI's `--config` file) or
//! use `SimConfig::default()`.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline setup when not explicitly overridden,
/// sized so that the brute-force tiling search stays interactive.
mod defaults {
    /// Default number of rows of the left operand (and the result).
    pub const ROWS1: usize = 14;

    /// Default shared dimension: columns of the left operand, rows of the right.
    pub const COMMON: usize = 14;

    /// Default number of columns of the right operand (and the result).
    pub const COLS2: usize = 14;

    /// Default cache capacity, in lines.
    pub const CAPACITY_LINES: usize = 20;

    /// Default cache-line size, in matrix cells.
    pub const LINE_CELLS: usize = 8;

    /// Default starting misalignment within the first line.
    pub const OFFSET: usize = 0;
}

/// Root configuration structure for one simulation or search.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use tilesim_core::config::SimConfig;
///
/// let config = SimConfig::default();
/// assert_eq!(config.matrix.rows1, 14);
/// assert_eq!(config.cache.capacity_lines, 20);
/// assert!(config.validate().is_ok());
/// ```
///
/// Deserializing from JSON (typical CLI usage):
///
/// ```
/// use tilesim_core::config::SimConfig;
///
/// let json = r#"{
///     "matrix": { "rows1": 50, "common": 50, "cols2": 50 },
///     "cache": { "capacity_lines": 30, "line_cells": 8, "offset": 3 },
///     "step_delay_ms": 1
/// }"#;
///
/// let config: SimConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.matrix.cols2, 50);
/// assert_eq!(config.cache.offset, 3);
/// assert_eq!(config.step_delay_ms, Some(1));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    /// Matrix dimensions of the multiplication being traversed.
    #[serde(default)]
    pub matrix: MatrixDims,

    /// Simulated cache parameters.
    #[serde(default)]
    pub cache: CacheParams,

    /// Per-step pacing delay in milliseconds for replay runs.
    ///
    /// `None` runs to completion without pacing. The kernel itself never
    /// sleeps; drivers honoring this value sleep between `step()` calls.
    #[serde(default)]
    pub step_delay_ms: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            matrix: MatrixDims::default(),
            cache: CacheParams::default(),
            step_delay_ms: None,
        }
    }
}

impl SimConfig {
    /// Validates the whole configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in the matrix dimensions or
    /// the cache parameters. Nothing is partially constructed on failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.matrix.validate()?;
        self.cache.validate()
    }
}

/// Dimensions of the matrix multiplication `A(rows1 × common) · B(common × cols2)`.
///
/// The result matrix is `rows1 × cols2`. All three dimensions must be
/// positive.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MatrixDims {
    /// Rows of the left operand and of the result.
    #[serde(default = "MatrixDims::default_rows1")]
    pub rows1: usize,

    /// Columns of the left operand, rows of the right operand.
    #[serde(default = "MatrixDims::default_common")]
    pub common: usize,

    /// Columns of the right operand and of the result.
    #[serde(default = "MatrixDims::default_cols2")]
    pub cols2: usize,
}

impl MatrixDims {
    /// Returns the default left-operand row count.
    fn default_rows1() -> usize {
        defaults::ROWS1
    }

    /// Returns the default shared dimension.
    fn default_common() -> usize {
        defaults::COMMON
    }

    /// Returns the default right-operand column count.
    fn default_cols2() -> usize {
        defaults::COLS2
    }

    /// Validates that every dimension is positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDimension`] naming the offending axis.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows1 == 0 {
            return Err(ConfigError::ZeroDimension { name: "rows1" });
        }
        if self.common == 0 {
            return Err(ConfigError::ZeroDimension { name: "common" });
        }
        if self.cols2 == 0 {
            return Err(ConfigError::ZeroDimension { name: "cols2" });
        }
        Ok(())
    }

    /// Number of multiply-accumulate steps in one full traversal.
    pub fn total_steps(&self) -> u64 {
        self.rows1 as u64 * self.cols2 as u64 * self.common as u64
    }

    /// Largest of the three extents; sizes the per-matrix address stride.
    pub fn max_extent(&self) -> usize {
        self.rows1.max(self.cols2).max(self.common)
    }
}

impl Default for MatrixDims {
    fn default() -> Self {
        Self {
            rows1: defaults::ROWS1,
            common: defaults::COMMON,
            cols2: defaults::COLS2,
        }
    }
}

/// Simulated cache parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CacheParams {
    /// Cache capacity, in lines.
    #[serde(default = "CacheParams::default_capacity")]
    pub capacity_lines: usize,

    /// Cache-line size, in matrix cells.
    #[serde(default = "CacheParams::default_line")]
    pub line_cells: usize,

    /// Starting misalignment within the first line; `0 <= offset < line_cells`.
    ///
    /// Used to study how alignment affects the hit ratio.
    #[serde(default = "CacheParams::default_offset")]
    pub offset: usize,
}

impl CacheParams {
    /// Returns the default cache capacity, in lines.
    fn default_capacity() -> usize {
        defaults::CAPACITY_LINES
    }

    /// Returns the default line size, in cells.
    fn default_line() -> usize {
        defaults::LINE_CELLS
    }

    /// Returns the default offset.
    fn default_offset() -> usize {
        defaults::OFFSET
    }

    /// Validates capacity, line size, and offset range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`], [`ConfigError::ZeroLineSize`],
    /// or [`ConfigError::OffsetOutOfRange`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity_lines == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.line_cells == 0 {
            return Err(ConfigError::ZeroLineSize);
        }
        if self.offset >= self.line_cells {
            return Err(ConfigError::OffsetOutOfRange {
                offset: self.offset,
                line_cells: self.line_cells,
            });
        }
        Ok(())
    }
}

impl Default for CacheParams {
    fn default() -> Self {
        Self {
            capacity_lines: defaults::CAPACITY_LINES,
            line_cells: defaults::LINE_CELLS,
            offset: defaults::OFFSET,
        }
    }
}
