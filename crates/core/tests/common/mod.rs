//! Shared helpers for the simulator test suite.

use tilesim_core::config::{CacheParams, MatrixDims, SimConfig};

/// Builds a config from the six knobs every test cares about.
pub fn sim_config(
    rows1: usize,
    common: usize,
    cols2: usize,
    capacity_lines: usize,
    line_cells: usize,
    offset: usize,
) -> SimConfig {
    SimConfig {
        matrix: MatrixDims {
            rows1,
            common,
            cols2,
        },
        cache: CacheParams {
            capacity_lines,
            line_cells,
            offset,
        },
        step_delay_ms: None,
    }
}

/// Builds just the matrix dimensions.
pub fn dims(rows1: usize, common: usize, cols2: usize) -> MatrixDims {
    MatrixDims {
        rows1,
        common,
        cols2,
    }
}
