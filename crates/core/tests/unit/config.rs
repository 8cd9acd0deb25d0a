//! Configuration Validation Unit Tests.
//!
//! Every invalid knob must be rejected with a descriptive error before any
//! simulation state is created; valid configurations (including the
//! defaults) must pass.

use rstest::rstest;
use tilesim_core::common::ConfigError;
use tilesim_core::config::SimConfig;

use crate::common::sim_config;

// ══════════════════════════════════════════════════════════
// 1. Defaults
// ══════════════════════════════════════════════════════════

/// The built-in defaults describe a valid search setup.
#[test]
fn defaults_validate() {
    let config = SimConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.matrix.total_steps(), 14 * 14 * 14);
    assert_eq!(config.step_delay_ms, None);
}

/// Partial JSON fills the rest from defaults.
#[test]
fn partial_json_uses_defaults() {
    let config: SimConfig =
        serde_json::from_str(r#"{ "matrix": { "rows1": 3 }, "cache": {} }"#).unwrap();
    assert_eq!(config.matrix.rows1, 3);
    assert_eq!(config.matrix.common, 14);
    assert_eq!(config.cache.line_cells, 8);
    assert!(config.validate().is_ok());
}

// ══════════════════════════════════════════════════════════
// 2. Rejections
// ══════════════════════════════════════════════════════════

/// Each zero dimension is rejected and named.
#[rstest]
#[case(0, 2, 2, "rows1")]
#[case(2, 0, 2, "common")]
#[case(2, 2, 0, "cols2")]
fn zero_dimensions_rejected(
    #[case] rows1: usize,
    #[case] common: usize,
    #[case] cols2: usize,
    #[case] name: &'static str,
) {
    let config = sim_config(rows1, common, cols2, 4, 2, 0);
    assert_eq!(
        config.validate(),
        Err(ConfigError::ZeroDimension { name })
    );
}

/// A cache that can hold no lines is rejected.
#[test]
fn zero_capacity_rejected() {
    let config = sim_config(2, 2, 2, 0, 2, 0);
    assert_eq!(config.validate(), Err(ConfigError::ZeroCapacity));
}

/// A line that can hold no cells is rejected.
#[test]
fn zero_line_size_rejected() {
    let config = sim_config(2, 2, 2, 4, 0, 0);
    assert_eq!(config.validate(), Err(ConfigError::ZeroLineSize));
}

/// The offset must fall inside the first line.
#[rstest]
#[case(8, 8)]
#[case(8, 9)]
#[case(1, 1)]
fn offset_outside_line_rejected(#[case] line_cells: usize, #[case] offset: usize) {
    let config = sim_config(2, 2, 2, 4, line_cells, offset);
    assert_eq!(
        config.validate(),
        Err(ConfigError::OffsetOutOfRange { offset, line_cells })
    );
}

/// The largest valid offset is one cell short of the line size.
#[test]
fn max_offset_accepted() {
    let config = sim_config(2, 2, 2, 4, 8, 7);
    assert!(config.validate().is_ok());
}

/// Errors render as actionable messages.
#[test]
fn errors_are_descriptive() {
    let err = sim_config(2, 2, 2, 4, 4, 5).validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "offset 5 is outside the first cache line [0, 4)"
    );

    let err = sim_config(0, 2, 2, 4, 4, 0).validate().unwrap_err();
    assert_eq!(err.to_string(), "matrix dimension `rows1` must be positive");
}
