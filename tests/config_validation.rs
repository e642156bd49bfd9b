//! Tests for configuration validation.
//!
//! Builder methods panic on values that are programmer errors; `validate()`
//! (run eagerly at the start of every calibration) rejects inconsistent
//! field combinations with an error.

use std::time::Duration;

use argon2_autotune::CalibratorConfig;

// =============================================================================
// BUILDER PANICS
// =============================================================================

#[test]
#[should_panic(expected = "min_memory_cost must be <= max_memory_cost")]
fn inverted_memory_range_panics() {
    let _ = CalibratorConfig::new().memory_cost_range(1024 * 64, 1024 * 19);
}

#[test]
#[should_panic(expected = "min_memory_cost must be > 0")]
fn zero_min_memory_panics() {
    let _ = CalibratorConfig::new().memory_cost_range(0, 1024);
}

#[test]
#[should_panic(expected = "min_time_cost must be <= max_time_cost")]
fn inverted_time_range_panics() {
    let _ = CalibratorConfig::new().time_cost_range(10, 2);
}

#[test]
#[should_panic(expected = "min_time_cost must be >= 1")]
fn zero_min_time_panics() {
    let _ = CalibratorConfig::new().time_cost_range(0, 10);
}

#[test]
#[should_panic(expected = "parallelism must be >= 1")]
fn zero_parallelism_panics() {
    let _ = CalibratorConfig::new().parallelism(0);
}

#[test]
#[should_panic(expected = "hash_length must be in 4..=64")]
fn tiny_hash_length_panics() {
    let _ = CalibratorConfig::new().hash_length(3);
}

#[test]
#[should_panic(expected = "hash_length must be in 4..=64")]
fn oversized_hash_length_panics() {
    let _ = CalibratorConfig::new().hash_length(65);
}

#[test]
#[should_panic(expected = "salt_len must be in 8..=48")]
fn short_salt_panics() {
    let _ = CalibratorConfig::new().salt_len(7);
}

#[test]
#[should_panic(expected = "salt_len must be in 8..=48")]
fn long_salt_panics() {
    let _ = CalibratorConfig::new().salt_len(49);
}

#[test]
#[should_panic(expected = "password_len must be > 0")]
fn zero_password_len_panics() {
    let _ = CalibratorConfig::new().password_len(0);
}

#[test]
#[should_panic(expected = "max_duration must be non-zero")]
fn zero_ceiling_panics() {
    let _ = CalibratorConfig::new().max_duration(Duration::ZERO);
}

#[test]
#[should_panic(expected = "max_probes must be >= 1")]
fn zero_probe_budget_panics() {
    let _ = CalibratorConfig::new().max_probes(0);
}

#[test]
#[should_panic(expected = "workers must be >= 1")]
fn zero_workers_panics() {
    let _ = CalibratorConfig::new().workers(0);
}

#[test]
#[should_panic(expected = "window must be non-zero")]
fn zero_window_panics() {
    let _ = CalibratorConfig::new().window(Duration::ZERO);
}

// =============================================================================
// BOUNDARY VALUES ACCEPTED
// =============================================================================

#[test]
fn boundary_values_accepted() {
    let config = CalibratorConfig::new()
        .parallelism(1)
        .memory_cost_range(8, 8)
        .time_cost_range(1, 1)
        .hash_length(4)
        .salt_len(8)
        .password_len(1)
        .max_probes(1)
        .max_duration(Duration::from_nanos(1))
        .workers(1)
        .window(Duration::from_nanos(1));
    assert!(config.validate().is_ok());
}

#[test]
fn upper_boundary_values_accepted() {
    let config = CalibratorConfig::new().hash_length(64).salt_len(48);
    assert!(config.validate().is_ok());
}

// =============================================================================
// VALIDATE REJECTS FIELD-LEVEL MUTATION
// =============================================================================

#[test]
fn validate_rejects_memory_floor_below_argon2_minimum() {
    let mut config = CalibratorConfig::default();
    config.parallelism = 8;
    config.min_memory_cost = 8 * 8 - 1;
    let err = config.validate().unwrap_err();
    assert!(err.contains("8 * parallelism"));
}

#[test]
fn validate_rejects_inverted_bounds_set_directly() {
    let mut config = CalibratorConfig::default();
    config.max_memory_cost = config.min_memory_cost - 1;
    assert!(config.validate().is_err());

    let mut config = CalibratorConfig::default();
    config.max_time_cost = config.min_time_cost - 1;
    assert!(config.validate().is_err());
}

#[test]
fn validate_checks_concurrency_only_when_enabled() {
    let mut config = CalibratorConfig::default();
    config.concurrency.workers = 0;
    assert!(config.validate().is_err());

    config.concurrency.enabled = false;
    assert!(config.validate().is_ok());
}
