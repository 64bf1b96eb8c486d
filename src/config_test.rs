#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_timings_match_page_contract() {
    let config = BehaviorConfig::default();
    assert_eq!(config.alert_dismiss_ms, 5000);
    assert_eq!(config.alert_fade_ms, 300);
    assert_eq!(config.submit_restore_ms, 3000);
    assert_eq!(config.search_debounce_ms, 500);
    assert_eq!(config.reveal_stagger_ms, 100);
    assert_eq!(config.scroll_top_threshold_px, 300.0);
    assert_eq!(config.reveal_threshold, 0.1);
}

#[test]
fn default_config_is_valid() {
    assert!(BehaviorConfig::default().validate().is_ok());
}

#[test]
fn default_level_is_info() {
    assert_eq!(BehaviorConfig::default().level(), log::Level::Info);
}

// =============================================================
// from_json
// =============================================================

#[test]
fn blank_json_yields_defaults() {
    let config = BehaviorConfig::from_json("   \n").unwrap();
    assert_eq!(config, BehaviorConfig::default());
}

#[test]
fn empty_object_yields_defaults() {
    let config = BehaviorConfig::from_json("{}").unwrap();
    assert_eq!(config, BehaviorConfig::default());
}

#[test]
fn partial_json_overrides_only_named_keys() {
    let config = BehaviorConfig::from_json(r#"{ "alert_dismiss_ms": 8000, "log_level": "debug" }"#).unwrap();
    assert_eq!(config.alert_dismiss_ms, 8000);
    assert_eq!(config.level(), log::Level::Debug);
    assert_eq!(config.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
    assert_eq!(config.busy_label, DEFAULT_BUSY_LABEL);
}

#[test]
fn malformed_json_is_config_error() {
    let err = BehaviorConfig::from_json("{ alert_dismiss_ms: 1 }").unwrap_err();
    assert!(matches!(err, BehaviorError::Config(_)));
}

#[test]
fn unknown_key_is_rejected() {
    let err = BehaviorConfig::from_json(r#"{ "alert_dismis_ms": 1 }"#).unwrap_err();
    assert!(matches!(err, BehaviorError::Config(_)));
}

#[test]
fn wrong_type_is_rejected() {
    let err = BehaviorConfig::from_json(r#"{ "search_debounce_ms": "fast" }"#).unwrap_err();
    assert!(matches!(err, BehaviorError::Config(_)));
}

// =============================================================
// validate
// =============================================================

#[test]
fn reveal_threshold_above_one_is_invalid() {
    let err = BehaviorConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).unwrap_err();
    assert!(matches!(err, BehaviorError::InvalidConfig(_)));
}

#[test]
fn reveal_threshold_bounds_are_inclusive() {
    assert!(BehaviorConfig::from_json(r#"{ "reveal_threshold": 0.0 }"#).is_ok());
    assert!(BehaviorConfig::from_json(r#"{ "reveal_threshold": 1.0 }"#).is_ok());
}

#[test]
fn negative_scroll_threshold_is_invalid() {
    let err = BehaviorConfig::from_json(r#"{ "scroll_top_threshold_px": -1 }"#).unwrap_err();
    assert!(matches!(err, BehaviorError::InvalidConfig(_)));
}

#[test]
fn unknown_log_level_is_invalid() {
    let err = BehaviorConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
    assert!(matches!(err, BehaviorError::InvalidConfig(_)));
}

#[test]
fn log_level_is_case_insensitive() {
    let config = BehaviorConfig::from_json(r#"{ "log_level": "WARN" }"#).unwrap();
    assert_eq!(config.level(), log::Level::Warn);
}
