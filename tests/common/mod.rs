//! Common test utilities

#![allow(dead_code)]

use axum::Router;
use hostel_insights::{api, Config, HistoricalDataPoint, MetricsSnapshot};

/// Development config with default values
pub fn test_config() -> Config {
    Config::from_lookup(|_| None).expect("default config must load")
}

/// Full application router, as served by the binary
pub fn test_app() -> Router {
    api::build_app(&test_config())
}

/// Snapshot from the dashboard's reference scenario
pub fn scenario_snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        total_users: Some(100.0),
        new_users_this_month: Some(10.0),
        confirmed_bookings: Some(50.0),
        total_bookings: Some(60.0),
        booking_conversion_rate: Some(0.2),
        active_hostels_count: Some(5.0),
        list_hostel_requests: Some(2.0),
        ..Default::default()
    }
}

/// Scenario snapshot with the given history attached
pub fn with_history(history: Vec<HistoricalDataPoint>) -> MetricsSnapshot {
    MetricsSnapshot {
        historical_data: history,
        ..scenario_snapshot()
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
