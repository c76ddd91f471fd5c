//! Predictive insights output
//!
//! Recomputed on every invocation; carries no identity of its own.

use serde::{Deserialize, Serialize};

/// Which path produced the insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightsMode {
    /// Growth derived from at least two ordered history points
    Historical,
    /// Proxy growth rates and a fabricated back-series
    Synthetic,
}

/// One point of a trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub value: f64,
}

impl TrendPoint {
    pub fn new(month: impl Into<String>, value: f64) -> Self {
        Self {
            month: month.into(),
            value,
        }
    }
}

/// Growth summary for one tracked quantity.
///
/// # Invariants
/// - `growth_rate` is finite (a percentage, two decimals)
/// - `trend`, when present, is non-empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthTrend {
    pub current_value: f64,
    pub predicted_value: u64,
    pub growth_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Vec<TrendPoint>>,
}

/// Engine output handed to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveInsights {
    pub mode: InsightsMode,
    pub predicted_next_month_users: u64,
    pub predicted_next_month_bookings: u64,
    pub predicted_next_month_hostels: u64,
    pub user_growth: GrowthTrend,
    pub booking_growth: GrowthTrend,
    pub hostel_expansion: GrowthTrend,
}

/// Fractional growth rates, without forecasts or trends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRates {
    pub mode: InsightsMode,
    pub users: f64,
    pub bookings: f64,
    pub hostels: f64,
}

/// Convert a fractional rate to a percentage rounded to two decimals.
pub fn to_percentage(rate: f64) -> f64 {
    if !rate.is_finite() {
        return 0.0;
    }
    let pct = (rate * 10_000.0).round() / 100.0;
    if pct.is_finite() {
        pct
    } else {
        0.0
    }
}
