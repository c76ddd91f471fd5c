//! Insights assembly
//!
//! Chooses the historical or synthetic path once per snapshot and builds
//! the growth summary for each tracked quantity independently.

use crate::domain::insights::to_percentage;
use crate::domain::{
    GrowthRates, GrowthTrend, HistoricalDataPoint, InsightsMode, MetricsSnapshot,
    PredictiveInsights, SnapshotFigures, TrackedQuantity,
};

use super::forecast::forecast;
use super::growth::{estimate_rate, proxy_rate};
use super::normalizer::{history_series, normalize_history};
use super::synthetic::synthetic_trend;

/// Minimum number of ordered points for the historical path.
pub const MIN_HISTORY_POINTS: usize = 2;

/// The single branching decision of the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum InsightsPath {
    /// Calendar-ordered history with at least two points
    HasHistory(Vec<HistoricalDataPoint>),
    NoHistory,
}

impl InsightsPath {
    /// Normalize the snapshot's history and pick a path.
    pub fn select(history: &[HistoricalDataPoint]) -> Self {
        let ordered = normalize_history(history);
        if ordered.len() >= MIN_HISTORY_POINTS {
            Self::HasHistory(ordered)
        } else {
            Self::NoHistory
        }
    }

    pub fn mode(&self) -> InsightsMode {
        match self {
            Self::HasHistory(_) => InsightsMode::Historical,
            Self::NoHistory => InsightsMode::Synthetic,
        }
    }

    /// Fractional growth rate for one quantity on this path.
    pub fn rate(&self, quantity: TrackedQuantity, figures: &SnapshotFigures) -> f64 {
        match self {
            Self::HasHistory(ordered) => estimate_rate(quantity, ordered, figures),
            Self::NoHistory => proxy_rate(quantity, figures),
        }
    }

    /// Growth summary for one quantity on this path.
    pub fn growth_trend(&self, quantity: TrackedQuantity, figures: &SnapshotFigures) -> GrowthTrend {
        let current = figures.current(quantity);
        let rate = self.rate(quantity, figures);
        let predicted = forecast(current, rate);

        let trend = match self {
            Self::HasHistory(ordered) => Some(history_series(quantity, ordered)),
            Self::NoHistory => synthetic_trend(quantity, current, predicted),
        };

        GrowthTrend {
            current_value: current,
            predicted_value: predicted,
            growth_rate: to_percentage(rate),
            trend,
        }
    }
}

/// Turn a snapshot into next-period forecasts and growth trends.
pub fn assemble_insights(snapshot: &MetricsSnapshot) -> PredictiveInsights {
    let figures = snapshot.figures();
    let path = InsightsPath::select(&snapshot.historical_data);

    tracing::debug!(
        mode = ?path.mode(),
        history_points = snapshot.historical_data.len(),
        "Assembling predictive insights"
    );

    let user_growth = path.growth_trend(TrackedQuantity::Users, &figures);
    let booking_growth = path.growth_trend(TrackedQuantity::Bookings, &figures);
    let hostel_expansion = path.growth_trend(TrackedQuantity::Hostels, &figures);

    PredictiveInsights {
        mode: path.mode(),
        predicted_next_month_users: user_growth.predicted_value,
        predicted_next_month_bookings: booking_growth.predicted_value,
        predicted_next_month_hostels: hostel_expansion.predicted_value,
        user_growth,
        booking_growth,
        hostel_expansion,
    }
}

/// Fractional growth rates only, on the same path selection.
pub fn estimate_growth_rates(snapshot: &MetricsSnapshot) -> GrowthRates {
    let figures = snapshot.figures();
    let path = InsightsPath::select(&snapshot.historical_data);

    GrowthRates {
        mode: path.mode(),
        users: path.rate(TrackedQuantity::Users, &figures),
        bookings: path.rate(TrackedQuantity::Bookings, &figures),
        hostels: path.rate(TrackedQuantity::Hostels, &figures),
    }
}
