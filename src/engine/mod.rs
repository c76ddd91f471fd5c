//! Predictive insights engine
//!
//! Pure, synchronous transformation from a [`MetricsSnapshot`] to
//! [`PredictiveInsights`]. Identical input always yields identical output.
//!
//! [`MetricsSnapshot`]: crate::domain::MetricsSnapshot
//! [`PredictiveInsights`]: crate::domain::PredictiveInsights

pub mod assembler;
pub mod forecast;
pub mod growth;
pub mod normalizer;
pub mod synthetic;

pub use assembler::{assemble_insights, estimate_growth_rates, InsightsPath, MIN_HISTORY_POINTS};
pub use forecast::forecast;
pub use growth::{
    estimate_rate, historical_rate, proxy_rate, BOOKING_OPTIMISM_FACTOR, HOSTEL_REQUEST_DAMPING,
    MAX_GROWTH_RATE,
};
pub use normalizer::{history_series, normalize_history, recognized_prefix};
pub use synthetic::{
    synthetic_trend, trend_scalars, BOOKING_TREND_SCALARS, SYNTHETIC_MONTHS, USER_TREND_SCALARS,
};
