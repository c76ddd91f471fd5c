//! hostel_insights Library
//!
//! Predictive insights for the lodging-marketplace admin dashboard: growth
//! rates and next-month forecasts computed from a metrics snapshot.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
mod error;

pub use config::{Config, ConfigError};
pub use domain::{
    GrowthRates, GrowthTrend, HistoricalDataPoint, InsightsMode, MetricsSnapshot,
    PredictiveInsights, TrendPoint,
};
pub use engine::{assemble_insights, estimate_growth_rates};
pub use error::{AppError, AppResult};
