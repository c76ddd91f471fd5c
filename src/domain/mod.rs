//! Domain module
//!
//! Snapshot, history and insights types shared by the engine and the API.

pub mod context;
pub mod error;
pub mod insights;
pub mod month;
pub mod snapshot;

pub use context::RequestContext;
pub use error::EstimateError;
pub use insights::{GrowthRates, GrowthTrend, InsightsMode, PredictiveInsights, TrendPoint};
pub use month::{Month, UnknownMonth, MONTH_TOKENS};
pub use snapshot::{
    or_default, HistoricalDataPoint, MetricsSnapshot, SnapshotFigures, TrackedQuantity,
};
