//! History normalization
//!
//! Orders monthly points into calendar sequence.

use crate::domain::{HistoricalDataPoint, Month, TrackedQuantity, TrendPoint};

/// Sort key for points whose label is not a month token; they go last.
const UNRECOGNIZED_RANK: usize = usize::MAX;

/// Stable sort by calendar month. Unrecognized labels keep their relative
/// order after every recognized point. An empty result means no history.
pub fn normalize_history(points: &[HistoricalDataPoint]) -> Vec<HistoricalDataPoint> {
    let mut ordered = points.to_vec();
    ordered.sort_by_key(|point| {
        point
            .calendar_month()
            .map_or(UNRECOGNIZED_RANK, Month::index)
    });
    ordered
}

/// Leading run of an ordered history whose months are recognized.
pub fn recognized_prefix(ordered: &[HistoricalDataPoint]) -> &[HistoricalDataPoint] {
    let len = ordered
        .iter()
        .take_while(|point| point.calendar_month().is_some())
        .count();
    &ordered[..len]
}

/// Trend series for one quantity; missing values count as zero.
pub fn history_series(quantity: TrackedQuantity, ordered: &[HistoricalDataPoint]) -> Vec<TrendPoint> {
    ordered
        .iter()
        .map(|point| TrendPoint::new(point.month.clone(), point.value(quantity).unwrap_or(0.0)))
        .collect()
}
