//! Growth rate estimation
//!
//! Fractional period-over-period growth per tracked quantity. The
//! historical rate compares the two most recent recognized months; when
//! that is not computable the quantity falls back to a proxy rate built
//! from the current snapshot.

use crate::domain::{EstimateError, HistoricalDataPoint, SnapshotFigures, TrackedQuantity};

use super::normalizer::recognized_prefix;

/// Multiplier on the conversion rate used as the booking proxy.
///
/// Heuristic, not derived from a model: a 20% optimism buffer kept for
/// compatibility with the rates the dashboard has always shown.
pub const BOOKING_OPTIMISM_FACTOR: f64 = 1.2;

/// Divisor applied to the pending-requests-per-hostel ratio.
pub const HOSTEL_REQUEST_DAMPING: f64 = 10.0;

/// Smallest denominator any proxy formula divides by.
const MIN_DENOMINATOR: f64 = 1.0;

/// Largest growth rate, either sign, the engine reports or forecasts with.
///
/// Keeps the percentage conversion finite, so the reported percentage and
/// the forecast are always derived from the same rate.
pub const MAX_GROWTH_RATE: f64 = 1.0e12;

/// Bound a finite rate to `[-MAX_GROWTH_RATE, MAX_GROWTH_RATE]`.
fn bounded(rate: f64) -> f64 {
    rate.clamp(-MAX_GROWTH_RATE, MAX_GROWTH_RATE)
}

/// Proxy growth rate derived from the snapshot alone. Always finite and
/// bounded by [`MAX_GROWTH_RATE`].
pub fn proxy_rate(quantity: TrackedQuantity, figures: &SnapshotFigures) -> f64 {
    let rate = match quantity {
        TrackedQuantity::Users => {
            let existing = figures.total_users - figures.new_users_this_month;
            figures.new_users_this_month / existing.max(MIN_DENOMINATOR)
        }
        TrackedQuantity::Bookings => figures.booking_conversion_rate * BOOKING_OPTIMISM_FACTOR,
        TrackedQuantity::Hostels => {
            figures.list_hostel_requests
                / figures.active_hostels_count.max(MIN_DENOMINATOR)
                / HOSTEL_REQUEST_DAMPING
        }
    };

    if rate.is_finite() {
        bounded(rate)
    } else {
        0.0
    }
}

/// Growth between the last two recognized months of an ordered history,
/// bounded by [`MAX_GROWTH_RATE`].
///
/// # Errors
/// - `InsufficientHistory` if fewer than two recognized months
/// - `MissingValue` if either month lacks the quantity
/// - `ZeroBaseline` if the previous month recorded zero
/// - `NonFinite` if the ratio overflowed
pub fn historical_rate(
    quantity: TrackedQuantity,
    ordered: &[HistoricalDataPoint],
) -> Result<f64, EstimateError> {
    let recognized = recognized_prefix(ordered);
    let [.., previous, latest] = recognized else {
        return Err(EstimateError::InsufficientHistory {
            points: recognized.len(),
        });
    };

    let missing = |point: &HistoricalDataPoint| EstimateError::MissingValue {
        quantity,
        month: point.month.clone(),
    };
    let baseline = previous.value(quantity).ok_or_else(|| missing(previous))?;
    let latest_value = latest.value(quantity).ok_or_else(|| missing(latest))?;

    if baseline == 0.0 {
        return Err(EstimateError::ZeroBaseline {
            quantity,
            month: previous.month.clone(),
        });
    }

    let rate = (latest_value - baseline) / baseline;
    if !rate.is_finite() {
        return Err(EstimateError::NonFinite { quantity });
    }

    Ok(bounded(rate))
}

/// Historical rate when computable, otherwise the proxy rate.
pub fn estimate_rate(
    quantity: TrackedQuantity,
    ordered: &[HistoricalDataPoint],
    figures: &SnapshotFigures,
) -> f64 {
    match historical_rate(quantity, ordered) {
        Ok(rate) => rate,
        Err(err) => {
            let rate = proxy_rate(quantity, figures);
            // Sparse history is routine; degenerate arithmetic is worth a look.
            if err.is_missing_data() {
                tracing::trace!(
                    quantity = quantity.as_str(),
                    reason = %err,
                    proxy_rate = rate,
                    "Falling back to proxy growth rate"
                );
            } else {
                tracing::debug!(
                    quantity = quantity.as_str(),
                    reason = %err,
                    proxy_rate = rate,
                    "Falling back to proxy growth rate"
                );
            }
            rate
        }
    }
}
