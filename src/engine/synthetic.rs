//! Synthetic trend series
//!
//! With fewer than two history points the dashboard still needs something
//! to draw. The back-series here scales the current value by fixed factors
//! and ends with the forecast. It is a placeholder shape, not a prediction.

use std::iter;

use crate::domain::{Month, TrackedQuantity, TrendPoint};

/// Labels of the five synthetic points, in calendar order.
pub const SYNTHETIC_MONTHS: [Month; 5] = [Month::Jan, Month::Feb, Month::Mar, Month::Apr, Month::May];

/// Back-series factors for bookings; the last is the current period.
pub const BOOKING_TREND_SCALARS: [f64; 4] = [0.6, 0.7, 0.85, 1.0];

/// Back-series factors for users; the last is the current period.
pub const USER_TREND_SCALARS: [f64; 4] = [0.7, 0.8, 0.9, 1.0];

/// Factors for a quantity. Hostels have none and get no synthetic series.
pub fn trend_scalars(quantity: TrackedQuantity) -> Option<&'static [f64; 4]> {
    match quantity {
        TrackedQuantity::Users => Some(&USER_TREND_SCALARS),
        TrackedQuantity::Bookings => Some(&BOOKING_TREND_SCALARS),
        TrackedQuantity::Hostels => None,
    }
}

/// Five-point series ending with `predicted`, or `None` for hostels.
pub fn synthetic_trend(
    quantity: TrackedQuantity,
    current: f64,
    predicted: u64,
) -> Option<Vec<TrendPoint>> {
    let scalars = trend_scalars(quantity)?;

    let values = scalars
        .iter()
        .map(|scalar| (current * scalar).round())
        .chain(iter::once(predicted as f64));

    Some(
        SYNTHETIC_MONTHS
            .iter()
            .zip(values)
            .map(|(month, value)| TrendPoint::new(month.token(), value))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(series: &[TrendPoint]) -> Vec<f64> {
        series.iter().map(|p| p.value).collect()
    }

    #[test]
    fn test_booking_series() {
        let series = synthetic_trend(TrackedQuantity::Bookings, 60.0, 74).unwrap();
        assert_eq!(values(&series), vec![36.0, 42.0, 51.0, 60.0, 74.0]);
        let months: Vec<&str> = series.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["Jan", "Feb", "Mar", "Apr", "May"]);
    }

    #[test]
    fn test_user_series() {
        let series = synthetic_trend(TrackedQuantity::Users, 100.0, 111).unwrap();
        assert_eq!(values(&series), vec![70.0, 80.0, 90.0, 100.0, 111.0]);
    }

    #[test]
    fn test_hostels_have_no_series() {
        assert!(synthetic_trend(TrackedQuantity::Hostels, 5.0, 5).is_none());
    }

    #[test]
    fn test_series_non_decreasing_for_positive_current() {
        for current in [1.0, 3.0, 17.0, 250.0, 12_345.0] {
            for quantity in [TrackedQuantity::Users, TrackedQuantity::Bookings] {
                let series = synthetic_trend(quantity, current, 0).unwrap();
                let back = &values(&series)[..4];
                assert!(
                    back.windows(2).all(|w| w[0] <= w[1]),
                    "{quantity:?} series not monotonic for {current}: {back:?}"
                );
            }
        }
    }

    #[test]
    fn test_scalars_end_at_current_period() {
        assert_eq!(BOOKING_TREND_SCALARS.last(), Some(&1.0));
        assert_eq!(USER_TREND_SCALARS.last(), Some(&1.0));
    }
}
