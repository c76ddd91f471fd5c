//! Next-period forecast

/// Project `current` forward by a fractional `rate`.
///
/// The result is rounded and floored at zero; a non-finite projection
/// yields zero.
pub fn forecast(current: f64, rate: f64) -> u64 {
    let projected = (current * (1.0 + rate)).round();
    if !projected.is_finite() || projected <= 0.0 {
        return 0;
    }
    // `as` saturates at `u64::MAX`
    projected as u64
}
