//! Metrics snapshot
//!
//! The current-period aggregate record the dashboard hands to the insights
//! engine, plus its embedded month-by-month history. Every field is
//! optional on the wire. Values that are missing or not numeric read as
//! absent; absent values are coalesced exactly once, in
//! [`MetricsSnapshot::figures`], so the engine only sees populated numbers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::month::Month;

/// Current-period aggregate metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_bookings: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub confirmed_bookings: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub cancelled_bookings: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_users: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub new_users_this_month: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub active_hostels_count: Option<f64>,

    /// Confirmed / total bookings, nominally in [0, 1]
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub booking_conversion_rate: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub cancellation_rate: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub avg_bookings_per_user: Option<f64>,

    /// Pending hostel listing requests
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub list_hostel_requests: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub cancelled_hostel_requests: Option<f64>,

    #[serde(default, deserialize_with = "lenient_history")]
    pub historical_data: Vec<HistoricalDataPoint>,
}

/// One calendar month of recorded metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalDataPoint {
    /// Raw month label as received; see [`HistoricalDataPoint::calendar_month`]
    #[serde(default, deserialize_with = "lenient_label")]
    pub month: String,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub users: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub bookings: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub confirmed_bookings: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub cancelled_bookings: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub hostels: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
}

/// Snapshot values with every absent field coalesced to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SnapshotFigures {
    pub total_bookings: f64,
    pub confirmed_bookings: f64,
    pub cancelled_bookings: f64,
    pub total_users: f64,
    pub new_users_this_month: f64,
    pub active_hostels_count: f64,
    pub booking_conversion_rate: f64,
    pub cancellation_rate: f64,
    pub avg_bookings_per_user: f64,
    pub list_hostel_requests: f64,
    pub cancelled_hostel_requests: f64,
}

/// The quantities the engine forecasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedQuantity {
    Users,
    Bookings,
    Hostels,
}

impl TrackedQuantity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Bookings => "bookings",
            Self::Hostels => "hostels",
        }
    }
}

/// Coalesce an absent or non-finite value to `fallback`.
pub fn or_default(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => fallback,
    }
}

impl MetricsSnapshot {
    /// Resolve every optional counter, treating absence as zero.
    pub fn figures(&self) -> SnapshotFigures {
        SnapshotFigures {
            total_bookings: or_default(self.total_bookings, 0.0),
            confirmed_bookings: or_default(self.confirmed_bookings, 0.0),
            cancelled_bookings: or_default(self.cancelled_bookings, 0.0),
            total_users: or_default(self.total_users, 0.0),
            new_users_this_month: or_default(self.new_users_this_month, 0.0),
            active_hostels_count: or_default(self.active_hostels_count, 0.0),
            booking_conversion_rate: or_default(self.booking_conversion_rate, 0.0),
            cancellation_rate: or_default(self.cancellation_rate, 0.0),
            avg_bookings_per_user: or_default(self.avg_bookings_per_user, 0.0),
            list_hostel_requests: or_default(self.list_hostel_requests, 0.0),
            cancelled_hostel_requests: or_default(self.cancelled_hostel_requests, 0.0),
        }
    }
}

impl SnapshotFigures {
    /// Current absolute value of a tracked quantity.
    pub fn current(&self, quantity: TrackedQuantity) -> f64 {
        match quantity {
            TrackedQuantity::Users => self.total_users,
            TrackedQuantity::Bookings => self.total_bookings,
            TrackedQuantity::Hostels => self.active_hostels_count,
        }
    }
}

impl HistoricalDataPoint {
    /// Create a point for a month label with no figures.
    pub fn new(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            ..Self::default()
        }
    }

    pub fn with_users(mut self, users: f64) -> Self {
        self.users = Some(users);
        self
    }

    pub fn with_bookings(mut self, bookings: f64) -> Self {
        self.bookings = Some(bookings);
        self
    }

    pub fn with_hostels(mut self, hostels: f64) -> Self {
        self.hostels = Some(hostels);
        self
    }

    /// Calendar month, or `None` when the label is unrecognized.
    pub fn calendar_month(&self) -> Option<Month> {
        Month::parse_label(&self.month)
    }

    /// Recorded value of a tracked quantity, if present.
    pub fn value(&self, quantity: TrackedQuantity) -> Option<f64> {
        let value = match quantity {
            TrackedQuantity::Users => self.users,
            TrackedQuantity::Bookings => self.bookings,
            TrackedQuantity::Hostels => self.hostels,
        };
        value.filter(|v| v.is_finite())
    }
}

// =========================================================================
// Lenient field readers
// =========================================================================

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

fn lenient_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    })
}

/// Reads the history array, dropping entries that are not objects.
fn lenient_history<'de, D>(deserializer: D) -> Result<Vec<HistoricalDataPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let entries = match value {
        Some(Value::Array(entries)) => entries,
        _ => return Ok(Vec::new()),
    };

    Ok(entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}
