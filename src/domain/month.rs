//! Month tokens
//!
//! Fixed calendar ordering for the three-letter month labels carried by
//! historical data points. Ordering is a table lookup, never date parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The twelve month tokens in calendar order.
pub const MONTH_TOKENS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Calendar month, ordered January through December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

/// A label that is not one of the twelve month tokens
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized month label: {0:?}")]
pub struct UnknownMonth(pub String);

impl Month {
    const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Zero-based calendar index (Jan = 0, Dec = 11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Month for a zero-based index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The three-letter token.
    pub fn token(self) -> &'static str {
        MONTH_TOKENS[self.index()]
    }

    /// Look up a label in the token table. Only the exact three-letter
    /// tokens match; anything else is unrecognized.
    pub fn parse_label(label: &str) -> Option<Self> {
        MONTH_TOKENS
            .iter()
            .position(|t| *t == label)
            .and_then(Self::from_index)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Month {
    type Err = UnknownMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s).ok_or_else(|| UnknownMonth(s.to_string()))
    }
}

impl TryFrom<String> for Month {
    type Error = UnknownMonth;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Month::from_str(&value)
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.token().to_string()
    }
}
