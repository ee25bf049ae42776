//! Calendar dates and validity periods

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parse an ISO `YYYY-MM-DD` date, failing fast on malformed input
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| Error::InvalidArgument(format!("not a valid date '{}': {}", input, e)))
}

/// Half-open validity period `[valid_from, valid_to)`
///
/// `valid_to` of `None` means the period is unbounded ("until changed").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityPeriod {
    /// First date on which the period applies
    pub valid_from: NaiveDate,
    /// First date on which the period no longer applies, if bounded
    pub valid_to: Option<NaiveDate>,
}

impl ValidityPeriod {
    /// Create a bounded period `[valid_from, valid_to)`
    pub fn bounded(valid_from: NaiveDate, valid_to: NaiveDate) -> Self {
        Self {
            valid_from,
            valid_to: Some(valid_to),
        }
    }

    /// Create an open-ended period starting at `valid_from`
    pub fn unbounded(valid_from: NaiveDate) -> Self {
        Self {
            valid_from,
            valid_to: None,
        }
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.valid_from && self.valid_to.map(|end| date < end).unwrap_or(true)
    }

    /// Check if the period ends at or before `date` (i.e. is fully expired)
    pub fn expires_before(&self, date: NaiveDate) -> bool {
        self.valid_to.map(|end| end <= date).unwrap_or(false)
    }
}

impl fmt::Display for ValidityPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.valid_to {
            Some(end) => write!(f, "[{}, {})", self.valid_from, end),
            None => write!(f, "[{}, ..)", self.valid_from),
        }
    }
}
