//! Consistency validation for timed objects
//!
//! Validation never mutates and never fails; it reports findings as
//! severity-tagged messages with stable codes that callers (editors, build
//! pipelines) can match on.

use crate::core::TimedObject;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Two or more generations share the same `valid_from` date
pub const MSG_DUPLICATE_VALID_FROM: &str = "duplicate-valid-from";

/// The object owns no generations at all
pub const MSG_NO_GENERATIONS: &str = "no-generations";

/// Severity of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, Serialize)]
pub struct ValidationMessage {
    /// Stable message code for programmatic matching
    pub code: &'static str,
    /// Severity of the finding
    pub severity: Severity,
    /// Human-readable description
    pub text: String,
}

impl ValidationMessage {
    /// Create a warning message
    pub fn warning(code: &'static str, text: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            text: text.into(),
        }
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.text)
    }
}

impl<C> TimedObject<C> {
    /// Check the generation set for consistency problems
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut messages = Vec::new();

        if self.is_empty() {
            messages.push(ValidationMessage::warning(
                MSG_NO_GENERATIONS,
                format!("object '{}' has no generations", self.name()),
            ));
            return messages;
        }

        let mut by_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for generation in self.generations_ordered_by_valid_date() {
            *by_date.entry(generation.valid_from()).or_insert(0) += 1;
        }
        for (date, count) in by_date {
            if count > 1 {
                messages.push(ValidationMessage::warning(
                    MSG_DUPLICATE_VALID_FROM,
                    format!("{} generations share the valid-from date {}", count, date),
                ));
            }
        }

        messages
    }
}
