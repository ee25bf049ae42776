//! Chronogen: generation-based temporal versioning for domain objects
//!
//! A domain object whose state varies over time owns a collection of
//! generations, each valid over a half-open calendar-date range
//! `[valid_from, valid_to)`. The end of each range is derived from the
//! succeeding generation, so the timeline is always gapless.
//!
//! # Core Concepts
//!
//! - **Generations**: time-bounded snapshots of a versioned object's state
//! - **Timed objects**: owners of a generation timeline with date-based lookup
//! - **Reassignment**: bulk restructuring of a timeline around a new base date
//!
//! # Example
//!
//! ```
//! use chronogen::prelude::*;
//! use chrono::NaiveDate;
//!
//! let mut tariff: TimedObject<String> = TimedObject::new("tariff:home");
//! tariff.new_generation(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
//! tariff.new_generation(NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
//!
//! let effective = tariff
//!     .generation_effective_on(NaiveDate::from_ymd_opt(2010, 6, 1).unwrap())
//!     .unwrap();
//! assert_eq!(effective.valid_from(), NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod store;
pub mod validation;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::core::*;
    pub use crate::error::{Error, Result};
    pub use crate::store::*;
    pub use crate::validation::{Severity, ValidationMessage};
}
