//! Generations: time-bounded snapshots of a versioned object's state

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique generation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationId {
    /// UUID of the generation
    pub id: Uuid,
}

impl GenerationId {
    /// Generate a new generation ID
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self { id: uuid }
    }
}

impl Default for GenerationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A generation: the owning object's state valid from a given date until the
/// next generation takes over
///
/// The end of the validity period is not stored; it is derived from the
/// succeeding generation by the owning [`TimedObject`](crate::core::TimedObject).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation<C> {
    /// Generation ID
    id: GenerationId,
    /// First date on which this generation's state applies
    valid_from: NaiveDate,
    /// The versioned state itself
    content: C,
}

impl<C> Generation<C> {
    /// Create a new generation valid from the given date
    pub fn new(valid_from: NaiveDate, content: C) -> Self {
        Self {
            id: GenerationId::new(),
            valid_from,
            content,
        }
    }

    /// Get generation ID
    pub fn id(&self) -> GenerationId {
        self.id
    }

    /// Get the date this generation becomes effective
    pub fn valid_from(&self) -> NaiveDate {
        self.valid_from
    }

    /// Get the versioned content
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Get mutable access to the versioned content
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub(crate) fn set_valid_from(&mut self, valid_from: NaiveDate) {
        self.valid_from = valid_from;
    }
}
