//! Timed objects: domain objects whose state varies over time via generations

use crate::core::generation::{Generation, GenerationId};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A versioned domain object owning a collection of [`Generation`]s
///
/// Generations are stored in insertion order; date order is computed per
/// query. Two generations may share a `valid_from` date (the model does not
/// reject this), in which case [`validate`](TimedObject::validate) reports a
/// warning and all queries break the tie by insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedObject<C> {
    /// Name identifying this object (e.g. in the object store)
    name: String,
    /// Generations in insertion order
    generations: Vec<Generation<C>>,
}

impl<C> TimedObject<C> {
    /// Create a new timed object with no generations
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generations: Vec::new(),
        }
    }

    /// Get the object's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of owned generations
    pub fn generation_count(&self) -> usize {
        self.generations.len()
    }

    /// Check if the object has no generations
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Get a generation by position in storage (insertion) order
    ///
    /// Out-of-range access is a caller bug and returns
    /// [`Error::IndexOutOfBounds`].
    pub fn generation(&self, index: usize) -> Result<&Generation<C>> {
        self.generations.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.generations.len(),
        })
    }

    /// Get a generation by its ID
    pub fn generation_by_id(&self, id: GenerationId) -> Option<&Generation<C>> {
        self.generations.iter().find(|g| g.id() == id)
    }

    /// Get mutable access to a generation by its ID
    pub fn generation_by_id_mut(&mut self, id: GenerationId) -> Option<&mut Generation<C>> {
        self.generations.iter_mut().find(|g| g.id() == id)
    }

    /// Delete a generation by ID, returning whether it existed
    pub fn delete_generation(&mut self, id: GenerationId) -> bool {
        let before = self.generations.len();
        self.generations.retain(|g| g.id() != id);
        let deleted = self.generations.len() < before;
        if deleted {
            tracing::debug!(object = %self.name, generation = %id, "deleted generation");
        }
        deleted
    }

    /// Take an immutable snapshot of the full generation set
    ///
    /// The snapshot can later be passed to [`restore`](TimedObject::restore)
    /// to roll the object back, e.g. from an undo/cancel flow.
    pub fn snapshot(&self) -> TimedObjectSnapshot<C>
    where
        C: Clone,
    {
        TimedObjectSnapshot {
            generations: self.generations.clone(),
        }
    }

    /// Replace the generation set wholesale from a snapshot
    pub fn restore(&mut self, snapshot: TimedObjectSnapshot<C>) {
        self.generations = snapshot.generations;
    }

    pub(crate) fn generations(&self) -> &[Generation<C>] {
        &self.generations
    }

    pub(crate) fn generations_mut(&mut self) -> &mut Vec<Generation<C>> {
        &mut self.generations
    }
}

impl<C: Clone + Default> TimedObject<C> {
    /// Create and attach a new generation valid from the given date
    ///
    /// If an existing generation is effective on `valid_from`, the new
    /// generation's content is cloned from it; otherwise it starts with
    /// default content. Returns the new generation's ID.
    pub fn new_generation(&mut self, valid_from: NaiveDate) -> GenerationId {
        let content = self
            .generation_effective_on(valid_from)
            .map(|g| g.content().clone())
            .unwrap_or_default();
        let generation = Generation::new(valid_from, content);
        let id = generation.id();
        self.generations.push(generation);
        tracing::debug!(object = %self.name, generation = %id, %valid_from, "created generation");
        id
    }
}

/// Immutable snapshot of a [`TimedObject`]'s generation set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedObjectSnapshot<C> {
    generations: Vec<Generation<C>>,
}
