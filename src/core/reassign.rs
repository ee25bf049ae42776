//! Timeline reassignment
//!
//! Restructures a timed object's generations when its effective starting
//! point moves, e.g. while merging or splitting historical versions. Both
//! operations compute their full survivor set before touching the object, so
//! a caller never observes a partially deleted timeline.

use crate::core::generation::{Generation, GenerationId};
use crate::core::timed_object::TimedObject;
use chrono::NaiveDate;

impl<C> TimedObject<C> {
    /// Truncate the timeline so its earliest generation begins at `new_date`
    ///
    /// Every generation whose derived validity period expires at or before
    /// `new_date` is deleted. The generation effective on `new_date` has its
    /// `valid_from` moved to `new_date`; generations starting after
    /// `new_date` are untouched. If `new_date` precedes every generation the
    /// timeline is left unchanged.
    pub fn reassign_generations(&mut self, new_date: NaiveDate) {
        let effective = match self.generation_effective_on(new_date) {
            Some(generation) => generation.id(),
            None => {
                tracing::debug!(object = %self.name(), %new_date,
                    "reassign before earliest generation, timeline unchanged");
                return;
            }
        };

        let expired: Vec<GenerationId> = self
            .generations()
            .iter()
            .filter_map(|g| self.validity_period_of(g.id()).map(|p| (g.id(), p)))
            .filter(|(id, period)| *id != effective && period.expires_before(new_date))
            .map(|(id, _)| id)
            .collect();

        self.generations_mut().retain(|g| !expired.contains(&g.id()));
        if let Some(generation) = self
            .generations_mut()
            .iter_mut()
            .find(|g| g.id() == effective)
        {
            generation.set_valid_from(new_date);
        }
        tracing::debug!(object = %self.name(), %new_date, deleted = expired.len(),
            "reassigned generations");
    }
}

impl<C: Clone + Default> TimedObject<C> {
    /// Collapse the timeline to the single generation effective on `old_date`,
    /// revalidated from `new_date`
    ///
    /// If no generation is effective on `old_date`, every generation is
    /// discarded and a fresh default-content generation valid from `new_date`
    /// takes their place. Returns the surviving generation's ID.
    pub fn retain_only_generation(
        &mut self,
        old_date: NaiveDate,
        new_date: NaiveDate,
    ) -> GenerationId {
        match self.generation_effective_on(old_date).map(|g| g.id()) {
            Some(retained) => {
                self.generations_mut().retain(|g| g.id() == retained);
                if let Some(generation) = self
                    .generations_mut()
                    .iter_mut()
                    .find(|g| g.id() == retained)
                {
                    generation.set_valid_from(new_date);
                }
                tracing::debug!(object = %self.name(), %old_date, %new_date,
                    "retained single generation");
                retained
            }
            None => {
                let generation = Generation::new(new_date, C::default());
                let id = generation.id();
                self.generations_mut().clear();
                self.generations_mut().push(generation);
                tracing::debug!(object = %self.name(), %old_date, %new_date,
                    "no generation effective on old date, created fresh generation");
                id
            }
        }
    }
}
