//! Date-based generation lookup
//!
//! All lookups scan or stable-sort the unordered generation collection per
//! query; generation counts are expected to stay in the single or double
//! digits, so no persistent index is kept. Equal `valid_from` dates are
//! resolved by insertion order (earliest inserted wins).

use crate::core::dates::ValidityPeriod;
use crate::core::generation::{Generation, GenerationId};
use crate::core::timed_object::TimedObject;
use chrono::NaiveDate;

impl<C> TimedObject<C> {
    /// Get all generations sorted ascending by `valid_from`
    ///
    /// The sort is stable: generations sharing a `valid_from` date keep their
    /// insertion order.
    pub fn generations_ordered_by_valid_date(&self) -> Vec<&Generation<C>> {
        let mut ordered: Vec<&Generation<C>> = self.generations().iter().collect();
        ordered.sort_by_key(|g| g.valid_from());
        ordered
    }

    /// Get the generation effective on the given date
    ///
    /// That is the generation with the latest `valid_from` at or before
    /// `date`. Returns `None` if every generation starts after `date`.
    pub fn generation_effective_on(&self, date: NaiveDate) -> Option<&Generation<C>> {
        let mut best: Option<&Generation<C>> = None;
        for generation in self.generations() {
            if generation.valid_from() > date {
                continue;
            }
            match best {
                Some(b) if generation.valid_from() <= b.valid_from() => {}
                _ => best = Some(generation),
            }
        }
        best
    }

    /// Get the generation effective on the given date, clamped to the
    /// timeline's bounds
    ///
    /// Like [`generation_effective_on`](TimedObject::generation_effective_on),
    /// but a date preceding every generation yields the earliest one. Returns
    /// `None` only when no generations exist.
    pub fn best_matching_generation_effective_on(
        &self,
        date: NaiveDate,
    ) -> Option<&Generation<C>> {
        self.generation_effective_on(date)
            .or_else(|| self.first_generation())
    }

    /// Get the generation whose `valid_from` exactly equals the given date
    ///
    /// This is an exact-date match, not range containment.
    pub fn generation_by_effective_date(&self, date: NaiveDate) -> Option<&Generation<C>> {
        self.generations().iter().find(|g| g.valid_from() == date)
    }

    /// Get the generation with the earliest `valid_from`
    pub fn first_generation(&self) -> Option<&Generation<C>> {
        let mut first: Option<&Generation<C>> = None;
        for generation in self.generations() {
            match first {
                Some(f) if generation.valid_from() >= f.valid_from() => {}
                _ => first = Some(generation),
            }
        }
        first
    }

    /// Get the generation with the latest `valid_from`
    pub fn latest_generation(&self) -> Option<&Generation<C>> {
        let mut latest: Option<&Generation<C>> = None;
        for generation in self.generations() {
            match latest {
                Some(l) if generation.valid_from() <= l.valid_from() => {}
                _ => latest = Some(generation),
            }
        }
        latest
    }

    /// Check whether some generation becomes effective exactly on `date`
    pub fn changes_on(&self, date: NaiveDate) -> bool {
        self.generations().iter().any(|g| g.valid_from() == date)
    }

    /// Get the 1-based ordinal of a generation in date order
    pub fn generation_number(&self, id: GenerationId) -> Option<usize> {
        self.generations_ordered_by_valid_date()
            .iter()
            .position(|g| g.id() == id)
            .map(|pos| pos + 1)
    }

    /// Get the derived validity period of a generation
    ///
    /// The period ends where the next generation in date order begins, or is
    /// unbounded for the last generation.
    pub fn validity_period_of(&self, id: GenerationId) -> Option<ValidityPeriod> {
        let ordered = self.generations_ordered_by_valid_date();
        let pos = ordered.iter().position(|g| g.id() == id)?;
        let valid_from = ordered[pos].valid_from();
        Some(match ordered.get(pos + 1) {
            Some(next) => ValidityPeriod::bounded(valid_from, next.valid_from()),
            None => ValidityPeriod::unbounded(valid_from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    /// Object with generations from 2010-01-01, 2011-01-01, 2012-01-01
    fn three_generations() -> TimedObject<String> {
        let mut object = TimedObject::new("product:1");
        for (valid_from, content) in [
            ("2010-01-01", "v1"),
            ("2011-01-01", "v2"),
            ("2012-01-01", "v3"),
        ] {
            let id = object.new_generation(date(valid_from));
            *object.generation_by_id_mut(id).unwrap().content_mut() = content.to_string();
        }
        object
    }

    #[test]
    fn test_ordered_by_valid_date() {
        let mut object: TimedObject<String> = TimedObject::new("product:1");
        object.new_generation(date("2012-01-01"));
        object.new_generation(date("2010-01-01"));
        object.new_generation(date("2011-01-01"));

        let dates: Vec<NaiveDate> = object
            .generations_ordered_by_valid_date()
            .iter()
            .map(|g| g.valid_from())
            .collect();
        assert_eq!(
            dates,
            vec![date("2010-01-01"), date("2011-01-01"), date("2012-01-01")]
        );
    }

    #[test]
    fn test_ordered_ties_keep_insertion_order() {
        let mut object: TimedObject<String> = TimedObject::new("product:1");
        let first = object.new_generation(date("2010-01-01"));
        let second = object.new_generation(date("2010-01-01"));

        let ordered = object.generations_ordered_by_valid_date();
        assert_eq!(ordered[0].id(), first);
        assert_eq!(ordered[1].id(), second);
    }

    #[test]
    fn test_effective_on() {
        let object = three_generations();

        assert_eq!(
            object.generation_effective_on(date("2010-01-01")).unwrap().content(),
            "v1"
        );
        assert_eq!(
            object.generation_effective_on(date("2011-06-15")).unwrap().content(),
            "v2"
        );
        assert_eq!(
            object.generation_effective_on(date("2035-01-01")).unwrap().content(),
            "v3"
        );
    }

    #[test]
    fn test_effective_on_before_all_is_none() {
        let object = three_generations();
        assert!(object.generation_effective_on(date("2009-01-01")).is_none());
    }

    #[test]
    fn test_best_matching_clamps_to_first() {
        let object = three_generations();

        let best = object
            .best_matching_generation_effective_on(date("2009-01-01"))
            .unwrap();
        assert_eq!(best.content(), "v1");

        let best = object
            .best_matching_generation_effective_on(date("2035-01-01"))
            .unwrap();
        assert_eq!(best.content(), "v3");
    }

    #[test]
    fn test_best_matching_empty_is_none() {
        let object: TimedObject<String> = TimedObject::new("product:1");
        assert!(object
            .best_matching_generation_effective_on(date("2010-01-01"))
            .is_none());
    }

    #[test]
    fn test_by_effective_date_is_exact_match() {
        let object = three_generations();

        assert_eq!(
            object
                .generation_by_effective_date(date("2011-01-01"))
                .unwrap()
                .content(),
            "v2"
        );
        // Range containment is not enough
        assert!(object.generation_by_effective_date(date("2011-06-15")).is_none());
    }

    #[test]
    fn test_new_generation_round_trip() {
        let mut object: TimedObject<String> = TimedObject::new("product:1");
        let id = object.new_generation(date("2013-04-01"));

        let found = object.generation_by_effective_date(date("2013-04-01")).unwrap();
        assert_eq!(found.id(), id);
    }

    #[test]
    fn test_first_and_latest() {
        let object = three_generations();

        assert_eq!(object.first_generation().unwrap().content(), "v1");
        assert_eq!(object.latest_generation().unwrap().content(), "v3");

        let empty: TimedObject<String> = TimedObject::new("empty");
        assert!(empty.first_generation().is_none());
        assert!(empty.latest_generation().is_none());
    }

    #[test]
    fn test_changes_on() {
        let object = three_generations();

        assert!(object.changes_on(date("2011-01-01")));
        assert!(!object.changes_on(date("2011-01-02")));
    }

    #[test]
    fn test_generation_number_is_date_ordered() {
        let mut object: TimedObject<String> = TimedObject::new("product:1");
        let later = object.new_generation(date("2012-01-01"));
        let earlier = object.new_generation(date("2010-01-01"));

        assert_eq!(object.generation_number(earlier), Some(1));
        assert_eq!(object.generation_number(later), Some(2));
    }

    #[test]
    fn test_validity_period_of() {
        let object = three_generations();
        let ordered = object.generations_ordered_by_valid_date();
        let (first, last) = (ordered[0].id(), ordered[2].id());

        let period = object.validity_period_of(first).unwrap();
        assert_eq!(period.valid_from, date("2010-01-01"));
        assert_eq!(period.valid_to, Some(date("2011-01-01")));

        let period = object.validity_period_of(last).unwrap();
        assert_eq!(period.valid_from, date("2012-01-01"));
        assert_eq!(period.valid_to, None);
    }

    fn arb_dates() -> impl Strategy<Value = Vec<NaiveDate>> {
        prop::collection::vec(0i64..20_000, 1..20).prop_map(|offsets| {
            let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
            offsets
                .into_iter()
                .map(|days| epoch + chrono::Duration::days(days))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_ordered_listing_is_sorted(dates in arb_dates()) {
            let mut object: TimedObject<String> = TimedObject::new("product:1");
            for d in &dates {
                object.new_generation(*d);
            }

            let ordered = object.generations_ordered_by_valid_date();
            prop_assert_eq!(ordered.len(), dates.len());
            for pair in ordered.windows(2) {
                prop_assert!(pair[0].valid_from() <= pair[1].valid_from());
            }
        }

        #[test]
        fn prop_effective_on_is_latest_at_or_before(
            dates in arb_dates(),
            query in 0i64..20_000,
        ) {
            let mut object: TimedObject<String> = TimedObject::new("product:1");
            for d in &dates {
                object.new_generation(*d);
            }
            let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
            let query = epoch + chrono::Duration::days(query);

            let expected = dates.iter().copied().filter(|d| *d <= query).max();
            prop_assert_eq!(
                object.generation_effective_on(query).map(|g| g.valid_from()),
                expected
            );
        }

        #[test]
        fn prop_best_matching_never_none_when_nonempty(
            dates in arb_dates(),
            query in 0i64..20_000,
        ) {
            let mut object: TimedObject<String> = TimedObject::new("product:1");
            for d in &dates {
                object.new_generation(*d);
            }
            let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
            let query = epoch + chrono::Duration::days(query);

            prop_assert!(object.best_matching_generation_effective_on(query).is_some());
        }
    }
}
