//! Grouping events by calendar day.

use std::collections::BTreeMap;

use crate::model::{DayKey, Event};

/// Events indexed by the day they occur on.
///
/// Within a day the events keep the order of the input list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBuckets<'a> {
    buckets: BTreeMap<DayKey, Vec<&'a Event>>,
    skipped: usize,
}

/// ## Summary
/// Indexes `events` by calendar day.
///
/// Events whose instant could not be parsed match no day and are left out;
/// they are counted in [`EventBuckets::skipped`].
#[must_use]
pub fn bucket_events<'a, I>(events: I) -> EventBuckets<'a>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut result = EventBuckets::default();

    for event in events {
        if let Some(day) = event.occurs_at.day() {
            result.buckets.entry(DayKey::new(day)).or_default().push(event);
        } else {
            tracing::debug!(
                event_id = %event.id,
                occurs_at = %event.occurs_at,
                "Skipping event without a calendar day"
            );
            result.skipped += 1;
        }
    }

    tracing::trace!(
        days = result.buckets.len(),
        skipped = result.skipped,
        "Bucketed events"
    );

    result
}

impl<'a> EventBuckets<'a> {
    /// Events on `day`, empty if there are none.
    #[must_use]
    pub fn get(&self, day: DayKey) -> &[&'a Event] {
        self.buckets
            .get(&day)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct days with at least one event.
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.buckets.len()
    }

    /// Events that matched no calendar day.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Days in chronological order with their events.
    pub fn iter(&self) -> impl Iterator<Item = (DayKey, &[&'a Event])> {
        self.buckets.iter().map(|(key, events)| (*key, events.as_slice()))
    }
}
