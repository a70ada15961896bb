//! Chronological list of a subject's events.

use crate::model::Event;

/// ## Summary
/// Sorts events ascending by instant, keeping input order for ties.
///
/// The list does not depend on the displayed month. Unparseable instants sort
/// first. `limit` truncates the sorted list; `None` keeps every event.
#[must_use]
pub fn upcoming_events<'a, I>(events: I, limit: Option<usize>) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut sorted: Vec<&'a Event> = events.into_iter().collect();
    // stable: ties keep input order
    sorted.sort_by_key(|event| event.occurs_at.sort_key());

    if let Some(limit) = limit {
        sorted.truncate(limit);
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(events: &[&'a Event]) -> Vec<&'a str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_sorts_ascending() {
        let events = vec![
            Event::new("e2", "p1", "2025-10-23 18:00", "Visita nietos"),
            Event::new("e1", "p1", "2025-10-22 10:30", "Turno cardiólogo"),
            Event::new("e3", "p1", "2025-11-02 08:00", "Análisis"),
        ];
        assert_eq!(ids(&upcoming_events(&events, None)), ["e1", "e2", "e3"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let events = vec![
            Event::new("b", "p1", "2025-10-22 10:30", "B"),
            Event::new("a", "p1", "2025-10-22 10:30", "A"),
            Event::new("c", "p1", "2025-10-22T10:30:00", "C"),
        ];
        assert_eq!(ids(&upcoming_events(&events, None)), ["b", "a", "c"]);
    }

    #[test]
    fn test_unparseable_sorts_first() {
        let events = vec![
            Event::new("e1", "p1", "2025-10-22 10:30", "Turno"),
            Event::new("bad", "p1", "mañana", "Llamar"),
        ];
        assert_eq!(ids(&upcoming_events(&events, None)), ["bad", "e1"]);
    }

    #[test]
    fn test_limit_truncates_after_sorting() {
        let events = vec![
            Event::new("late", "p1", "2026-01-01 10:00", "Late"),
            Event::new("early", "p1", "2025-01-01 10:00", "Early"),
            Event::new("mid", "p1", "2025-06-01 10:00", "Mid"),
        ];
        assert_eq!(ids(&upcoming_events(&events, Some(2))), ["early", "mid"]);
    }

    #[test]
    fn test_order_survives_reserialized_snapshot() {
        let events = vec![
            Event::new("late", "p1", "2025-10-22 10:30:45", "Late"),
            Event::new("early", "p1", "2025-10-22 10:30:05", "Early"),
        ];
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<Event> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, events);
        assert_eq!(ids(&upcoming_events(&back, None)), ["early", "late"]);
    }

    #[test]
    fn test_limit_larger_than_list() {
        let events = vec![Event::new("e1", "p1", "2025-10-22 10:30", "Turno")];
        assert_eq!(upcoming_events(&events, Some(10)).len(), 1);
    }
}
