use serde::{Deserialize, Serialize};

use carecal_core::types::{EventId, SubjectId};

use super::OccursAt;

/// One scheduled occurrence for a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub subject_id: SubjectId,
    pub occurs_at: OccursAt,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Event {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        occurs_at: impl Into<OccursAt>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: EventId::new(id),
            subject_id: SubjectId::new(subject_id),
            occurs_at: occurs_at.into(),
            title: title.into(),
            location: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Text shown next to the event in the upcoming list.
    #[must_use]
    pub fn when_label(&self) -> String {
        self.occurs_at.label()
    }
}

/// ## Summary
/// Keeps only the events that belong to `subject`, preserving input order.
#[must_use]
pub fn events_for_subject(events: &[Event], subject: &SubjectId) -> Vec<Event> {
    let selected: Vec<Event> = events
        .iter()
        .filter(|event| &event.subject_id == subject)
        .cloned()
        .collect();

    tracing::trace!(
        subject = %subject,
        total = events.len(),
        selected = selected.len(),
        "Filtered events by subject"
    );

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "id": "e1",
            "subject_id": "p1",
            "occurs_at": "2025-10-22 10:30",
            "title": "Turno cardiólogo",
            "location": "Hospital Alemán"
        }"#;
        let event: Event = serde_json::from_str(json).expect("valid event");
        assert_eq!(event.id.as_str(), "e1");
        assert_eq!(event.subject_id.as_str(), "p1");
        assert!(event.occurs_at.is_resolved());
        assert_eq!(event.location.as_deref(), Some("Hospital Alemán"));
    }

    #[test]
    fn test_deserialize_without_location() {
        let json = r#"{"id":"e2","subject_id":"p2","occurs_at":"2025-10-23 18:00","title":"Visita nietos"}"#;
        let event: Event = serde_json::from_str(json).expect("valid event");
        assert_eq!(event.location, None);
    }

    #[test]
    fn test_deserialize_keeps_unparseable_instant() {
        let json = r#"{"id":"e3","subject_id":"p1","occurs_at":"soon","title":"Llamar"}"#;
        let event: Event = serde_json::from_str(json).expect("record still loads");
        assert_eq!(event.occurs_at, OccursAt::Unparseable("soon".to_string()));
        assert_eq!(event.when_label(), "soon");
    }

    #[test]
    fn test_events_for_subject_preserves_order() {
        let events = vec![
            Event::new("e1", "p1", "2025-10-22 10:30", "Turno cardiólogo"),
            Event::new("e2", "p2", "2025-10-23 18:00", "Visita nietos"),
            Event::new("e3", "p1", "2025-10-01 09:00", "Análisis"),
        ];
        let selected = events_for_subject(&events, &SubjectId::from("p1"));
        let ids: Vec<&str> = selected.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e1", "e3"]);
    }

    #[test]
    fn test_events_for_unknown_subject_is_empty() {
        let events = vec![Event::new("e1", "p1", "2025-10-22 10:30", "Turno")];
        assert!(events_for_subject(&events, &SubjectId::from("p9")).is_empty());
    }
}
