use std::path::Path;

use carecal_calendar::Event;

use crate::error::AppResult;

/// ## Summary
/// Reads a JSON array of event records.
///
/// ## Errors
/// Returns an error if the file cannot be read or is not a JSON array of
/// events.
pub fn load_events(path: &Path) -> AppResult<Vec<Event>> {
    let text = std::fs::read_to_string(path)?;
    let events = parse_events(&text)?;
    tracing::info!(path = %path.display(), count = events.len(), "Loaded events");
    Ok(events)
}

/// ## Summary
/// Parses a JSON array of event records.
///
/// ## Errors
/// Returns an error if `text` is not a JSON array of events.
pub fn parse_events(text: &str) -> AppResult<Vec<Event>> {
    Ok(serde_json::from_str(text)?)
}
