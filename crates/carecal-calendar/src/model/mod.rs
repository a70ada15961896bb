//! Calendar data model.
//!
//! Events arrive from the data layer as flat records. Their instants are
//! parsed once on ingestion; the engine never mutates them afterwards.

mod day_key;
mod event;
mod occurs_at;

pub use day_key::DayKey;
pub use event::{Event, events_for_subject};
pub use occurs_at::OccursAt;
