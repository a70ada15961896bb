//! Month calendar engine for care events.
//!
//! Builds the six-week grid of a month, groups a subject's events by day,
//! caps what each day shows and keeps a chronological list of upcoming
//! events. Navigation between months goes through a single owner of the
//! reference date.

pub mod bucket;
pub mod error;
pub mod grid;
pub mod locale;
pub mod model;
pub mod navigation;
pub mod store;
pub mod upcoming;
pub mod view;

pub use bucket::{EventBuckets, bucket_events};
pub use grid::{MonthGrid, ReferenceDate, generate_grid, grid_start};
pub use locale::CalendarLocale;
pub use model::{DayKey, Event, OccursAt, events_for_subject};
pub use navigation::{Clock, FixedClock, NavigationAction, NavigationController, SystemClock};
pub use store::CalendarStore;
pub use upcoming::upcoming_events;
pub use view::{CalendarView, DayCell, DayEvents, OverflowIndicator, ViewOptions, build_view};
