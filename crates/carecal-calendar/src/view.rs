//! Calendar view assembly.
//!
//! ## Summary
//! Combines the month grid, the day buckets and the upcoming list into one
//! renderable value. Views are rebuilt from scratch on every call and borrow
//! the event snapshot they were built from.

use chrono::NaiveDate;

use carecal_core::config::CalendarConfig;
use carecal_core::constants::DEFAULT_DISPLAY_CAP;

use crate::bucket::bucket_events;
use crate::error::CalendarResult;
use crate::grid::{ReferenceDate, generate_grid};
use crate::locale::CalendarLocale;
use crate::model::{DayKey, Event};
use crate::upcoming::upcoming_events;

/// Display parameters for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Events shown per day before the overflow indicator.
    pub display_cap: usize,
    /// Maximum entries in the upcoming list.
    pub upcoming_limit: Option<usize>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            display_cap: DEFAULT_DISPLAY_CAP,
            upcoming_limit: None,
        }
    }
}

impl From<&CalendarConfig> for ViewOptions {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            display_cap: config.display_cap,
            upcoming_limit: config.upcoming_limit,
        }
    }
}

/// The "+N more" marker of a day with hidden events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowIndicator {
    pub remaining: usize,
}

/// All events of one day together with the display cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEvents<'a> {
    all: Vec<&'a Event>,
    cap: usize,
}

impl<'a> DayEvents<'a> {
    #[must_use]
    pub fn new(all: Vec<&'a Event>, cap: usize) -> Self {
        Self { all, cap }
    }

    /// Every event of the day, in bucket order.
    #[must_use]
    pub fn all(&self) -> &[&'a Event] {
        &self.all
    }

    /// The events rendered in the cell.
    #[must_use]
    pub fn visible(&self) -> &[&'a Event] {
        &self.all[..self.all.len().min(self.cap)]
    }

    /// Number of events hidden behind the overflow indicator.
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.all.len().saturating_sub(self.cap)
    }

    #[must_use]
    pub fn overflow(&self) -> Option<OverflowIndicator> {
        let remaining = self.hidden();
        (remaining > 0).then_some(OverflowIndicator { remaining })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub is_in_current_month: bool,
    pub is_today: bool,
    pub events: DayEvents<'a>,
}

/// Everything the presentation layer needs to draw the calendar page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView<'a> {
    pub reference: ReferenceDate,
    pub month_label: String,
    pub weekday_headers: Vec<String>,
    pub cells: Vec<DayCell<'a>>,
    pub upcoming: Vec<&'a Event>,
}

impl<'a> CalendarView<'a> {
    /// Cells grouped into Monday-starting weeks.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell<'a>]> {
        self.cells.chunks(carecal_core::constants::DAYS_PER_WEEK)
    }

    #[must_use]
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell<'a>> {
        self.cells.iter().find(|cell| cell.date == date)
    }

    #[must_use]
    pub fn today(&self) -> Option<&DayCell<'a>> {
        self.cells.iter().find(|cell| cell.is_today)
    }
}

/// ## Summary
/// Builds the view of `reference`'s month over `events`.
///
/// `today` marks the highlighted cell; `events` is expected to be the
/// snapshot of a single subject.
///
/// ## Errors
/// Returns an error if the locale cannot format the month label or weekday
/// headers.
pub fn build_view<'a>(
    reference: ReferenceDate,
    today: NaiveDate,
    events: &'a [Event],
    locale: &CalendarLocale,
    options: ViewOptions,
) -> CalendarResult<CalendarView<'a>> {
    let grid = generate_grid(reference);
    let buckets = bucket_events(events);

    let cells: Vec<DayCell<'a>> = grid
        .dates()
        .iter()
        .map(|&date| DayCell {
            date,
            is_in_current_month: grid.is_in_current_month(date),
            is_today: date == today,
            events: DayEvents::new(
                buckets.get(DayKey::new(date)).to_vec(),
                options.display_cap,
            ),
        })
        .collect();

    let view = CalendarView {
        reference,
        month_label: locale.month_label(reference)?,
        weekday_headers: locale.weekday_headers()?,
        cells,
        upcoming: upcoming_events(events, options.upcoming_limit),
    };

    tracing::debug!(
        reference = %reference,
        events = events.len(),
        skipped = buckets.skipped(),
        upcoming = view.upcoming.len(),
        "Built calendar view"
    );

    Ok(view)
}
