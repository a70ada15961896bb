//! Month grid generation.
//!
//! ## Summary
//! A month is displayed as six Monday-starting weeks. The grid starts on the
//! Monday on or before the first day of the month and always holds
//! [`GRID_CELLS`] consecutive days, borrowing leading and trailing days from
//! the adjacent months.

use chrono::{Datelike, Days, Months, NaiveDate};

use carecal_core::constants::{DAYS_PER_WEEK, GRID_CELLS, MAX_YEAR, MIN_YEAR};

use crate::error::{CalendarError, CalendarResult};

/// The date whose month is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReferenceDate(NaiveDate);

impl ReferenceDate {
    /// ## Summary
    /// Wraps a date as a reference date.
    ///
    /// ## Errors
    /// Returns `CalendarError::OutOfRange` if the year lies outside the
    /// supported range.
    pub fn new(date: NaiveDate) -> CalendarResult<Self> {
        if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(CalendarError::OutOfRange(date))
        }
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// First calendar day of the referenced month.
    #[must_use]
    pub fn first_of_month(self) -> NaiveDate {
        self.0 - Days::new(u64::from(self.0.day0()))
    }

    /// Whether `date` falls in the referenced month and year.
    #[must_use]
    pub fn same_month(self, date: NaiveDate) -> bool {
        date.year() == self.0.year() && date.month() == self.0.month()
    }

    /// ## Summary
    /// Same day-of-month one month later, clamped to the last day of a
    /// shorter month. `None` at the upper end of the supported range.
    #[must_use]
    pub fn next_month(self) -> Option<Self> {
        self.0
            .checked_add_months(Months::new(1))
            .and_then(|date| Self::new(date).ok())
    }

    /// ## Summary
    /// Same day-of-month one month earlier, clamped to the last day of a
    /// shorter month. `None` at the lower end of the supported range.
    #[must_use]
    pub fn previous_month(self) -> Option<Self> {
        self.0
            .checked_sub_months(Months::new(1))
            .and_then(|date| Self::new(date).ok())
    }
}

impl TryFrom<NaiveDate> for ReferenceDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date)
    }
}

impl std::fmt::Display for ReferenceDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// ## Summary
/// First date shown by the grid: the Monday on or before the first day of the
/// referenced month.
#[must_use]
pub fn grid_start(reference: ReferenceDate) -> NaiveDate {
    let first = reference.first_of_month();
    // Monday = 0 .. Sunday = 6
    let offset = first.weekday().num_days_from_monday();
    first - Days::new(u64::from(offset))
}

/// Dates of one displayed month, six full weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    reference: ReferenceDate,
    dates: Vec<NaiveDate>,
}

/// ## Summary
/// Builds the six-week grid for the month of `reference`.
#[must_use]
pub fn generate_grid(reference: ReferenceDate) -> MonthGrid {
    let start = grid_start(reference);
    let dates: Vec<NaiveDate> = start.iter_days().take(GRID_CELLS).collect();

    tracing::trace!(
        reference = %reference,
        start = %start,
        cells = dates.len(),
        "Generated month grid"
    );

    MonthGrid { reference, dates }
}

impl MonthGrid {
    #[must_use]
    pub const fn reference(&self) -> ReferenceDate {
        self.reference
    }

    /// All dates in display order.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    #[must_use]
    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => (first..=last).contains(&date),
            _ => false,
        }
    }

    #[must_use]
    pub fn is_in_current_month(&self, date: NaiveDate) -> bool {
        self.reference.same_month(date)
    }

    /// Dates grouped into Monday-starting weeks.
    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.dates.chunks(DAYS_PER_WEEK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reference(y: i32, m: u32, d: u32) -> ReferenceDate {
        ReferenceDate::new(date(y, m, d)).unwrap()
    }

    #[test]
    fn test_october_2025_bounds() {
        let grid = generate_grid(reference(2025, 10, 1));
        assert_eq!(grid.first(), Some(date(2025, 9, 29)));
        assert_eq!(grid.last(), Some(date(2025, 11, 9)));
        assert_eq!(grid.dates().len(), GRID_CELLS);
    }

    #[test]
    fn test_month_starting_on_monday_has_no_leading_days() {
        // 2025-09-01 is a Monday
        assert_eq!(grid_start(reference(2025, 9, 15)), date(2025, 9, 1));
    }

    #[test]
    fn test_month_starting_on_sunday_needs_six_rows() {
        // 2026-03-01 is a Sunday and March has 31 days
        let grid = generate_grid(reference(2026, 3, 10));
        assert_eq!(grid.first(), Some(date(2026, 2, 23)));
        assert!(grid.contains(date(2026, 3, 31)));
        assert_eq!(grid.last(), Some(date(2026, 4, 5)));
    }

    #[test]
    fn test_leap_february() {
        let grid = generate_grid(reference(2024, 2, 29));
        assert!(grid.contains(date(2024, 2, 29)));
        assert!(grid.is_in_current_month(date(2024, 2, 29)));
        assert!(!grid.is_in_current_month(date(2024, 3, 1)));
    }

    #[test]
    fn test_weeks_start_on_monday() {
        let grid = generate_grid(reference(2025, 10, 1));
        let weeks: Vec<&[NaiveDate]> = grid.weeks().collect();
        assert_eq!(weeks.len(), 6);
        for week in weeks {
            assert_eq!(week.len(), DAYS_PER_WEEK);
            assert_eq!(week[0].weekday(), Weekday::Mon);
            assert_eq!(week[6].weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_reference_range_is_enforced() {
        assert!(ReferenceDate::new(date(10_000, 1, 1)).is_err());
        assert!(ReferenceDate::new(date(0, 12, 31)).is_err());
        assert!(ReferenceDate::new(date(9999, 1, 1)).is_err());
        assert!(ReferenceDate::new(date(9998, 12, 31)).is_ok());
    }

    #[test]
    fn test_month_shift_clamps_day() {
        assert_eq!(
            reference(2025, 3, 31).previous_month().map(ReferenceDate::date),
            Some(date(2025, 2, 28))
        );
        assert_eq!(
            reference(2025, 1, 31).next_month().map(ReferenceDate::date),
            Some(date(2025, 2, 28))
        );
    }

    #[test]
    fn test_month_shift_stops_at_range_edges() {
        assert_eq!(reference(9998, 12, 1).next_month(), None);
        assert_eq!(reference(1, 1, 31).previous_month(), None);
    }
}
