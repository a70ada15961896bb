//! Month navigation.
//!
//! The controller is the only writer of the reference date. "Today" is the
//! clock's current instant seen from an explicit timezone, so the result does
//! not depend on the host's local time settings.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use carecal_core::error::CoreError;

use crate::error::{CalendarError, CalendarResult};
use crate::grid::ReferenceDate;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// ## Summary
/// Resolves an IANA timezone name.
///
/// ## Errors
/// Returns `CalendarError::UnknownTimezone` if the name is not a known zone.
pub fn resolve_timezone(name: &str) -> CalendarResult<Tz> {
    Tz::from_str(name.trim()).map_err(|_e| CalendarError::UnknownTimezone(name.to_string()))
}

/// Calendar day of `now` in `timezone`.
#[must_use]
pub fn today_in(clock: &impl Clock, timezone: Tz) -> NaiveDate {
    clock.now().with_timezone(&timezone).date_naive()
}

/// A navigation request from the presentation layer.
///
/// Text and serialized forms accept the same words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationAction {
    #[serde(alias = "previous", alias = "prev")]
    PreviousMonth,
    #[serde(alias = "next")]
    NextMonth,
    Today,
}

impl FromStr for NavigationAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "previous" | "prev" | "previous_month" => Ok(Self::PreviousMonth),
            "next" | "next_month" => Ok(Self::NextMonth),
            "today" => Ok(Self::Today),
            other => Err(CoreError::InvalidInput(format!(
                "unknown navigation action: {other}"
            ))),
        }
    }
}

/// Owns the reference date and moves it between months.
#[derive(Debug, Clone)]
pub struct NavigationController<C: Clock = SystemClock> {
    reference: ReferenceDate,
    clock: C,
    timezone: Tz,
}

impl<C: Clock> NavigationController<C> {
    /// ## Summary
    /// Creates a controller whose reference date is today.
    ///
    /// ## Errors
    /// Returns `CalendarError::OutOfRange` if the clock reports a date outside
    /// the supported range.
    pub fn new(clock: C, timezone: Tz) -> CalendarResult<Self> {
        let reference = ReferenceDate::new(today_in(&clock, timezone))?;
        tracing::debug!(reference = %reference, timezone = %timezone, "Navigation initialized");
        Ok(Self {
            reference,
            clock,
            timezone,
        })
    }

    /// ## Summary
    /// Creates a controller starting at an explicit reference date.
    ///
    /// ## Errors
    /// Returns `CalendarError::OutOfRange` if `date` is outside the supported
    /// range.
    pub fn starting_at(clock: C, timezone: Tz, date: NaiveDate) -> CalendarResult<Self> {
        Ok(Self {
            reference: ReferenceDate::new(date)?,
            clock,
            timezone,
        })
    }

    #[must_use]
    pub const fn reference(&self) -> ReferenceDate {
        self.reference
    }

    /// Current calendar day in the controller's timezone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        today_in(&self.clock, self.timezone)
    }

    pub fn previous_month(&mut self) {
        match self.reference.previous_month() {
            Some(reference) => self.set(reference),
            None => tracing::warn!(
                reference = %self.reference,
                "Already at the earliest supported month"
            ),
        }
    }

    pub fn next_month(&mut self) {
        match self.reference.next_month() {
            Some(reference) => self.set(reference),
            None => tracing::warn!(
                reference = %self.reference,
                "Already at the latest supported month"
            ),
        }
    }

    pub fn go_to_today(&mut self) {
        let today = self.today();
        match ReferenceDate::new(today) {
            Ok(reference) => self.set(reference),
            Err(err) => tracing::warn!(error = %err, "Clock reports an unsupported date"),
        }
    }

    pub fn apply(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::PreviousMonth => self.previous_month(),
            NavigationAction::NextMonth => self.next_month(),
            NavigationAction::Today => self.go_to_today(),
        }
    }

    fn set(&mut self, reference: ReferenceDate) {
        tracing::debug!(from = %self.reference, to = %reference, "Reference date changed");
        self.reference = reference;
    }
}
