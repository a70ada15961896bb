//! State holder for one subject's calendar page.

use chrono::NaiveDate;
use chrono_tz::Tz;

use carecal_core::config::CalendarConfig;
use carecal_core::types::SubjectId;

use crate::error::CalendarResult;
use crate::locale::CalendarLocale;
use crate::model::{Event, events_for_subject};
use crate::navigation::{Clock, NavigationAction, NavigationController, SystemClock, resolve_timezone};
use crate::view::{CalendarView, ViewOptions, build_view};

/// Owns the reference date and the current event snapshot of one subject.
///
/// Nothing derived is cached: every call to [`CalendarStore::view`] rebuilds
/// the grid and buckets from the current state.
#[derive(Debug)]
pub struct CalendarStore<C: Clock = SystemClock> {
    subject: SubjectId,
    events: Vec<Event>,
    navigation: NavigationController<C>,
    locale: CalendarLocale,
    options: ViewOptions,
}

impl CalendarStore<SystemClock> {
    /// ## Summary
    /// Creates a store for `subject` from calendar settings, using the system
    /// clock. The reference date is `start` when given, otherwise today.
    ///
    /// ## Errors
    /// Returns an error if the settings are invalid, name an unknown timezone
    /// or locale, or `start` is outside the supported range.
    pub fn from_config(
        subject: SubjectId,
        config: &CalendarConfig,
        start: Option<NaiveDate>,
    ) -> CalendarResult<Self> {
        config.validate()?;
        let timezone = resolve_timezone(&config.timezone)?;
        let locale = CalendarLocale::new(&config.locale)?;
        let navigation = match start {
            Some(date) => NavigationController::starting_at(SystemClock, timezone, date)?,
            None => NavigationController::new(SystemClock, timezone)?,
        };
        Ok(Self::new(subject, navigation, locale, ViewOptions::from(config)))
    }
}

impl<C: Clock> CalendarStore<C> {
    #[must_use]
    pub fn new(
        subject: SubjectId,
        navigation: NavigationController<C>,
        locale: CalendarLocale,
        options: ViewOptions,
    ) -> Self {
        Self {
            subject,
            events: Vec::new(),
            navigation,
            locale,
            options,
        }
    }

    /// ## Summary
    /// Creates a store with an explicit clock, timezone and locale tag.
    ///
    /// ## Errors
    /// Returns an error if the locale tag is invalid or the clock reports an
    /// unsupported date.
    pub fn with_clock(
        subject: SubjectId,
        clock: C,
        timezone: Tz,
        locale: &str,
        options: ViewOptions,
    ) -> CalendarResult<Self> {
        let navigation = NavigationController::new(clock, timezone)?;
        let locale = CalendarLocale::new(locale)?;
        Ok(Self::new(subject, navigation, locale, options))
    }

    /// The subject's current event snapshot.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub const fn navigation(&self) -> &NavigationController<C> {
        &self.navigation
    }

    #[must_use]
    pub const fn locale(&self) -> &CalendarLocale {
        &self.locale
    }

    /// ## Summary
    /// Replaces the event snapshot wholesale.
    ///
    /// Events of other subjects are dropped.
    pub fn replace_events(&mut self, snapshot: &[Event]) {
        self.events = events_for_subject(snapshot, &self.subject);
        tracing::debug!(
            subject = %self.subject,
            received = snapshot.len(),
            kept = self.events.len(),
            "Replaced event snapshot"
        );
    }

    pub fn dispatch(&mut self, action: NavigationAction) {
        tracing::trace!(?action, "Dispatching navigation action");
        self.navigation.apply(action);
    }

    pub fn previous_month(&mut self) {
        self.dispatch(NavigationAction::PreviousMonth);
    }

    pub fn next_month(&mut self) {
        self.dispatch(NavigationAction::NextMonth);
    }

    pub fn go_to_today(&mut self) {
        self.dispatch(NavigationAction::Today);
    }

    /// ## Summary
    /// Builds the view for the current reference date and snapshot.
    ///
    /// ## Errors
    /// Returns an error if the locale cannot format the view's labels.
    pub fn view(&self) -> CalendarResult<CalendarView<'_>> {
        build_view(
            self.navigation.reference(),
            self.navigation.today(),
            &self.events,
            &self.locale,
            self.options,
        )
    }
}
