//! Locale-dependent text for the calendar view.
//!
//! Month labels and weekday headers come from ICU4X locale data; the locale is
//! always passed in explicitly rather than read from the environment.

use chrono::{Datelike, NaiveDate};
use icu::calendar::Date;
use icu::datetime::DateTimeFormatter;
use icu::datetime::fieldsets::{E, YM};
use icu::locale::Locale;

use carecal_core::constants::DAYS_PER_WEEK;

use crate::error::{CalendarError, CalendarResult};
use crate::grid::ReferenceDate;

/// 2024-01-01 was a Monday; its week is used to render weekday names.
const MONDAY_ANCHOR: (i32, u32, u32) = (2024, 1, 1);

/// Formatters bound to one locale.
pub struct CalendarLocale {
    locale: Locale,
    month_formatter: DateTimeFormatter<YM>,
    weekday_formatter: DateTimeFormatter<E>,
}

impl std::fmt::Debug for CalendarLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarLocale")
            .field("locale", &self.locale.to_string())
            .finish_non_exhaustive()
    }
}

impl CalendarLocale {
    /// ## Summary
    /// Loads formatters for a BCP-47 locale tag such as `es-AR`.
    ///
    /// ## Errors
    /// Returns `CalendarError::InvalidLocale` if the tag cannot be parsed or
    /// no formatter can be built for it.
    pub fn new(tag: &str) -> CalendarResult<Self> {
        let locale: Locale = tag
            .trim()
            .parse()
            .map_err(|err| CalendarError::InvalidLocale(format!("{tag}: {err}")))?;

        let month_formatter = DateTimeFormatter::try_new(locale.clone().into(), YM::long())
            .map_err(|err| CalendarError::InvalidLocale(format!("{tag}: {err}")))?;
        let weekday_formatter = DateTimeFormatter::try_new(locale.clone().into(), E::medium())
            .map_err(|err| CalendarError::InvalidLocale(format!("{tag}: {err}")))?;

        tracing::debug!(locale = %locale, "Loaded calendar locale");

        Ok(Self {
            locale,
            month_formatter,
            weekday_formatter,
        })
    }

    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// ## Summary
    /// Long month name and year of the referenced month, e.g.
    /// "octubre de 2025".
    ///
    /// ## Errors
    /// Returns `CalendarError::Formatting` if the date cannot be converted to
    /// the ICU calendar.
    pub fn month_label(&self, reference: ReferenceDate) -> CalendarResult<String> {
        let date = to_icu_date(reference.first_of_month())?;
        Ok(self.month_formatter.format(&date).to_string())
    }

    /// ## Summary
    /// Abbreviated weekday names from Monday to Sunday, capitalized.
    ///
    /// ## Errors
    /// Returns `CalendarError::Formatting` if a weekday cannot be formatted.
    pub fn weekday_headers(&self) -> CalendarResult<Vec<String>> {
        let (year, month, day) = MONDAY_ANCHOR;
        let monday = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| CalendarError::Formatting("invalid weekday anchor".to_string()))?;

        monday
            .iter_days()
            .take(DAYS_PER_WEEK)
            .map(|day| {
                let date = to_icu_date(day)?;
                Ok(capitalize(&self.weekday_formatter.format(&date).to_string()))
            })
            .collect()
    }

    /// Text of the "+N more" marker shown when a day has hidden events.
    #[must_use]
    pub fn overflow_label(&self, remaining: usize) -> String {
        if self.is_spanish() {
            format!("+{remaining} más")
        } else {
            format!("+{remaining} more")
        }
    }

    fn is_spanish(&self) -> bool {
        self.locale.id.language.as_str() == "es"
    }
}

fn to_icu_date(date: NaiveDate) -> CalendarResult<Date<icu::calendar::Iso>> {
    let month = u8::try_from(date.month())
        .map_err(|err| CalendarError::Formatting(format!("{date}: {err}")))?;
    let day = u8::try_from(date.day())
        .map_err(|err| CalendarError::Formatting(format!("{date}: {err}")))?;
    Date::try_new_iso(date.year(), month, day)
        .map_err(|err| CalendarError::Formatting(format!("{date}: {err}")))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(y: i32, m: u32, d: u32) -> ReferenceDate {
        ReferenceDate::new(NaiveDate::from_ymd_opt(y, m, d).unwrap()).unwrap()
    }

    #[test]
    fn test_spanish_month_label() {
        let locale = CalendarLocale::new("es-AR").unwrap();
        let label = locale.month_label(reference(2025, 10, 22)).unwrap();
        assert!(label.contains("octubre"), "label was {label}");
        assert!(label.contains("2025"), "label was {label}");
    }

    #[test]
    fn test_english_month_label() {
        let locale = CalendarLocale::new("en-US").unwrap();
        let label = locale.month_label(reference(2025, 10, 1)).unwrap();
        assert!(label.contains("October"), "label was {label}");
        assert!(label.contains("2025"), "label was {label}");
    }

    #[test]
    fn test_spanish_weekday_headers() {
        let locale = CalendarLocale::new("es-AR").unwrap();
        let headers = locale.weekday_headers().unwrap();
        assert_eq!(headers.len(), 7);
        assert!(headers[0].starts_with("Lun"), "headers were {headers:?}");
        assert!(headers[6].starts_with("Dom"), "headers were {headers:?}");
    }

    #[test]
    fn test_overflow_label_by_language() {
        assert_eq!(CalendarLocale::new("es-AR").unwrap().overflow_label(1), "+1 más");
        assert_eq!(CalendarLocale::new("en-GB").unwrap().overflow_label(4), "+4 more");
    }

    #[test]
    fn test_rejects_malformed_tag() {
        assert!(matches!(
            CalendarLocale::new("not a locale!"),
            Err(CalendarError::InvalidLocale(_))
        ));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("mié"), "Mié");
        assert_eq!(capitalize(""), "");
    }
}
