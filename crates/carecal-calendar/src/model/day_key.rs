use std::str::FromStr;

use chrono::NaiveDate;

use carecal_core::error::CoreError;

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical key of one calendar day.
///
/// Renders as `YYYY-MM-DD`, so for four-digit years the textual order and the
/// chronological order agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(NaiveDate);

impl DayKey {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for DayKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DAY_KEY_FORMAT)
            .map(Self)
            .map_err(|err| CoreError::InvalidInput(format!("day key {s:?}: {err}")))
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}
