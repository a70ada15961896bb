use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Formats tried in order when reading an event instant.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical form of a resolved instant on the minute.
const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Canonical form of a resolved instant with seconds or a fraction.
const PRECISE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Form shown to people.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// When an event takes place.
///
/// Values that cannot be read as a calendar instant are kept verbatim so the
/// record survives a round trip, but they never land on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OccursAt {
    Resolved(NaiveDateTime),
    Unparseable(String),
}

impl OccursAt {
    /// ## Summary
    /// Reads an instant from text.
    ///
    /// Accepts `YYYY-MM-DD HH:MM` (with `T` or space, optional seconds),
    /// RFC 3339 timestamps and bare dates. An RFC 3339 offset is dropped and
    /// the wall-clock time as written is kept; a bare date means midnight.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        for format in DATETIME_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Self::Resolved(parsed);
            }
        }

        if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
            return Self::Resolved(parsed.naive_local());
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            return Self::Resolved(date.and_time(chrono::NaiveTime::MIN));
        }

        tracing::trace!(raw = %raw, "Event instant could not be parsed");
        Self::Unparseable(raw.to_string())
    }

    /// Calendar day of the instant, if it has one.
    #[must_use]
    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            Self::Resolved(instant) => Some(instant.date()),
            Self::Unparseable(_) => None,
        }
    }

    #[must_use]
    pub fn instant(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Resolved(instant) => Some(*instant),
            Self::Unparseable(_) => None,
        }
    }

    /// ## Summary
    /// Key used to order events chronologically.
    ///
    /// Unparseable instants sort as the earliest representable instant.
    #[must_use]
    pub fn sort_key(&self) -> NaiveDateTime {
        self.instant().unwrap_or(NaiveDateTime::MIN)
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Minute-precision text for display; unparseable values verbatim.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Resolved(instant) => instant.format(DISPLAY_FORMAT).to_string(),
            Self::Unparseable(raw) => raw.clone(),
        }
    }
}

impl From<String> for OccursAt {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for OccursAt {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<OccursAt> for String {
    fn from(value: OccursAt) -> Self {
        value.to_string()
    }
}

/// Writes the canonical form, which parses back to the same value.
impl std::fmt::Display for OccursAt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolved(instant) if instant.second() == 0 && instant.nanosecond() == 0 => {
                write!(f, "{}", instant.format(MINUTE_FORMAT))
            }
            Self::Resolved(instant) => write!(f, "{}", instant.format(PRECISE_FORMAT)),
            Self::Unparseable(raw) => f.write_str(raw),
        }
    }
}
