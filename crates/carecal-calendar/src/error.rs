use chrono::NaiveDate;
use thiserror::Error;

/// Calendar engine errors
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Formatting error: {0}")]
    Formatting(String),

    #[error("Date out of supported range: {0}")]
    OutOfRange(NaiveDate),

    #[error(transparent)]
    CoreError(#[from] carecal_core::error::CoreError),
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
