use thiserror::Error;

/// Application-level errors (command line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CalendarError(#[from] carecal_calendar::error::CalendarError),

    #[error(transparent)]
    CoreError(#[from] carecal_core::error::CoreError),

    #[error("Could not read events file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed events file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
