/// Days in a calendar week.
pub const DAYS_PER_WEEK: usize = 7;

/// Week rows in a month grid.
pub const GRID_WEEKS: usize = 6;

/// Cells in a month grid. Large enough for a 31-day month starting on a Sunday.
pub const GRID_CELLS: usize = DAYS_PER_WEEK * GRID_WEEKS;

/// Events shown per day before the overflow indicator takes over.
pub const DEFAULT_DISPLAY_CAP: usize = 3;

pub const DEFAULT_LOCALE: &str = "es-AR";
pub const DEFAULT_TIMEZONE: &str = "America/Argentina/Buenos_Aires";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Prefix for environment variable overrides, e.g. `CARECAL_CALENDAR__LOCALE`.
pub const ENV_PREFIX: &str = "CARECAL";

/// Oldest and newest years a reference date may take. The grid of December
/// `MAX_YEAR` spills into the following January, which must still be a
/// four-digit year.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9998;
