use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use carecal_calendar::NavigationAction;
use carecal_core::types::SubjectId;

/// carecal - month calendar of a subject's care events
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "carecal")]
#[command(about = "Print a month calendar of one subject's events", long_about = None)]
pub struct Invocation {
    /// JSON array of event records
    pub events_path: PathBuf,

    /// Subject whose events are shown
    pub subject: String,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Navigation actions applied in order: previous, next, today
    pub actions: Vec<NavigationAction>,
}

impl Invocation {
    #[must_use]
    pub fn subject_id(&self) -> SubjectId {
        SubjectId::new(self.subject.clone())
    }
}
