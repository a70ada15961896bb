//! Plain-text rendering of a calendar view.

use std::fmt::Write;

use chrono::Datelike;

use carecal_calendar::{CalendarLocale, CalendarView, DayCell};

const CELL_WIDTH: usize = 6;

fn day_marker(cell: &DayCell<'_>) -> String {
    let prefix = if cell.is_in_current_month { ' ' } else { '·' };
    let suffix = if cell.is_today { '*' } else { ' ' };
    format!("{prefix}{:>2}{suffix}", cell.date.day())
}

fn day_summary(cell: &DayCell<'_>, locale: &CalendarLocale) -> Option<String> {
    if cell.events.is_empty() {
        return None;
    }

    let mut parts: Vec<String> = cell
        .events
        .visible()
        .iter()
        .map(|event| event.title.clone())
        .collect();
    if let Some(overflow) = cell.events.overflow() {
        parts.push(locale.overflow_label(overflow.remaining));
    }

    Some(format!("    {}: {}", cell.date.format("%Y-%m-%d"), parts.join(" | ")))
}

/// ## Summary
/// Renders the month grid, the per-day event lines and the upcoming list.
///
/// Out-of-month days are prefixed with `·`, today is suffixed with `*`.
///
/// ## Errors
/// Returns an error only if writing to the output buffer fails.
pub fn render_view(
    view: &CalendarView<'_>,
    locale: &CalendarLocale,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", view.month_label)?;
    for header in &view.weekday_headers {
        write!(out, "{header:>CELL_WIDTH$}")?;
    }
    out.push('\n');

    for week in view.weeks() {
        for cell in week {
            write!(out, "{:>CELL_WIDTH$}", day_marker(cell))?;
        }
        out.push('\n');
        for line in week.iter().filter_map(|cell| day_summary(cell, locale)) {
            writeln!(out, "{line}")?;
        }
    }

    out.push('\n');
    for event in &view.upcoming {
        write!(out, "{}  {}", event.when_label(), event.title)?;
        if let Some(location) = &event.location {
            write!(out, " ({location})")?;
        }
        out.push('\n');
    }

    Ok(out)
}
