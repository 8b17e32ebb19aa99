//! Grid builder.
//!
//! Lays out the weeks shown for the month containing a reference date.

use chrono::{Datelike, Weekday};

use crate::models::calendar::{CalendarDate, MonthGrid, Week};
use crate::utils::date;

/// Build the month grid around `reference`.
///
/// Starts at the week containing the first of the month and keeps emitting
/// 7-day weeks while the next week still starts inside the reference month.
/// At least one week is always produced.
pub fn build_month_grid(reference: CalendarDate, week_start: Weekday) -> MonthGrid {
    let first_of_month = date::start_of_month(reference);
    let mut week_first_day = date::start_of_week(first_of_month, week_start);
    let mut weeks = Vec::with_capacity(6);

    loop {
        let Some(week) = build_week(week_first_day) else {
            break;
        };
        weeks.push(week);

        match date::add_days(week_first_day, 7) {
            Some(next) if next.month() == reference.month() && next.year() == reference.year() => {
                week_first_day = next;
            }
            _ => break,
        }
    }

    MonthGrid { reference, weeks }
}

fn build_week(first_day: CalendarDate) -> Option<Week> {
    let mut days = [first_day; 7];
    for (offset, day) in days.iter_mut().enumerate().skip(1) {
        *day = date::add_days(first_day, offset as i64)?;
    }
    Some(Week::new(days))
}
