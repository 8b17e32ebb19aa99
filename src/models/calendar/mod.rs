//! Calendar layout model.
//!
//! A `MonthGrid` is the week-aligned rectangle of days shown for one month,
//! including leading and trailing days from the adjacent months.

use chrono::NaiveDate;

/// Day-granularity date used throughout the picker.
pub type CalendarDate = NaiveDate;

/// Seven consecutive dates, starting at the configured week start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    days: [CalendarDate; 7],
}

impl Week {
    pub(crate) fn new(days: [CalendarDate; 7]) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[CalendarDate; 7] {
        &self.days
    }

    pub fn first_day(&self) -> CalendarDate {
        self.days[0]
    }

    pub fn last_day(&self) -> CalendarDate {
        self.days[6]
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.days.contains(&date)
    }
}

/// The weeks rendered for the month of `reference`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// The date the grid was built around (the focused date)
    pub reference: CalendarDate,
    /// Contiguous weeks; the first contains day 1 of the reference month
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.weeks.iter().any(|week| week.contains(date))
    }

    /// All dates in display order.
    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.weeks.iter().flat_map(|week| week.days().iter().copied())
    }

    pub fn first_day(&self) -> Option<CalendarDate> {
        self.weeks.first().map(Week::first_day)
    }

    pub fn last_day(&self) -> Option<CalendarDate> {
        self.weeks.last().map(Week::last_day)
    }
}
