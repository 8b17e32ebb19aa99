//! Date utility functions.
//!
//! Pure chrono helpers used by the grid builder, the navigation state machine
//! and the value synchronizer. Nothing here holds state.

use std::fmt::Write;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Heading pattern used when a configured one cannot be rendered.
pub const DEFAULT_HEADING_FORMAT: &str = "%B %Y";

pub fn is_same_day(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1 == date2
}

pub fn is_same_month(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1.year() == date2.year() && date1.month() == date2.month()
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `week_start` - The weekday that opens a week (Sunday for en-US)
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as u64;
    let first = week_start.num_days_from_sunday() as u64;
    let offset = (weekday + 7 - first) % 7;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Shift a date by a signed number of days.
///
/// Returns `None` only when the result leaves chrono's supported range.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Shift a date by a signed number of months.
///
/// The day-of-month is clamped to the last valid day of the target month,
/// so Jan 31 + 1 month lands on the last day of February.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

/// Shift a date by a signed number of years, clamping Feb 29 to Feb 28.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    add_months(date, years.checked_mul(12)?)
}

/// Map a settings index (0 = Sunday .. 6 = Saturday) to a weekday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// The seven weekdays in display order, starting at `week_start`.
pub fn week_days(week_start: Weekday) -> [Weekday; 7] {
    let mut days = [week_start; 7];
    for i in 1..7 {
        days[i] = days[i - 1].succ();
    }
    days
}

pub fn weekday_full_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// One-letter weekday glyph shown in the grid header.
pub fn weekday_narrow_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun | Weekday::Sat => "S",
        Weekday::Mon => "M",
        Weekday::Tue | Weekday::Thu => "T",
        Weekday::Wed => "W",
        Weekday::Fri => "F",
    }
}

/// Render a strftime pattern for a date. `None` when the pattern is
/// malformed or asks for fields a date does not have (`%H`, `%Z`, ...).
fn try_format(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Check that a strftime pattern can be rendered for a date without error.
pub fn is_valid_pattern(pattern: &str) -> bool {
    !pattern.is_empty() && try_format(NaiveDate::default(), pattern).is_some()
}

/// Format the month/year heading ("March 2024" with the default pattern).
pub fn format_heading(date: NaiveDate, pattern: &str) -> String {
    if !pattern.is_empty() {
        if let Some(heading) = try_format(date, pattern) {
            return heading;
        }
    }
    log::warn!("Heading format '{}' cannot render a date, using default", pattern);
    try_format(date, DEFAULT_HEADING_FORMAT).unwrap_or_default()
}

/// Field order of a locale's short numeric date pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortDateFormat {
    /// `MM/DD/YYYY` (en-US)
    #[default]
    MonthDayYear,
    /// `DD/MM/YYYY`
    DayMonthYear,
    /// `YYYY/MM/DD`
    YearMonthDay,
}

impl ShortDateFormat {
    /// Resolve a settings string such as "DD/MM/YYYY".
    pub fn from_setting(setting: &str) -> Option<Self> {
        match setting.trim().to_ascii_uppercase().as_str() {
            "MM/DD/YYYY" => Some(Self::MonthDayYear),
            "DD/MM/YYYY" => Some(Self::DayMonthYear),
            "YYYY/MM/DD" => Some(Self::YearMonthDay),
            _ => None,
        }
    }

    pub fn as_setting(&self) -> &'static str {
        match self {
            Self::MonthDayYear => "MM/DD/YYYY",
            Self::DayMonthYear => "DD/MM/YYYY",
            Self::YearMonthDay => "YYYY/MM/DD",
        }
    }

    fn chrono_pattern(&self) -> &'static str {
        match self {
            Self::MonthDayYear => "%m/%d/%Y",
            Self::DayMonthYear => "%d/%m/%Y",
            Self::YearMonthDay => "%Y/%m/%d",
        }
    }

    /// Canonical zero-padded form, e.g. "03/15/2024".
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.chrono_pattern()).to_string()
    }

    /// Parse text typed by the user.
    ///
    /// Day and month accept one or two digits, the year exactly four.
    /// Anything else, including out-of-range fields like "13/45/2024",
    /// yields `None`.
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        let mut fields = text.trim().split('/');
        let first = fields.next()?;
        let second = fields.next()?;
        let third = fields.next()?;
        if fields.next().is_some() {
            return None;
        }

        let (year, month, day) = match self {
            Self::MonthDayYear => (third, first, second),
            Self::DayMonthYear => (third, second, first),
            Self::YearMonthDay => (first, second, third),
        };

        let year = parse_field(year, 4..=4)? as i32;
        let month = parse_field(month, 1..=2)?;
        let day = parse_field(day, 1..=2)?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

fn parse_field(field: &str, digits: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !digits.contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
