// Test fixtures - reusable test data
// Provides consistent dates and pickers across all test files

#![allow(dead_code)]

use chrono::{Datelike, NaiveDate, Weekday};
use rust_datepicker::models::calendar::CalendarDate;
use rust_datepicker::services::picker::{DatePicker, PickerOptions};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Friday, Mar 15, 2024
    pub fn mar_15_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Returns Saturday, Mar 16, 2024
    pub fn mar_16_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()
    }

    /// Returns Jan 31, 2024 (month-length edge case)
    pub fn jan_31_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

/// Sample pickers for testing
pub mod pickers {
    use super::*;

    /// A picker mounted on Mar 15, 2024 with default settings
    pub fn mar_15_picker() -> DatePicker {
        DatePicker::new(Some(dates::mar_15_2024()), PickerOptions::default()).unwrap()
    }

    pub fn picker_at(date: CalendarDate) -> DatePicker {
        DatePicker::new(Some(date), PickerOptions::default()).unwrap()
    }
}

/// Disabled-date predicates
pub mod filters {
    use super::*;

    pub fn weekends(date: CalendarDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn none(_date: CalendarDate) -> bool {
        false
    }
}
