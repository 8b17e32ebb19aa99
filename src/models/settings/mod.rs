// Settings module
// Picker preferences: week start, short date pattern and heading pattern

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::{self, ShortDateFormat, DEFAULT_HEADING_FORMAT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    /// "MM/DD/YYYY", "DD/MM/YYYY" or "YYYY/MM/DD"
    pub date_format: String,
    /// strftime pattern for the month/year heading
    pub heading_format: String,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            date_format: "MM/DD/YYYY".to_string(),
            heading_format: DEFAULT_HEADING_FORMAT.to_string(),
        }
    }
}

impl PickerSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.week_start()?;
        self.short_date_format()?;
        if !date::is_valid_pattern(&self.heading_format) {
            return Err(SettingsError::InvalidHeadingFormat(
                self.heading_format.clone(),
            ));
        }
        Ok(())
    }

    pub fn week_start(&self) -> Result<Weekday, SettingsError> {
        date::weekday_from_index(self.first_day_of_week)
            .ok_or(SettingsError::InvalidFirstDayOfWeek(self.first_day_of_week))
    }

    pub fn short_date_format(&self) -> Result<ShortDateFormat, SettingsError> {
        ShortDateFormat::from_setting(&self.date_format)
            .ok_or_else(|| SettingsError::UnsupportedDateFormat(self.date_format.clone()))
    }
}

/// Validation errors for PickerSettings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("first day of week must be 0-6, got {0}")]
    InvalidFirstDayOfWeek(u8),
    #[error("unsupported date format '{0}'")]
    UnsupportedDateFormat(String),
    #[error("invalid heading format '{0}'")]
    InvalidHeadingFormat(String),
}
