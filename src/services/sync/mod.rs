//! Value synchronizer.
//!
//! Keeps the selected date and the raw input text consistent through two
//! separate one-way reactions:
//!
//! * a date chosen in the calendar always rewrites the text in canonical form
//! * typed text replaces the date only when it parses, and is never rewritten
//!
//! Folding both into one binding would reformat the text under the user's
//! cursor on every keystroke.

use crate::models::calendar::CalendarDate;
use crate::utils::date::ShortDateFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// The user typed into the input
    TextEdited(String),
    /// A date was chosen from the calendar
    DateSelected(CalendarDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncState {
    value: Option<CalendarDate>,
    raw_text: String,
    format: ShortDateFormat,
}

impl SyncState {
    /// Mount with the initial selection formatted into the input.
    pub fn new(value: Option<CalendarDate>, format: ShortDateFormat) -> Self {
        let raw_text = value.map(|d| format.format(d)).unwrap_or_default();
        Self {
            value,
            raw_text,
            format,
        }
    }

    pub fn value(&self) -> Option<CalendarDate> {
        self.value
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn format(&self) -> ShortDateFormat {
        self.format
    }
}

/// Apply one event. Exactly one of the two reactions runs per event.
pub fn reduce(state: &SyncState, event: SyncEvent) -> SyncState {
    match event {
        SyncEvent::DateSelected(date) => SyncState {
            value: Some(date),
            raw_text: state.format.format(date),
            format: state.format,
        },
        SyncEvent::TextEdited(text) => {
            let value = match state.format.parse(&text) {
                Some(parsed) => Some(parsed),
                None => {
                    log::trace!("Ignoring unparseable date text {:?}", text);
                    state.value
                }
            };
            SyncState {
                value,
                raw_text: text,
                format: state.format,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mounted() -> SyncState {
        SyncState::new(Some(date(2024, 3, 15)), ShortDateFormat::MonthDayYear)
    }

    #[test]
    fn test_mount_formats_initial_value() {
        assert_eq!(mounted().raw_text(), "03/15/2024");
    }

    #[test]
    fn test_mount_without_value_has_empty_text() {
        let state = SyncState::new(None, ShortDateFormat::MonthDayYear);
        assert_eq!(state.raw_text(), "");
        assert_eq!(state.value(), None);
    }

    #[test]
    fn test_selected_date_overwrites_text() {
        let state = reduce(
            &mounted(),
            SyncEvent::TextEdited("03/1".to_string()),
        );
        let state = reduce(&state, SyncEvent::DateSelected(date(2024, 3, 21)));
        assert_eq!(state.value(), Some(date(2024, 3, 21)));
        assert_eq!(state.raw_text(), "03/21/2024");
    }

    #[test]
    fn test_invalid_text_keeps_value() {
        let state = reduce(&mounted(), SyncEvent::TextEdited("13/45/2024".to_string()));
        assert_eq!(state.value(), Some(date(2024, 3, 15)));
        assert_eq!(state.raw_text(), "13/45/2024");
    }

    #[test]
    fn test_valid_text_updates_value_without_reformatting() {
        let state = reduce(&mounted(), SyncEvent::TextEdited("3/20/2024".to_string()));
        assert_eq!(state.value(), Some(date(2024, 3, 20)));
        assert_eq!(state.raw_text(), "3/20/2024");
    }

    #[test]
    fn test_partial_typing_never_fights_the_user() {
        let mut state = SyncState::new(None, ShortDateFormat::MonthDayYear);
        for text in ["0", "03", "03/", "03/2", "03/20", "03/20/", "03/20/2", "03/20/2024"] {
            state = reduce(&state, SyncEvent::TextEdited(text.to_string()));
            assert_eq!(state.raw_text(), text);
        }
        assert_eq!(state.value(), Some(date(2024, 3, 20)));
    }

    #[test]
    fn test_day_month_year_format() {
        let state = SyncState::new(Some(date(2024, 3, 15)), ShortDateFormat::DayMonthYear);
        assert_eq!(state.raw_text(), "15/03/2024");
        let state = reduce(&state, SyncEvent::TextEdited("20/03/2024".to_string()));
        assert_eq!(state.value(), Some(date(2024, 3, 20)));
    }
}
