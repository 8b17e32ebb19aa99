//! Date picker factory.
//!
//! `DatePicker` bundles one picker instance: the value synchronizer behind the
//! text input and the navigation state machine behind the calendar dialog.
//! Instances share nothing, so a host can run several side by side.

mod dialog;

pub use dialog::{
    header_cells, project_dialog, DialogProps, DialogView, DisabledDateFilter, HeaderCell,
    NavControl, LEADING_CONTROLS, TRAILING_CONTROLS,
};

use chrono::Local;

use crate::models::calendar::CalendarDate;
use crate::models::day_cell::DayCell;
use crate::models::settings::{PickerSettings, SettingsError};
use crate::services::navigation::{self, Effect, NavigationEvent, NavigationState};
use crate::services::sync::{self, SyncEvent, SyncState};
use crate::utils::date::ShortDateFormat;

/// Options accepted when creating a picker.
#[derive(Debug, Clone, Default)]
pub struct PickerOptions {
    /// Distinguishes element ids when several pickers share a page
    pub id: String,
    pub settings: PickerSettings,
    /// Date the grid opens on when there is no initial value; defaults to the
    /// local date
    pub today: Option<CalendarDate>,
}

/// Controlled text input bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputProps<'a> {
    pub value: &'a str,
}

#[derive(Debug, Clone)]
pub struct DatePicker {
    sync: SyncState,
    navigation: NavigationState,
    heading_format: String,
    heading_id: String,
    pending_focus: Option<CalendarDate>,
}

impl DatePicker {
    pub fn new(
        initial_date: Option<CalendarDate>,
        options: PickerOptions,
    ) -> Result<Self, SettingsError> {
        options.settings.validate()?;
        let week_start = options.settings.week_start()?;
        let format = options.settings.short_date_format()?;

        let focused = initial_date
            .or(options.today)
            .unwrap_or_else(|| Local::now().date_naive());
        let heading_id = if options.id.is_empty() {
            "title".to_string()
        } else {
            format!("{}-title", options.id)
        };

        log::debug!(
            "Mounting date picker '{}' at {} (value {:?})",
            options.id,
            focused,
            initial_date
        );

        Ok(Self {
            sync: SyncState::new(initial_date, format),
            navigation: NavigationState::new(focused, week_start),
            heading_format: options.settings.heading_format,
            heading_id,
            pending_focus: None,
        })
    }

    /// The selected date.
    pub fn value(&self) -> Option<CalendarDate> {
        self.sync.value()
    }

    pub fn input_props(&self) -> InputProps<'_> {
        InputProps {
            value: self.sync.raw_text(),
        }
    }

    /// Change handler of the text input.
    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.sync = sync::reduce(&self.sync, SyncEvent::TextEdited(text.into()));
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn date_format(&self) -> ShortDateFormat {
        self.sync.format()
    }

    pub fn heading_id(&self) -> &str {
        &self.heading_id
    }

    /// Apply a navigation event.
    ///
    /// Selections are fed to the synchronizer here; the remaining effects are
    /// returned for the rendering layer.
    pub fn dispatch(&mut self, event: NavigationEvent) -> Vec<Effect> {
        let transition = navigation::reduce(&self.navigation, event);
        self.navigation = transition.state;

        let mut remaining = Vec::with_capacity(transition.effects.len());
        for effect in transition.effects {
            match effect {
                Effect::Select(date) => {
                    self.sync = sync::reduce(&self.sync, SyncEvent::DateSelected(date));
                }
                Effect::FocusCell(date) => {
                    self.pending_focus = Some(date);
                    remaining.push(effect);
                }
                Effect::PreventDefault => remaining.push(effect),
            }
        }
        remaining
    }

    /// Click on a cell. Disabled cells have no handler, so nothing happens.
    pub fn click(&mut self, cell: &DayCell) -> Vec<Effect> {
        match cell.activate() {
            Some(activation) => self.dispatch(NavigationEvent::Activate(activation)),
            None => Vec::new(),
        }
    }

    /// Take the outstanding focus command, if any. Each command is handed out
    /// once.
    pub fn take_pending_focus(&mut self) -> Option<CalendarDate> {
        self.pending_focus.take()
    }

    /// Project the dialog for rendering.
    pub fn dialog(&self, disabled_date_filter: Option<DisabledDateFilter<'_>>) -> DialogView {
        let props = DialogProps {
            value: self.sync.value(),
            disabled_date_filter,
            heading_format: &self.heading_format,
            heading_id: &self.heading_id,
        };
        project_dialog(&self.navigation, &props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::navigation::NavKey;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn picker() -> DatePicker {
        DatePicker::new(Some(date(2024, 3, 15)), PickerOptions::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let options = PickerOptions {
            settings: PickerSettings {
                first_day_of_week: 9,
                ..PickerSettings::default()
            },
            ..PickerOptions::default()
        };
        assert!(DatePicker::new(None, options).is_err());
    }

    #[test]
    fn test_without_initial_value_opens_on_today() {
        let options = PickerOptions {
            today: Some(date(2025, 6, 1)),
            ..PickerOptions::default()
        };
        let picker = DatePicker::new(None, options).unwrap();
        assert_eq!(picker.value(), None);
        assert_eq!(picker.input_props().value, "");
        assert_eq!(picker.navigation().focused_date(), date(2025, 6, 1));
    }

    #[test]
    fn test_heading_id_uses_picker_id() {
        let options = PickerOptions {
            id: "departure".to_string(),
            ..PickerOptions::default()
        };
        let picker = DatePicker::new(Some(date(2024, 3, 15)), options).unwrap();
        assert_eq!(picker.dialog(None).heading_id, "departure-title");
    }

    #[test]
    fn test_click_selects_and_formats() {
        let mut picker = picker();
        let view = picker.dialog(None);
        let cell = *view.cell(date(2024, 3, 20)).unwrap();
        picker.click(&cell);
        assert_eq!(picker.value(), Some(date(2024, 3, 20)));
        assert_eq!(picker.input_props().value, "03/20/2024");
        assert_eq!(picker.navigation().focused_date(), date(2024, 3, 20));
    }

    #[test]
    fn test_pending_focus_is_taken_once() {
        let mut picker = picker();
        picker.dispatch(NavigationEvent::GridFocusIn);
        picker.dispatch(NavigationEvent::Key(NavKey::ArrowRight));
        assert_eq!(picker.take_pending_focus(), Some(date(2024, 3, 16)));
        assert_eq!(picker.take_pending_focus(), None);
    }

    #[test]
    fn test_select_is_consumed_by_picker() {
        let mut picker = picker();
        let cell = *picker.dialog(None).cell(date(2024, 3, 18)).unwrap();
        let effects = picker.click(&cell);
        assert!(effects.iter().all(|e| !matches!(e, Effect::Select(_))));
    }

    #[test]
    fn test_new_rejects_heading_format_with_time_fields() {
        let options = PickerOptions {
            settings: PickerSettings {
                heading_format: "%B %Y %H:%M".to_string(),
                ..PickerSettings::default()
            },
            ..PickerOptions::default()
        };
        assert!(matches!(
            DatePicker::new(None, options),
            Err(SettingsError::InvalidHeadingFormat(_))
        ));
    }
}
