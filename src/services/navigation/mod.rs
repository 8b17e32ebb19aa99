//! Navigation state machine.
//!
//! Owns the focused date and whether the grid currently holds keyboard
//! focus. Every event is applied through [`reduce`], which returns the next
//! state together with the effects the rendering layer must carry out once
//! the frame is committed. The month grid is always derived from the focused
//! date, never stored.

use chrono::Weekday;

use crate::models::calendar::{CalendarDate, MonthGrid};
use crate::models::day_cell::CellActivation;
use crate::services::grid::build_month_grid;
use crate::utils::date;

/// Arrow keys understood by the grid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

impl NavKey {
    fn day_offset(self) -> i64 {
        match self {
            NavKey::ArrowLeft => -1,
            NavKey::ArrowRight => 1,
            NavKey::ArrowUp => -7,
            NavKey::ArrowDown => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    Key(NavKey),
    PreviousMonth,
    NextMonth,
    PreviousYear,
    NextYear,
    /// A non-disabled cell was clicked
    Activate(CellActivation),
    /// Keyboard focus entered the grid body
    GridFocusIn,
    /// Keyboard focus left a cell; `target_in_grid` is true when it moved
    /// to another cell of the same grid
    GridFocusOut { target_in_grid: bool },
}

/// Work the rendering layer performs after a transition is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Suppress the default scroll behaviour of the key press
    PreventDefault,
    /// Give OS input focus to the cell for this date, once
    FocusCell(CalendarDate),
    /// Report the date to the host's change handler
    Select(CalendarDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    focused_date: CalendarDate,
    should_focus: bool,
    week_start: Weekday,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: NavigationState,
    pub effects: Vec<Effect>,
}

impl NavigationState {
    /// Seed the machine at mount. The grid does not hold focus yet, so the
    /// first render never steals page focus.
    pub fn new(focused_date: CalendarDate, week_start: Weekday) -> Self {
        Self {
            focused_date,
            should_focus: false,
            week_start,
        }
    }

    pub fn focused_date(&self) -> CalendarDate {
        self.focused_date
    }

    pub fn should_focus(&self) -> bool {
        self.should_focus
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// The grid displayed for the focused date's month.
    pub fn grid(&self) -> MonthGrid {
        build_month_grid(self.focused_date, self.week_start)
    }

    /// Whether `date` is the roving tab stop.
    pub fn is_focused(&self, date: CalendarDate) -> bool {
        date::is_same_day(date, self.focused_date)
    }

    /// The cell that should hold OS focus right now, if any.
    pub fn focus_target(&self) -> Option<CalendarDate> {
        self.should_focus.then_some(self.focused_date)
    }

    fn with_focused_date(self, focused_date: Option<CalendarDate>) -> Self {
        Self {
            // Out of chrono's range: keep the current date.
            focused_date: focused_date.unwrap_or(self.focused_date),
            ..self
        }
    }
}

/// Apply one event to the navigation state.
pub fn reduce(state: &NavigationState, event: NavigationEvent) -> Transition {
    let current = *state;
    let focused = current.focused_date;
    let mut effects = Vec::new();

    let next = match event {
        NavigationEvent::Key(key) => {
            effects.push(Effect::PreventDefault);
            current.with_focused_date(date::add_days(focused, key.day_offset()))
        }
        NavigationEvent::PreviousMonth => current.with_focused_date(date::add_months(focused, -1)),
        NavigationEvent::NextMonth => current.with_focused_date(date::add_months(focused, 1)),
        NavigationEvent::PreviousYear => current.with_focused_date(date::add_years(focused, -1)),
        NavigationEvent::NextYear => current.with_focused_date(date::add_years(focused, 1)),
        NavigationEvent::Activate(activation) => {
            effects.push(Effect::Select(activation.date()));
            current.with_focused_date(Some(activation.date()))
        }
        NavigationEvent::GridFocusIn => NavigationState {
            should_focus: true,
            ..current
        },
        NavigationEvent::GridFocusOut { target_in_grid } => NavigationState {
            should_focus: current.should_focus && target_in_grid,
            ..current
        },
    };

    // A cell's "focused" flag turning on is what moves OS focus, so the
    // command fires only when the target actually changes.
    if let Some(target) = next.focus_target() {
        if current.focus_target() != Some(target) {
            effects.push(Effect::FocusCell(target));
        }
    }

    if next.focused_date != focused {
        log::debug!(
            "Focused date moved {} -> {} ({:?})",
            focused,
            next.focused_date,
            event
        );
    }

    Transition {
        state: next,
        effects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day_cell::DayCell;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mar_15() -> NavigationState {
        NavigationState::new(date(2024, 3, 15), Weekday::Sun)
    }

    fn apply(state: NavigationState, events: &[NavigationEvent]) -> NavigationState {
        events
            .iter()
            .fold(state, |state, event| reduce(&state, *event).state)
    }

    fn activation(d: NaiveDate) -> CellActivation {
        DayCell {
            date: d,
            current: false,
            focusable: false,
            focused: false,
            disabled: false,
            in_month: true,
        }
        .activate()
        .unwrap()
    }

    #[test_case(NavKey::ArrowRight, (2024, 3, 16))]
    #[test_case(NavKey::ArrowLeft, (2024, 3, 14))]
    #[test_case(NavKey::ArrowDown, (2024, 3, 22))]
    #[test_case(NavKey::ArrowUp, (2024, 3, 8))]
    fn test_arrow_keys(key: NavKey, expected: (i32, u32, u32)) {
        let transition = reduce(&mar_15(), NavigationEvent::Key(key));
        assert_eq!(
            transition.state.focused_date(),
            date(expected.0, expected.1, expected.2)
        );
        assert_eq!(transition.effects, vec![Effect::PreventDefault]);
    }

    #[test_case(NavigationEvent::NextMonth, (2024, 4, 15))]
    #[test_case(NavigationEvent::PreviousMonth, (2024, 2, 15))]
    #[test_case(NavigationEvent::NextYear, (2025, 3, 15))]
    #[test_case(NavigationEvent::PreviousYear, (2023, 3, 15))]
    fn test_month_and_year_controls(event: NavigationEvent, expected: (i32, u32, u32)) {
        let transition = reduce(&mar_15(), event);
        assert_eq!(
            transition.state.focused_date(),
            date(expected.0, expected.1, expected.2)
        );
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn test_next_month_rebuilds_grid() {
        let state = apply(mar_15(), &[NavigationEvent::NextMonth]);
        let grid = state.grid();
        assert_eq!(grid.weeks[0].first_day(), date(2024, 3, 31));
        assert_eq!(grid.weeks[0].last_day(), date(2024, 4, 6));
        assert!(grid.contains(state.focused_date()));
    }

    #[test]
    fn test_next_month_clamps_day_of_month() {
        let state = NavigationState::new(date(2024, 1, 31), Weekday::Sun);
        let state = apply(state, &[NavigationEvent::NextMonth]);
        assert_eq!(state.focused_date(), date(2024, 2, 29));
        assert!(state.grid().contains(state.focused_date()));
    }

    #[test]
    fn test_arrow_crossing_month_moves_grid() {
        let state = NavigationState::new(date(2024, 3, 31), Weekday::Sun);
        let state = apply(state, &[NavigationEvent::Key(NavKey::ArrowDown)]);
        assert_eq!(state.focused_date(), date(2024, 4, 7));
        assert_eq!(state.grid().first_day(), Some(date(2024, 3, 31)));
    }

    #[test]
    fn test_initial_state_does_not_request_focus() {
        let state = mar_15();
        assert_eq!(state.focus_target(), None);
        let transition = reduce(&state, NavigationEvent::Key(NavKey::ArrowRight));
        assert!(!transition.effects.contains(&Effect::FocusCell(date(2024, 3, 16))));
    }

    #[test]
    fn test_grid_focus_in_focuses_cell_once() {
        let transition = reduce(&mar_15(), NavigationEvent::GridFocusIn);
        assert_eq!(transition.effects, vec![Effect::FocusCell(date(2024, 3, 15))]);

        let again = reduce(&transition.state, NavigationEvent::GridFocusIn);
        assert!(again.effects.is_empty());
    }

    #[test]
    fn test_arrow_with_focus_moves_os_focus() {
        let state = apply(mar_15(), &[NavigationEvent::GridFocusIn]);
        let transition = reduce(&state, NavigationEvent::Key(NavKey::ArrowRight));
        assert_eq!(
            transition.effects,
            vec![
                Effect::PreventDefault,
                Effect::FocusCell(date(2024, 3, 16))
            ]
        );
    }

    #[test]
    fn test_focus_moving_within_grid_keeps_should_focus() {
        let state = apply(
            mar_15(),
            &[
                NavigationEvent::GridFocusIn,
                NavigationEvent::GridFocusOut {
                    target_in_grid: true,
                },
            ],
        );
        assert!(state.should_focus());
    }

    #[test]
    fn test_focus_leaving_grid_clears_should_focus() {
        let state = apply(
            mar_15(),
            &[
                NavigationEvent::GridFocusIn,
                NavigationEvent::GridFocusOut {
                    target_in_grid: false,
                },
                NavigationEvent::NextMonth,
            ],
        );
        assert!(!state.should_focus());
        assert_eq!(state.focus_target(), None);
    }

    #[test]
    fn test_activation_selects_and_focuses_date() {
        let transition = reduce(
            &mar_15(),
            NavigationEvent::Activate(activation(date(2024, 3, 20))),
        );
        assert_eq!(transition.state.focused_date(), date(2024, 3, 20));
        assert_eq!(transition.effects, vec![Effect::Select(date(2024, 3, 20))]);
    }

    #[test]
    fn test_arrow_round_trip() {
        let state = apply(
            mar_15(),
            &[
                NavigationEvent::Key(NavKey::ArrowDown),
                NavigationEvent::Key(NavKey::ArrowDown),
                NavigationEvent::Key(NavKey::ArrowUp),
                NavigationEvent::Key(NavKey::ArrowUp),
            ],
        );
        assert_eq!(state.focused_date(), date(2024, 3, 15));
    }

    #[test]
    fn test_navigation_at_range_limit_is_a_no_op() {
        let state = NavigationState::new(NaiveDate::MAX, Weekday::Sun);
        let transition = reduce(&state, NavigationEvent::NextYear);
        assert_eq!(transition.state.focused_date(), NaiveDate::MAX);
    }
}
