//! Dialog view model.
//!
//! A pure projection of the navigation state and the dialog props into
//! everything the rendering layer draws: heading, controls, header row and
//! day cells, plus their accessibility description.

use chrono::Weekday;

use crate::models::accessibility::{AccessibleNode, LiveRegion, Role};
use crate::models::calendar::CalendarDate;
use crate::models::day_cell::DayCell;
use crate::services::navigation::{NavigationEvent, NavigationState};
use crate::utils::date;

/// Host predicate marking dates that cannot be selected.
pub type DisabledDateFilter<'a> = &'a dyn Fn(CalendarDate) -> bool;

/// Props of the grid dialog.
#[derive(Clone, Copy)]
pub struct DialogProps<'a> {
    pub value: Option<CalendarDate>,
    pub disabled_date_filter: Option<DisabledDateFilter<'a>>,
    pub heading_format: &'a str,
    pub heading_id: &'a str,
}

/// Previous/next month and year buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    pub event: NavigationEvent,
    /// Accessible label
    pub label: &'static str,
    /// Visible glyph
    pub glyph: &'static str,
}

pub const LEADING_CONTROLS: [NavControl; 2] = [
    NavControl {
        event: NavigationEvent::PreviousYear,
        label: "Previous year",
        glyph: "<<",
    },
    NavControl {
        event: NavigationEvent::PreviousMonth,
        label: "Previous month",
        glyph: "<",
    },
];

pub const TRAILING_CONTROLS: [NavControl; 2] = [
    NavControl {
        event: NavigationEvent::NextMonth,
        label: "Next month",
        glyph: ">",
    },
    NavControl {
        event: NavigationEvent::NextYear,
        label: "Next year",
        glyph: ">>",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCell {
    pub weekday: Weekday,
    /// Full weekday name for assistive technology
    pub full_name: &'static str,
    /// Narrow visible glyph
    pub abbreviation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub heading: String,
    pub heading_id: String,
    pub header: [HeaderCell; 7],
    pub weeks: Vec<[DayCell; 7]>,
}

impl DialogView {
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.weeks.iter().flat_map(|week| week.iter())
    }

    pub fn cell(&self, date: CalendarDate) -> Option<&DayCell> {
        self.cells().find(|cell| cell.date == date)
    }

    pub fn dialog_node(&self) -> AccessibleNode {
        AccessibleNode::new(Role::Dialog, self.heading.clone())
            .modal(true)
            .labelled_by(self.heading_id.clone())
    }

    pub fn heading_node(&self) -> AccessibleNode {
        AccessibleNode::new(Role::Heading, self.heading.clone())
            .id(self.heading_id.clone())
            .live(LiveRegion::Polite)
    }

    pub fn grid_node(&self) -> AccessibleNode {
        AccessibleNode::new(Role::Grid, self.heading.clone()).labelled_by(self.heading_id.clone())
    }

    pub fn header_nodes(&self) -> Vec<AccessibleNode> {
        self.header
            .iter()
            .map(|cell| AccessibleNode::new(Role::ColumnHeader, cell.full_name))
            .collect()
    }

    pub fn control_nodes(&self) -> Vec<AccessibleNode> {
        LEADING_CONTROLS
            .iter()
            .chain(TRAILING_CONTROLS.iter())
            .map(|control| AccessibleNode::new(Role::Button, control.label))
            .collect()
    }
}

pub fn header_cells(week_start: Weekday) -> [HeaderCell; 7] {
    date::week_days(week_start).map(|weekday| HeaderCell {
        weekday,
        full_name: date::weekday_full_name(weekday),
        abbreviation: date::weekday_narrow_name(weekday),
    })
}

/// Project the dialog for the current navigation state.
///
/// The disabled predicate is evaluated for every cell on every call.
pub fn project_dialog(navigation: &NavigationState, props: &DialogProps<'_>) -> DialogView {
    let grid = navigation.grid();
    let focused = navigation.focused_date();
    let focus_target = navigation.focus_target();

    let weeks = grid
        .weeks
        .iter()
        .map(|week| {
            let days: [CalendarDate; 7] = *week.days();
            days.map(|day| DayCell {
                date: day,
                current: props.value.is_some_and(|value| date::is_same_day(day, value)),
                focusable: navigation.is_focused(day),
                focused: focus_target == Some(day),
                disabled: props
                    .disabled_date_filter
                    .is_some_and(|is_disabled| is_disabled(day)),
                in_month: date::is_same_month(day, focused),
            })
        })
        .collect();

    DialogView {
        heading: date::format_heading(focused, props.heading_format),
        heading_id: props.heading_id.to_string(),
        header: header_cells(navigation.week_start()),
        weeks,
    }
}
