//! Day cell model.
//!
//! A `DayCell` is the stateless render unit for one date in the grid. Its
//! activation is only available when the date is not disabled, so a click on
//! a disabled cell has nothing to dispatch.

use chrono::Datelike;

use super::accessibility::{AccessibleNode, Role};
use super::calendar::CalendarDate;

/// Proof that a non-disabled cell was activated.
///
/// Only `DayCell::activate` can produce one, and only the dialog projection
/// can produce a `DayCell`, which keeps disabled dates out of the selection
/// path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellActivation {
    date: CalendarDate,
}

impl CellActivation {
    pub fn date(&self) -> CalendarDate {
        self.date
    }
}

/// Visual and interactive state of a single date.
///
/// Cells are only built by the dialog projection, so the `disabled` flag
/// always reflects the host's predicate.
///
/// ```compile_fail
/// use chrono::NaiveDate;
/// use rust_datepicker::models::day_cell::DayCell;
///
/// let forged = DayCell {
///     date: NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
///     current: false,
///     focusable: false,
///     focused: false,
///     disabled: false,
///     in_month: true,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub(crate) date: CalendarDate,
    /// The date is the selected value
    pub(crate) current: bool,
    /// The date is the roving tab stop
    pub(crate) focusable: bool,
    /// The cell should take input focus now
    pub(crate) focused: bool,
    /// The host's predicate rejected the date
    pub(crate) disabled: bool,
    /// The date belongs to the displayed month
    pub(crate) in_month: bool,
}

impl DayCell {
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn current(&self) -> bool {
        self.current
    }

    pub fn focusable(&self) -> bool {
        self.focusable
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn in_month(&self) -> bool {
        self.in_month
    }

    /// The activation handler. `None` for disabled cells.
    pub fn activate(&self) -> Option<CellActivation> {
        if self.disabled {
            None
        } else {
            Some(CellActivation { date: self.date })
        }
    }

    /// 0 for the roving tab stop, -1 for every other cell.
    pub fn tab_index(&self) -> i32 {
        if self.focusable {
            0
        } else {
            -1
        }
    }

    /// Visible text, e.g. "> 15 <" for the selected day or "3 x" when disabled.
    pub fn label(&self) -> String {
        let mut label = if self.current {
            format!("> {} <", self.date.day())
        } else {
            self.date.day().to_string()
        };
        if self.disabled {
            label.push_str(" x");
        }
        label
    }

    pub fn accessible_node(&self) -> AccessibleNode {
        AccessibleNode::new(Role::GridCell, self.date.format("%A, %B %-d, %Y").to_string())
            .selected(self.current)
            .disabled(self.disabled)
            .tab_index(self.tab_index())
    }
}
