//! Focus trap for the picker dialog.
//!
//! The trap knows the focusable elements of its subtree in document order.
//! When focus leaves the subtree it is sent back to the first focusable
//! element instead.

use egui::Id;

/// Kind of interactive element registered in the subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Link,
    Button,
    Input,
    TextArea,
    Select,
    Details,
    /// Non-interactive element, focusable only through an explicit tab index
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusableElement {
    pub id: Id,
    pub kind: ElementKind,
    pub tab_index: Option<i32>,
}

impl FocusableElement {
    pub fn new(id: Id, kind: ElementKind) -> Self {
        Self {
            id,
            kind,
            tab_index: None,
        }
    }

    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Interactive elements always qualify as redirect targets; anything else
    /// needs a non-negative explicit tab index.
    pub fn is_redirect_target(&self) -> bool {
        match self.kind {
            ElementKind::Other => self.tab_index.is_some_and(|index| index >= 0),
            _ => true,
        }
    }
}

/// Where keyboard focus lives, as seen by the trap.
#[cfg_attr(test, mockall::automock)]
pub trait FocusHost {
    fn focused(&self) -> Option<Id>;
    fn request_focus(&mut self, id: Id);
}

#[derive(Debug, Clone, Default)]
pub struct FocusTrap {
    elements: Vec<FocusableElement>,
}

impl FocusTrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element in document order.
    pub fn register(&mut self, element: FocusableElement) {
        self.elements.push(element);
    }

    pub fn contains(&self, id: Id) -> bool {
        self.elements.iter().any(|element| element.id == id)
    }

    pub fn first_focusable(&self) -> Option<Id> {
        self.elements
            .iter()
            .find(|element| element.is_redirect_target())
            .map(|element| element.id)
    }

    /// Decide where focus goes after it left an element of the subtree.
    ///
    /// Returns the redirect target when `new_target` lies outside the
    /// subtree, `None` when focus stays inside or there is nothing to focus.
    pub fn on_focus_out(&self, new_target: Option<Id>) -> Option<Id> {
        match new_target {
            Some(id) if self.contains(id) => None,
            _ => self.first_focusable(),
        }
    }

    /// Check the host after a frame and pull focus back if it escaped.
    ///
    /// `was_inside` is whether focus was inside the subtree on the previous
    /// frame. Returns whether focus is inside the subtree now.
    pub fn enforce(&self, host: &mut dyn FocusHost, was_inside: bool) -> bool {
        let focused = host.focused();
        if focused.is_some_and(|id| self.contains(id)) {
            return true;
        }
        if !was_inside {
            return false;
        }

        match self.on_focus_out(focused) {
            Some(target) => {
                log::debug!("Focus left the picker dialog; redirecting");
                host.request_focus(target);
                true
            }
            None => false,
        }
    }
}
