//! Accessibility description of the picker surface.
//!
//! Mirrors the ARIA roles and states the dialog exposes so the contract can
//! be checked without a rendering backend.

/// Role of an element in the accessibility tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Dialog,
    Heading,
    Button,
    Grid,
    ColumnHeader,
    GridCell,
}

/// How assistive technology announces content changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveRegion {
    #[default]
    Off,
    Polite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibleNode {
    pub role: Role,
    /// Accessible name read by assistive technology
    pub label: String,
    /// Element id other nodes can reference
    pub id: Option<String>,
    /// Id of the element that names this one
    pub labelled_by: Option<String>,
    pub modal: bool,
    pub selected: bool,
    pub disabled: bool,
    pub live: LiveRegion,
    pub tab_index: Option<i32>,
}

impl AccessibleNode {
    pub fn new(role: Role, label: impl Into<String>) -> Self {
        Self {
            role,
            label: label.into(),
            id: None,
            labelled_by: None,
            modal: false,
            selected: false,
            disabled: false,
            live: LiveRegion::Off,
            tab_index: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn labelled_by(mut self, id: impl Into<String>) -> Self {
        self.labelled_by = Some(id.into());
        self
    }

    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn live(mut self, live: LiveRegion) -> Self {
        self.live = live;
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }
}
