//! egui side of the focus trap.

use egui::Id;

use crate::services::focus_trap::FocusHost;

/// Reads and moves keyboard focus through egui's memory.
pub struct EguiFocusHost<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiFocusHost<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl FocusHost for EguiFocusHost<'_> {
    fn focused(&self) -> Option<Id> {
        self.ctx.memory(|m| m.focused())
    }

    fn request_focus(&mut self, id: Id) {
        self.ctx.memory_mut(|m| m.request_focus(id));
    }
}
