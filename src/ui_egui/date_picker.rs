//! Date picker rendering.
//!
//! Draws the controlled text input and the calendar dialog for one
//! `DatePicker`, translating egui input into navigation events and carrying
//! out the focus commands the state machine emits.

use egui::{EventFilter, Id, Key, Modifiers, RichText};

use super::accessibility::expose;
use super::day_cell::render_day_cell;
use super::focus::EguiFocusHost;
use crate::models::accessibility::AccessibleNode;
use crate::models::day_cell::CellActivation;
use crate::services::focus_trap::{ElementKind, FocusTrap, FocusableElement};
use crate::services::navigation::{NavKey, NavigationEvent};
use crate::services::picker::{
    DatePicker, DisabledDateFilter, NavControl, LEADING_CONTROLS, TRAILING_CONTROLS,
};

const ARROW_KEYS: [(Key, NavKey); 4] = [
    (Key::ArrowLeft, NavKey::ArrowLeft),
    (Key::ArrowRight, NavKey::ArrowRight),
    (Key::ArrowUp, NavKey::ArrowUp),
    (Key::ArrowDown, NavKey::ArrowDown),
];

/// A picker plus the per-frame focus bookkeeping egui needs.
pub struct DatePickerWidget {
    picker: DatePicker,
    /// A grid cell held keyboard focus at the end of the last frame
    grid_has_focus: bool,
    /// Focus was inside the dialog at the end of the last frame
    focus_inside: bool,
}

impl DatePickerWidget {
    pub fn new(picker: DatePicker) -> Self {
        Self {
            picker,
            grid_has_focus: false,
            focus_inside: false,
        }
    }

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    /// Controlled text input bound to the picker's raw text.
    pub fn show_input(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let mut text = self.picker.input_props().value.to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text(self.picker.date_format().as_setting())
                .desired_width(140.0),
        );
        if response.changed() {
            self.picker.on_input_change(text);
        }
        response
    }

    /// The calendar dialog, wrapped in the focus trap.
    pub fn show_dialog(
        &mut self,
        ui: &mut egui::Ui,
        disabled_date_filter: Option<DisabledDateFilter<'_>>,
    ) {
        if self.grid_has_focus {
            self.handle_grid_keys(ui);
        }

        let mut trap = FocusTrap::new();
        let mut events: Vec<NavigationEvent> = Vec::new();
        let mut activation: Option<CellActivation> = None;
        let mut grid_focused = false;

        let view = self.picker.dialog(disabled_date_filter);
        let focus_now = self.picker.take_pending_focus();

        let controls = view.control_nodes();
        let (leading_nodes, trailing_nodes) = controls.split_at(LEADING_CONTROLS.len());
        let mut heading_id: Option<Id> = None;

        let dialog = egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                for (control, node) in LEADING_CONTROLS.iter().zip(leading_nodes) {
                    if render_control(ui, control, node, &mut trap) {
                        events.push(control.event);
                    }
                }
                let heading = ui.label(RichText::new(&view.heading).strong().size(16.0));
                expose(ui.ctx(), heading.id, &view.heading_node(), None);
                heading_id = Some(heading.id);
                for (control, node) in TRAILING_CONTROLS.iter().zip(trailing_nodes) {
                    if render_control(ui, control, node, &mut trap) {
                        events.push(control.event);
                    }
                }
            });

            ui.separator();

            let grid = egui::Grid::new(Id::new(&view.heading_id).with("grid"))
                .num_columns(7)
                .spacing([4.0, 2.0])
                .min_col_width(34.0)
                .show(ui, |ui| {
                    for (header, node) in view.header.iter().zip(view.header_nodes()) {
                        let response = ui
                            .label(RichText::new(header.abbreviation).small().strong())
                            .on_hover_text(header.full_name);
                        expose(ui.ctx(), response.id, &node, None);
                    }
                    ui.end_row();

                    for week in &view.weeks {
                        for cell in week {
                            let response = render_day_cell(ui, cell);
                            trap.register(
                                FocusableElement::new(response.id, ElementKind::Button)
                                    .with_tab_index(cell.tab_index()),
                            );

                            if focus_now == Some(cell.date()) {
                                response.request_focus();
                            }
                            if response.has_focus() {
                                grid_focused = true;
                                // Arrow keys belong to the grid, not egui's
                                // directional focus movement.
                                ui.memory_mut(|m| {
                                    m.set_focus_lock_filter(
                                        response.id,
                                        EventFilter {
                                            horizontal_arrows: true,
                                            vertical_arrows: true,
                                            ..Default::default()
                                        },
                                    )
                                });
                            }
                            if response.clicked() {
                                activation = cell.activate();
                            }
                        }
                        ui.end_row();
                    }
                });
            expose(ui.ctx(), grid.response.id, &view.grid_node(), heading_id);
        });
        expose(ui.ctx(), dialog.response.id, &view.dialog_node(), heading_id);

        let mut changed = !events.is_empty() || activation.is_some();
        for event in events {
            self.picker.dispatch(event);
        }
        if let Some(activation) = activation {
            self.picker.dispatch(NavigationEvent::Activate(activation));
        }

        if grid_focused != self.grid_has_focus {
            let event = if grid_focused {
                NavigationEvent::GridFocusIn
            } else {
                NavigationEvent::GridFocusOut {
                    target_in_grid: false,
                }
            };
            self.picker.dispatch(event);
            self.grid_has_focus = grid_focused;
            changed = true;
        }

        let mut host = EguiFocusHost::new(ui.ctx());
        self.focus_inside = trap.enforce(&mut host, self.focus_inside);

        if changed {
            ui.ctx().request_repaint();
        }
    }

    fn handle_grid_keys(&mut self, ui: &egui::Ui) {
        let pressed = ui.input_mut(|i| {
            ARROW_KEYS
                .iter()
                .find(|(key, _)| i.consume_key(Modifiers::NONE, *key))
                .map(|(_, nav)| *nav)
        });

        if let Some(key) = pressed {
            self.picker.dispatch(NavigationEvent::Key(key));
            ui.ctx().request_repaint();
        }
    }
}

fn render_control(
    ui: &mut egui::Ui,
    control: &NavControl,
    node: &AccessibleNode,
    trap: &mut FocusTrap,
) -> bool {
    let response = ui.small_button(control.glyph).on_hover_text(control.label);
    expose(ui.ctx(), response.id, node, None);
    trap.register(FocusableElement::new(response.id, ElementKind::Button));
    response.clicked()
}
