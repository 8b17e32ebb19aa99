//! Day cell rendering.

use egui::{RichText, Vec2};

use super::accessibility::expose;
use crate::models::day_cell::DayCell;

const CELL_SIZE: Vec2 = Vec2::new(34.0, 24.0);

/// Draw one cell of the grid. The id is keyed on the date so the same day
/// keeps its focus across frames.
pub(super) fn render_day_cell(ui: &mut egui::Ui, cell: &DayCell) -> egui::Response {
    let mut text = RichText::new(cell.label());
    if !cell.in_month() {
        text = text.weak();
    }
    if cell.disabled() {
        text = text
            .strikethrough()
            .color(ui.visuals().weak_text_color());
    }

    let node = cell.accessible_node();
    let response = ui
        .push_id(cell.date(), |ui| {
            ui.add(
                egui::Button::new(text)
                    .selected(cell.current())
                    .min_size(CELL_SIZE),
            )
        })
        .inner;
    response.widget_info(|| {
        egui::WidgetInfo::selected(
            egui::WidgetType::Button,
            !cell.disabled(),
            cell.current(),
            &node.label,
        )
    });
    expose(ui.ctx(), response.id, &node, None);
    response.on_hover_text(node.label)
}
