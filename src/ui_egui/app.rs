//! Demo host: two independent pickers bound to their own text inputs.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Weekday};

use super::date_picker::DatePickerWidget;
use crate::models::calendar::CalendarDate;
use crate::models::settings::PickerSettings;
use crate::services::picker::{DatePicker, PickerOptions};

pub struct DatePickerApp {
    pickers: [(&'static str, DatePickerWidget); 2],
}

impl eframe::App for DatePickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Date picker");
                ui.add_space(8.0);

                for (label, widget) in &mut self.pickers {
                    ui.horizontal(|ui| {
                        ui.label(*label);
                        widget.show_input(ui);
                    });
                    let value = widget
                        .picker()
                        .value()
                        .map(|date| date.format("%A, %B %-d, %Y").to_string())
                        .unwrap_or_else(|| "No date selected".to_string());
                    ui.label(egui::RichText::new(value).weak());
                    widget.show_dialog(ui, Some(&is_weekend));
                    ui.add_space(16.0);
                }
            });
        });
    }
}

impl DatePickerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: PickerSettings) -> Result<Self> {
        let today = Local::now().date_naive();
        let first = build_widget("first", today, &settings)?;
        let second = build_widget("second", today, &settings)?;
        log::info!("Date picker demo ready ({})", today);

        Ok(Self {
            pickers: [("First date:", first), ("Second date:", second)],
        })
    }
}

fn build_widget(id: &str, today: CalendarDate, settings: &PickerSettings) -> Result<DatePickerWidget> {
    let options = PickerOptions {
        id: id.to_string(),
        settings: settings.clone(),
        today: Some(today),
    };
    let picker = DatePicker::new(Some(today), options)
        .with_context(|| format!("Failed to create date picker '{}'", id))?;
    Ok(DatePickerWidget::new(picker))
}

/// Weekends cannot be picked in the demo.
pub fn is_weekend(date: CalendarDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
