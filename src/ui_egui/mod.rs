mod accessibility;
mod app;
pub mod date_picker;
mod day_cell;
pub mod focus;

pub use app::{is_weekend, DatePickerApp};
pub use date_picker::DatePickerWidget;
