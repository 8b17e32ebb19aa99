// Module exports for models

pub mod accessibility;
pub mod calendar;
pub mod day_cell;
pub mod settings;
