// Service module exports

pub mod focus_trap;
pub mod grid;
pub mod navigation;
pub mod picker;
pub mod settings;
pub mod sync;
