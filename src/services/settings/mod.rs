mod mapper;
mod service;

pub use service::{default_config_path, ConfigError, SettingsService};
