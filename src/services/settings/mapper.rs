use crate::models::settings::PickerSettings;

use super::service::ConfigError;

pub fn toml_to_settings(text: &str) -> Result<PickerSettings, ConfigError> {
    let settings: PickerSettings = toml::from_str(text)?;
    settings.validate()?;
    Ok(settings)
}

pub fn settings_to_toml(settings: &PickerSettings) -> Result<String, ConfigError> {
    settings.validate()?;
    Ok(toml::to_string_pretty(settings)?)
}
