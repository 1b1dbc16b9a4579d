use serde::Deserialize;

use crate::services::storage::settings_path;

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub review: ReviewSettings,
}

#[derive(Debug, Deserialize)]
pub struct ReviewSettings {
    /// Trim field values before the emptiness check, so whitespace-only
    /// input counts as empty. Set false for the legacy falsy-string check.
    #[serde(default = "default_trim_fields")]
    pub trim_fields: bool,
}

impl Default for ReviewSettings {
    fn default() -> Self {
        Self {
            trim_fields: default_trim_fields(),
        }
    }
}

fn default_trim_fields() -> bool {
    true
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let path = settings_path()?;
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
