//! Converter settings loaded from TOML.
//!
//! - `parse_settings_toml(toml)` parses and validates a settings document
//! - `Settings::default()` is the embedded `default_settings.toml`
//! - Settings are passed explicitly to the converter; there is no global copy

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub yivo: YivoSettings,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct YivoSettings {
    /// Consult the non-phonetic word table before the phonetic rules.
    pub use_nonphonetic: bool,
    silent_chars: Vec<String>,
    /// Parsed `silent_chars`.
    #[serde(skip)]
    silent_parsed: Vec<char>,
}

impl YivoSettings {
    /// Characters stripped from YIVO tokens before conversion.
    pub fn silent_chars(&self) -> &[char] {
        &self.silent_parsed
    }
}

impl Default for YivoSettings {
    fn default() -> Self {
        Settings::default().yivo
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.yivo.silent_parsed = parse_silent_chars(&s.yivo.silent_chars)?;
    Ok(s)
}

fn parse_silent_chars(raw: &[String]) -> Result<Vec<char>, SettingsError> {
    raw.iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(SettingsError::InvalidValue {
                    field: format!("yivo.silent_chars[{i}]"),
                    reason: format!("{entry:?} must be exactly one character"),
                }),
            }
        })
        .collect()
}
