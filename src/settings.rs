//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::converter::{mapping_from_pairs, ConvertError, RomanizationMethod};
use crate::trie::Trie;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

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
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub romaji: RomajiSettings,
    #[serde(default)]
    pub kana: KanaSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RomajiSettings {
    method: String,
    #[serde(default)]
    pub upcase_katakana: bool,
    #[serde(default)]
    mappings: BTreeMap<String, String>,
    #[serde(skip)]
    method_parsed: RomanizationMethod,
    #[serde(skip)]
    overlay: Option<Trie>,
}

impl RomajiSettings {
    pub fn method(&self) -> RomanizationMethod {
        self.method_parsed
    }

    /// Compiled `[romaji.mappings]`, or `None` when the table is empty.
    pub fn overlay(&self) -> Option<&Trie> {
        self.overlay.as_ref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KanaSettings {
    #[serde(default)]
    mappings: BTreeMap<String, String>,
    #[serde(skip)]
    overlay: Option<Trie>,
}

impl KanaSettings {
    /// Compiled `[kana.mappings]`, or `None` when the table is empty.
    pub fn overlay(&self) -> Option<&Trie> {
        self.overlay.as_ref()
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.romaji.method_parsed = s.romaji.method.parse().map_err(|e: ConvertError| {
        SettingsError::InvalidValue {
            field: "romaji.method".to_string(),
            reason: e.to_string(),
        }
    })?;
    s.romaji.overlay = parse_overlay("romaji.mappings", &s.romaji.mappings)?;
    s.kana.overlay = parse_overlay("kana.mappings", &s.kana.mappings)?;
    Ok(s)
}

fn parse_overlay(
    field: &str,
    raw: &BTreeMap<String, String>,
) -> Result<Option<Trie>, SettingsError> {
    if raw.is_empty() {
        return Ok(None);
    }
    mapping_from_pairs(raw)
        .map(Some)
        .map_err(|e| SettingsError::InvalidValue {
            field: field.to_string(),
            reason: e.to_string(),
        })
}
