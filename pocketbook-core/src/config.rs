//! Configuration management
//!
//! Settings live in `settings.json` inside the app directory:
//! ```json
//! {
//!   "api": { "url": "https://...", "masterKey": "..." },
//!   "app": { "alwaysShowOnboarding": false }
//! }
//! ```
//! Unknown fields are preserved across saves.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default snapshot endpoint (a jsonbin.io bin)
const DEFAULT_API_URL: &str = "https://api.jsonbin.io/v3/b/6300e8a6a1610e6386073b96";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    api: ApiSettings,
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSettings {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    master_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    always_show_onboarding: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Pocketbook configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub master_key: String,
    pub always_show_onboarding: bool,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            master_key: String::new(),
            always_show_onboarding: false,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the app directory
    ///
    /// Environment overrides (useful for CI/testing):
    /// - `POCKETBOOK_API_URL`, `POCKETBOOK_MASTER_KEY`
    /// - `POCKETBOOK_ALWAYS_ONBOARDING` to force the onboarding flow
    pub fn load(pocketbook_dir: &Path) -> Result<Self> {
        let settings_path = pocketbook_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let api_url = std::env::var("POCKETBOOK_API_URL")
            .ok()
            .or_else(|| raw.api.url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let master_key = std::env::var("POCKETBOOK_MASTER_KEY")
            .ok()
            .or_else(|| raw.api.master_key.clone())
            .unwrap_or_default();

        let always_show_onboarding =
            match std::env::var("POCKETBOOK_ALWAYS_ONBOARDING").ok().as_deref() {
                Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
                Some("false" | "0" | "no" | "FALSE" | "NO") => false,
                _ => raw.app.always_show_onboarding,
            };

        Ok(Self {
            api_url,
            master_key,
            always_show_onboarding,
            _raw_settings: raw,
        })
    }

    /// Save config to the app directory
    /// Preserves settings this view doesn't manage
    pub fn save(&self, pocketbook_dir: &Path) -> Result<()> {
        let settings_path = pocketbook_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.api.url = Some(self.api_url.clone());
        settings.api.master_key = Some(self.master_key.clone());
        settings.app.always_show_onboarding = self.always_show_onboarding;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}
