use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const CONFIG_FILE: &str = "config.json";

/// User settings, stored as `config.json` in the notiz home directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotizConfig {
    /// Base URL that share links are built from.
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// Extra attempts when the very first shelf load fails.
    #[serde(default = "default_initial_load_retries")]
    pub initial_load_retries: u32,
}

fn default_share_base_url() -> String {
    "http://localhost:5173".to_string()
}

fn default_initial_load_retries() -> u32 {
    1
}

impl Default for NotizConfig {
    fn default() -> Self {
        Self {
            share_base_url: default_share_base_url(),
            initial_load_retries: default_initial_load_retries(),
        }
    }
}

impl NotizConfig {
    /// Loads the config from `path`. A missing or unreadable file yields
    /// the defaults.
    pub fn load(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
