use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::config::{NotizConfig, CONFIG_FILE};
use crate::error::{NotizError, Result};

/// Environment override for the notiz home directory.
pub const HOME_ENV: &str = "NOTIZ_HOME";

/// Everything the binary needs before it can open a store.
pub struct NotizContext {
    pub home: PathBuf,
    pub config: NotizConfig,
}

impl NotizContext {
    pub fn config_path(&self) -> PathBuf {
        self.home.join(CONFIG_FILE)
    }
}

/// The notiz home: `$NOTIZ_HOME` when set, otherwise the platform data
/// directory.
pub fn resolve_home() -> Result<PathBuf> {
    if let Ok(dir) = env::var(HOME_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    ProjectDirs::from("com", "notiz", "notiz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NotizError::App("Could not determine a home directory".to_string()))
}

/// Resolves the home directory, creates it if needed and loads the config.
pub fn initialize() -> Result<NotizContext> {
    let home = resolve_home()?;
    fs::create_dir_all(&home)?;
    let config = NotizConfig::load(&home.join(CONFIG_FILE));
    Ok(NotizContext { home, config })
}
