use crate::error::{ExplorerError, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ADB: &str = "adb";
pub const ADB_PATH_ENV: &str = "ADB_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "ADB_Path", default = "default_adb_path")]
    pub adb_path: String,
    #[serde(rename = "Show_Hidden", default)]
    pub show_hidden: bool,
}

fn default_adb_path() -> String {
    DEFAULT_ADB.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adb_path: default_adb_path(),
            show_hidden: false,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        match Config::config_path() {
            Some(path) => Config::load_from_path(&path),
            None => {
                debug!("No config directory on this platform");
                Config::default()
            }
        }
    }

    pub fn load_from_path(config_path: &Path) -> Self {
        debug!("Loading config from: {:?}", config_path);

        let Ok(content) = fs::read_to_string(config_path) else {
            debug!("No config file found or unable to read it");
            return Config::default();
        };

        match serde_json::from_str(&content) {
            Ok(config) => {
                debug!("Parsed config: {:?}", config);
                config
            }
            Err(e) => {
                warn!("Ignoring unreadable config file {:?}: {}", config_path, e);
                Config::default()
            }
        }
    }

    /// Rewrite the config file with the session's hidden-files switch,
    /// creating it when missing.
    pub fn persist_show_hidden(show_hidden: bool) -> Result<()> {
        let path = Config::config_path().ok_or_else(|| {
            ExplorerError::Configuration("Could not find a config directory".to_string())
        })?;
        Config::persist_show_hidden_at(&path, show_hidden)
    }

    pub fn persist_show_hidden_at(config_path: &Path, show_hidden: bool) -> Result<()> {
        let mut config = Config::load_from_path(config_path);
        config.show_hidden = show_hidden;
        config.save_to_path(config_path)
    }

    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;
        debug!("Saved config to {:?}", config_path);
        Ok(())
    }

    /// `<config dir>/adbx/config.json`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("adbx").join("config.json"))
    }

    /// The adb binary to run: the command-line flag, then `ADB_PATH`, then
    /// the config file.
    pub fn resolve_adb_path(&self, flag: Option<&str>) -> String {
        let env = std::env::var(ADB_PATH_ENV).ok();
        pick_adb_path(flag, env.as_deref(), &self.adb_path)
    }
}

pub(crate) fn pick_adb_path(flag: Option<&str>, env: Option<&str>, configured: &str) -> String {
    let chosen = [flag, env, Some(configured)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|p| !p.is_empty())
        .unwrap_or(DEFAULT_ADB);
    shellexpand::tilde(chosen).into_owned()
}
