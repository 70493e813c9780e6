//! XDG Base Directory Support
//!
//! Resolves where studyrag looks for its configuration file on
//! Linux/Unix systems.

use std::env;
use std::path::PathBuf;

/// XDG directory structure for studyrag
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. STUDYRAG_CONFIG_DIR
    /// 2. XDG_CONFIG_HOME
    /// 3. XDG default (~/.config)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("STUDYRAG_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("studyrag");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("studyrag")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // Explicit override wins over the directory lookup
        if let Ok(file) = env::var("STUDYRAG_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Log the resolved XDG paths
    pub fn log_paths(&self) {
        tracing::debug!("XDG config dir: {:?}", self.config_dir);
        tracing::debug!("XDG config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
