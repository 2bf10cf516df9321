use crate::{PagerError, PagerResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SIBLING_COUNT: usize = 1;
pub const DEFAULT_ELLIPSIS_LABEL: &str = "…";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    #[serde(default = "default_sibling_count")]
    pub sibling_count: usize,
    #[serde(default)]
    pub items_per_page: Option<usize>,
    #[serde(default)]
    pub ellipsis_label: Option<String>,
}

fn default_sibling_count() -> usize {
    DEFAULT_SIBLING_COUNT
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            sibling_count: DEFAULT_SIBLING_COUNT,
            items_per_page: None,
            ellipsis_label: None,
        }
    }
}

impl PagerConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/pagekit/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("pagekit/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("pagekit\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from_path(&path).ok())
            .unwrap_or_default()
    }

    pub fn load_from_path(path: &Path) -> PagerResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PagerError::Config(format!("{}: {}", path.display(), e)))?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> PagerResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| PagerError::Config(e.to_string()))?;
        if config.items_per_page == Some(0) {
            return Err(PagerError::Config("items_per_page must be > 0".into()));
        }
        Ok(config)
    }

    pub fn effective_ellipsis_label(&self) -> &str {
        self.ellipsis_label
            .as_deref()
            .unwrap_or(DEFAULT_ELLIPSIS_LABEL)
    }
}
