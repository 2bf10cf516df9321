use pagekit_core::{validate, PagerConfig};
use std::path::Path;

pub struct CliContext {
    pub config: PagerConfig,
    pub json: bool,
}

impl CliContext {
    /// Load the config from `path` when given; otherwise use the user config,
    /// falling back to defaults.
    pub fn load(path: Option<&Path>, json: bool) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => PagerConfig::load_from_path(path)?,
            None => PagerConfig::load(),
        };
        tracing::debug!(?config, "loaded config");
        Ok(Self { config, json })
    }

    /// Sibling count from the command line, else from config.
    pub fn sibling_count(&self, flag: Option<i64>) -> anyhow::Result<usize> {
        match flag {
            Some(value) => Ok(validate::count("siblings", value)?),
            None => Ok(self.config.sibling_count),
        }
    }

    pub fn ellipsis(&self) -> &str {
        self.config.effective_ellipsis_label()
    }
}
