//! Recommender configuration
//!
//! Configuration is read from `marquee.toml`. Every field is optional and
//! falls back to the built-in defaults; CLI flags override file values.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{MarqueeError, Result};

pub use types::{
    MarqueeConfig, RecommendConfig, VectorizerConfig, DEFAULT_MAX_FEATURES,
    DEFAULT_RECOMMEND_LIMIT,
};

/// File name looked up by [`MarqueeConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "marquee.toml";

impl MarqueeConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| MarqueeError::io_operation("read config", path.display(), e))?;
        let config: MarqueeConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `marquee.toml` from `dir` if present, otherwise use defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "load_config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MarqueeError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply CLI overrides on top of the loaded values
    pub fn with_overrides(mut self, max_features: Option<usize>, limit: Option<usize>) -> Result<Self> {
        if let Some(max_features) = max_features {
            self.vectorizer.max_features = max_features;
        }
        if let Some(limit) = limit {
            self.recommend.limit = limit;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.vectorizer.max_features == 0 {
            crate::bail_invalid!("max_features", self.vectorizer.max_features);
        }
        if self.recommend.limit == 0 {
            crate::bail_invalid!("limit", self.recommend.limit);
        }
        Ok(())
    }
}
