//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default vocabulary bound for the count vectorizer
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Default number of titles returned per query
pub const DEFAULT_RECOMMEND_LIMIT: usize = 5;

/// Recommender configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Vectorizer configuration
    #[serde(default)]
    pub vectorizer: VectorizerConfig,

    /// Recommendation output configuration
    #[serde(default)]
    pub recommend: RecommendConfig,
}

/// Configuration for vocabulary construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Keep at most this many of the most frequent terms
    #[serde(default = "default_max_features")]
    pub max_features: usize,
}

/// Configuration for recommendation output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Titles returned per query
    #[serde(default = "default_recommend_limit")]
    pub limit: usize,
}

fn default_max_features() -> usize {
    DEFAULT_MAX_FEATURES
}

fn default_recommend_limit() -> usize {
    DEFAULT_RECOMMEND_LIMIT
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig {
            max_features: default_max_features(),
        }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        RecommendConfig {
            limit: default_recommend_limit(),
        }
    }
}
