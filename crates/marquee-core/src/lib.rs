//! Marquee Core Library
//!
//! Content-based movie recommendation: movie metadata is normalized into
//! per-movie tag documents, embedded as bag-of-words count vectors, and
//! compared with cosine similarity.

pub mod catalog;
pub mod config;
pub mod error;
pub mod features;
pub mod format;
pub mod logging;
pub mod pipeline;
pub mod recommend;
pub mod similarity;
pub mod tags;
pub mod text;
pub mod vectorize;

pub use catalog::{Catalog, Entity, MovieRecord};
pub use config::MarqueeConfig;
pub use error::{MarqueeError, Result};
pub use pipeline::{Corpus, Pipeline};
pub use recommend::{Recommendation, Recommender};
