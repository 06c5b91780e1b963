//! Batch pipeline: catalog -> tag documents -> vectors -> similarity
//!
//! Every stage consumes the whole output of the previous one and returns a
//! new collection; nothing is mutated in place and nothing outlives the
//! returned [`Recommender`]. [`Pipeline::vectorize`] stops before the
//! similarity stage for callers that only inspect documents or terms.

use std::time::Instant;

use tracing::debug;

use crate::catalog::Catalog;
use crate::config::MarqueeConfig;
use crate::error::{MarqueeError, Result};
use crate::recommend::Recommender;
use crate::similarity::SimilarityMatrix;
use crate::tags::{build_documents, TagDocument};
use crate::vectorize::{CountVectorizer, VectorIndex, Vocabulary};
use crate::{bail_empty, trace_time};

/// Recommender builder configured once, run over a full catalog
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: MarqueeConfig,
}

impl Pipeline {
    pub fn new(config: MarqueeConfig) -> Self {
        Pipeline { config }
    }

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// Run every stage over `catalog`.
    ///
    /// An empty catalog, or one whose documents share no vocabulary term,
    /// aborts with [`MarqueeError::EmptyCorpus`] naming the stage that ran
    /// dry.
    #[tracing::instrument(skip(self, catalog), fields(rows = catalog.len()))]
    pub fn build(&self, catalog: Catalog) -> Result<Recommender> {
        let start = Instant::now();
        let corpus = self.vectorize(catalog)?;
        let similarity = SimilarityMatrix::compute(&corpus.index);
        trace_time!(start, "pipeline_build");

        Ok(Recommender::new(
            corpus.catalog,
            corpus.documents,
            corpus.vocabulary,
            similarity,
            self.config.recommend.limit,
        ))
    }

    /// Run the stages up to and including the vectorizer.
    ///
    /// Fails the same way as [`Pipeline::build`]; the similarity matrix is
    /// never computed.
    #[tracing::instrument(skip(self, catalog), fields(rows = catalog.len()))]
    pub fn vectorize(&self, catalog: Catalog) -> Result<Corpus> {
        self.config.validate()?;
        if catalog.is_empty() {
            bail_empty!("catalog");
        }

        let start = Instant::now();
        let documents = build_documents(&catalog);
        let empty_docs = documents.iter().filter(|d| d.is_empty()).count();
        debug!(documents = documents.len(), empty_docs, "tag_documents");
        trace_time!(start, "tag_documents");

        let vectorizer = CountVectorizer::from_config(&self.config.vectorizer)?;
        let (vocabulary, index) = vectorizer.fit_transform(&documents)?;

        Ok(Corpus {
            catalog,
            documents,
            vocabulary,
            index,
        })
    }
}

/// Catalog with its tag documents and count vectors, before similarity
#[derive(Debug, Clone)]
pub struct Corpus {
    catalog: Catalog,
    documents: Vec<TagDocument>,
    vocabulary: Vocabulary,
    index: VectorIndex,
}

impl Corpus {
    /// Tag document of `title`
    pub fn document(&self, title: &str) -> Result<&TagDocument> {
        self.catalog
            .position(title)
            .and_then(|i| self.documents.get(i))
            .ok_or_else(|| MarqueeError::title_not_found(title))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn documents(&self) -> &[TagDocument] {
        &self.documents
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn index(&self) -> &VectorIndex {
        &self.index
    }
}
