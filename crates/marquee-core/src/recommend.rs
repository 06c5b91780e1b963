//! Top-N recommendation lookup over a built similarity matrix

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{MarqueeError, Result};
use crate::similarity::SimilarityMatrix;
use crate::tags::TagDocument;
use crate::vectorize::Vocabulary;

/// One recommended movie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// 1-based position in the result list
    pub rank: usize,
    /// Catalog row
    #[serde(skip)]
    pub index: usize,
    pub id: u64,
    pub title: String,
    /// Cosine similarity to the query movie
    pub score: f64,
}

/// Rank every row except `query` by descending similarity.
///
/// The sort is stable, so equal scores keep catalog order and the earlier
/// row wins the tie.
pub fn rank(similarity: &SimilarityMatrix, query: usize, limit: usize) -> Vec<(usize, f64)> {
    let mut scored: Vec<(usize, f64)> = similarity
        .row(query)
        .enumerate()
        .filter(|&(j, _)| j != query)
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(limit);
    scored
}

/// Recommend up to `limit` movies similar to `title`.
///
/// The title is matched exactly; an unknown title is a
/// [`MarqueeError::TitleNotFound`], never an empty list.
pub fn recommend(
    title: &str,
    catalog: &Catalog,
    similarity: &SimilarityMatrix,
    limit: usize,
) -> Result<Vec<Recommendation>> {
    if similarity.len() != catalog.len() {
        return Err(MarqueeError::Other(format!(
            "similarity matrix has {} rows but catalog has {}",
            similarity.len(),
            catalog.len()
        )));
    }

    let query = catalog
        .position(title)
        .ok_or_else(|| MarqueeError::title_not_found(title))?;

    let results = rank(similarity, query, limit)
        .into_iter()
        .enumerate()
        .filter_map(|(pos, (index, score))| {
            catalog.get(index).map(|movie| Recommendation {
                rank: pos + 1,
                index,
                id: movie.id,
                title: movie.title.clone(),
                score,
            })
        })
        .collect::<Vec<_>>();

    tracing::debug!(query = title, row = query, results = results.len(), "recommend");
    Ok(results)
}

/// A fully built recommender over one catalog
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    documents: Vec<TagDocument>,
    vocabulary: Vocabulary,
    similarity: SimilarityMatrix,
    limit: usize,
}

impl Recommender {
    pub fn new(
        catalog: Catalog,
        documents: Vec<TagDocument>,
        vocabulary: Vocabulary,
        similarity: SimilarityMatrix,
        limit: usize,
    ) -> Self {
        Recommender {
            catalog,
            documents,
            vocabulary,
            similarity,
            limit,
        }
    }

    /// Recommend the configured number of titles similar to `title`
    pub fn recommend(&self, title: &str) -> Result<Vec<Recommendation>> {
        self.recommend_n(title, self.limit)
    }

    pub fn recommend_n(&self, title: &str, limit: usize) -> Result<Vec<Recommendation>> {
        recommend(title, &self.catalog, &self.similarity, limit)
    }

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

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
