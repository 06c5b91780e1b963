//! Bag-of-words vectorization of tag documents
//!
//! The vocabulary keeps the `max_features` most frequent non-stop-word terms
//! of the corpus. Ties on frequency are broken lexicographically, and the
//! kept terms are indexed in lexicographic order, so the same corpus always
//! produces the same columns.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use tracing::debug;

use crate::config::VectorizerConfig;
use crate::error::Result;
use crate::tags::TagDocument;
use crate::text::analyze;
use crate::{bail_empty, bail_invalid, trace_time};

/// Token-count vector with entries sorted by column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseVector {
    entries: Vec<(usize, u32)>,
}

impl SparseVector {
    /// Build from `(column, count)` pairs; zero counts are dropped and
    /// repeated columns are summed.
    pub fn from_counts(counts: impl IntoIterator<Item = (usize, u32)>) -> Self {
        let mut merged: BTreeMap<usize, u32> = BTreeMap::new();
        for (column, count) in counts {
            *merged.entry(column).or_insert(0) += count;
        }
        SparseVector {
            entries: merged.into_iter().filter(|&(_, c)| c > 0).collect(),
        }
    }

    pub fn entries(&self) -> &[(usize, u32)] {
        &self.entries
    }

    /// Count stored for `column` (0 when absent)
    pub fn get(&self, column: usize) -> u32 {
        self.entries
            .binary_search_by_key(&column, |&(c, _)| c)
            .map(|i| self.entries[i].1)
            .unwrap_or(0)
    }

    /// Number of nonzero columns
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, c)| f64::from(c) * f64::from(c))
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product by merging the two sorted entry lists
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ca, va) = self.entries[i];
            let (cb, vb) = other.entries[j];
            match ca.cmp(&cb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += f64::from(va) * f64::from(vb);
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Mapping from term to stable column index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    frequencies: Vec<u64>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from `(term, corpus frequency)` pairs already chosen for the
    /// vocabulary. Columns are assigned in lexicographic term order.
    fn from_selected(mut selected: Vec<(String, u64)>) -> Self {
        selected.sort_by(|a, b| a.0.cmp(&b.0));
        let index = selected
            .iter()
            .enumerate()
            .map(|(i, (term, _))| (term.clone(), i))
            .collect();
        let (terms, frequencies) = selected.into_iter().unzip();
        Vocabulary {
            terms,
            frequencies,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column of `term`
    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term at `column`
    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get(column).map(String::as_str)
    }

    /// All terms in column order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Corpus-wide count of the term at `column`
    pub fn frequency(&self, column: usize) -> Option<u64> {
        self.frequencies.get(column).copied()
    }

    /// The `n` most frequent terms, ties broken lexicographically
    pub fn most_frequent(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .terms
            .iter()
            .map(String::as_str)
            .zip(self.frequencies.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}

/// One count vector per document, rows in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VectorIndex {
    rows: Vec<SparseVector>,
    dim: usize,
}

impl VectorIndex {
    pub fn new(rows: Vec<SparseVector>, dim: usize) -> Self {
        VectorIndex { rows, dim }
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&SparseVector> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns (vocabulary size)
    pub fn dim(&self) -> usize {
        self.dim
    }
}

/// Count vectorizer bounded to the most frequent terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountVectorizer {
    max_features: usize,
}

impl CountVectorizer {
    pub fn new(max_features: usize) -> Result<Self> {
        if max_features == 0 {
            bail_invalid!("max_features", max_features);
        }
        Ok(CountVectorizer { max_features })
    }

    pub fn from_config(config: &VectorizerConfig) -> Result<Self> {
        Self::new(config.max_features)
    }

    pub fn max_features(&self) -> usize {
        self.max_features
    }

    /// Learn the vocabulary of `documents`
    pub fn fit(&self, documents: &[TagDocument]) -> Result<Vocabulary> {
        let start = Instant::now();
        if documents.is_empty() {
            bail_empty!("vectorize");
        }

        let mut counts: HashMap<String, u64> = HashMap::new();
        for doc in documents {
            for term in analyze(doc.as_str()) {
                *counts.entry(term).or_insert(0) += 1;
            }
        }

        if counts.is_empty() {
            bail_empty!("vocabulary");
        }

        let distinct = counts.len();
        let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        let vocabulary = Vocabulary::from_selected(ranked);
        debug!(
            documents = documents.len(),
            distinct_terms = distinct,
            kept = vocabulary.len(),
            "fit_vocabulary"
        );
        trace_time!(start, "fit_vocabulary");
        Ok(vocabulary)
    }

    /// Encode `documents` against an existing vocabulary. Terms outside the
    /// vocabulary are ignored; a document with none left is a zero row.
    pub fn transform(&self, vocabulary: &Vocabulary, documents: &[TagDocument]) -> VectorIndex {
        let rows = documents
            .iter()
            .map(|doc| {
                SparseVector::from_counts(
                    analyze(doc.as_str())
                        .iter()
                        .filter_map(|term| vocabulary.get(term))
                        .map(|column| (column, 1)),
                )
            })
            .collect::<Vec<_>>();

        let zero_rows = rows.iter().filter(|r| r.is_zero()).count();
        if zero_rows > 0 {
            debug!(zero_rows, "documents_without_vocabulary_terms");
        }

        VectorIndex::new(rows, vocabulary.len())
    }

    pub fn fit_transform(&self, documents: &[TagDocument]) -> Result<(Vocabulary, VectorIndex)> {
        let vocabulary = self.fit(documents)?;
        let index = self.transform(&vocabulary, documents);
        Ok((vocabulary, index))
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        CountVectorizer {
            max_features: crate::config::DEFAULT_MAX_FEATURES,
        }
    }
}

#[cfg(test)]
mod tests;
