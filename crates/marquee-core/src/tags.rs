//! Tag documents: one stemmed, space-separated token string per movie

use std::fmt;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::features::NormalizedFields;
use crate::text::stem_document;

/// Normalized token sequence summarizing one movie
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagDocument(String);

impl TagDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Stem every token of this document
    pub fn stemmed(&self) -> TagDocument {
        TagDocument(stem_document(&self.0))
    }
}

impl From<&str> for TagDocument {
    fn from(s: &str) -> Self {
        TagDocument(s.to_string())
    }
}

impl fmt::Display for TagDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join the normalized fields into one unstemmed document
pub fn compose(fields: &NormalizedFields) -> TagDocument {
    TagDocument(fields.tokens().collect::<Vec<_>>().join(" "))
}

/// Normalize, compose and stem every movie, in catalog order
pub fn build_documents(catalog: &Catalog) -> Vec<TagDocument> {
    catalog
        .iter()
        .map(|movie| compose(&NormalizedFields::from_record(movie)).stemmed())
        .collect()
}
