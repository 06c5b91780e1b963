//! Movie catalog: typed records in a fixed row order

mod entities;
pub mod loader;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use entities::{parse_entities, Entity};
pub use loader::load_catalog;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Unique movie id
    pub id: u64,
    /// Display title, matched exactly by queries
    pub title: String,
    /// Free-text synopsis
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Vec<Entity>,
    #[serde(default)]
    pub keywords: Vec<Entity>,
    #[serde(default)]
    pub cast: Vec<Entity>,
    #[serde(default)]
    pub crew: Vec<Entity>,
    #[serde(default)]
    pub production_companies: Vec<Entity>,
}

impl MovieRecord {
    /// Create a record with no metadata
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        MovieRecord {
            id,
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }

    pub fn with_genres(mut self, names: &[&str]) -> Self {
        self.genres = names.iter().map(|n| Entity::named(*n)).collect();
        self
    }

    pub fn with_keywords(mut self, names: &[&str]) -> Self {
        self.keywords = names.iter().map(|n| Entity::named(*n)).collect();
        self
    }

    pub fn with_cast(mut self, names: &[&str]) -> Self {
        self.cast = names.iter().map(|n| Entity::named(*n)).collect();
        self
    }

    pub fn with_crew(mut self, crew: Vec<Entity>) -> Self {
        self.crew = crew;
        self
    }

    pub fn with_companies(mut self, names: &[&str]) -> Self {
        self.production_companies = names.iter().map(|n| Entity::named(*n)).collect();
        self
    }
}

/// Ordered, cleaned collection of movies.
///
/// Row `i` of every derived structure (tag documents, vectors, similarity
/// rows) refers to `movies()[i]`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    /// Build a catalog, dropping rows with a blank title and rows whose id
    /// repeats an earlier row (the first occurrence wins).
    pub fn new(records: Vec<MovieRecord>) -> Self {
        let total = records.len();
        let mut seen = HashSet::with_capacity(total);
        let movies: Vec<MovieRecord> = records
            .into_iter()
            .filter(|m| !m.title.trim().is_empty())
            .filter(|m| seen.insert(m.id))
            .collect();

        if movies.len() < total {
            tracing::debug!(
                dropped = total - movies.len(),
                kept = movies.len(),
                "catalog_clean"
            );
        }

        Catalog { movies }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.movies.get(index)
    }

    /// Row index of `title`, exact and case-sensitive.
    /// Repeated titles resolve to the earliest row.
    pub fn position(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.title == title)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.movies.iter()
    }
}

impl FromIterator<MovieRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = MovieRecord>>(iter: I) -> Self {
        Catalog::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_ids_keep_first() {
        let catalog = Catalog::new(vec![
            MovieRecord::new(1, "Avatar"),
            MovieRecord::new(2, "Titanic"),
            MovieRecord::new(1, "Avatar (duplicate)"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.movies()[0].title, "Avatar");
        assert_eq!(catalog.movies()[1].title, "Titanic");
    }

    #[test]
    fn test_blank_titles_dropped() {
        let catalog = Catalog::new(vec![
            MovieRecord::new(1, "  "),
            MovieRecord::new(2, "Titanic"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.position("Titanic"), Some(0));
    }

    #[test]
    fn test_position_is_case_sensitive() {
        let catalog: Catalog = vec![MovieRecord::new(1, "Avatar")].into_iter().collect();
        assert_eq!(catalog.position("Avatar"), Some(0));
        assert_eq!(catalog.position("avatar"), None);
        assert_eq!(catalog.position("Avatar "), None);
    }

    #[test]
    fn test_position_repeated_title_earliest_row() {
        let catalog = Catalog::new(vec![
            MovieRecord::new(10, "The Host"),
            MovieRecord::new(11, "The Host"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.position("The Host"), Some(0));
    }
}
