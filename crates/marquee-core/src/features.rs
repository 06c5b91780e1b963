//! Field normalization: turn each movie's nested metadata into plain token
//! lists ready for tag composition

use crate::catalog::{Entity, MovieRecord};
use crate::text::{collapse_spaces, split_words};

/// Cast members and production companies kept per movie
pub const TOP_BILLED: usize = 3;

/// Crew job that identifies the director (exact, case-sensitive)
pub const DIRECTOR_JOB: &str = "Director";

/// Every entity name, in source order
pub fn names(entities: &[Entity]) -> Vec<String> {
    entities.iter().map(|e| e.name.clone()).collect()
}

/// The first `limit` entity names, in source order
pub fn top_names(entities: &[Entity], limit: usize) -> Vec<String> {
    entities.iter().take(limit).map(|e| e.name.clone()).collect()
}

/// The first crew member whose job is exactly "Director", if any
pub fn director(crew: &[Entity]) -> Vec<String> {
    crew.iter()
        .find(|e| e.job.as_deref() == Some(DIRECTOR_JOB))
        .map(|e| vec![e.name.clone()])
        .unwrap_or_default()
}

/// Per-field tokens of one movie, before composition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedFields {
    pub overview: Vec<String>,
    pub genres: Vec<String>,
    pub keywords: Vec<String>,
    pub cast: Vec<String>,
    pub crew: Vec<String>,
    pub production_companies: Vec<String>,
}

impl NormalizedFields {
    /// Apply the per-field selection policies and collapse multi-word names
    pub fn from_record(movie: &MovieRecord) -> Self {
        let collapse = |tokens: Vec<String>| -> Vec<String> {
            tokens.iter().map(|t| collapse_spaces(t)).collect()
        };

        NormalizedFields {
            overview: split_words(movie.overview.as_deref()),
            genres: collapse(names(&movie.genres)),
            keywords: collapse(names(&movie.keywords)),
            cast: collapse(top_names(&movie.cast, TOP_BILLED)),
            crew: collapse(director(&movie.crew)),
            production_companies: collapse(top_names(&movie.production_companies, TOP_BILLED)),
        }
    }

    /// All tokens in composition order: overview, genres, keywords, cast,
    /// crew, production companies
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.overview
            .iter()
            .chain(&self.genres)
            .chain(&self.keywords)
            .chain(&self.cast)
            .chain(&self.crew)
            .chain(&self.production_companies)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }
}
