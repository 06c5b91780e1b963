//! CSV ingestion for TMDB-shaped movie and credit datasets
//!
//! The movies file supplies `id`, `title`, `overview`, `genres`, `keywords`
//! and `production_companies`; the credits file supplies `movie_id`, `cast`
//! and `crew`. Other columns are ignored. Credits are joined onto movies by
//! id and the movies-file row order is kept.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use super::entities::{parse_entities, Entity};
use super::{Catalog, MovieRecord};
use crate::error::{MarqueeError, Result};
use crate::trace_time;

/// Cast and crew of one movie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credits {
    pub cast: Vec<Entity>,
    pub crew: Vec<Entity>,
}

/// Load both datasets and join them into a cleaned catalog
pub fn load_catalog(movies_path: &Path, credits_path: &Path) -> Result<Catalog> {
    let start = Instant::now();

    let movies = read_movies(movies_path)?;
    let mut credits = read_credits(credits_path)?;

    let mut unmatched = 0usize;
    let joined: Vec<MovieRecord> = movies
        .into_iter()
        .map(|mut movie| {
            match credits.remove(&movie.id) {
                Some(c) => {
                    movie.cast = c.cast;
                    movie.crew = c.crew;
                }
                None => unmatched += 1,
            }
            movie
        })
        .collect();

    if unmatched > 0 {
        debug!(unmatched, "movies_without_credits");
    }

    let catalog = Catalog::new(joined);
    trace_time!(start, "load_catalog", rows = catalog.len());
    Ok(catalog)
}

/// Read the movies dataset from a file
pub fn read_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let file = std::fs::File::open(path)
        .map_err(|e| MarqueeError::io_operation("open movies file", path.display(), e))?;
    read_movies_from(file, path)
}

/// Read the credits dataset from a file, keyed by movie id
pub fn read_credits(path: &Path) -> Result<HashMap<u64, Credits>> {
    let file = std::fs::File::open(path)
        .map_err(|e| MarqueeError::io_operation("open credits file", path.display(), e))?;
    read_credits_from(file, path)
}

/// Read movies from any reader; `source` is only used in diagnostics
pub fn read_movies_from<R: Read>(reader: R, source: &Path) -> Result<Vec<MovieRecord>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();

    let id_col = required_column(&headers, "id", source)?;
    let title_col = required_column(&headers, "title", source)?;
    let overview_col = optional_column(&headers, "overview");
    let genres_col = optional_column(&headers, "genres");
    let keywords_col = optional_column(&headers, "keywords");
    let companies_col = optional_column(&headers, "production_companies");

    let mut movies = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let Some(id) = parse_id(&record, id_col, row, source) else {
            continue;
        };

        let overview = cell(&record, overview_col).trim();
        movies.push(MovieRecord {
            id,
            title: cell(&record, Some(title_col)).to_string(),
            overview: (!overview.is_empty()).then(|| overview.to_string()),
            genres: parse_entities(cell(&record, genres_col)),
            keywords: parse_entities(cell(&record, keywords_col)),
            cast: Vec::new(),
            crew: Vec::new(),
            production_companies: parse_entities(cell(&record, companies_col)),
        });
    }

    debug!(source = %source.display(), rows = movies.len(), "read_movies");
    Ok(movies)
}

/// Read credits from any reader; `source` is only used in diagnostics.
/// A repeated movie id keeps its first row.
pub fn read_credits_from<R: Read>(reader: R, source: &Path) -> Result<HashMap<u64, Credits>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();

    let id_col = required_column(&headers, "movie_id", source)?;
    let cast_col = optional_column(&headers, "cast");
    let crew_col = optional_column(&headers, "crew");

    let mut credits = HashMap::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let Some(id) = parse_id(&record, id_col, row, source) else {
            continue;
        };
        credits.entry(id).or_insert_with(|| Credits {
            cast: parse_entities(cell(&record, cast_col)),
            crew: parse_entities(cell(&record, crew_col)),
        });
    }

    debug!(source = %source.display(), rows = credits.len(), "read_credits");
    Ok(credits)
}

fn required_column(headers: &StringRecord, name: &str, source: &Path) -> Result<usize> {
    optional_column(headers, name).ok_or_else(|| MarqueeError::MissingColumn {
        path: source.to_path_buf(),
        column: name.to_string(),
    })
}

fn optional_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn cell(record: &StringRecord, column: Option<usize>) -> &str {
    column.and_then(|c| record.get(c)).unwrap_or("")
}

fn parse_id(record: &StringRecord, column: usize, row: usize, source: &Path) -> Option<u64> {
    let raw = cell(record, Some(column)).trim();
    match raw.parse::<u64>() {
        Ok(id) => Some(id),
        Err(_) => {
            warn!(source = %source.display(), row, value = raw, "skipping row with invalid id");
            None
        }
    }
}
