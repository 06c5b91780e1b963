use std::path::PathBuf;

use clap::Args;

/// Locations of the two source datasets
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Movies CSV (id, title, overview, genres, keywords, production_companies)
    #[arg(long, env = "MARQUEE_MOVIES", default_value = "tmdb_5000_movies.csv")]
    pub movies: PathBuf,

    /// Credits CSV (movie_id, cast, crew)
    #[arg(long, env = "MARQUEE_CREDITS", default_value = "tmdb_5000_credits.csv")]
    pub credits: PathBuf,

    /// Vocabulary size bound (overrides config)
    #[arg(long)]
    pub max_features: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// Exact movie title to query
    pub title: String,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Number of titles to return (overrides config)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct TagsArgs {
    /// Exact movie title
    pub title: String,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

#[derive(Args, Debug, Clone)]
pub struct VocabArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Number of most frequent terms to list
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}
