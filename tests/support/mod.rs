use assert_cmd::{cargo::cargo_bin_cmd, Command};
use csv::Writer;
use std::path::{Path, PathBuf};

/// Get a Command for marquee
pub fn marquee() -> Command {
    cargo_bin_cmd!("marquee")
}

/// One movie of the test dataset
pub struct Movie {
    pub id: u64,
    pub title: &'static str,
    pub overview: &'static str,
    pub genres: &'static [&'static str],
    pub cast: &'static [&'static str],
    pub director: &'static str,
}

fn named_list(names: &[&str]) -> String {
    let items: Vec<String> = names
        .iter()
        .map(|n| format!(r#"{{"id": 1, "name": "{n}"}}"#))
        .collect();
    format!("[{}]", items.join(", "))
}

/// Write `movies.csv` and `credits.csv` into `dir`
pub fn write_dataset(dir: &Path, movies: &[Movie]) -> (PathBuf, PathBuf) {
    let movies_path = dir.join("movies.csv");
    let credits_path = dir.join("credits.csv");

    let mut m = Writer::from_path(&movies_path).unwrap();
    m.write_record([
        "genres",
        "id",
        "keywords",
        "overview",
        "production_companies",
        "title",
    ])
    .unwrap();
    let mut c = Writer::from_path(&credits_path).unwrap();
    c.write_record(["movie_id", "title", "cast", "crew"]).unwrap();

    for movie in movies {
        let id = movie.id.to_string();
        let crew = format!(r#"[{{"job": "Director", "name": "{}"}}]"#, movie.director);
        m.write_record([
            named_list(movie.genres).as_str(),
            id.as_str(),
            "[]",
            movie.overview,
            "[]",
            movie.title,
        ])
        .unwrap();
        c.write_record([
            id.as_str(),
            movie.title,
            named_list(movie.cast).as_str(),
            crew.as_str(),
        ])
        .unwrap();
    }
    m.flush().unwrap();
    c.flush().unwrap();
    (movies_path, credits_path)
}

/// Small catalog with two obvious clusters (space action, romance)
pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "Avatar",
            overview: "A marine on an alien moon",
            genres: &["Action", "Science Fiction"],
            cast: &["Sam Worthington", "Sigourney Weaver"],
            director: "James Cameron",
        },
        Movie {
            id: 2,
            title: "Aliens",
            overview: "A marine squad fights alien creatures",
            genres: &["Action", "Science Fiction"],
            cast: &["Sigourney Weaver", "Michael Biehn"],
            director: "James Cameron",
        },
        Movie {
            id: 3,
            title: "Titanic",
            overview: "A love story aboard a doomed ship",
            genres: &["Drama", "Romance"],
            cast: &["Kate Winslet", "Leonardo DiCaprio"],
            director: "James Cameron",
        },
        Movie {
            id: 4,
            title: "The Notebook",
            overview: "A love story across decades",
            genres: &["Drama", "Romance"],
            cast: &["Rachel McAdams", "Ryan Gosling"],
            director: "Nick Cassavetes",
        },
    ]
}
