//! # Seed Catalog
//!
//! Loads the starting list of movies from a JSON array on disk. The file is
//! only ever read: movies added during a run live in memory.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};

use crate::core::movie::Movie;

#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Read a JSON array of movies from `path`.
pub fn load_catalog(path: &Path) -> Result<Vec<Movie>, CatalogError> {
    let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
    let movies: Vec<Movie> = serde_json::from_str(&contents).map_err(CatalogError::Parse)?;

    let unique = count_unique_ids(&movies);
    if unique != movies.len() {
        warn!(
            "Catalog {} has {} entries sharing an imdbId",
            path.display(),
            movies.len() - unique
        );
    }

    info!("Loaded {} movies from {}", movies.len(), path.display());
    Ok(movies)
}

/// Load the configured catalog, or start empty when none is configured.
pub fn load_or_empty(path: Option<&Path>) -> Result<Vec<Movie>, CatalogError> {
    match path {
        Some(p) => load_catalog(p),
        None => {
            info!("No catalog configured, starting with an empty list");
            Ok(Vec::new())
        }
    }
}

fn count_unique_ids(movies: &[Movie]) -> usize {
    let mut ids: Vec<&str> = movies.iter().map(Movie::imdb_id).collect();
    ids.sort_unstable();
    ids.dedup();
    ids.len()
}
