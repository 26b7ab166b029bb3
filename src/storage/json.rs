//! JSON dataset sources.
//!
//! The dataset is a single JSON document:
//!
//! ```json
//! {
//!   "books": [
//!     {
//!       "id": "760b3450-9c6d-4de2-a6d5-8d5a0c1b0e61",
//!       "title": "The Left Hand of Darkness",
//!       "author": "le-guin",
//!       "genres": ["scifi", "classic"],
//!       "description": "...",
//!       "image": "https://example.org/covers/left-hand.jpg",
//!       "published": "1969-03-01T00:00:00.000Z",
//!       "pages": 304,
//!       "popularity": 81
//!     }
//!   ],
//!   "authors": { "le-guin": "Ursula K. Le Guin" },
//!   "genres": { "scifi": "Science Fiction", "classic": "Classics" }
//! }
//! ```

use crate::domain::error::{Result, ZbooksError};
use crate::domain::{Book, Catalog};
use crate::storage::backend::CatalogSource;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Dataset compiled into the plugin, used when no file is configured.
const EMBEDDED_DATASET: &str = include_str!("../../data/catalog.json");

/// On-disk dataset layout.
#[derive(Debug, Deserialize)]
struct Dataset {
    books: Vec<Book>,
    #[serde(default)]
    authors: BTreeMap<String, String>,
    #[serde(default)]
    genres: BTreeMap<String, String>,
}

/// Parses a dataset document and validates it into a [`Catalog`].
///
/// # Errors
///
/// Returns [`ZbooksError::Catalog`] on malformed JSON or invalid books.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let dataset: Dataset = serde_json::from_str(contents)
        .map_err(|e| ZbooksError::Catalog(format!("failed to parse dataset JSON: {e}")))?;

    tracing::debug!(
        books = dataset.books.len(),
        authors = dataset.authors.len(),
        genres = dataset.genres.len(),
        "dataset parsed"
    );

    Catalog::new(dataset.books, dataset.authors, dataset.genres)
}

/// Dataset read from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("json_load_catalog", path = ?self.path).entered();

        let contents = std::fs::read_to_string(&self.path)?;
        parse_catalog(&contents)
    }
}

/// Dataset bundled with the plugin binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn describe(&self) -> String {
        "embedded".to_string()
    }

    fn load(&self) -> Result<Catalog> {
        parse_catalog(EMBEDDED_DATASET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_dataset_is_valid() {
        let catalog = EmbeddedCatalog.load().unwrap();
        assert!(catalog.books().len() > 36);
        assert!(!catalog.authors().is_empty());
        assert!(!catalog.genres().is_empty());
    }

    #[test]
    fn loads_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "books": [{{
                    "id": "b1", "title": "Kindred", "author": "butler",
                    "genres": ["scifi"], "published": "1979-06-01T00:00:00.000Z",
                    "pages": 264, "popularity": 60
                }}],
                "authors": {{ "butler": "Octavia E. Butler" }}
            }}"#
        )
        .unwrap();

        let source = JsonFileCatalog::new(file.path().to_path_buf());
        let catalog = source.load().unwrap();

        assert_eq!(catalog.books().len(), 1);
        assert_eq!(catalog.author_name("butler"), "Octavia E. Butler");
        assert!(catalog.genres().is_empty());
        assert!(source.describe().starts_with("file:"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileCatalog::new(dir.path().join("nope.json"));
        assert!(matches!(source.load(), Err(ZbooksError::Io(_))));
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        assert!(matches!(parse_catalog("{ not json"), Err(ZbooksError::Catalog(_))));
    }
}
