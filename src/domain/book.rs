//! Book record.
//!
//! A `Book` is created once when the dataset is loaded and never mutated
//! afterwards. Author and genre fields hold opaque keys into the catalog's
//! lookup tables rather than display names.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Highest popularity score a book may carry.
pub const MAX_POPULARITY: u8 = 100;

/// A single book in the catalog.
///
/// Field names follow the dataset's JSON layout (`pages`, `published`); the
/// longer `pageCount` and `publishedDate` spellings are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Opaque identifier, unique within a catalog.
    pub id: String,
    pub title: String,
    /// Key into the catalog's author table.
    pub author: String,
    /// Keys into the catalog's genre table.
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Cover image URI.
    #[serde(default)]
    pub image: String,
    #[serde(alias = "publishedDate")]
    pub published: DateTime<Utc>,
    #[serde(alias = "pageCount", default)]
    pub pages: u32,
    /// Popularity score out of [`MAX_POPULARITY`].
    #[serde(default)]
    pub popularity: u8,
}

impl Book {
    /// Year the book was published, as shown in the detail subtitle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zbooks::domain::Book;
    /// let book: Book = serde_json::from_str(r#"{
    ///     "id": "b1", "title": "Dune", "author": "a1",
    ///     "published": "1965-08-01T00:00:00.000Z"
    /// }"#).unwrap();
    /// assert_eq!(book.published_year(), 1965);
    /// ```
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    /// Returns `true` if `genre` is one of the book's genre keys.
    #[must_use]
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}
