//! The static catalog: books plus author and genre lookup tables.
//!
//! A `Catalog` is validated on construction and immutable afterwards. It is
//! the single source the filter engine and the selection lookup read from.

use super::book::{Book, MAX_POPULARITY};
use super::error::{Result, ZbooksError};
use std::collections::{BTreeMap, HashSet};

/// Immutable collection of books with their author and genre tables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    books: Vec<Book>,
    authors: BTreeMap<String, String>,
    genres: BTreeMap<String, String>,
}

impl Catalog {
    /// Builds a catalog, validating the book list.
    ///
    /// Book order is preserved; it is the order every search result comes
    /// back in.
    ///
    /// # Errors
    ///
    /// Returns [`ZbooksError::Catalog`] if two books share an id or a book's
    /// popularity exceeds 100. Author and genre keys that are missing from
    /// the tables are allowed; they display literally.
    pub fn new(
        books: Vec<Book>,
        authors: BTreeMap<String, String>,
        genres: BTreeMap<String, String>,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(ZbooksError::Catalog(format!("duplicate book id: {}", book.id)));
            }
            if book.popularity > MAX_POPULARITY {
                return Err(ZbooksError::Catalog(format!(
                    "book {} has popularity {} (max {MAX_POPULARITY})",
                    book.id, book.popularity
                )));
            }
        }

        tracing::debug!(
            books = books.len(),
            authors = authors.len(),
            genres = genres.len(),
            "catalog built"
        );

        Ok(Self { books, authors, genres })
    }

    /// All books, in catalog order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub const fn authors(&self) -> &BTreeMap<String, String> {
        &self.authors
    }

    #[must_use]
    pub const fn genres(&self) -> &BTreeMap<String, String> {
        &self.genres
    }

    /// Looks a book up by id across the whole catalog.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Resolves an author key to its display name.
    ///
    /// Unknown keys are returned unchanged so a broken reference still shows
    /// something instead of failing the render.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zbooks::domain::Catalog;
    ///
    /// let authors = BTreeMap::from([("a1".to_string(), "Ursula K. Le Guin".to_string())]);
    /// let catalog = Catalog::new(vec![], authors, BTreeMap::new())?;
    /// assert_eq!(catalog.author_name("a1"), "Ursula K. Le Guin");
    /// assert_eq!(catalog.author_name("missing"), "missing");
    /// # Ok::<(), zbooks::ZbooksError>(())
    /// ```
    #[must_use]
    pub fn author_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.authors.get(key).map_or(key, String::as_str)
    }
}
