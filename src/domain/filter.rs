//! Catalog filter engine.
//!
//! [`filter`] is a pure function: the same books and the same [`FilterSpec`]
//! always produce the same result, in catalog order. There is no ranking and
//! no error case; an empty result is a valid answer.

use super::book::Book;
use std::collections::BTreeMap;

/// Wildcard value for the genre and author selectors.
pub const ANY: &str = "any";

/// A single search submission.
///
/// Built fresh from the search form every time it is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// Case-insensitive title substring; blank means "every title".
    pub title: String,
    /// Genre key, or [`ANY`].
    pub genre: String,
    /// Author key, or [`ANY`].
    pub author: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            title: String::new(),
            genre: ANY.to_string(),
            author: ANY.to_string(),
        }
    }
}

impl FilterSpec {
    /// Builds a spec from submitted form data.
    ///
    /// Reads the `title`, `genre` and `author` keys; a missing title is
    /// empty and a missing selector is [`ANY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zbooks::domain::{FilterSpec, ANY};
    ///
    /// let form = BTreeMap::from([("title".to_string(), "dune".to_string())]);
    /// let spec = FilterSpec::from_form(&form);
    /// assert_eq!(spec.title, "dune");
    /// assert_eq!(spec.genre, ANY);
    /// ```
    #[must_use]
    pub fn from_form(form: &BTreeMap<String, String>) -> Self {
        let field = |key: &str, fallback: &str| {
            form.get(key).cloned().unwrap_or_else(|| fallback.to_string())
        };

        Self {
            title: field("title", ""),
            genre: field("genre", ANY),
            author: field("author", ANY),
        }
    }

    /// Returns `true` if the spec matches every book.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.title.trim().is_empty() && self.genre == ANY && self.author == ANY
    }

    /// Applies all three predicates to one book.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        let title_match = self.title.trim().is_empty()
            || book.title.to_lowercase().contains(&self.title.to_lowercase());
        let author_match = self.author == ANY || book.author == self.author;
        let genre_match = self.genre == ANY || book.has_genre(&self.genre);

        title_match && author_match && genre_match
    }
}

/// Returns the books matching `spec`, preserving their relative order.
#[must_use]
pub fn filter(books: &[Book], spec: &FilterSpec) -> Vec<Book> {
    let _span = tracing::debug_span!("filter",
        total_books = books.len(),
        title_len = spec.title.len(),
        genre = %spec.genre,
        author = %spec.author
    )
    .entered();

    let matches: Vec<Book> = books.iter().filter(|book| spec.matches(book)).cloned().collect();

    tracing::debug!(match_count = matches.len(), "filter applied");
    matches
}
