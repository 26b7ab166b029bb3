//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait so initialization can pick
//! a dataset location without caring how it is read.

use crate::domain::error::Result;
use crate::domain::Catalog;

/// Anything that can produce a validated [`Catalog`].
///
/// # Implementations
///
/// - [`JsonFileCatalog`](super::JsonFileCatalog): dataset file on disk
/// - [`EmbeddedCatalog`](super::EmbeddedCatalog): dataset compiled into the binary
///
/// # Examples
///
/// ```
/// use zbooks::storage::{CatalogSource, EmbeddedCatalog};
///
/// let catalog = EmbeddedCatalog.load()?;
/// assert!(!catalog.books().is_empty());
/// # Ok::<(), zbooks::ZbooksError>(())
/// ```
pub trait CatalogSource {
    /// Short label used in log output.
    fn describe(&self) -> String;

    /// Reads and validates the dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be read, is not valid JSON, or
    /// violates a catalog invariant.
    fn load(&self) -> Result<Catalog>;
}
