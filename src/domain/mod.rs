//! Domain layer: books, the catalog and the filter engine.
//!
//! Nothing in here knows about Zellij or the terminal. The catalog is loaded
//! once and never mutated; the filter engine is a pure function over it.
//!
//! # Organization
//!
//! - [`book`]: the immutable book record
//! - [`catalog`]: books plus the author and genre lookup tables
//! - [`filter`]: filter criteria and the matching rule
//! - [`error`]: error types and result alias
//!
//! # Examples
//!
//! ```
//! use zbooks::domain::{filter, FilterSpec};
//! use zbooks::storage::{CatalogSource, EmbeddedCatalog};
//!
//! let catalog = EmbeddedCatalog.load()?;
//! let everything = filter(catalog.books(), &FilterSpec::default());
//! assert_eq!(everything.len(), catalog.books().len());
//! # Ok::<(), zbooks::ZbooksError>(())
//! ```

pub mod book;
pub mod catalog;
pub mod error;
pub mod filter;

pub use book::Book;
pub use catalog::Catalog;
pub use error::{Result, ZbooksError};
pub use filter::{filter, FilterSpec, ANY};
