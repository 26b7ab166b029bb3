//! Storage layer: where the static catalog comes from.
//!
//! The catalog is read once at startup and never written back. Two sources
//! exist: a JSON file named in the plugin configuration, and a small dataset
//! compiled into the plugin binary.
//!
//! # Modules
//!
//! - `backend`: the [`CatalogSource`] trait
//! - `json`: JSON dataset parsing and the file/embedded sources

pub mod backend;
pub mod json;

pub use backend::CatalogSource;
pub use json::{EmbeddedCatalog, JsonFileCatalog};
