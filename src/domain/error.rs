//! Error types for the zbooks plugin.
//!
//! This module defines the crate-wide error type [`ZbooksError`] and a
//! [`Result`] alias. Controller operations fail with
//! [`ZbooksError::RenderSurface`]. `Catalog` and `Io` come from dataset
//! loading, `Theme` from palette files, and `Config` from plugin options
//! that fall back to their defaults.

use thiserror::Error;

/// The main error type for zbooks operations.
///
/// # Examples
///
/// ```
/// use zbooks::ZbooksError;
///
/// let err = ZbooksError::RenderSurface("list");
/// assert_eq!(err.to_string(), "Rendering surface unavailable: list region is not mounted");
/// ```
#[derive(Debug, Error)]
pub enum ZbooksError {
    /// A region of the rendering surface was not mounted when an operation
    /// tried to write to it.
    ///
    /// The payload names the missing region. Operations failing with this
    /// error leave controller state and surface contents untouched.
    #[error("Rendering surface unavailable: {0} region is not mounted")]
    RenderSurface(&'static str),

    /// The book dataset is malformed or violates a catalog invariant
    /// (duplicate ids, popularity out of range).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zbooks operations.
pub type Result<T> = std::result::Result<T, ZbooksError>;
