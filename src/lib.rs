//! zbooks: a Zellij plugin for browsing a book catalog.
//!
//! zbooks shows a paginated preview list of books and lets the user narrow it
//! by title, genre and author, open a detail view for one book, and switch
//! between day and night color schemes.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling                                   │
//! │  - Catalog controller (search, pages, selection)    │
//! │  - Forms and view model computation                 │
//! └─────────────────────────────────────────────────────┘
//!         │                                  │
//! ┌───────────────────────┐   ┌───────────────────────┐
//! │ UI Layer (ui/)        │   │ Storage Layer         │
//! │ - Renderer trait      │   │ (storage/)            │
//! │ - Retained surface    │   │ - JSON dataset        │
//! │ - Components, themes  │   │ - Embedded fallback   │
//! └───────────────────────┘   └───────────────────────┘
//!         │                                  │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Book, Catalog, filter engine (domain/)           │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing + OpenTelemetry, file-based OTLP export  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zbooks.wasm" {
//!         page_size "36"
//!         catalog_file "~/books/catalog.json"
//!         theme "amber"
//!         color_scheme "night"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zbooks::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for event in [Event::ShowMore, Event::KeyDown, Event::SelectBook] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert!(state.surface.detail().is_some());
//! # Ok::<(), zbooks::ZbooksError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchField};
pub use domain::{Book, Catalog, FilterSpec, Result, ZbooksError};
pub use ui::{Theme, ThemeSetting};

use app::BOOKS_PER_PAGE;
use infrastructure::expand_tilde;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use storage::{CatalogSource, EmbeddedCatalog, JsonFileCatalog};

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone)]
pub struct Config {
    /// Books rendered per "Show more" step. Default: 36.
    pub page_size: NonZeroUsize,

    /// JSON dataset to browse. The compiled-in catalog is used when unset or
    /// unreadable. `~` expands to the sandbox host root.
    pub catalog_file: Option<String>,

    /// Built-in palette (`classic`, `amber`). Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML palette. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Initial day/night scheme.
    pub color_scheme: ThemeSetting,

    /// `EnvFilter` directive for trace export. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            catalog_file: None,
            theme_name: None,
            theme_file: None,
            color_scheme: ThemeSetting::Day,
            trace_level: None,
        }
    }
}

const fn default_page_size() -> NonZeroUsize {
    match NonZeroUsize::new(BOOKS_PER_PAGE) {
        Some(size) => size,
        None => NonZeroUsize::MIN,
    }
}

impl Config {
    /// Parses the plugin configuration map. Unparseable values fall back to
    /// their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zbooks::{Config, ThemeSetting};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "12".to_string());
    /// map.insert("color_scheme".to_string(), "night".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size.get(), 12);
    /// assert_eq!(config.color_scheme, ThemeSetting::Night);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let page_size = config
            .get("page_size")
            .map_or_else(|| Ok(default_page_size()), |s| parse_page_size(s))
            .unwrap_or_else(|error| {
                tracing::warn!(error = %error, "using default page size");
                default_page_size()
            });

        let color_scheme = config
            .get("color_scheme")
            .map_or(ThemeSetting::Day, |s| ThemeSetting::from_value(s.trim()));

        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            page_size,
            catalog_file: non_empty("catalog_file"),
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            color_scheme,
            trace_level: non_empty("trace_level"),
        }
    }
}

fn parse_page_size(value: &str) -> Result<NonZeroUsize> {
    value
        .trim()
        .parse::<NonZeroUsize>()
        .map_err(|e| ZbooksError::Config(format!("page_size {value:?}: {e}")))
}

/// Builds the plugin state and renders the first page.
///
/// Loading never fails: a missing or invalid dataset falls back to the
/// embedded catalog, and a bad theme falls back to the default palette. Both
/// are logged.
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let catalog = load_catalog(config);
    let theme = load_theme(config);

    let mut state = AppState::new(catalog, config.page_size, theme);
    if let Err(error) = state.boot(config.color_scheme) {
        tracing::error!(error = %error, "initial render failed");
    }

    tracing::debug!(
        books = state.controller.catalog().books().len(),
        page_size = config.page_size.get(),
        color_scheme = config.color_scheme.as_str(),
        "zbooks initialized"
    );
    state
}

fn load_catalog(config: &Config) -> Catalog {
    if let Some(file) = &config.catalog_file {
        let source = JsonFileCatalog::new(PathBuf::from(expand_tilde(file)));
        match load_from(&source) {
            Ok(catalog) => return catalog,
            Err(error) => {
                tracing::error!(source = %source.describe(), error = %error, "failed to load catalog, using embedded dataset");
            }
        }
    }

    load_from(&EmbeddedCatalog).unwrap_or_else(|error| {
        tracing::error!(error = %error, "embedded catalog is invalid");
        Catalog::default()
    })
}

fn load_from(source: &dyn CatalogSource) -> Result<Catalog> {
    let catalog = source.load()?;
    tracing::debug!(source = %source.describe(), books = catalog.books().len(), "catalog loaded");
    Ok(catalog)
}

fn load_theme(config: &Config) -> Theme {
    if let Some(file) = &config.theme_file {
        return Theme::from_file(expand_tilde(file)).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}
