//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain and UI layers.
//!
//! # Architecture
//!
//! ```text
//! Key → Event → handle_event → CatalogController ──▶ Renderer (TerminalSurface)
//!                    │                                        │
//!                    └── forms / list cursor                  ▼
//!                                               compute_viewmodel → draw
//! ```
//!
//! # Modules
//!
//! - [`actions`]: host side effects emitted by the event handler
//! - [`controller`]: match set, pagination cursor, selection and theme
//! - [`forms`]: search and settings form state
//! - [`handler`]: event processing
//! - [`modes`]: input mode types
//! - [`state`]: central state container and view model computation

pub mod actions;
pub mod controller;
pub mod forms;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use controller::{CatalogController, BOOKS_PER_PAGE};
pub use forms::{OptionPicker, SearchForm, SettingsForm};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchField};
pub use state::AppState;
