//! User interface layer.
//!
//! Splits into the retained rendering surface the controller writes to and
//! the drawing code that turns it into ANSI output.
//!
//! ```text
//! CatalogController ──▶ Renderer (TerminalSurface)
//!                                  │
//! AppState → compute_viewmodel → UIViewModel → draw::render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`renderer`]: the [`Renderer`] capability trait and its payload types
//! - [`surface`]: [`TerminalSurface`], the retained implementation
//! - [`viewmodel`]: view model types
//! - [`draw`]: frame entry point
//! - [`components`]: per-region component renderers
//! - [`helpers`]: text measurement and highlighting
//! - [`theme`]: palettes, day/night tokens and ANSI sequences

pub mod components;
pub mod draw;
pub mod helpers;
pub mod renderer;
pub mod surface;
pub mod theme;
pub mod viewmodel;

pub use draw::render;
pub use renderer::{
    DetailView, Panel, PaginationControl, PreviewItem, Region, Renderer, ShowMore, SurfaceSnapshot,
};
pub use surface::TerminalSurface;
pub use theme::{ColorTokens, Theme, ThemeSetting};
pub use viewmodel::UIViewModel;
