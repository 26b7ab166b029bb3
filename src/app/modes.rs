//! Input mode types.
//!
//! The input mode decides which keybindings are active and which overlay is
//! drawn. It is derived from the surface's open panel rather than stored
//! separately, so the two can never disagree.
//!
//! # Example
//!
//! ```rust
//! use zbooks::app::modes::{InputMode, SearchField};
//!
//! let mode = InputMode::Search(SearchField::Title);
//! assert_eq!(SearchField::Title.next(), SearchField::Genre);
//! assert_ne!(mode, InputMode::Browse);
//! ```

/// Field focused inside the search overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    /// Free-text title query.
    #[default]
    Title,
    /// Genre picker.
    Genre,
    /// Author picker.
    Author,
}

impl SearchField {
    /// Next field in tab order, wrapping to the title.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Genre => Self::Author,
            Self::Author => Self::Title,
        }
    }

    /// Previous field in tab order, wrapping to the author.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Genre => Self::Title,
            Self::Author => Self::Genre,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// No panel open: list navigation, paging and panel shortcuts.
    ///
    /// Keybindings: j/k (move), Enter (details), m/Space (show more),
    /// / (search), s (settings), q (close plugin).
    Browse,

    /// Search overlay open with the given field focused.
    Search(SearchField),

    /// Settings overlay open.
    Settings,

    /// Detail view open over the list.
    Detail,
}
