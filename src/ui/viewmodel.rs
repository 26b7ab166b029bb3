//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) on every
//! frame and consumed by the drawing layer. They hold display-ready data
//! only: windowed list rows, highlight ranges, labels and the overlay to draw
//! on top, if any.

use crate::app::modes::SearchField;
use crate::ui::theme::{ColorTokens, ThemeSetting};

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Preview rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// "Show more (N)" button.
    pub pagination: PaginationInfo,

    /// Set when the last search matched nothing.
    pub empty_state: Option<EmptyState>,

    /// Panel drawn over the list.
    pub overlay: Option<Overlay>,

    /// Day/night token pair in effect.
    pub tokens: ColorTokens,
}

/// One preview row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub title: String,

    /// Author display name.
    pub author: String,

    pub is_selected: bool,

    /// Character ranges of the title matched by the title query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone)]
pub struct PaginationInfo {
    pub label: String,
    pub enabled: bool,
}

/// Empty result message.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Panel drawn on top of the list.
#[derive(Debug, Clone)]
pub enum Overlay {
    Search(SearchOverlay),
    Settings(SettingsOverlay),
    Detail(DetailOverlay),
}

/// Search form contents.
#[derive(Debug, Clone)]
pub struct SearchOverlay {
    pub title_query: String,
    pub focus: SearchField,
    pub genre: PickerInfo,
    pub author: PickerInfo,
}

/// One option picker of the search form.
#[derive(Debug, Clone)]
pub struct PickerInfo {
    pub label: &'static str,
    /// Narrowing query typed while the picker is focused.
    pub query: String,
    /// Display name of the selected option.
    pub selected_name: String,
    /// Windowed option list; empty unless the picker is focused.
    pub options: Vec<PickerOptionInfo>,
}

#[derive(Debug, Clone)]
pub struct PickerOptionInfo {
    pub name: String,
    pub is_selected: bool,
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, Copy)]
pub struct SettingsOverlay {
    pub choice: ThemeSetting,
}

/// Detail view contents, with the description already wrapped.
#[derive(Debug, Clone)]
pub struct DetailOverlay {
    pub title: String,
    pub subtitle: String,
    pub cover: String,
    pub description_lines: Vec<String>,
}
