//! Application state management and view model computation.
//!
//! [`AppState`] ties the catalog controller to the retained terminal surface
//! and the form state, and keeps the list cursor. It is the single source of
//! truth for everything the plugin draws.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns state into a [`UIViewModel`]: it windows the
//! rendered preview list around the selection, highlights title-query
//! matches, and builds whichever overlay the surface has open.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use zbooks::app::AppState;
//! use zbooks::storage::{CatalogSource, EmbeddedCatalog};
//! use zbooks::ui::theme::{Theme, ThemeSetting};
//!
//! let catalog = EmbeddedCatalog.load()?;
//! let mut state = AppState::new(catalog, NonZeroUsize::new(36).unwrap(), Theme::default());
//! state.boot(ThemeSetting::Day)?;
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.pagination.label, "Show more (12)");
//! # Ok::<(), zbooks::ZbooksError>(())
//! ```

use super::controller::CatalogController;
use super::forms::{OptionPicker, SearchForm, SettingsForm};
use super::modes::{InputMode, SearchField};
use crate::domain::error::Result;
use crate::domain::{Catalog, FilterSpec};
use crate::ui::helpers::{substring_ranges, title_column_width, truncate, wrap_text};
use crate::ui::renderer::{Panel, PreviewItem};
use crate::ui::surface::TerminalSurface;
use crate::ui::theme::{Theme, ThemeSetting};
use crate::ui::viewmodel::{
    DetailOverlay, DisplayItem, EmptyState, FooterInfo, HeaderInfo, Overlay, PaginationInfo,
    PickerInfo, PickerOptionInfo, SearchOverlay, SettingsOverlay, UIViewModel,
};
use std::num::NonZeroUsize;
use std::ops::Range;

/// Rows taken by header, separators, pagination button and footer.
const CHROME_ROWS: usize = 6;

/// Picker options shown at once in the search overlay.
const PICKER_ROWS: usize = 6;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Match set, pagination cursor and day/night setting.
    pub controller: CatalogController,

    /// Everything the controller has rendered, plus the open panel.
    pub surface: TerminalSurface,

    pub search_form: SearchForm,

    pub settings_form: SettingsForm,

    /// Zero-based index of the selected row within the rendered preview list.
    ///
    /// Reset to the top after every search. Wraps around during navigation.
    pub selected_index: usize,

    /// Accent and highlight palette.
    pub theme: Theme,
}

impl AppState {
    /// Creates state for `catalog` with nothing rendered yet.
    #[must_use]
    pub fn new(catalog: Catalog, page_size: NonZeroUsize, theme: Theme) -> Self {
        let search_form = SearchForm::new(&catalog);
        Self {
            controller: CatalogController::new(catalog, page_size),
            surface: TerminalSurface::mounted(),
            search_form,
            settings_form: SettingsForm::default(),
            selected_index: 0,
            theme,
        }
    }

    /// Applies the initial color scheme and renders the first page of the
    /// unfiltered catalog.
    ///
    /// # Errors
    ///
    /// Returns a render surface error if a required region is missing.
    pub fn boot(&mut self, scheme: ThemeSetting) -> Result<()> {
        self.controller.apply_theme(scheme.as_str(), &mut self.surface)?;
        self.controller.start_search(&FilterSpec::default(), &mut self.surface)?;
        self.selected_index = 0;
        Ok(())
    }

    /// Input mode derived from the open panel.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match self.surface.active_panel() {
            None => InputMode::Browse,
            Some(Panel::Search) => InputMode::Search(self.search_form.focus()),
            Some(Panel::Settings) => InputMode::Settings,
            Some(Panel::Detail) => InputMode::Detail,
        }
    }

    /// Moves the list cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.surface.items().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the list cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.surface.items().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// The preview under the list cursor, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&PreviewItem> {
        self.surface.items().get(self.selected_index)
    }

    /// Computes a renderable UI view model for a `rows` × `cols` pane.
    ///
    /// The list window is centered on the selection and pinned to the end of
    /// the list when the selection is near the bottom.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let items = self.surface.items();
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        let window = visible_window(self.selected_index, items.len(), available_rows);

        let query = self.controller.spec().title.as_str();
        let highlight = !query.trim().is_empty();
        let title_width = title_column_width(cols);

        let display_items = items[window.clone()]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                let title = truncate(&item.title, title_width);
                let highlight_ranges = if highlight { substring_ranges(&title, query) } else { vec![] };
                DisplayItem {
                    title,
                    author: item.author.clone(),
                    is_selected: window.start + relative_idx == self.selected_index,
                    highlight_ranges,
                }
            })
            .collect();

        let pagination = self.surface.pagination();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(window.start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            pagination: PaginationInfo {
                label: pagination.label.clone(),
                enabled: pagination.enabled,
            },
            empty_state: self.surface.is_empty_message_visible().then(|| EmptyState {
                message: "No results found. Your filters might be too narrow.".to_string(),
                subtitle: "Press / to change the search".to_string(),
            }),
            overlay: self.compute_overlay(cols),
            tokens: self.surface.tokens(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let scope = if self.controller.spec().is_unrestricted() { "" } else { ", filtered" };
        HeaderInfo {
            title: format!(
                " Book Connect ({} of {}{scope}) ",
                self.surface.items().len(),
                self.controller.matches().len()
            ),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode() {
            InputMode::Browse => {
                "j/k: navigate  Enter: details  m: show more  /: search  s: settings  q: quit"
            }
            InputMode::Search(SearchField::Title) => {
                "Type to filter titles  Tab: next field  Enter: search  Esc: cancel"
            }
            InputMode::Search(_) => {
                "Type to narrow  ↑/↓ or Ctrl+p/n: choose  Tab: next field  Enter: search  Esc: cancel"
            }
            InputMode::Settings => "←/→: day or night  Enter: save  Esc: cancel",
            InputMode::Detail => "Esc/Enter: close",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_overlay(&self, cols: usize) -> Option<Overlay> {
        match self.surface.active_panel()? {
            Panel::Search => {
                let focus = self.search_form.focus();
                Some(Overlay::Search(SearchOverlay {
                    title_query: self.search_form.title().to_string(),
                    focus,
                    genre: picker_info("Genre", self.search_form.genre(), focus == SearchField::Genre),
                    author: picker_info("Author", self.search_form.author(), focus == SearchField::Author),
                }))
            }
            Panel::Settings => Some(Overlay::Settings(SettingsOverlay {
                choice: self.settings_form.choice(),
            })),
            Panel::Detail => {
                let detail = self.surface.detail()?;
                let width = cols.saturating_sub(8).max(10);
                Some(Overlay::Detail(DetailOverlay {
                    title: detail.title.clone(),
                    subtitle: detail.subtitle.clone(),
                    cover: detail.cover.clone(),
                    description_lines: wrap_text(&detail.description, width),
                }))
            }
        }
    }
}

fn picker_info(label: &'static str, picker: &OptionPicker, focused: bool) -> PickerInfo {
    let options = if focused {
        let visible: Vec<_> = picker.visible_options().collect();
        let window = visible_window(picker.selected_index(), visible.len(), PICKER_ROWS);
        visible[window.clone()]
            .iter()
            .enumerate()
            .map(|(relative_idx, option)| PickerOptionInfo {
                name: option.name.clone(),
                is_selected: window.start + relative_idx == picker.selected_index(),
                highlight_ranges: picker.highlight_ranges(&option.name),
            })
            .collect()
    } else {
        vec![]
    };

    PickerInfo {
        label,
        query: picker.query().to_string(),
        selected_name: picker.selected().name.clone(),
        options,
    }
}

/// Window of `available` rows over `len` entries, centered on `selected`.
fn visible_window(selected: usize, len: usize, available: usize) -> Range<usize> {
    let mut visible_start = selected.saturating_sub(available / 2);
    let visible_end = (visible_start + available).min(len);

    let actual_count = visible_end.saturating_sub(visible_start);
    if actual_count < available && len >= available {
        visible_start = visible_end.saturating_sub(available);
    }

    visible_start.min(visible_end)..visible_end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{CatalogSource, EmbeddedCatalog};
    use crate::ui::renderer::Renderer;

    fn booted(page: usize) -> AppState {
        let catalog = EmbeddedCatalog.load().unwrap();
        let mut state = AppState::new(catalog, NonZeroUsize::new(page).unwrap(), Theme::default());
        state.boot(ThemeSetting::Day).unwrap();
        state
    }

    #[test]
    fn window_centers_then_pins_to_end() {
        assert_eq!(visible_window(0, 10, 4), 0..4);
        assert_eq!(visible_window(5, 10, 4), 3..7);
        assert_eq!(visible_window(9, 10, 4), 6..10);
        assert_eq!(visible_window(0, 2, 4), 0..2);
        assert_eq!(visible_window(0, 0, 4), 0..0);
    }

    #[test]
    fn boot_renders_first_page() {
        let state = booted(10);
        assert_eq!(state.surface.items().len(), 10);
        assert_eq!(state.input_mode(), InputMode::Browse);
        assert_eq!(state.selected_item().map(|i| i.id.as_str()), Some(state.controller.matches()[0].id.as_str()));
    }

    #[test]
    fn selection_wraps_over_rendered_items() {
        let mut state = booted(3);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn viewmodel_windows_the_list() {
        let mut state = booted(36);
        state.selected_index = 30;
        let vm = state.compute_viewmodel(16, 100);

        assert_eq!(vm.display_items.len(), 10);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert!(vm.overlay.is_none());
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.header.title, " Book Connect (36 of 48) ");
    }

    #[test]
    fn viewmodel_highlights_title_query() {
        let mut state = booted(36);
        let spec = FilterSpec { title: "the".to_string(), ..FilterSpec::default() };
        state.controller.start_search(&spec, &mut state.surface).unwrap();

        let vm = state.compute_viewmodel(40, 120);
        let shown = state.surface.items().len();
        let total = state.controller.matches().len();
        assert_eq!(vm.header.title, format!(" Book Connect ({shown} of {total}, filtered) "));
        assert!(!vm.display_items.is_empty());
        assert!(vm.display_items.iter().all(|item| !item.highlight_ranges.is_empty()));
    }

    #[test]
    fn viewmodel_reports_empty_results() {
        let mut state = booted(36);
        let spec = FilterSpec { title: "no such book anywhere".to_string(), ..FilterSpec::default() };
        state.controller.start_search(&spec, &mut state.surface).unwrap();

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_items.is_empty());
        assert!(vm.empty_state.is_some());
        assert!(!vm.pagination.enabled);
    }

    #[test]
    fn overlay_follows_open_panel() {
        let mut state = booted(36);
        state.surface.open_panel(Panel::Search).unwrap();
        state.search_form.next_field();
        assert_eq!(state.input_mode(), InputMode::Search(SearchField::Genre));

        let vm = state.compute_viewmodel(24, 80);
        let Some(Overlay::Search(search)) = vm.overlay else {
            panic!("expected search overlay");
        };
        assert_eq!(search.genre.selected_name, "All Genres");
        assert!(!search.genre.options.is_empty());
        assert!(search.author.options.is_empty());

        let id = state.controller.matches()[0].id.clone();
        state.controller.select(&id, &mut state.surface).unwrap();
        assert_eq!(state.input_mode(), InputMode::Detail);
        assert!(matches!(state.compute_viewmodel(24, 80).overlay, Some(Overlay::Detail(_))));
    }
}
