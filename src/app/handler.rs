//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for user input. It routes each
//! [`Event`] to the controller, the forms or the surface, and reports whether
//! a re-render is needed along with any host [`Action`]s.
//!
//! # Event Types
//!
//! - **List**: `KeyDown`, `KeyUp`, `SelectBook`, `ShowMore`
//! - **Search panel**: `OpenSearch`, `Char`, `Backspace`, `NextField`,
//!   `PrevField`, `PickerDown`, `PickerUp`, `SubmitSearch`, `CancelSearch`
//! - **Settings panel**: `OpenSettings`, `CycleTheme`, `SubmitSettings`,
//!   `CancelSettings`
//! - **Detail panel**: `CloseDetail`
//!
//! # Failures
//!
//! A controller or surface failure never aborts the plugin. The failing
//! operation is logged at error level with its name and dropped; the state it
//! would have changed is left as it was.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use zbooks::app::{handle_event, AppState, Event};
//! use zbooks::domain::Catalog;
//! use zbooks::ui::theme::Theme;
//!
//! let mut state = AppState::new(Catalog::default(), NonZeroUsize::MIN, Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::OpenSearch)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), zbooks::ZbooksError>(())
//! ```

use crate::app::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::FilterSpec;
use crate::ui::renderer::{Panel, Renderer};

/// User input, already mapped from keys by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the list cursor down (wraps to top).
    KeyDown,
    /// Moves the list cursor up (wraps to bottom).
    KeyUp,
    /// Opens the detail view for the book under the cursor.
    SelectBook,
    /// Appends the next page of results.
    ShowMore,
    /// Hides the plugin pane.
    CloseFocus,

    /// Opens the search overlay with the title field focused.
    OpenSearch,
    /// Closes the search overlay without searching.
    CancelSearch,
    /// Closes the search overlay and runs the search.
    SubmitSearch,
    NextField,
    PrevField,
    /// Types a character into the focused search field.
    Char(char),
    Backspace,
    /// Moves the focused picker's selection down.
    PickerDown,
    /// Moves the focused picker's selection up.
    PickerUp,

    /// Opens the settings overlay, synced to the applied color scheme.
    OpenSettings,
    CancelSettings,
    /// Closes the settings overlay and applies the chosen color scheme.
    SubmitSettings,
    /// Flips the day/night choice in the settings overlay.
    CycleTheme,

    /// Closes the detail view.
    CloseDetail,
}

/// Processes an event, mutates application state, and returns whether to
/// re-render plus the actions to execute.
///
/// # Errors
///
/// Currently infallible: operation failures are logged and swallowed so the
/// plugin keeps running. The `Result` is kept for the runtime's error path.
#[allow(clippy::too_many_lines, clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SelectBook => {
            let Some(id) = state.selected_item().map(|item| item.id.clone()) else {
                tracing::debug!("no book selected");
                return Ok((false, vec![]));
            };

            let result = state.controller.select(&id, &mut state.surface).map(|book| book.is_some());
            Ok((report("select", result).unwrap_or(false), vec![]))
        }
        Event::ShowMore => {
            let result = state.controller.show_next_page(&mut state.surface);
            Ok((report("show_next_page", result).is_some(), vec![]))
        }
        Event::OpenSearch => {
            state.search_form.open();
            let opened = report("open_panel", state.surface.open_panel(Panel::Search)).is_some();
            Ok((opened, vec![]))
        }
        Event::CancelSearch => {
            let closed = report("close_panel", state.surface.close_panel(Panel::Search)).is_some();
            Ok((closed, vec![]))
        }
        Event::SubmitSearch => {
            let spec = FilterSpec::from_form(&state.search_form.form_data());
            tracing::debug!(title = %spec.title, genre = %spec.genre, author = %spec.author, "search submitted");

            report("close_panel", state.surface.close_panel(Panel::Search));
            if report("start_search", state.controller.start_search(&spec, &mut state.surface)).is_some() {
                state.selected_index = 0;
            }
            Ok((true, vec![]))
        }
        Event::NextField => {
            state.search_form.next_field();
            Ok((true, vec![]))
        }
        Event::PrevField => {
            state.search_form.prev_field();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode(), InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.search_form.input(*c);
            tracing::trace!(char = %c, field = ?state.search_form.focus(), "search input");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode(), InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.search_form.backspace();
            Ok((true, vec![]))
        }
        Event::PickerDown => {
            state.search_form.picker_down();
            Ok((true, vec![]))
        }
        Event::PickerUp => {
            state.search_form.picker_up();
            Ok((true, vec![]))
        }
        Event::OpenSettings => {
            state.settings_form.open(state.controller.theme());
            let opened = report("open_panel", state.surface.open_panel(Panel::Settings)).is_some();
            Ok((opened, vec![]))
        }
        Event::CancelSettings => {
            let closed = report("close_panel", state.surface.close_panel(Panel::Settings)).is_some();
            Ok((closed, vec![]))
        }
        Event::SubmitSettings => {
            let form = state.settings_form.form_data();
            let value = form.get("theme").map_or("day", String::as_str);

            report("close_panel", state.surface.close_panel(Panel::Settings));
            report("apply_theme", state.controller.apply_theme(value, &mut state.surface));
            Ok((true, vec![]))
        }
        Event::CycleTheme => {
            state.settings_form.toggle();
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            let closed = report("close_panel", state.surface.close_panel(Panel::Detail)).is_some();
            Ok((closed, vec![]))
        }
    }
}

/// Logs a failed operation and drops its error.
fn report<T>(operation: &'static str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::error!(operation, error = %error, "operation failed");
            None
        }
    }
}
