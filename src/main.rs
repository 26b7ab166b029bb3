//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the zbooks library and the Zellij plugin
//! system: it parses configuration, maps keys to library events, runs host
//! actions and forwards rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState` (which
//!    renders the first page of the full catalog)
//! 2. **Subscribe**: Register for `Key` events
//! 3. **Update**: Map keys for the current input mode, delegate to
//!    `handle_event`
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Browsing:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Open the selected book
//! - `m`/`Space`: Show more
//! - `/`: Search, `s`: Settings
//! - `q`: Close plugin
//!
//! Search panel:
//! - Type to edit the focused field
//! - `Tab`/`Shift+Tab`: Next/previous field
//! - `Down`/`Up`, `Ctrl+n`/`Ctrl+p`: Move the genre or author picker
//! - `Enter`: Search, `Esc`: Cancel
//!
//! Settings panel:
//! - `Left`/`Right`, `h`/`l`, `j`/`k`, `Tab`: Toggle day/night
//! - `Enter`: Apply, `Esc`: Cancel
//!
//! Detail panel:
//! - `Esc`/`Enter`/`q`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zbooks::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    app: zbooks::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zbooks::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zbooks::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            page_size = config.page_size.get(),
            catalog_file = ?config.catalog_file,
            theme = ?config.theme_name,
            "parsed configuration"
        );
        self.app = zbooks::initialize(&config);

        subscribe(&[EventType::Key]);
        tracing::debug!("plugin load complete");
    }

    /// Maps the event, delegates to `handle_event`, and executes resulting
    /// actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };

        let span = tracing::debug_span!("plugin_update_event", key = ?key.bare_key);
        let _guard = span.entered();

        let Some(our_event) = self.map_key_event(&key) else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zbooks::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard input to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
        let shift = key.has_modifiers(&[KeyModifier::Shift]);

        match self.app.input_mode() {
            InputMode::Browse => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('n') if ctrl => Event::KeyDown,
                BareKey::Char('p') if ctrl => Event::KeyUp,
                BareKey::Enter => Event::SelectBook,
                BareKey::Char('m' | ' ') => Event::ShowMore,
                BareKey::Char('/') => Event::OpenSearch,
                BareKey::Char('s') => Event::OpenSettings,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
            InputMode::Search(_) => Some(match key.bare_key {
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Esc => Event::CancelSearch,
                BareKey::Tab if shift => Event::PrevField,
                BareKey::Tab => Event::NextField,
                BareKey::Down => Event::PickerDown,
                BareKey::Up => Event::PickerUp,
                BareKey::Char('n') if ctrl => Event::PickerDown,
                BareKey::Char('p') if ctrl => Event::PickerUp,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if !ctrl => Event::Char(c),
                _ => return None,
            }),
            InputMode::Settings => Some(match key.bare_key {
                BareKey::Left
                | BareKey::Right
                | BareKey::Tab
                | BareKey::Char('h' | 'l' | 'j' | 'k') => Event::CycleTheme,
                BareKey::Enter => Event::SubmitSettings,
                BareKey::Esc => Event::CancelSettings,
                _ => return None,
            }),
            InputMode::Detail => match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseDetail),
                _ => None,
            },
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
