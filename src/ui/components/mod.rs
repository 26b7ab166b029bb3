//! Composable UI component renderers.
//!
//! Each component prints one part of the screen with ANSI escapes and
//! returns the next free row. All of them share a [`Frame`]: the palette, the
//! day/night tokens in effect and the pane width.
//!
//! # Components
//!
//! - [`header`]: title bar with match counts
//! - [`list`]: preview rows (title and author columns)
//! - [`pagination`]: "Show more (N)" button
//! - [`empty`]: "No results found" message
//! - [`search`], [`settings`], [`detail`]: overlays drawn over the list
//! - [`footer`]: keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Preview rows, or empty message]     ← overlays are boxed over this area
//! [Show more (N)]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod header;
mod list;
mod pagination;
mod search;
mod settings;

use crate::ui::helpers::{base_style, position_cursor, truncate};
use crate::ui::theme::{ColorTokens, Theme};
use crate::ui::viewmodel::{Overlay, UIViewModel};

/// Horizontal margin around overlay boxes.
const OVERLAY_MARGIN: usize = 4;

/// First row of the list area.
const BODY_TOP: usize = 4;

/// Shared drawing context for one frame.
pub struct Frame<'a> {
    pub theme: &'a Theme,
    pub tokens: ColorTokens,
    /// Escape sequence for body text over the background token.
    pub base: String,
    pub cols: usize,
}

impl<'a> Frame<'a> {
    #[must_use]
    pub fn new(theme: &'a Theme, tokens: ColorTokens, cols: usize) -> Self {
        Self {
            theme,
            tokens,
            base: base_style(tokens),
            cols,
        }
    }

    /// Resets attributes and restores the base style.
    fn restore(&self) -> String {
        format!("{}{}", Theme::reset(), self.base)
    }

    fn secondary(&self) -> String {
        Theme::fg_rgb(self.tokens.secondary())
    }

    fn border(&self) -> String {
        Theme::fg_rgb(self.tokens.border())
    }
}

/// Paints every row with the background token.
fn fill_background(frame: &Frame, rows: usize) {
    for row in 1..=rows {
        position_cursor(row, 1);
        print!("{}{}", frame.base, " ".repeat(frame.cols));
    }
}

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, frame: &Frame) -> usize {
    position_cursor(row, 1);
    print!("{}{}", frame.border(), "─".repeat(frame.cols));
    print!("{}", frame.restore());
    row + 1
}

/// Renders the whole screen for `vm`.
pub fn render_screen(vm: &UIViewModel, frame: &Frame, rows: usize) {
    fill_background(frame, rows);

    let mut current_row = 2;
    current_row = header::render_header(current_row, &vm.header, frame);
    current_row = render_border(current_row, frame);

    if let Some(empty) = &vm.empty_state {
        empty::render_empty_state(current_row + 2, empty, frame);
    } else {
        list::render_rows(current_row, &vm.display_items, frame);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let pagination_row = border_row.saturating_sub(1);

    pagination::render_button(pagination_row, &vm.pagination, frame);
    render_border(border_row, frame);
    footer::render_footer(footer_row, &vm.footer, frame);

    if let Some(overlay) = &vm.overlay {
        let max_row = pagination_row.saturating_sub(1);
        match overlay {
            Overlay::Search(search) => search::render_search_overlay(BODY_TOP, max_row, search, frame),
            Overlay::Settings(settings) => settings::render_settings_overlay(BODY_TOP, settings, frame),
            Overlay::Detail(detail) => detail::render_detail_overlay(BODY_TOP, max_row, detail, frame),
        };
    }
}

/// Inner width of an overlay box.
fn box_inner_width(frame: &Frame) -> usize {
    frame.cols.saturating_sub(OVERLAY_MARGIN * 2 + 2)
}

/// `┌─ Title ───┐`
fn box_top(row: usize, title: &str, frame: &Frame) -> usize {
    let inner = box_inner_width(frame);
    let title = truncate(title, inner.saturating_sub(4));
    let label = format!("─ {title} ");
    let fill = inner.saturating_sub(label.chars().count());

    position_cursor(row, OVERLAY_MARGIN + 1);
    print!("{}{}┌{label}{}┐", frame.base, Theme::fg(&frame.theme.colors.accent), "─".repeat(fill));
    print!("{}", frame.restore());
    row + 1
}

/// `└───────────┘`
fn box_bottom(row: usize, frame: &Frame) -> usize {
    position_cursor(row, OVERLAY_MARGIN + 1);
    print!("{}{}└{}┘", frame.base, Theme::fg(&frame.theme.colors.accent), "─".repeat(box_inner_width(frame)));
    print!("{}", frame.restore());
    row + 1
}

/// One boxed line. `content` prints the line body and returns how many
/// columns it used; the rest is padded.
fn box_row(row: usize, frame: &Frame, content: impl FnOnce(usize) -> usize) -> usize {
    let inner = box_inner_width(frame);
    let accent = Theme::fg(&frame.theme.colors.accent);

    position_cursor(row, OVERLAY_MARGIN + 1);
    print!("{}{accent}│{}", frame.base, frame.restore());
    let used = content(inner);
    print!("{}{}", frame.restore(), " ".repeat(inner.saturating_sub(used)));
    print!("{accent}│{}", frame.restore());
    row + 1
}

/// A boxed line of plain text in `style`.
fn box_text(row: usize, frame: &Frame, style: &str, text: &str) -> usize {
    box_row(row, frame, |inner| {
        let line = truncate(&format!(" {text}"), inner);
        print!("{style}{line}");
        line.chars().count()
    })
}
