//! Search overlay renderer.
//!
//! ```text
//! ┌─ Search ───────────────────────────┐
//! │ › Title:  the                      │
//! │   Genre:  All Genres               │
//! │   Author: All Authors  [tolk]      │
//! │       All Authors                  │
//! │     ▌ J.R.R. Tolkien               │
//! └────────────────────────────────────┘
//! ```

use super::{box_bottom, box_row, box_top, Frame};
use crate::app::modes::SearchField;
use crate::ui::helpers::{render_highlighted_text, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PickerInfo, SearchOverlay};

/// Width of the field label column, including the focus marker.
const LABEL_WIDTH: usize = 11;

/// Renders the search form box from `row`, never drawing past `max_row`.
pub fn render_search_overlay(row: usize, max_row: usize, search: &SearchOverlay, frame: &Frame) -> usize {
    let mut current_row = box_top(row, "Search", frame);

    current_row = render_field(
        current_row,
        "Title:",
        &format!("{}▏", search.title_query),
        None,
        search.focus == SearchField::Title,
        frame,
    );

    for (field, picker) in [(SearchField::Genre, &search.genre), (SearchField::Author, &search.author)] {
        let focused = search.focus == field;
        let label = format!("{}:", picker.label);
        let query = (focused && !picker.query.is_empty()).then_some(picker.query.as_str());
        current_row = render_field(current_row, &label, &picker.selected_name, query, focused, frame);
        current_row = render_options(current_row, max_row.saturating_sub(1), picker, frame);
    }

    box_bottom(current_row, frame)
}

fn render_field(
    row: usize,
    label: &str,
    value: &str,
    query: Option<&str>,
    focused: bool,
    frame: &Frame,
) -> usize {
    box_row(row, frame, |inner| {
        let marker = if focused { "›" } else { " " };
        let label = format!(" {marker} {label:<width$}", width = LABEL_WIDTH - 3);
        let suffix = query.map(|q| format!("  [{q}]")).unwrap_or_default();
        let value = truncate(value, inner.saturating_sub(LABEL_WIDTH + suffix.chars().count()));

        if focused {
            print!("{}{}", Theme::bold(), Theme::fg(&frame.theme.colors.accent));
        } else {
            print!("{}", frame.secondary());
        }
        print!("{label}");
        print!("{}", frame.restore());
        print!("{value}");
        print!("{}{suffix}", frame.secondary());

        label.chars().count() + value.chars().count() + suffix.chars().count()
    })
}

fn render_options(row: usize, max_row: usize, picker: &PickerInfo, frame: &Frame) -> usize {
    let colors = &frame.theme.colors;
    let mut current_row = row;

    for option in &picker.options {
        if current_row > max_row {
            break;
        }
        current_row = box_row(current_row, frame, |inner| {
            let name = truncate(&option.name, inner.saturating_sub(LABEL_WIDTH + 2));
            print!("{}", " ".repeat(LABEL_WIDTH - 4));
            if option.is_selected {
                print!("{}{}", Theme::fg(&colors.selection_fg), Theme::bg(&colors.selection_bg));
                print!("▌ {name}");
            } else {
                print!("  ");
                render_highlighted_text(&name, &option.highlight_ranges, frame.theme, &frame.restore());
            }
            LABEL_WIDTH - 4 + 2 + name.chars().count()
        });
    }
    current_row
}
