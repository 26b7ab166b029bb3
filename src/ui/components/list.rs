//! Preview list renderer.
//!
//! Each preview is one row: the title (80 % strength, query matches
//! highlighted) in a fixed-width column, then the author name in secondary
//! text. The selected row is drawn in the palette's selection colors across
//! the full width.

use super::Frame;
use crate::ui::helpers::{pad, position_cursor, render_highlighted_text, title_column_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders `items` from `row` downwards and returns the next free row.
pub fn render_rows(row: usize, items: &[DisplayItem], frame: &Frame) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_row(current_row, item, frame);
    }
    current_row
}

fn render_row(row: usize, item: &DisplayItem, frame: &Frame) -> usize {
    let title_width = title_column_width(frame.cols);
    let author_width = frame.cols.saturating_sub(title_width + 4);
    let colors = &frame.theme.colors;

    let (title_style, author_style) = if item.is_selected {
        let selected = format!("{}{}", Theme::fg(&colors.selection_fg), Theme::bg(&colors.selection_bg));
        (selected.clone(), selected)
    } else {
        (Theme::fg_rgb(frame.tokens.title()), frame.secondary())
    };

    position_cursor(row, 1);
    print!("{title_style}");
    print!("{}", if item.is_selected { "▌ " } else { "  " });

    if item.is_selected {
        print!("{}", item.title);
    } else {
        let restore = format!("{}{title_style}", frame.restore());
        render_highlighted_text(&item.title, &item.highlight_ranges, frame.theme, &restore);
    }
    print!("{}", " ".repeat(title_width.saturating_sub(item.title.chars().count()) + 2));

    print!("{author_style}");
    print!("{}", pad(&truncate(&item.author, author_width), author_width));
    print!("{}", frame.restore());
    row + 1
}
