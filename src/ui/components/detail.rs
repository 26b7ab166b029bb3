//! Detail overlay renderer.
//!
//! Title in the box border, then the `Author (year)` subtitle, the wrapped
//! description and the cover image URI. Description lines that do not fit
//! above `max_row` are cut with an ellipsis line.

use super::{box_bottom, box_text, box_top, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailOverlay;

pub fn render_detail_overlay(row: usize, max_row: usize, detail: &DetailOverlay, frame: &Frame) -> usize {
    let mut current_row = box_top(row, &detail.title, frame);
    let title_style = format!("{}{}", Theme::bold(), Theme::fg_rgb(frame.tokens.title()));

    current_row = box_text(current_row, frame, &title_style, &detail.subtitle);
    current_row = box_text(current_row, frame, &frame.base, "");

    // Leave room for the blank line, the cover line and the bottom border.
    let last_text_row = max_row.saturating_sub(3);
    for (index, line) in detail.description_lines.iter().enumerate() {
        let remaining = detail.description_lines.len() - index;
        if current_row >= last_text_row && remaining > 1 {
            current_row = box_text(current_row, frame, &frame.base, "...");
            break;
        }
        current_row = box_text(current_row, frame, &frame.base, line);
    }

    current_row = box_text(current_row, frame, &frame.base, "");
    current_row = box_text(current_row, frame, &frame.secondary(), &format!("Cover: {}", detail.cover));
    box_bottom(current_row, frame)
}
