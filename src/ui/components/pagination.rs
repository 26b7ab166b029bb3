//! "Show more" button renderer.

use super::Frame;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders the button centered at `row`. A disabled button is drawn in the
/// border color.
pub fn render_button(row: usize, pagination: &PaginationInfo, frame: &Frame) -> usize {
    let label = format!("[ {} ]", pagination.label);
    let padding = frame.cols.saturating_sub(label.chars().count()) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    if pagination.enabled {
        print!("{}{}", Theme::bold(), Theme::fg(&frame.theme.colors.accent));
    } else {
        print!("{}", frame.border());
    }
    print!("{label}");
    print!("{}", frame.restore());
    row + 1
}
