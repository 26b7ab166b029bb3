//! Empty result message renderer.

use super::Frame;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered two-line "no results" message starting at `row`.
///
/// The message uses the palette's `empty_state_fg`; the subtitle uses the
/// secondary text color.
pub fn render_empty_state(row: usize, empty: &EmptyState, frame: &Frame) -> usize {
    let msg_len = empty.message.chars().count();
    let msg_padding = frame.cols.saturating_sub(msg_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&frame.theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", frame.restore());

    let sub_len = empty.subtitle.chars().count();
    let sub_padding = frame.cols.saturating_sub(sub_len) / 2;

    position_cursor(row + 1, 1);
    print!("{}", frame.secondary());
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", frame.restore());
    row + 2
}
