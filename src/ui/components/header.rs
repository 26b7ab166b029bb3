//! Header component renderer.

use super::Frame;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar centered at `row` and returns the next row.
///
/// Uses the palette accent in bold, over `header_bg` when the palette sets
/// one.
pub fn render_header(row: usize, header: &HeaderInfo, frame: &Frame) -> usize {
    let title_len = header.title.chars().count();
    let padding = frame.cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&frame.theme.colors.accent));
    if let Some(bg) = &frame.theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(frame.cols.saturating_sub(padding + title_len)));

    print!("{}", frame.restore());
    row + 1
}
