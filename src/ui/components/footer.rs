//! Footer component renderer.

use super::Frame;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered at `row`, truncated to the pane
/// width.
pub fn render_footer(row: usize, footer: &FooterInfo, frame: &Frame) -> usize {
    let help_text = truncate(&footer.keybindings, frame.cols);
    let text_len = help_text.chars().count();
    let padding = frame.cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", frame.secondary());
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(frame.cols.saturating_sub(padding + text_len)));
    print!("{}", frame.restore());
    row + 1
}
