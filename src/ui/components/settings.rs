//! Settings overlay renderer.

use super::{box_bottom, box_row, box_top, Frame};
use crate::ui::theme::{Theme, ThemeSetting};
use crate::ui::viewmodel::SettingsOverlay;

/// Renders the day/night choice box from `row`.
pub fn render_settings_overlay(row: usize, settings: &SettingsOverlay, frame: &Frame) -> usize {
    let mut current_row = box_top(row, "Settings", frame);

    current_row = box_row(current_row, frame, |_inner| {
        print!("{}", frame.secondary());
        print!(" Theme:  ");
        let mut used = 9;

        for setting in [ThemeSetting::Day, ThemeSetting::Night] {
            let chosen = settings.choice == setting;
            let label = if setting == ThemeSetting::Day { "Day" } else { "Night" };
            let radio = if chosen { "(•)" } else { "( )" };
            if chosen {
                print!("{}{}", Theme::bold(), Theme::fg(&frame.theme.colors.accent));
            } else {
                print!("{}{}", frame.restore(), frame.secondary());
            }
            let text = format!("{radio} {label}   ");
            print!("{text}");
            used += text.chars().count();
        }
        used
    });

    box_bottom(current_row, frame)
}
