//! Themes, day/night color tokens and ANSI escape sequence generation.
//!
//! Two independent things make up the look of the plugin:
//!
//! - A **palette** ([`Theme`]): accent, selection and highlight colors, loaded
//!   from a built-in name or a TOML file.
//! - A **color scheme setting** ([`ThemeSetting`]): day or night, mapped to a
//!   pair of [`ColorTokens`]. Body text uses `dark`, the background uses
//!   `light`, and secondary text is `dark` blended over `light`.
//!
//! # Built-in Palettes
//!
//! - `classic`: blue accent (default)
//! - `amber`: warm accent
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! accent = "#0096ff"
//! selection_fg = "#ffffff"
//! selection_bg = "#0096ff"
//! match_highlight_fg = "#0a0a14"
//! match_highlight_bg = "#ffd866"
//! empty_state_fg = "#0096ff"
//! ```

use crate::domain::error::{Result, ZbooksError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Color palette for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Palette entries.
    pub colors: ThemeColors,
}

/// Palette colors as hex strings (e.g. `"#0096ff"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header title, "show more" button and focused field borders.
    pub accent: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected preview row foreground.
    pub selection_fg: String,
    /// Selected preview row background.
    pub selection_bg: String,

    /// Title-query match highlight foreground.
    pub match_highlight_fg: String,
    /// Title-query match highlight background.
    pub match_highlight_bg: String,

    /// "No results found" message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in palette by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zbooks::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("amber").unwrap();
    /// assert_eq!(theme.name, "amber");
    /// assert!(Theme::from_name("nope").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "classic" => include_str!("../../themes/classic.toml"),
            "amber" => include_str!("../../themes/amber.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ZbooksError::Io`] if the file cannot be read and
    /// [`ZbooksError::Theme`] if the TOML is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| ZbooksError::Theme(e.to_string()))
    }

    /// Parses `#rrggbb` (or `rrggbb`). Malformed input yields white.
    #[must_use]
    pub fn hex_to_rgb(hex: &str) -> Rgb {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return Rgb::WHITE;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        Rgb(channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Self::fg_rgb(Self::hex_to_rgb(hex))
    }

    /// ANSI 24-bit background sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        Self::bg_rgb(Self::hex_to_rgb(hex))
    }

    /// ANSI 24-bit foreground sequence for an RGB triple.
    #[must_use]
    pub fn fg_rgb(Rgb(r, g, b): Rgb) -> String {
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence for an RGB triple.
    #[must_use]
    pub fn bg_rgb(Rgb(r, g, b): Rgb) -> String {
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `classic` palette.
    ///
    /// # Panics
    ///
    /// Panics if the built-in palette fails to parse, which the unit tests
    /// rule out.
    fn default() -> Self {
        Self::from_name("classic").expect("built-in classic theme should always parse")
    }
}

/// An RGB triple, displayed the way the color tokens are written
/// (`"10, 10, 20"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Self = Self(255, 255, 255);
    pub const INK: Self = Self(10, 10, 20);

    /// Composites `self` at `alpha` opacity over `background`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zbooks::ui::theme::Rgb;
    ///
    /// assert_eq!(Rgb(0, 0, 0).blend_over(Rgb(200, 100, 50), 0.5), Rgb(100, 50, 25));
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn blend_over(self, background: Self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| {
            let value = f32::from(fg).mul_add(alpha, f32::from(bg) * (1.0 - alpha));
            value.round().clamp(0.0, 255.0) as u8
        };
        Self(mix(self.0, background.0), mix(self.1, background.1), mix(self.2, background.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// Day or night color scheme, as chosen in the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeSetting {
    #[default]
    Day,
    Night,
}

impl ThemeSetting {
    /// Parses a submitted form value. Anything other than `"night"` is day.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zbooks::ui::theme::ThemeSetting;
    ///
    /// assert_eq!(ThemeSetting::from_value("night"), ThemeSetting::Night);
    /// assert_eq!(ThemeSetting::from_value("dusk"), ThemeSetting::Day);
    /// ```
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == "night" {
            Self::Night
        } else {
            Self::Day
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }
}

/// The `(dark, light)` token pair applied to the whole surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    pub dark: Rgb,
    pub light: Rgb,
}

impl ColorTokens {
    /// Maps a setting to its token pair. Night swaps the day pair.
    #[must_use]
    pub const fn for_setting(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Day => Self { dark: Rgb::INK, light: Rgb::WHITE },
            ThemeSetting::Night => Self { dark: Rgb::WHITE, light: Rgb::INK },
        }
    }

    /// Primary text color.
    #[must_use]
    pub const fn text(self) -> Rgb {
        self.dark
    }

    /// Preview titles (80 % strength).
    #[must_use]
    pub fn title(self) -> Rgb {
        self.dark.blend_over(self.light, 0.8)
    }

    /// Author lines and other secondary text (40 % strength).
    #[must_use]
    pub fn secondary(self) -> Rgb {
        self.dark.blend_over(self.light, 0.4)
    }

    /// Borders and separators (15 % strength).
    #[must_use]
    pub fn border(self) -> Rgb {
        self.dark.blend_over(self.light, 0.15)
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::for_setting(ThemeSetting::Day)
    }
}
