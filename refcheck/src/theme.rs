//! Color theme for refcheck's terminal output.
//!
//! A `Theme` holds named `crossterm::style::Color` fields for every surface
//! the tool prints. Two built-in themes are provided:
//!
//! - `dark` — ANSI 16 colors, works on any terminal including 256-color SSH
//!   sessions with no truecolor support.
//! - `catppuccin_mocha` — Catppuccin Mocha palette in RGB; requires truecolor.
//!
//! The theme also implements the core [`Emphasis`] seam: inserted fragments
//! get a green background and deleted fragments a red background, so diff
//! markup stays consistent with the status colors.

use crossterm::style::{style, Color, Stylize};
use refcheck_core::render::Emphasis;

/// All color values used across refcheck's output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Foreground for success messages ("identical", the all-matched banner).
    pub success: Color,
    /// Foreground for failure messages ("different", the mismatch banner).
    pub failure: Color,
    /// Background applied to inserted diff fragments.
    pub inserted_bg: Color,
    /// Background applied to deleted diff fragments.
    pub deleted_bg: Color,
}

impl Theme {
    /// Returns the built-in dark theme using ANSI 16 colors.
    ///
    /// Suitable as the default when no config is present or color capability
    /// is unknown.
    pub fn dark() -> Self {
        Self {
            success: Color::Green,
            failure: Color::Red,
            inserted_bg: Color::Green,
            deleted_bg: Color::Red,
        }
    }

    /// Returns the Catppuccin Mocha theme using RGB truecolor values.
    ///
    /// Colors degrade to the nearest ANSI approximation on non-truecolor
    /// terminals. Palette source: <https://github.com/catppuccin/catppuccin>
    /// Mocha variant.
    pub fn catppuccin_mocha() -> Self {
        let green = Color::Rgb { r: 166, g: 227, b: 161 }; // #a6e3a1
        let red = Color::Rgb { r: 243, g: 139, b: 168 }; // #f38ba8

        Self {
            success: green,
            failure: red,
            inserted_bg: green,
            deleted_bg: red,
        }
    }

    /// Resolves a theme name string to the corresponding built-in theme.
    ///
    /// Unknown names fall back to `dark()` so a typo in config never prevents
    /// startup. The fallback is logged to stderr (not a hard error).
    pub fn from_name(name: &str) -> Self {
        match name {
            "catppuccin-mocha" | "catppuccin_mocha" => Self::catppuccin_mocha(),
            "dark" => Self::dark(),
            other => {
                eprintln!("refcheck: unknown theme '{}', falling back to 'dark'", other);
                Self::dark()
            }
        }
    }

    /// Styles a success message in the theme's success color.
    pub fn good(&self, text: &str) -> String {
        style(text).with(self.success).to_string()
    }

    /// Styles a failure message in the theme's failure color.
    pub fn bad(&self, text: &str) -> String {
        style(text).with(self.failure).to_string()
    }
}

impl Emphasis for Theme {
    fn inserted(&self, text: &str) -> String {
        style(text).on(self.inserted_bg).to_string()
    }

    fn deleted(&self, text: &str) -> String {
        style(text).on(self.deleted_bg).to_string()
    }
}
