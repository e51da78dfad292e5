//! Theme management and ANSI escape sequence generation.
//!
//! Two built-in themes ship with the plugin, `light` and `dark`, embedded
//! from `themes/*.toml`. A custom TOML file can replace either one; its
//! `is_dark` flag decides which slot it takes.
//!
//! [`ThemeState`] picks the active theme. It follows the host's light/dark
//! preference until the user toggles or sets a theme explicitly, after which
//! system changes are ignored for the rest of the session.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//! is_dark = false
//!
//! [colors]
//! primary = "#007AFF"
//! secondary = "#5856D6"
//! success = "#34C759"
//! warning = "#FF9500"
//! danger = "#FF3B30"
//! background = "#FFFFFF"
//! background_secondary = "#F2F2F7"
//! card = "#FFFFFF"
//! border = "#E5E5EA"
//! text_primary = "#000000"
//! text_secondary = "#3C3C43"
//! text_tertiary = "#8E8E93"
//! ```

use crate::domain::error::{ProfileDeckError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    /// Whether this is a dark scheme.
    #[serde(default)]
    pub is_dark: bool,
    pub colors: ThemeColors,
}

/// Color definitions, as hex strings (e.g. `"#007AFF"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Accent: selection, focused input, header.
    pub primary: String,
    /// Suggestion highlights and the email button.
    pub secondary: String,
    pub success: String,
    /// Favorites and warnings.
    pub warning: String,
    /// Delete actions and validation errors.
    pub danger: String,

    pub background: String,
    pub background_secondary: String,
    pub card: String,
    pub border: String,

    pub text_primary: String,
    pub text_secondary: String,
    pub text_tertiary: String,
}

impl Theme {
    /// Loads a built-in theme by name (`light` or `dark`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "light" => include_str!("../../themes/light.toml"),
            "dark" => include_str!("../../themes/dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Built-in light theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    #[must_use]
    pub fn light() -> Self {
        Self::from_name("light").expect("Built-in light theme should always parse")
    }

    /// Built-in dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    #[must_use]
    pub fn dark() -> Self {
        Self::from_name("dark").expect("Built-in dark theme should always parse")
    }

    /// Parses a theme from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDeckError::Theme`] on invalid syntax or missing fields.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ProfileDeckError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Converts a hex color to an RGB tuple, falling back to white on parse
    /// errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color sequence for `hex`.
    ///
    /// ```rust
    /// use profile_deck::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#007AFF"), "\u{1b}[38;2;0;122;255m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
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
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Active-theme selection: light or dark, optionally following the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    light: Theme,
    dark: Theme,
    is_dark: bool,
    follow_system: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(Theme::light(), Theme::dark(), true, false)
    }
}

impl ThemeState {
    /// Creates a selection. When `follow_system` is set, `dark` is the
    /// host's current preference; otherwise it is the user's choice.
    #[must_use]
    pub const fn new(light: Theme, dark: Theme, follow_system: bool, is_dark: bool) -> Self {
        Self {
            light,
            dark,
            is_dark,
            follow_system,
        }
    }

    /// Replaces the light or dark slot, according to `theme.is_dark`.
    pub fn install(&mut self, theme: Theme) {
        tracing::debug!(name = %theme.name, is_dark = theme.is_dark, "installing custom theme");
        if theme.is_dark {
            self.dark = theme;
        } else {
            self.light = theme;
        }
    }

    #[must_use]
    pub const fn active(&self) -> &Theme {
        if self.is_dark {
            &self.dark
        } else {
            &self.light
        }
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.is_dark
    }

    #[must_use]
    pub const fn follows_system(&self) -> bool {
        self.follow_system
    }

    /// Flips between light and dark and stops following the host.
    pub fn toggle(&mut self) {
        self.follow_system = false;
        self.is_dark = !self.is_dark;
        tracing::debug!(is_dark = self.is_dark, "theme toggled");
    }

    /// Sets the scheme explicitly and stops following the host.
    pub fn set_dark(&mut self, dark: bool) {
        self.follow_system = false;
        self.is_dark = dark;
    }

    /// Applies a host preference change. Returns `true` if the active theme
    /// changed.
    pub fn system_changed(&mut self, dark: bool) -> bool {
        if !self.follow_system || self.is_dark == dark {
            return false;
        }
        self.is_dark = dark;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::light().colors.primary, "#007AFF");
        assert!(Theme::dark().is_dark);
        assert_eq!(Theme::dark().colors.primary, "#0A84FF");
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn bad_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#12"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("zz0000"), "\u{1b}[48;2;255;0;0m");
    }

    #[test]
    fn custom_theme_loads_from_file() {
        let text = include_str!("../../themes/dark.toml").replace("name = \"dark\"", "name = \"midnight\"");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "midnight");

        let mut state = ThemeState::default();
        state.install(theme);
        state.set_dark(true);
        assert_eq!(state.active().name, "midnight");
    }

    #[test]
    fn missing_or_invalid_files_are_errors() {
        assert!(matches!(
            Theme::from_file("/nonexistent/theme.toml"),
            Err(ProfileDeckError::Io(_))
        ));
        assert!(matches!(Theme::from_toml("name = 1"), Err(ProfileDeckError::Theme(_))));
    }

    #[test]
    fn follows_system_until_user_chooses() {
        let mut state = ThemeState::default();
        assert!(state.system_changed(true));
        assert!(state.is_dark());

        state.toggle();
        assert!(!state.is_dark());
        assert!(!state.follows_system());
        assert!(!state.system_changed(true));
        assert!(!state.is_dark());
    }
}
