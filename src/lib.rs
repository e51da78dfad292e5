//! Profile Deck: a Zellij plugin presenting a searchable, responsive grid of
//! contact profile cards.
//!
//! Profile Deck provides:
//! - Case-insensitive search over name, title and email with live suggestions
//! - A 1 to 3 column card grid chosen from the pane's logical size
//! - Swipe-to-reveal Edit/Delete actions and a long-press quick-actions menu
//! - An add-profile form with inline validation and a delete confirmation
//! - Light and dark themes that follow the host until toggled

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Core          │   │ Feedback      │
//! │ (ui/)         │   │ store/ search/│   │ (feedback/)   │
//! │ - Rendering   │   │ layout/       │   │ - Haptics     │
//! │ - Theming     │   │ gesture/ menu/│   │ - Avatars     │
//! │ - Components  │   │               │   │ - Contact URLs│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Profile model, validation, errors (domain/)      │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing-subscriber with a rotating log file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/profile-deck.wasm" {
//!         theme "dark"
//!         follow_system_theme "false"
//!         haptics "true"
//!         cell_width "8"
//!         cell_height "16"
//!         refresh_delay_ms "1500"
//!         open_schemes "mailto,tel"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use profile_deck::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//! state.set_terminal_size(24, 80);
//!
//! handle_event(&mut state, &Event::FocusSearch)?;
//! for ch in "kim".chars() {
//!     handle_event(&mut state, &Event::SearchInput(ch))?;
//! }
//! assert_eq!(state.visible_profiles().count(), 1);
//! # Ok::<(), profile_deck::ProfileDeckError>(())
//! ```

pub mod app;
pub mod domain;
pub mod feedback;
pub mod gesture;
pub mod infrastructure;
pub mod layout;
pub mod menu;
pub mod search;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppSettings, AppState, Event, InputMode, Overlay, UiContext};
pub use domain::{Profile, ProfileDeckError, Result};
pub use ui::Theme;

use crate::feedback::{LoggingHaptics, SchemeOpener, UriImageSource};
use crate::layout::CellSize;
use crate::store::ProfileStore;
use crate::ui::ThemeState;
use std::collections::BTreeMap;

/// URL schemes the host is assumed to handle when `open_schemes` is unset.
pub const DEFAULT_OPEN_SCHEMES: &str = "mailto";

/// Default simulated refresh duration.
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 1500;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Built-in theme to start with (`light` or `dark`).
    ///
    /// Setting it stops the plugin from following the host scheme.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Installed into the light or dark
    /// slot according to its `is_dark` flag.
    pub theme_file: Option<String>,

    /// Track the host's color scheme until the user toggles. Default: `true`
    pub follow_system_theme: bool,

    /// Whether the host currently prefers dark. Default: `false`
    pub system_dark: bool,

    /// Global haptics switch. Default: `true`
    pub haptics: bool,

    /// Logical pixel size of one terminal cell. Default: 8 x 16
    pub cell: CellSize,

    /// Simulated pull-to-refresh duration. Default: 1500
    pub refresh_delay_ms: u64,

    /// Comma-separated URL schemes the host can open. Default: `"mailto"`
    pub open_schemes: String,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            follow_system_theme: true,
            system_dark: false,
            haptics: true,
            cell: CellSize::default(),
            refresh_delay_ms: DEFAULT_REFRESH_DELAY_MS,
            open_schemes: DEFAULT_OPEN_SCHEMES.to_string(),
            trace_level: None,
        }
    }
}

fn parse_bool(value: Option<&String>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true" | "yes" | "on" | "1") => true,
        Some("false" | "no" | "off" | "0") => false,
        _ => default,
    }
}

fn parse_px(value: Option<&String>, default: f32) -> f32 {
    value
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|px| px.is_finite() && *px > 0.0)
        .unwrap_or(default)
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty()).map(String::from)
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Values that do not parse fall back to their
    /// defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use profile_deck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "dark".to_string());
    /// map.insert("refresh_delay_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("dark"));
    /// assert_eq!(config.refresh_delay_ms, 1500);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let cell = CellSize {
            width: parse_px(config.get("cell_width"), defaults.cell.width),
            height: parse_px(config.get("cell_height"), defaults.cell.height),
        };

        let refresh_delay_ms = config
            .get("refresh_delay_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.refresh_delay_ms);

        Self {
            theme_name: non_empty(config.get("theme")),
            theme_file: non_empty(config.get("theme_file")),
            follow_system_theme: parse_bool(config.get("follow_system_theme"), defaults.follow_system_theme),
            system_dark: parse_bool(config.get("system_dark"), defaults.system_dark),
            haptics: parse_bool(config.get("haptics"), defaults.haptics),
            cell,
            refresh_delay_ms,
            open_schemes: non_empty(config.get("open_schemes")).unwrap_or(defaults.open_schemes),
            trace_level: non_empty(config.get("trace_level")),
        }
    }

    fn theme_state(&self) -> ThemeState {
        let mut theme = ThemeState::new(Theme::light(), Theme::dark(), self.follow_system_theme, self.system_dark);

        if let Some(name) = &self.theme_name {
            match name.as_str() {
                "light" => theme.set_dark(false),
                "dark" => theme.set_dark(true),
                _ => tracing::debug!(theme_name = %name, "unknown theme name, keeping default"),
            }
        }

        if let Some(file) = &self.theme_file {
            let path = infrastructure::expand_tilde(file);
            match Theme::from_file(&path) {
                Ok(custom) => {
                    let dark = custom.is_dark;
                    theme.install(custom);
                    if self.theme_name.is_none() {
                        theme.set_dark(dark);
                    }
                }
                Err(e) => {
                    tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                }
            }
        }

        theme
    }

    #[allow(clippy::cast_precision_loss)]
    fn settings(&self) -> AppSettings {
        AppSettings {
            cell: self.cell,
            refresh_delay_secs: self.refresh_delay_ms as f64 / 1000.0,
            ..AppSettings::default()
        }
    }
}

/// Builds the application state from configuration.
///
/// Loads the embedded seed profiles, resolves the theme (file, then name,
/// then the host scheme) and wires the default feedback collaborators.
/// Theme failures are logged and fall back to the built-in themes.
///
/// # Errors
///
/// Returns [`ProfileDeckError::Seed`] if the embedded seed profiles do not
/// decode.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing profile-deck plugin");

    let store = ProfileStore::from_seed()?;
    let ui = UiContext {
        theme: config.theme_state(),
        haptics: Box::new(LoggingHaptics::new(config.haptics)),
        images: Box::new(UriImageSource::new()),
        opener: Box::new(SchemeOpener::from_list(&config.open_schemes)),
    };

    Ok(AppState::new(store, ui, config.settings()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_typed_values() {
        let config = Config::from_zellij(&map(&[
            ("follow_system_theme", "false"),
            ("system_dark", "yes"),
            ("haptics", "0"),
            ("cell_width", "10"),
            ("cell_height", "20.5"),
            ("refresh_delay_ms", "250"),
            ("open_schemes", "mailto,tel"),
            ("trace_level", "debug"),
        ]));
        assert!(!config.follow_system_theme);
        assert!(config.system_dark);
        assert!(!config.haptics);
        assert_eq!(config.cell, CellSize { width: 10.0, height: 20.5 });
        assert_eq!(config.refresh_delay_ms, 250);
        assert_eq!(config.open_schemes, "mailto,tel");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("haptics", "maybe"),
            ("cell_width", "-4"),
            ("cell_height", "NaN"),
            ("refresh_delay_ms", "-1"),
            ("theme", "  "),
        ]));
        assert!(config.haptics);
        assert_eq!(config.cell, CellSize::default());
        assert_eq!(config.refresh_delay_ms, DEFAULT_REFRESH_DELAY_MS);
        assert_eq!(config.theme_name, None);
    }

    #[test]
    fn initialize_loads_seed_and_theme() {
        let config = Config {
            theme_name: Some("dark".into()),
            refresh_delay_ms: 500,
            ..Config::default()
        };
        let state = initialize(&config).unwrap();
        assert_eq!(state.store.len(), 5);
        assert!(state.ui.theme.is_dark());
        assert!(!state.ui.theme.follows_system());
        assert!((state.settings.refresh_delay_secs - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn follows_system_scheme_without_theme_name() {
        let config = Config {
            system_dark: true,
            ..Config::default()
        };
        let state = initialize(&config).unwrap();
        assert!(state.ui.theme.is_dark());
        assert!(state.ui.theme.follows_system());
    }

    #[test]
    fn theme_file_is_installed() {
        let dark = include_str!("../themes/dark.toml").replace("name = \"dark\"", "name = \"midnight\"");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(dark.as_bytes()).unwrap();

        let config = Config {
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        let state = initialize(&config).unwrap();
        assert!(state.ui.theme.is_dark());
        assert_eq!(state.ui.theme.active().name, "midnight");
    }

    #[test]
    fn missing_theme_file_falls_back() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".into()),
            ..Config::default()
        };
        let state = initialize(&config).unwrap();
        assert_eq!(state.ui.theme.active().name, "light");
    }
}
