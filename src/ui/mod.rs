//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → Screen → stdout
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and the screen row layout
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: The [`Screen`] buffer and text fitting utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use helpers::Screen;
pub use renderer::{render, render_to_string, render_viewmodel};
pub use theme::{Theme, ThemeState};
pub use viewmodel::{
    CardItem, DialogView, EmptyState, FooterInfo, FormView, HeaderInfo, MenuView, OverlayView,
    SearchBarInfo, UIViewModel,
};
