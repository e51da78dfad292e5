//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the core logic
//! (store, search, layout, gestures, menu). Input flows one way:
//!
//! ```text
//! Key / Mouse / Timer → Event → handle_event → AppState mutation → refresh_view
//!                                     ↓
//!                      (should_render, Vec<Action>) → runtime side effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and overlay types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Direction, InputMode, Overlay};
pub use state::{AppSettings, AppState, PointerTrack, UiContext};
