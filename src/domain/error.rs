//! Error types for profile-deck.
//!
//! This module defines the centralized error type [`ProfileDeckError`] and a
//! [`Result`] alias used throughout the crate. Errors are derived with
//! `thiserror`.
//!
//! None of these errors are fatal to the running plugin: the application layer
//! degrades every failure to a visible, recoverable UI state (an inline form
//! message, a notice, or a fallback theme).

use crate::domain::validation::ValidationErrors;
use thiserror::Error;

/// The main error type for profile-deck operations.
///
/// # Examples
///
/// ```
/// use profile_deck::ProfileDeckError;
///
/// fn load_theme() -> Result<(), ProfileDeckError> {
///     Err(ProfileDeckError::Theme("unknown theme".to_string()))
/// }
///
/// assert!(load_theme().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ProfileDeckError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O (theme files, log files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or lookup failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The embedded seed profile set could not be decoded.
    #[error("Seed data error: {0}")]
    Seed(String),

    /// An add-profile submission failed validation.
    ///
    /// Carries one message per offending field so the form can show them
    /// inline.
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),
}

/// A specialized `Result` type for profile-deck operations.
pub type Result<T> = std::result::Result<T, ProfileDeckError>;
