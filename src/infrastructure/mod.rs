//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host` inside the sandbox; these
//! helpers map user-facing paths (log directory, custom theme files) onto it.

pub mod paths;

pub use paths::{data_dir, expand_tilde, log_file};
