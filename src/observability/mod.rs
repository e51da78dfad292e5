//! Structured logging to a rotating file in the plugin data directory.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → profile-deck.log
//! ```
//!
//! # Features
//!
//! - **File output**: `~/.local/share/zellij/profile-deck/profile-deck.log`
//! - **Automatic rotation**: files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option in plugin configuration
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
