//! Collaborators the app talks to but does not own.
//!
//! - [`haptics`]: vibration feedback
//! - [`image`]: avatar resolution with initials fallback
//! - [`contact`]: `tel:`/`mailto:`/`sms:` links and the URL opener
//! - [`notice`]: dismissible messages
//!
//! Each device-facing piece sits behind a trait so the app can run headless
//! and tests can observe what was triggered.

pub mod contact;
pub mod haptics;
pub mod image;
pub mod notice;

pub use contact::{ContactKind, ContactLink, SchemeOpener, UrlOpener};
pub use haptics::{HapticKind, Haptics, LoggingHaptics, RecordingHaptics};
pub use image::{AvatarImage, ImageSource, UriImageSource};
pub use notice::Notice;
