//! Avatar image resolution.
//!
//! A profile's avatar URI is resolved to either a remote image the renderer
//! may try to show, or a placeholder built from the profile's initials. Load
//! failures never surface as errors; they simply fall back to the placeholder.

use std::fmt;

/// What to draw in a card's avatar slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarImage {
    Remote(String),
    Placeholder { initials: String },
}

impl AvatarImage {
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Resolves avatar URIs.
pub trait ImageSource: fmt::Debug {
    /// Resolves `uri` for a profile whose initials are `initials`.
    fn resolve(&self, uri: &str, initials: &str) -> AvatarImage;

    /// Records that loading `uri` failed so later lookups fall back.
    fn mark_failed(&mut self, uri: &str);
}

/// Accepts `http`/`https` URIs that have not failed before.
#[derive(Debug, Clone, Default)]
pub struct UriImageSource {
    failed: Vec<String>,
}

impl UriImageSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn is_remote(uri: &str) -> bool {
        let uri = uri.trim();
        ["http://", "https://"]
            .iter()
            .any(|scheme| {
                uri.len() > scheme.len()
                    && uri.get(..scheme.len()).is_some_and(|head| head.eq_ignore_ascii_case(scheme))
            })
    }
}

impl ImageSource for UriImageSource {
    fn resolve(&self, uri: &str, initials: &str) -> AvatarImage {
        if Self::is_remote(uri) && !self.failed.iter().any(|f| f == uri) {
            AvatarImage::Remote(uri.trim().to_string())
        } else {
            AvatarImage::Placeholder {
                initials: initials.to_string(),
            }
        }
    }

    fn mark_failed(&mut self, uri: &str) {
        tracing::debug!(uri, "avatar failed to load, using placeholder");
        if !self.failed.iter().any(|f| f == uri) {
            self.failed.push(uri.to_string());
        }
    }
}
