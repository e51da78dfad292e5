//! Dismissible notices shown over the grid.

use super::contact::ContactLink;
use crate::domain::Profile;

/// A titled message the user acknowledges with any key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// The device has no handler for `link`.
    #[must_use]
    pub fn unsupported(link: &ContactLink) -> Self {
        Self::new(
            "Action not supported",
            format!("Cannot {} {} on this device", link.kind.verb(), link.value),
        )
    }

    /// The host accepted `link` but failed to open it.
    #[must_use]
    pub fn open_failed(link: &ContactLink) -> Self {
        Self::new(
            "Error",
            format!("Failed to {} {}. Please try again.", link.kind.verb(), link.value),
        )
    }

    #[must_use]
    pub fn edit(profile: &Profile) -> Self {
        Self::new(
            "Edit Profile",
            format!("Edit functionality for {} would be implemented here.", profile.name),
        )
    }

    #[must_use]
    pub fn share(profile: &Profile) -> Self {
        Self::new(
            "Share Profile",
            format!("Share {}'s profile via social media, email, or messaging.", profile.name),
        )
    }
}
