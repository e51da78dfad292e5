//! Input mode and overlay state.
//!
//! The grid is always on screen. [`InputMode`] says whether typed characters
//! go to the search bar; an [`Overlay`] drawn on top of the grid takes every
//! key until it is closed.

use crate::domain::{ProfileForm, ProfileId};
use crate::feedback::Notice;
use crate::menu::QuickActionsMenu;

/// Where typed characters go when no overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands on the selected card.
    #[default]
    Browse,

    /// Keys edit the search term; the suggestion dropdown may be open.
    Search,
}

/// Grid navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Modal surface drawn over the grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    None,

    /// Long-press quick actions for one profile.
    Menu(QuickActionsMenu),

    /// Add-profile form.
    Form(ProfileForm),

    /// "Delete Profile" confirmation.
    ConfirmDelete {
        id: ProfileId,
        name: String,
    },

    /// Dismissible message.
    Notice(Notice),
}

impl Overlay {
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Short name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Menu(_) => "menu",
            Self::Form(_) => "form",
            Self::ConfirmDelete { .. } => "confirm_delete",
            Self::Notice(_) => "notice",
        }
    }
}
