//! Quick-actions menu opened by a long press on a card.
//!
//! The action list is declarative: [`MenuHandlers`] says which actions the
//! caller can service and [`MenuHandlers::actions`] turns that into entries in
//! the fixed order edit, call, email, share, favorite, delete. The menu keeps
//! only the target's id, never the profile itself.
//!
//! Actions are laid out two per row inside a fixed-width panel.
//! [`position`] keeps that panel on screen:
//!
//! 1. If the right edge would pass `screen_width - margin`, shift left so it
//!    ends there; never start left of `margin`.
//! 2. If the bottom would pass `screen_height - edge_margin`, flip above the
//!    anchor; never start above `edge_margin`.

use crate::domain::ProfileId;
use crate::layout::{Point, Viewport};

/// Panel width in px.
pub const MENU_WIDTH: f32 = 200.0;

/// Height of one row of action buttons in px.
pub const ACTION_ROW_HEIGHT: f32 = 60.0;

/// Buttons per row.
pub const ACTIONS_PER_ROW: usize = 2;

/// Entry in the quick-actions menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Edit,
    Call,
    Email,
    Share,
    Favorite,
    Delete,
}

impl MenuAction {
    /// Every action in menu order.
    pub const ALL: [Self; 6] = [
        Self::Edit,
        Self::Call,
        Self::Email,
        Self::Share,
        Self::Favorite,
        Self::Delete,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Call => "Call",
            Self::Email => "Email",
            Self::Share => "Share",
            Self::Favorite => "Favorite",
            Self::Delete => "Delete",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Edit => "✎",
            Self::Call => "☎",
            Self::Email => "✉",
            Self::Share => "⇪",
            Self::Favorite => "★",
            Self::Delete => "✖",
        }
    }
}

/// Which menu actions the caller can handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MenuHandlers {
    pub edit: bool,
    pub call: bool,
    pub email: bool,
    pub share: bool,
    pub favorite: bool,
    pub delete: bool,
}

impl MenuHandlers {
    /// A handler set covering every action.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            edit: true,
            call: true,
            email: true,
            share: true,
            favorite: true,
            delete: true,
        }
    }

    #[must_use]
    pub const fn handles(&self, action: MenuAction) -> bool {
        match action {
            MenuAction::Edit => self.edit,
            MenuAction::Call => self.call,
            MenuAction::Email => self.email,
            MenuAction::Share => self.share,
            MenuAction::Favorite => self.favorite,
            MenuAction::Delete => self.delete,
        }
    }

    /// One entry per supplied handler, in menu order.
    #[must_use]
    pub fn actions(&self) -> Vec<MenuAction> {
        MenuAction::ALL.into_iter().filter(|a| self.handles(*a)).collect()
    }
}

/// Spacing that keeps the panel off the screen edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuMargins {
    /// Side margin and inner padding.
    pub margin: f32,
    /// Minimum distance from the top and bottom edges.
    pub edge_margin: f32,
}

impl Default for MenuMargins {
    fn default() -> Self {
        Self {
            margin: 16.0,
            edge_margin: 32.0,
        }
    }
}

impl MenuMargins {
    /// Both margins set to `margin`.
    #[must_use]
    pub const fn uniform(margin: f32) -> Self {
        Self {
            margin,
            edge_margin: margin,
        }
    }
}

/// Panel height for `action_count` entries.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn menu_height(action_count: usize, margins: MenuMargins) -> f32 {
    let rows = (action_count + ACTIONS_PER_ROW - 1) / ACTIONS_PER_ROW;
    rows as f32 * ACTION_ROW_HEIGHT + 2.0 * margins.margin
}

/// Top-left corner of a panel of `action_count` entries opened at `anchor`.
///
/// # Examples
///
/// ```
/// use profile_deck::layout::{Point, Viewport};
/// use profile_deck::menu::{position, MenuMargins};
///
/// let screen = Viewport::new(390.0, 844.0);
/// let at = position(Point::new(300.0, 100.0), 6, screen, MenuMargins::uniform(16.0));
/// assert_eq!(at, Point::new(174.0, 100.0));
/// ```
#[must_use]
pub fn position(anchor: Point, action_count: usize, screen: Viewport, margins: MenuMargins) -> Point {
    let height = menu_height(action_count, margins);

    let mut x = anchor.x;
    if x + MENU_WIDTH > screen.width - margins.margin {
        x = screen.width - MENU_WIDTH - margins.margin;
    }
    x = x.max(margins.margin);

    let mut y = anchor.y;
    if y + height > screen.height - margins.edge_margin {
        y = anchor.y - height - margins.margin;
    }
    y = y.max(margins.edge_margin);

    Point::new(x, y)
}

/// An open quick-actions menu.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickActionsMenu {
    /// Profile the actions apply to.
    pub target: ProfileId,
    /// Where the long press happened.
    pub anchor: Point,
    /// Top-left corner of the panel after clamping.
    pub origin: Point,
    pub actions: Vec<MenuAction>,
    /// Keyboard-highlighted entry.
    pub cursor: usize,
    margins: MenuMargins,
}

impl QuickActionsMenu {
    /// Builds and positions a menu for `target`.
    #[must_use]
    pub fn open(
        target: ProfileId,
        anchor: Point,
        handlers: MenuHandlers,
        screen: Viewport,
        margins: MenuMargins,
    ) -> Self {
        let actions = handlers.actions();
        let origin = position(anchor, actions.len(), screen, margins);
        tracing::debug!(profile = %target, x = origin.x, y = origin.y, "quick actions opened");

        Self {
            target,
            anchor,
            origin,
            actions,
            cursor: 0,
            margins,
        }
    }

    /// Re-clamps the panel for a new screen size, keeping the anchor.
    pub fn reposition(&mut self, screen: Viewport) {
        self.origin = position(self.anchor, self.actions.len(), screen, self.margins);
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        MENU_WIDTH
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        menu_height(self.actions.len(), self.margins)
    }

    #[must_use]
    pub const fn margins(&self) -> MenuMargins {
        self.margins
    }

    /// Top-left corner and size of the button for entry `index`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn button_origin(&self, index: usize) -> Option<(Point, f32, f32)> {
        if index >= self.actions.len() {
            return None;
        }
        let button_width = (MENU_WIDTH - 2.0 * self.margins.margin) / ACTIONS_PER_ROW as f32;
        let row = (index / ACTIONS_PER_ROW) as f32;
        let col = (index % ACTIONS_PER_ROW) as f32;

        Some((
            Point::new(
                self.origin.x + self.margins.margin + col * button_width,
                self.origin.y + self.margins.margin + row * ACTION_ROW_HEIGHT,
            ),
            button_width,
            ACTION_ROW_HEIGHT,
        ))
    }

    /// Returns `true` if `point` falls inside the panel.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.width()
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.height()
    }

    /// Action under `point`, if any.
    #[must_use]
    pub fn action_at(&self, point: Point) -> Option<MenuAction> {
        (0..self.actions.len()).find_map(|index| {
            let (corner, w, h) = self.button_origin(index)?;
            let inside = point.x >= corner.x
                && point.x < corner.x + w
                && point.y >= corner.y
                && point.y < corner.y + h;
            inside.then(|| self.actions[index])
        })
    }

    /// Entry under the keyboard cursor.
    #[must_use]
    pub fn highlighted(&self) -> Option<MenuAction> {
        self.actions.get(self.cursor).copied()
    }

    /// Moves the cursor by `delta` entries, wrapping around.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.actions.len();
        if len == 0 {
            return;
        }
        let step = delta.rem_euclid(len as isize) as usize;
        self.cursor = (self.cursor + step) % len;
    }
}
