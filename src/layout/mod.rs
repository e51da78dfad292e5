//! Responsive layout selection.
//!
//! Screen measurements are logical pixels. Inside a terminal they are derived
//! from cell coordinates through [`CellSize`], so the pixel thresholds used by
//! the column rule, the gestures and the menu all apply unchanged.
//!
//! # Column rule
//!
//! | device          | portrait | landscape |
//! |-----------------|----------|-----------|
//! | phone (< 600)   | 1        | 2         |
//! | tablet (>= 600) | 2        | 3         |
//!
//! A device is a tablet when its shorter side is at least
//! [`TABLET_MIN_SIDE`] px, and landscape when strictly wider than tall.

pub mod grid;

pub use grid::{CellSize, GridGeometry, Rect};

/// Shorter-side length at which a screen counts as a tablet.
pub const TABLET_MIN_SIDE: f32 = 600.0;

/// A point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Screen size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_landscape(self) -> bool {
        self.width > self.height
    }

    #[must_use]
    pub fn is_tablet(self) -> bool {
        self.width.min(self.height) >= TABLET_MIN_SIDE
    }

    /// Column count for this viewport; see [`columns`].
    #[must_use]
    pub fn columns(self) -> u8 {
        columns(self.width, self.height)
    }
}

/// Number of grid columns (1, 2 or 3) for a `width` x `height` screen.
///
/// # Examples
///
/// ```
/// use profile_deck::layout::columns;
///
/// assert_eq!(columns(390.0, 844.0), 1);
/// assert_eq!(columns(1024.0, 768.0), 3);
/// ```
#[must_use]
pub fn columns(width: f32, height: f32) -> u8 {
    let is_landscape = width > height;
    let is_tablet = width.min(height) >= TABLET_MIN_SIDE;

    match (is_tablet, is_landscape) {
        (true, true) => 3,
        (true, false) | (false, true) => 2,
        (false, false) => 1,
    }
}
