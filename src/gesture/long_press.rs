//! Press-and-hold detection.
//!
//! Timestamps are caller-supplied milliseconds so the detector works on any
//! clock and stays deterministic under test.

use crate::layout::Point;

/// Hold time before a press counts as a long press.
pub const LONG_PRESS_DELAY_MS: i64 = 500;

/// Movement allowed during the hold before the press is abandoned.
pub const LONG_PRESS_TOLERANCE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    origin: Point,
    at_ms: i64,
}

/// Fires once per press that is held still for [`LONG_PRESS_DELAY_MS`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LongPressDetector {
    press: Option<Press>,
}

impl LongPressDetector {
    #[must_use]
    pub const fn new() -> Self {
        Self { press: None }
    }

    /// Starts tracking a press at `origin`.
    pub fn press(&mut self, origin: Point, at_ms: i64) {
        self.press = Some(Press { origin, at_ms });
    }

    /// Abandons the press if the pointer strayed too far.
    pub fn move_to(&mut self, point: Point) {
        if let Some(press) = self.press {
            if press.origin.distance(point) > LONG_PRESS_TOLERANCE {
                tracing::trace!("long press cancelled by movement");
                self.press = None;
            }
        }
    }

    /// Abandons the press.
    pub fn release(&mut self) {
        self.press = None;
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.press.is_some()
    }

    /// Checks the hold time at `now_ms`.
    ///
    /// Returns the press origin exactly once, when the delay has elapsed.
    pub fn poll(&mut self, now_ms: i64) -> Option<Point> {
        let press = self.press?;
        if now_ms - press.at_ms < LONG_PRESS_DELAY_MS {
            return None;
        }
        self.press = None;
        tracing::debug!(x = press.origin.x, y = press.origin.y, "long press recognized");
        Some(press.origin)
    }
}
