//! Horizontal swipe-to-reveal on a single card.
//!
//! ```text
//!            move |dx|>|dy| && |dx|>10
//!   Closed ──────────────────────────────▶ Dragging
//!     ▲                                      │ release
//!     │  dx >= -25% width                    │
//!     ├──────────────────────────────────────┤
//!     │                  dx < -25% width     ▼
//!     └──────── edit / delete / close ────── Open (offset -120)
//! ```
//!
//! The controller tracks a displayed `offset` and an animation `target`.
//! Releases and actions only move the target; [`SwipeController::advance`]
//! walks the offset toward it one frame at a time. A new drag takes over the
//! offset wherever the animation left it.

/// Minimum horizontal travel before a move is treated as a swipe.
pub const SWIPE_START_DISTANCE: f32 = 10.0;

/// Fraction of the viewport width a release must exceed to open the card.
pub const OPEN_FRACTION: f32 = 0.25;

/// Resting offset of an open card; the width of the revealed action strip.
pub const REVEAL_DISTANCE: f32 = 120.0;

/// Action revealed behind a swiped card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeAction {
    Edit,
    Delete,
}

impl SwipeAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
        }
    }
}

/// Swipe phase of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeState {
    Closed,
    /// A drag is in progress; `base` is the offset held when it began.
    Dragging { base: f32 },
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeController {
    state: SwipeState,
    offset: f32,
    target: f32,
    /// State to return to if a pressed pointer never becomes a drag.
    settled: SwipeState,
}

impl Default for SwipeController {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SwipeState::Closed,
            offset: 0.0,
            target: 0.0,
            settled: SwipeState::Closed,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SwipeState {
        self.state
    }

    /// Current displayed offset in px (zero or negative).
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Offset the card is animating toward.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.target
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == SwipeState::Open
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SwipeState::Dragging { .. })
    }

    /// Returns `true` while the offset has not reached its target.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.is_dragging() && (self.offset - self.target).abs() > f32::EPSILON
    }

    /// Whether a pointer displacement qualifies as a horizontal swipe.
    #[must_use]
    pub fn should_start(dx: f32, dy: f32) -> bool {
        dx.abs() > dy.abs() && dx.abs() > SWIPE_START_DISTANCE
    }

    /// Feeds the cumulative pointer displacement since the press.
    ///
    /// Starts a drag once [`SwipeController::should_start`] holds, then tracks
    /// `min(0, base + dx)`. Returns `true` if the offset changed.
    pub fn drag(&mut self, dx: f32, dy: f32) -> bool {
        let base = match self.state {
            SwipeState::Dragging { base } => base,
            SwipeState::Closed | SwipeState::Open => {
                if !Self::should_start(dx, dy) {
                    return false;
                }
                self.settled = self.state;
                // Grab the card wherever any animation left it.
                let base = self.offset;
                self.state = SwipeState::Dragging { base };
                tracing::trace!(base, "swipe started");
                base
            }
        };

        let offset = (base + dx).min(0.0);
        let changed = (offset - self.offset).abs() > f32::EPSILON;
        self.offset = offset;
        self.target = offset;
        changed
    }

    /// Ends the gesture with total horizontal displacement `dx`.
    ///
    /// Opens when `dx` is further left than [`OPEN_FRACTION`] of
    /// `viewport_width`, otherwise snaps back closed. A release without a
    /// drag leaves the card as it was.
    pub fn release(&mut self, dx: f32, viewport_width: f32) -> SwipeState {
        if !self.is_dragging() {
            return self.state;
        }

        if dx < -(viewport_width * OPEN_FRACTION) {
            self.state = SwipeState::Open;
            self.target = -REVEAL_DISTANCE;
        } else {
            self.state = SwipeState::Closed;
            self.target = 0.0;
        }
        self.settled = self.state;

        tracing::debug!(dx, viewport_width, state = ?self.state, "swipe released");
        self.state
    }

    /// Abandons an in-flight drag, returning to the state it started from.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.state = self.settled;
            self.target = if self.state == SwipeState::Open { -REVEAL_DISTANCE } else { 0.0 };
        }
    }

    /// Opens the card without a gesture (keyboard reveal).
    pub fn open(&mut self) {
        self.state = SwipeState::Open;
        self.settled = SwipeState::Open;
        self.target = -REVEAL_DISTANCE;
    }

    /// Animates the card back to rest.
    pub fn close(&mut self) {
        self.state = SwipeState::Closed;
        self.settled = SwipeState::Closed;
        self.target = 0.0;
    }

    /// Invokes a revealed action.
    ///
    /// Returns the action when the card is open and closes it; a closed card
    /// has nothing revealed and returns `None`.
    pub fn invoke(&mut self, action: SwipeAction) -> Option<SwipeAction> {
        if !self.is_open() {
            return None;
        }
        self.close();
        Some(action)
    }

    /// Moves the offset up to `step` px toward the target.
    ///
    /// Returns `true` while the animation is still running.
    pub fn advance(&mut self, step: f32) -> bool {
        if self.is_dragging() {
            return false;
        }
        let remaining = self.target - self.offset;
        if remaining.abs() <= step {
            self.offset = self.target;
            false
        } else {
            self.offset += step.copysign(remaining);
            true
        }
    }

    /// Jumps straight to the target.
    pub fn settle(&mut self) {
        if !self.is_dragging() {
            self.offset = self.target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 400.0;

    fn swiped(dx: f32) -> SwipeController {
        let mut swipe = SwipeController::new();
        assert!(swipe.drag(dx, 0.0));
        swipe.release(dx, WIDTH);
        swipe
    }

    #[test]
    fn release_past_quarter_width_opens() {
        let swipe = swiped(-0.3 * WIDTH);
        assert_eq!(swipe.state(), SwipeState::Open);
        assert_eq!(swipe.target(), -REVEAL_DISTANCE);
    }

    #[test]
    fn short_release_snaps_back() {
        let swipe = swiped(-0.1 * WIDTH);
        assert_eq!(swipe.state(), SwipeState::Closed);
        assert_eq!(swipe.target(), 0.0);
    }

    #[test]
    fn small_or_vertical_moves_do_not_start_a_drag() {
        let mut swipe = SwipeController::new();
        assert!(!swipe.drag(-8.0, 0.0));
        assert!(!swipe.drag(-30.0, 40.0));
        assert_eq!(swipe.state(), SwipeState::Closed);
        assert_eq!(swipe.release(-300.0, WIDTH), SwipeState::Closed);
    }

    #[test]
    fn rightward_drag_is_clamped_to_zero() {
        let mut swipe = SwipeController::new();
        swipe.drag(-20.0, 0.0);
        swipe.drag(50.0, 0.0);
        assert_eq!(swipe.offset(), 0.0);
        swipe.drag(-60.0, 0.0);
        assert_eq!(swipe.offset(), -60.0);
    }

    #[test]
    fn actions_only_fire_when_open_and_close_the_card() {
        let mut swipe = SwipeController::new();
        assert_eq!(swipe.invoke(SwipeAction::Edit), None);

        let mut swipe = swiped(-200.0);
        assert_eq!(swipe.invoke(SwipeAction::Delete), Some(SwipeAction::Delete));
        assert_eq!(swipe.state(), SwipeState::Closed);
        assert_eq!(swipe.target(), 0.0);
    }

    #[test]
    fn advance_walks_toward_target() {
        let mut swipe = swiped(-200.0);
        swipe.settle();
        swipe.close();
        assert!(swipe.advance(50.0));
        assert_eq!(swipe.offset(), -70.0);
        assert!(swipe.advance(50.0));
        assert!(!swipe.advance(50.0));
        assert_eq!(swipe.offset(), 0.0);
        assert!(!swipe.is_animating());
    }

    #[test]
    fn new_drag_preempts_animation() {
        let mut swipe = swiped(-200.0);
        swipe.settle();
        swipe.close();
        assert!(swipe.advance(40.0));
        let mid = swipe.offset();
        assert!(mid > -REVEAL_DISTANCE && mid < 0.0);

        swipe.drag(-15.0, 0.0);
        assert!(swipe.is_dragging());
        assert_eq!(swipe.offset(), mid - 15.0);
        assert!(!swipe.advance(40.0));
    }

    #[test]
    fn cancel_restores_the_previous_resting_state() {
        let mut swipe = swiped(-200.0);
        swipe.drag(30.0, 0.0);
        swipe.cancel();
        assert!(swipe.is_open());
        assert_eq!(swipe.target(), -REVEAL_DISTANCE);
    }
}
