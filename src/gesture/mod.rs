//! Pointer gesture recognition for cards.
//!
//! - [`swipe`]: left-swipe to reveal Edit/Delete
//! - [`long_press`]: press-and-hold that opens the quick-actions menu
//!
//! Both recognizers work in logical pixels and hold no reference to the
//! profile they act on; the app layer keys them by [`crate::domain::ProfileId`].

pub mod long_press;
pub mod swipe;

pub use long_press::{LongPressDetector, LONG_PRESS_DELAY_MS, LONG_PRESS_TOLERANCE};
pub use swipe::{SwipeAction, SwipeController, SwipeState, OPEN_FRACTION, REVEAL_DISTANCE};
