//! Side effects for the plugin runtime to carry out.
//!
//! The event handler mutates [`crate::app::AppState`] directly and returns
//! these commands for anything that needs the host: timers, opening URLs,
//! hiding the pane. Haptics are not actions; they fire synchronously through
//! the [`crate::feedback::Haptics`] collaborator.

use crate::feedback::ContactLink;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Arms the simulated refresh; the runtime answers with
    /// [`crate::app::Event::RefreshCompleted`] once `seconds` have passed.
    ScheduleRefresh { seconds: f64 },

    /// Requests a [`crate::app::Event::Tick`] after `seconds`, for
    /// long-press timing and swipe animation frames.
    ScheduleTick { seconds: f64 },

    /// Hands a contact URL to the host. A failure comes back as
    /// [`crate::app::Event::ContactFailed`].
    OpenUrl(ContactLink),
}
