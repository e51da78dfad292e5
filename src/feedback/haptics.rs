//! Haptic feedback.
//!
//! Triggers are fire-and-forget: callers never wait on or inspect the result.
//! A terminal has no vibration motor, so the plugin's default implementation
//! records each pattern in the trace log.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Kind of feedback, from a light tap to an error buzz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticKind {
    Light,
    Medium,
    Heavy,
    Success,
    Warning,
    Error,
    Selection,
}

impl HapticKind {
    /// Vibration pattern as alternating wait/vibrate durations in ms.
    #[must_use]
    pub const fn pattern(self) -> &'static [u32] {
        match self {
            Self::Light => &[0, 50],
            Self::Medium => &[0, 100],
            Self::Heavy => &[0, 150],
            Self::Success => &[0, 50, 50, 50],
            Self::Warning => &[0, 100, 50, 100],
            Self::Error => &[0, 150, 100, 150],
            Self::Selection => &[0, 25],
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Selection => "selection",
        }
    }
}

impl fmt::Display for HapticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Haptic output device.
pub trait Haptics: fmt::Debug {
    /// Plays `kind` if haptics are enabled.
    fn trigger(&self, kind: HapticKind);

    fn set_enabled(&mut self, enabled: bool);

    fn is_enabled(&self) -> bool;
}

/// Writes each triggered pattern to the trace log.
#[derive(Debug, Clone)]
pub struct LoggingHaptics {
    enabled: bool,
}

impl LoggingHaptics {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for LoggingHaptics {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Haptics for LoggingHaptics {
    fn trigger(&self, kind: HapticKind) {
        if self.enabled {
            tracing::debug!(kind = %kind, pattern = ?kind.pattern(), "haptic feedback");
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Keeps every played kind in a shared in-memory log.
///
/// Clones share the same log, so a caller can hand one clone to the app and
/// read the other back.
#[derive(Debug, Clone, Default)]
pub struct RecordingHaptics {
    played: Rc<RefCell<Vec<HapticKind>>>,
    disabled: bool,
}

impl RecordingHaptics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Kinds played so far, oldest first.
    #[must_use]
    pub fn played(&self) -> Vec<HapticKind> {
        self.played.borrow().clone()
    }

    /// Empties the log.
    pub fn clear(&self) {
        self.played.borrow_mut().clear();
    }
}

impl Haptics for RecordingHaptics {
    fn trigger(&self, kind: HapticKind) {
        if !self.disabled {
            self.played.borrow_mut().push(kind);
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    fn is_enabled(&self) -> bool {
        !self.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_alternate_wait_and_vibrate() {
        assert_eq!(HapticKind::Success.pattern(), &[0, 50, 50, 50]);
        assert_eq!(HapticKind::Error.pattern(), &[0, 150, 100, 150]);
        assert_eq!(HapticKind::Selection.pattern(), &[0, 25]);
    }

    #[test]
    fn disabled_device_plays_nothing() {
        let log = RecordingHaptics::new();
        let mut device = log.clone();

        device.trigger(HapticKind::Light);
        device.set_enabled(false);
        device.trigger(HapticKind::Heavy);
        assert!(!device.is_enabled());

        assert_eq!(log.played(), vec![HapticKind::Light]);
    }

    #[test]
    fn logging_device_toggles() {
        let mut device = LoggingHaptics::default();
        assert!(device.is_enabled());
        device.set_enabled(false);
        device.trigger(HapticKind::Warning);
        assert!(!device.is_enabled());
    }
}
