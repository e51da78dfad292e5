//! Contact links: call, email and message via URL schemes.
//!
//! The app builds a [`ContactLink`], asks the [`UrlOpener`] whether the device
//! can handle it, and either hands the URL to the runtime or shows an
//! "Action not supported" notice.

use std::collections::BTreeSet;
use std::fmt;

/// How to reach a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    Call,
    Email,
    Message,
}

impl ContactKind {
    /// URL scheme, without the trailing colon.
    #[must_use]
    pub const fn scheme(self) -> &'static str {
        match self {
            Self::Call => "tel",
            Self::Email => "mailto",
            Self::Message => "sms",
        }
    }

    /// Verb used in notices ("Cannot call ...").
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Button label on a card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// A contact action bound to a concrete phone number or address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub value: String,
}

impl ContactLink {
    pub fn new(kind: ContactKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// `scheme:value`, e.g. `tel:+1 (555) 123-4567`.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}:{}", self.kind.scheme(), self.value)
    }
}

impl fmt::Display for ContactLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.scheme(), self.value)
    }
}

/// Decides which URLs the host can open.
pub trait UrlOpener: fmt::Debug {
    fn can_open(&self, url: &str) -> bool;
}

/// Opens URLs whose scheme is on an allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeOpener {
    schemes: BTreeSet<String>,
}

impl SchemeOpener {
    /// Allows each scheme in `schemes` (case-insensitive, colon optional).
    pub fn new<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let schemes = schemes
            .into_iter()
            .map(|s| s.as_ref().trim().trim_end_matches(':').to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { schemes }
    }

    /// Parses a comma-separated scheme list such as `"mailto, tel"`.
    #[must_use]
    pub fn from_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(String::as_str)
    }
}

impl UrlOpener for SchemeOpener {
    fn can_open(&self, url: &str) -> bool {
        url.split_once(':')
            .is_some_and(|(scheme, _)| self.schemes.contains(&scheme.to_ascii_lowercase()))
    }
}
