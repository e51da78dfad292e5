//! Add-profile form fields and validation.
//!
//! The form holds raw text per [`FormField`]. [`ProfileForm::validate`] turns it
//! into a [`NewProfile`] or a set of per-field messages. Validation errors never
//! escape the form: the application layer keeps the form open and shows the
//! messages inline until the user fixes them or cancels.

use crate::domain::profile::{NewProfile, SocialLinks};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Loose address shape: something, `@`, something, `.`, something.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

/// Compiled [`EMAIL_PATTERN`].
///
/// # Panics
///
/// Panics if the constant pattern fails to compile (should never occur).
fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern should always compile"))
}

/// One input of the add-profile form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Title,
    Email,
    Phone,
    Bio,
    Avatar,
    LinkedIn,
    Twitter,
    GitHub,
}

impl FormField {
    /// All fields in tab order.
    pub const ALL: [Self; 9] = [
        Self::Name,
        Self::Title,
        Self::Email,
        Self::Phone,
        Self::Bio,
        Self::Avatar,
        Self::LinkedIn,
        Self::Twitter,
        Self::GitHub,
    ];

    /// Label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name *",
            Self::Title => "Title *",
            Self::Email => "Email *",
            Self::Phone => "Phone *",
            Self::Bio => "Bio *",
            Self::Avatar => "Avatar URL *",
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::GitHub => "GitHub",
        }
    }

    /// Message shown when a required field is left blank.
    ///
    /// Social links are optional and return `None`.
    #[must_use]
    pub const fn required_message(self) -> Option<&'static str> {
        match self {
            Self::Name => Some("Name is required"),
            Self::Title => Some("Title is required"),
            Self::Email => Some("Email is required"),
            Self::Phone => Some("Phone number is required"),
            Self::Bio => Some("Bio is required"),
            Self::Avatar => Some("Avatar URL is required"),
            Self::LinkedIn | Self::Twitter | Self::GitHub => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// The field after this one, wrapping to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The field before this one, wrapping to the last.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<FormField, &'static str>,
}

impl ValidationErrors {
    /// Returns `true` when no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of fields with an error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Message for `field`, if it failed validation.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    /// Drops the message for `field`.
    pub fn clear(&mut self, field: FormField) {
        self.messages.remove(&field);
    }

    fn insert(&mut self, field: FormField, message: &'static str) {
        self.messages.insert(field, message);
    }

    /// Iterates over `(field, message)` pairs in tab order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.messages.iter().map(|(field, message)| (*field, *message))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{field:?}: {message}"))
            .collect();
        f.write_str(&joined.join(", "))
    }
}

/// Raw add-profile form state: one text value per field, the focused field,
/// and the errors from the last submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    values: [String; 9],
    focused: FormField,
    errors: ValidationErrors,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            values: Default::default(),
            focused: FormField::Name,
            errors: ValidationErrors::default(),
        }
    }
}

impl ProfileForm {
    /// Creates an empty form focused on the name field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw text of `field`.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    /// Replaces the text of `field` and clears its error.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
        self.errors.clear(field);
    }

    /// Appends a character to the focused field and clears its error.
    pub fn push_char(&mut self, c: char) {
        let field = self.focused;
        self.values[field.index()].push(c);
        self.errors.clear(field);
    }

    /// Removes the last character of the focused field.
    pub fn pop_char(&mut self) {
        let field = self.focused;
        self.values[field.index()].pop();
        self.errors.clear(field);
    }

    /// The field receiving typed characters.
    #[must_use]
    pub const fn focused(&self) -> FormField {
        self.focused
    }

    /// Moves focus to the next field.
    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    /// Moves focus to the previous field.
    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Errors from the most recent [`ProfileForm::submit`].
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Validates the current values without touching stored errors.
    ///
    /// Required fields must be non-blank after trimming; the email must also
    /// look like an address. On success all values are trimmed and blank
    /// social links become `None`.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    ///
    /// # Examples
    ///
    /// ```
    /// use profile_deck::domain::{FormField, ProfileForm};
    ///
    /// let mut form = ProfileForm::new();
    /// form.set(FormField::Email, "not-an-email");
    /// let errors = form.validate().unwrap_err();
    /// assert_eq!(errors.get(FormField::Email), Some("Please enter a valid email"));
    /// assert_eq!(errors.get(FormField::Name), Some("Name is required"));
    /// ```
    pub fn validate(&self) -> Result<NewProfile, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for field in FormField::ALL {
            if let Some(message) = field.required_message() {
                if self.value(field).trim().is_empty() {
                    errors.insert(field, message);
                }
            }
        }

        let email = self.value(FormField::Email);
        if !email.trim().is_empty() && !email_regex().is_match(email) {
            errors.insert(FormField::Email, "Please enter a valid email");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let trimmed = |field: FormField| self.value(field).trim().to_string();
        let optional = |field: FormField| {
            let value = self.value(field).trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        Ok(NewProfile {
            name: trimmed(FormField::Name),
            title: trimmed(FormField::Title),
            email: trimmed(FormField::Email),
            phone: trimmed(FormField::Phone),
            bio: trimmed(FormField::Bio),
            avatar: trimmed(FormField::Avatar),
            social_media: SocialLinks {
                linkedin: optional(FormField::LinkedIn),
                twitter: optional(FormField::Twitter),
                github: optional(FormField::GitHub),
            },
        })
    }

    /// Validates and records the outcome.
    ///
    /// On failure the errors are stored on the form for inline display and
    /// also returned. On success stored errors are cleared.
    ///
    /// # Errors
    ///
    /// Same as [`ProfileForm::validate`].
    pub fn submit(&mut self) -> Result<NewProfile, ValidationErrors> {
        match self.validate() {
            Ok(profile) => {
                self.errors = ValidationErrors::default();
                Ok(profile)
            }
            Err(errors) => {
                tracing::debug!(error_count = errors.len(), "profile form rejected");
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProfileForm {
        let mut form = ProfileForm::new();
        form.set(FormField::Name, "  Grace Hopper ");
        form.set(FormField::Title, "Rear Admiral");
        form.set(FormField::Email, "grace@navy.mil");
        form.set(FormField::Phone, "+1 555 0100");
        form.set(FormField::Bio, "Compiler pioneer");
        form.set(FormField::Avatar, "https://example.com/grace.jpg");
        form
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ProfileForm::new().validate().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(FormField::Phone), Some("Phone number is required"));
        assert_eq!(errors.get(FormField::Avatar), Some("Avatar URL is required"));
        assert_eq!(errors.get(FormField::GitHub), None);
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let mut form = filled_form();
        form.set(FormField::Bio, "   ");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Bio), Some("Bio is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled_form();
        form.set(FormField::Email, "grace@navy");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Email), Some("Please enter a valid email"));
    }

    #[test]
    fn valid_form_trims_values_and_drops_blank_links() {
        let mut form = filled_form();
        form.set(FormField::GitHub, " https://github.com/grace ");
        form.set(FormField::Twitter, "  ");

        let profile = form.validate().unwrap();
        assert_eq!(profile.name, "Grace Hopper");
        assert_eq!(profile.social_media.github.as_deref(), Some("https://github.com/grace"));
        assert_eq!(profile.social_media.twitter, None);
        assert_eq!(profile.social_media.linkedin, None);
    }

    #[test]
    fn typing_clears_the_focused_fields_error() {
        let mut form = ProfileForm::new();
        assert!(form.submit().is_err());
        assert!(form.errors().get(FormField::Name).is_some());

        form.push_char('G');
        assert_eq!(form.errors().get(FormField::Name), None);
        assert!(form.errors().get(FormField::Title).is_some());
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut form = ProfileForm::new();
        form.focus_previous();
        assert_eq!(form.focused(), FormField::GitHub);
        form.focus_next();
        assert_eq!(form.focused(), FormField::Name);
    }
}
