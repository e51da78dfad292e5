//! Domain layer for profile-deck.
//!
//! Core types with no dependency on Zellij or rendering: the [`Profile`]
//! record, the add-profile form and its validation, and the crate's error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`profile`]: Profile record, identity and social links
//! - [`validation`]: Add-profile form fields and validation rules
//!
//! # Examples
//!
//! ```
//! use profile_deck::domain::{NewProfile, SocialLinks};
//!
//! let draft = NewProfile {
//!     name: "Ada Lovelace".to_string(),
//!     title: "Analyst".to_string(),
//!     email: "ada@engine.org".to_string(),
//!     phone: "+44 20 0000".to_string(),
//!     bio: "Writes programs for the analytical engine".to_string(),
//!     avatar: "https://example.com/ada.jpg".to_string(),
//!     social_media: SocialLinks::default(),
//! };
//! assert_eq!(draft.email_company(), "engine");
//! ```

pub mod error;
pub mod profile;
pub mod validation;

pub use error::{ProfileDeckError, Result};
pub use profile::{NewProfile, Profile, ProfileId, SocialLinks, SocialPlatform};
pub use validation::{FormField, ProfileForm, ValidationErrors};
