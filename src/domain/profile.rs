//! Profile domain model.
//!
//! A [`Profile`] is a single contact record: identity, descriptive fields and
//! optional social-media links. Profiles are created from a [`NewProfile`]
//! draft by the store, which assigns the [`ProfileId`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, unique profile identifier.
///
/// Assigned once by [`crate::store::ProfileStore::add`] (or carried by seed
/// data) and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// Wraps a raw identifier string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Social networks a profile can link to.
///
/// The key set is fixed; iteration order ([`SocialPlatform::ALL`]) is the
/// order links are searched and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    LinkedIn,
    Twitter,
    GitHub,
}

impl SocialPlatform {
    /// Every platform, in display order.
    pub const ALL: [Self; 3] = [Self::LinkedIn, Self::Twitter, Self::GitHub];

    /// Short label used on cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "in",
            Self::Twitter => "tw",
            Self::GitHub => "gh",
        }
    }
}

/// Optional social-media URIs keyed by [`SocialPlatform`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl SocialLinks {
    /// Returns the URI stored for `platform`, if any.
    #[must_use]
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::LinkedIn => self.linkedin.as_deref(),
            SocialPlatform::Twitter => self.twitter.as_deref(),
            SocialPlatform::GitHub => self.github.as_deref(),
        }
    }

    /// Iterates over the non-empty links in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SocialPlatform, &str)> + '_ {
        SocialPlatform::ALL
            .into_iter()
            .filter_map(|platform| {
                self.get(platform)
                    .filter(|uri| !uri.is_empty())
                    .map(|uri| (platform, uri))
            })
    }
}

/// A profile that has not been assigned an id yet.
///
/// Produced by the add-profile form and consumed by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub avatar: String,
    #[serde(default)]
    pub social_media: SocialLinks,
}

impl NewProfile {
    /// Attaches an identifier, producing a full [`Profile`].
    #[must_use]
    pub fn with_id(self, id: ProfileId) -> Profile {
        Profile {
            id,
            name: self.name,
            title: self.title,
            email: self.email,
            phone: self.phone,
            bio: self.bio,
            avatar: self.avatar,
            social_media: self.social_media,
        }
    }

    /// Company name guessed from the email domain.
    ///
    /// See [`email_company`].
    #[must_use]
    pub fn email_company(&self) -> &str {
        email_company(&self.email)
    }
}

/// A contact profile held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub avatar: String,
    #[serde(default)]
    pub social_media: SocialLinks,
}

impl Profile {
    /// Company name guessed from the email domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use profile_deck::domain::{NewProfile, ProfileId};
    ///
    /// let profile = NewProfile {
    ///     email: "sarah.johnson@techcorp.com".to_string(),
    ///     ..NewProfile::default()
    /// }
    /// .with_id(ProfileId::new("1"));
    /// assert_eq!(profile.email_company(), "techcorp");
    /// ```
    #[must_use]
    pub fn email_company(&self) -> &str {
        email_company(&self.email)
    }

    /// Text after the `@` of the email address, up to any second `@`.
    #[must_use]
    pub fn email_domain(&self) -> Option<&str> {
        email_domain(&self.email)
    }

    /// Up to two upper-cased initials taken from the name.
    ///
    /// Used by the avatar placeholder. Returns `"?"` for a blank name.
    #[must_use]
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

/// Returns the domain part of an email address.
///
/// Splits on `@` and takes the second segment, so `a@b@c` yields `b`.
#[must_use]
pub fn email_domain(email: &str) -> Option<&str> {
    email.split('@').nth(1)
}

/// Returns the domain segment before its first dot, or `""` without a domain.
#[must_use]
pub fn email_company(email: &str) -> &str {
    email_domain(email)
        .and_then(|domain| domain.split('.').next())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_company_takes_segment_before_first_dot() {
        assert_eq!(email_company("emily.rodriguez@datalab.ai"), "datalab");
        assert_eq!(email_company("ops@cloud.ops.io"), "cloud");
        assert_eq!(email_company("no-domain"), "");
        assert_eq!(email_company("trailing@"), "");
    }

    #[test]
    fn social_links_skip_missing_and_empty() {
        let links = SocialLinks {
            linkedin: Some("https://linkedin.com/in/x".to_string()),
            twitter: Some(String::new()),
            github: Some("https://github.com/x".to_string()),
        };
        let platforms: Vec<SocialPlatform> = links.iter().map(|(p, _)| p).collect();
        assert_eq!(platforms, vec![SocialPlatform::LinkedIn, SocialPlatform::GitHub]);
    }

    #[test]
    fn initials_use_first_two_words() {
        let profile = NewProfile {
            name: "jessica anne taylor".to_string(),
            ..NewProfile::default()
        }
        .with_id(ProfileId::new("5"));
        assert_eq!(profile.initials(), "JA");

        let blank = NewProfile::default().with_id(ProfileId::new("6"));
        assert_eq!(blank.initials(), "?");
    }

    #[test]
    fn profile_deserializes_camel_case_social_media() {
        let json = r#"{
            "id": "9",
            "name": "N",
            "title": "T",
            "email": "n@x.io",
            "phone": "1",
            "bio": "b",
            "avatar": "a",
            "socialMedia": { "github": "https://github.com/n" }
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, ProfileId::new("9"));
        assert_eq!(profile.social_media.get(SocialPlatform::GitHub), Some("https://github.com/n"));
        assert_eq!(profile.social_media.linkedin, None);
    }
}
