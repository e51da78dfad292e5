//! Substring search over profiles.
//!
//! A profile matches when the lower-cased query appears anywhere in its
//! composite searchable text. The filter is stable and pure, so the app calls
//! it on every keystroke.

use crate::domain::Profile;

/// Builds the lower-cased text a query is matched against.
///
/// Fields are joined with single spaces in this order: name, title, email,
/// bio, phone, email company (domain segment before its first dot), then each
/// non-empty social link (linkedin, twitter, github).
///
/// # Examples
///
/// ```
/// use profile_deck::domain::{NewProfile, ProfileId};
/// use profile_deck::search::searchable_text;
///
/// let profile = NewProfile {
///     name: "David Kim".into(),
///     email: "david.kim@CloudOps.io".into(),
///     ..NewProfile::default()
/// }
/// .with_id(ProfileId::new("4"));
///
/// assert!(searchable_text(&profile).ends_with(" cloudops"));
/// ```
#[must_use]
pub fn searchable_text(profile: &Profile) -> String {
    let mut parts: Vec<&str> = vec![
        profile.name.as_str(),
        profile.title.as_str(),
        profile.email.as_str(),
        profile.bio.as_str(),
        profile.phone.as_str(),
        profile.email_company(),
    ];
    parts.extend(profile.social_media.iter().map(|(_, uri)| uri));

    parts.join(" ").to_lowercase()
}

/// Returns `true` if `profile` matches an already lower-cased `query`.
fn matches(profile: &Profile, query: &str) -> bool {
    searchable_text(profile).contains(query)
}

/// Indices into `profiles` of the entries matching `term`, in input order.
///
/// A blank term (empty after trimming) selects every index.
#[must_use]
pub fn filter_indices(profiles: &[Profile], term: &str) -> Vec<usize> {
    if term.trim().is_empty() {
        return (0..profiles.len()).collect();
    }

    let query = term.to_lowercase();
    profiles
        .iter()
        .enumerate()
        .filter(|(_, profile)| matches(profile, &query))
        .map(|(index, _)| index)
        .collect()
}

/// Filters `profiles` by `term`, keeping input order.
///
/// A blank term returns the input unchanged. Otherwise the lower-cased term
/// (not trimmed) must be a substring of [`searchable_text`].
#[must_use]
pub fn filter_profiles(profiles: &[Profile], term: &str) -> Vec<Profile> {
    let _span = tracing::debug_span!(
        "filter_profiles",
        total = profiles.len(),
        term_len = term.len()
    )
    .entered();

    let filtered: Vec<Profile> = filter_indices(profiles, term)
        .into_iter()
        .map(|index| profiles[index].clone())
        .collect();

    tracing::trace!(matched = filtered.len(), "search filter applied");
    filtered
}
