//! Autocomplete suggestions for the search bar.
//!
//! Suggestions are recomputed from scratch on each call and capped at
//! [`MAX_SUGGESTIONS`]. Each profile contributes candidates from four sources,
//! checked in order: its name, its title, the company part of its email
//! domain, and the longer words of its bio.

use crate::domain::Profile;

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Minimum trimmed query length before suggestions appear.
pub const MIN_QUERY_CHARS: usize = 2;

/// Bio words must be longer than this to be suggested.
const MIN_BIO_WORD_CHARS: usize = 3;

/// Upper-cases the first character and leaves the rest untouched.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Ordered set with exact-string uniqueness and a hard cap.
struct Candidates {
    items: Vec<String>,
}

impl Candidates {
    const fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn is_full(&self) -> bool {
        self.items.len() >= MAX_SUGGESTIONS
    }

    fn push(&mut self, candidate: String) {
        if !self.is_full() && !self.items.contains(&candidate) {
            self.items.push(candidate);
        }
    }
}

/// Generates up to [`MAX_SUGGESTIONS`] completions for `term`.
///
/// Returns nothing when the trimmed term is shorter than
/// [`MIN_QUERY_CHARS`]. Matching is case-insensitive; uniqueness is by exact
/// string, so differently-cased variants from different sources can both
/// appear.
///
/// # Examples
///
/// ```
/// use profile_deck::search::suggest;
/// use profile_deck::store::seed_profiles;
///
/// let profiles = seed_profiles().unwrap();
/// assert_eq!(suggest(&profiles, "data"), vec!["Data Scientist", "Datalab", "Data"]);
/// assert!(suggest(&profiles, "d").is_empty());
/// ```
#[must_use]
pub fn suggest(profiles: &[Profile], term: &str) -> Vec<String> {
    if term.trim().chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let query = term.to_lowercase();
    let mut candidates = Candidates::new();

    for profile in profiles {
        if candidates.is_full() {
            break;
        }

        if profile.name.to_lowercase().contains(&query) {
            candidates.push(profile.name.clone());
        }

        if profile.title.to_lowercase().contains(&query) {
            candidates.push(profile.title.clone());
        }

        let company = profile.email_company();
        if company.to_lowercase().contains(&query) {
            candidates.push(capitalize_first(company));
        }

        for word in profile.bio.to_lowercase().split_whitespace() {
            if word.chars().count() > MIN_BIO_WORD_CHARS && word.contains(&query) {
                candidates.push(capitalize_first(word));
            }
        }
    }

    tracing::trace!(count = candidates.items.len(), "suggestions generated");
    candidates.items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewProfile, ProfileId};
    use crate::store::seed_profiles;
    use proptest::prelude::*;

    fn profile(name: &str, title: &str, email: &str, bio: &str) -> Profile {
        NewProfile {
            name: name.into(),
            title: title.into(),
            email: email.into(),
            bio: bio.into(),
            ..NewProfile::default()
        }
        .with_id(ProfileId::new(name))
    }

    #[test]
    fn short_terms_yield_nothing() {
        let profiles = seed_profiles().unwrap();
        assert!(suggest(&profiles, "").is_empty());
        assert!(suggest(&profiles, "a").is_empty());
        assert!(suggest(&profiles, "  a  ").is_empty());
    }

    #[test]
    fn sources_are_checked_in_order_per_profile() {
        let profiles = vec![profile("Ann Dev", "Developer", "ann@devshop.io", "the devious dev")];
        assert_eq!(
            suggest(&profiles, "dev"),
            vec!["Ann Dev", "Developer", "Devshop", "Devious"]
        );
    }

    #[test]
    fn bio_words_need_more_than_three_chars() {
        let profiles = vec![profile("X", "Y", "x@y.z", "aws awsome aws-cli")];
        assert_eq!(suggest(&profiles, "aws"), vec!["Awsome", "Aws-cli"]);
    }

    #[test]
    fn company_is_matched_on_segment_before_dot() {
        let profiles = vec![profile("X", "Y", "x@techcorp.com", "")];
        assert!(suggest(&profiles, "com").is_empty());
        assert_eq!(suggest(&profiles, "corp"), vec!["Techcorp"]);
    }

    #[test]
    fn results_are_capped_at_five() {
        let profiles = seed_profiles().unwrap();
        let results = suggest(&profiles, "er");
        assert_eq!(results.len(), MAX_SUGGESTIONS);
        assert_eq!(results[0], "Senior Software Engineer");
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let profiles = vec![
            profile("Mobile", "Lead", "a@b.c", ""),
            profile("Z", "Q", "a@b.c", "mobile first"),
        ];
        assert_eq!(suggest(&profiles, "mobile"), vec!["Mobile"]);

        let profiles = vec![profile("mobile", "Lead", "a@b.c", "mobile")];
        assert_eq!(suggest(&profiles, "mobile"), vec!["mobile", "Mobile"]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn suggestions_are_bounded_distinct_and_contain_term(
            entries in proptest::collection::vec(
                ("[A-Za-z ]{0,10}", "[A-Za-z ]{0,10}", "[a-z]{1,4}@[a-z]{1,6}\\.io", "[A-Za-z ]{0,30}"),
                0..10,
            ),
            term in "[a-zA-Z]{2,3}",
        ) {
            let profiles: Vec<Profile> = entries
                .iter()
                .map(|(n, t, e, b)| profile(n, t, e, b))
                .collect();

            let results = suggest(&profiles, &term);
            let query = term.to_lowercase();

            prop_assert!(results.len() <= MAX_SUGGESTIONS);
            for (i, item) in results.iter().enumerate() {
                prop_assert!(item.to_lowercase().contains(&query));
                prop_assert!(!results[i + 1..].contains(item));
            }
        }
    }
}
