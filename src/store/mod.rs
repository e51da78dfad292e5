//! In-memory profile store.
//!
//! The store is an ordered sequence of [`Profile`]s where insertion order is
//! display order: the most recently added profile comes first. It is mutated
//! only by [`ProfileStore::add`] (prepend) and [`ProfileStore::remove`]
//! (delete by id), and it is never persisted.
//!
//! # Identifiers
//!
//! New ids are derived from the creation time in milliseconds. When two
//! profiles are added within the same millisecond, or a derived id is already
//! taken, the counter moves forward until it is free, so ids stay unique for
//! the store's lifetime.
//!
//! # Example
//!
//! ```rust
//! use profile_deck::domain::NewProfile;
//! use profile_deck::store::ProfileStore;
//!
//! let mut store = ProfileStore::new(vec![]);
//! let id = store.add(NewProfile { name: "Ada".into(), ..NewProfile::default() }).id.clone();
//! assert_eq!(store.list()[0].id, id);
//! store.remove(&id);
//! assert!(store.is_empty());
//! ```

pub mod seed;

pub use seed::{parse_profiles, seed_profiles};

use crate::domain::error::Result;
use crate::domain::{NewProfile, Profile, ProfileId};
use std::collections::HashSet;

/// Ordered, in-memory collection of profiles.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: Vec<Profile>,

    /// Every id ever handed out or seeded, including removed ones.
    issued: HashSet<ProfileId>,

    /// Last millisecond value used to derive an id.
    last_stamp: i64,
}

impl ProfileStore {
    /// Creates a store holding `seed` in the given order.
    ///
    /// Seed entries whose id repeats an earlier entry are dropped.
    #[must_use]
    pub fn new(seed: Vec<Profile>) -> Self {
        let mut issued = HashSet::with_capacity(seed.len());
        let mut profiles = Vec::with_capacity(seed.len());

        for profile in seed {
            if issued.insert(profile.id.clone()) {
                profiles.push(profile);
            } else {
                tracing::warn!(id = %profile.id, "dropping seed profile with duplicate id");
            }
        }

        tracing::debug!(count = profiles.len(), "profile store initialized");

        Self {
            profiles,
            issued,
            last_stamp: 0,
        }
    }

    /// Creates a store from the embedded seed set.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded seed data cannot be decoded.
    pub fn from_seed() -> Result<Self> {
        Ok(Self::new(seed_profiles()?))
    }

    /// Assigns a fresh id to `draft` and inserts it at the front.
    ///
    /// Returns the stored profile.
    pub fn add(&mut self, draft: NewProfile) -> &Profile {
        let _span = tracing::debug_span!("store_add", name = %draft.name).entered();

        let id = self.next_id(chrono::Utc::now().timestamp_millis());
        tracing::debug!(id = %id, "profile added");

        self.profiles.insert(0, draft.with_id(id));
        &self.profiles[0]
    }

    /// Removes the profile with `id`.
    ///
    /// Unknown ids are a no-op and return `None`.
    pub fn remove(&mut self, id: &ProfileId) -> Option<Profile> {
        let _span = tracing::debug_span!("store_remove", id = %id).entered();

        let Some(position) = self.profiles.iter().position(|p| &p.id == id) else {
            tracing::debug!("profile not found, nothing removed");
            return None;
        };

        let removed = self.profiles.remove(position);
        tracing::debug!(remaining = self.profiles.len(), "profile removed");
        Some(removed)
    }

    /// All profiles in display order.
    #[must_use]
    pub fn list(&self) -> &[Profile] {
        &self.profiles
    }

    /// Looks up a profile by id.
    #[must_use]
    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| &p.id == id)
    }

    /// Returns `true` if a profile with `id` is currently stored.
    #[must_use]
    pub fn contains(&self, id: &ProfileId) -> bool {
        self.get(id).is_some()
    }

    /// Number of stored profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` when the store holds no profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Derives an unused id from `now_millis`.
    fn next_id(&mut self, now_millis: i64) -> ProfileId {
        let mut stamp = now_millis.max(self.last_stamp.saturating_add(1));

        loop {
            let candidate = ProfileId::new(stamp.to_string());
            if self.issued.insert(candidate.clone()) {
                self.last_stamp = stamp;
                return candidate;
            }
            stamp = stamp.saturating_add(1);
        }
    }
}
