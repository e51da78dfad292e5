//! Seed profiles loaded at start-up.
//!
//! The seed set ships inside the binary as JSON, so the plugin needs no
//! filesystem access to show its initial grid.

use crate::domain::error::{ProfileDeckError, Result};
use crate::domain::Profile;

const SEED_JSON: &str = include_str!("../../data/seed_profiles.json");

/// Decodes the embedded seed profiles.
///
/// # Errors
///
/// Returns [`ProfileDeckError::Seed`] if the embedded JSON does not decode.
pub fn seed_profiles() -> Result<Vec<Profile>> {
    parse_profiles(SEED_JSON)
}

/// Decodes a JSON array of profiles.
///
/// # Errors
///
/// Returns [`ProfileDeckError::Seed`] on malformed input.
pub fn parse_profiles(json: &str) -> Result<Vec<Profile>> {
    let profiles: Vec<Profile> = serde_json::from_str(json)
        .map_err(|e| ProfileDeckError::Seed(format!("failed to parse seed profiles: {e}")))?;

    tracing::debug!(count = profiles.len(), "decoded seed profiles");
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_seed_decodes() {
        let profiles = seed_profiles().unwrap();
        assert_eq!(profiles.len(), 5);
        assert_eq!(profiles[0].name, "Sarah Johnson");
        assert_eq!(profiles[2].email_company(), "datalab");
    }

    #[test]
    fn malformed_seed_is_a_seed_error() {
        let err = parse_profiles("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, ProfileDeckError::Seed(_)));
    }
}
