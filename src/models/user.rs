use super::{KitCalculation, PhoneGeneration};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-user history. Insertion order is chronological; the newest entry
/// is always last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    #[serde(default)]
    pub kit_calculations: Vec<KitCalculation>,
    #[serde(default)]
    pub phone_generations: Vec<PhoneGeneration>,
}

/// One account. The username lives as the map key in [`UserDatabase`],
/// so the record itself only carries the digest and the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Opaque hex digest of the password, compared verbatim at login.
    pub password_hash: String,
    #[serde(default)]
    pub history: History,
}

impl UserRecord {
    pub fn new(password_hash: String) -> Self {
        Self {
            password_hash,
            history: History::default(),
        }
    }
}

/// The single authoritative in-memory structure for a session,
/// assembled from baseline + overlay at load time and mutated in
/// memory thereafter. A BTreeMap keeps usernames unique and makes
/// exports deterministic.
pub type UserDatabase = BTreeMap<String, UserRecord>;
