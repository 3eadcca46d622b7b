//! Session state: who is logged in, and which numbers the generator
//! has already produced this session. A session spans login to logout;
//! logout removes the file, which also resets duplicate tracking so it
//! cannot leak between identities on the same device.

use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub current_user: Option<String>,
    /// Device-wide for the session, not per-user.
    #[serde(default)]
    pub generated_numbers: BTreeSet<String>,
}

impl Session {
    pub fn load(path: &Path) -> Session {
        fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn clear(path: &Path) -> AppResult<()> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
