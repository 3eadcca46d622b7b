//! Overlay store adapter: the locally persisted state layered on top
//! of the baseline. The whole database snapshot is rewritten on every
//! mutation, so a crash can at worst lose the most recent write.

use crate::errors::AppResult;
use crate::models::UserDatabase;
use crate::ui::messages;
use std::fs;
use std::path::Path;

/// Load the overlay blob. Missing file means no overlay yet; a corrupt
/// file is recovered by starting from an empty overlay.
pub fn load(path: &Path) -> UserDatabase {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(_) => return UserDatabase::new(),
    };

    match serde_json::from_str(&text) {
        Ok(db) => db,
        Err(e) => {
            messages::warning(format!(
                "Could not parse overlay {}: {e}; discarding local state",
                path.display()
            ));
            UserDatabase::new()
        }
    }
}

/// Persist the full database snapshot.
pub fn save(path: &Path, db: &UserDatabase) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(db)?;
    fs::write(path, json)?;
    Ok(())
}

/// Drop the overlay entirely (demo reset).
pub fn clear(path: &Path) -> AppResult<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
