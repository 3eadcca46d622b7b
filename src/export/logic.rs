//! High-level export flow: serialize the in-memory database and hand
//! the document to the filesystem. Failures here leave the in-memory
//! state untouched; the caller reports them and carries on.

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::xml;
use crate::models::UserDatabase;
use std::fs;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the full database as a pretty-printed XML document.
    ///
    /// The produced file matches the baseline schema and is meant to
    /// replace the baseline manually, completing the round trip across
    /// sessions.
    pub fn export(db: &UserDatabase, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let document = xml::serialize(db)?;
        fs::write(path, document)?;
        Ok(())
    }
}
