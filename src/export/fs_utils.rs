use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Refuse to clobber an existing file unless the caller forces it.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            return Err(AppError::Export(format!(
                "output directory {} does not exist",
                dir.display()
            )));
        }
    }

    Ok(())
}
