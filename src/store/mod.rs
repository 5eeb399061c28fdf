pub mod drafts;
pub mod session;

use std::fs;
use std::path::Path;

use crate::error::AdminError;

/// Write-then-rename so a crash mid-write never truncates the store file.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), AdminError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| AdminError::Storage(format!("create {}: {err}", parent.display())))?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes)
        .map_err(|err| AdminError::Storage(format!("write {}: {err}", tmp.display())))?;
    fs::rename(&tmp, path)
        .map_err(|err| AdminError::Storage(format!("rename {}: {err}", path.display())))?;

    Ok(())
}
