//! Static asset copying.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{ReframeError, Result};

/// Copy the asset tree verbatim into the target's asset root. Returns the
/// number of files copied; a missing source is an empty copy, not an error.
pub fn copy_assets(src: &Path, dest: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let rel = path.strip_prefix(src).expect("entry must be under src");
        let target = dest.join(rel);

        if entry.file_type().is_dir() {
            continue;
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ReframeError::Io {
                context: format!("creating directory {}", parent.display()),
                source: e,
            })?;
        }
        std::fs::copy(path, &target).map_err(|e| ReframeError::Io {
            context: format!("copying {} to {}", path.display(), target.display()),
            source: e,
        })?;
        copied += 1;
    }

    Ok(copied)
}
