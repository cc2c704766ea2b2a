//! Source-tree discovery for pages and partials.

use std::path::{Path, PathBuf};

use console::style;
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{ReframeError, Result};
use crate::restructure::path_key;

/// One `.html` source file, with its path relative to the scanned root.
#[derive(Debug, Clone)]
pub struct ScannedPage {
    pub abs: PathBuf,
    pub rel: PathBuf,
}

/// Collect `.html` files under `root`, skipping `skip_dirs` subtrees and
/// anything matching the exclude globs. Results are sorted for
/// deterministic planning.
pub fn scan_pages(root: &Path, skip_dirs: &[&Path], exclude: &[String]) -> Result<Vec<ScannedPage>> {
    if !root.is_dir() {
        return Err(ReframeError::SourceMissing {
            path: root.to_path_buf(),
        });
    }

    let exclude_set = build_glob_set(exclude)?;
    let mut pages = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().map_or(true, |ext| ext != "html") {
            continue;
        }
        if skip_dirs.iter().any(|dir| path.starts_with(dir)) {
            continue;
        }

        let rel = relative_or_rootless(path, root);
        if exclude_set.is_match(path_key(&rel)) {
            continue;
        }

        pages.push(ScannedPage {
            abs: path.to_path_buf(),
            rel,
        });
    }

    pages.sort_by(|a, b| a.rel.cmp(&b.rel));
    Ok(pages)
}

/// A file that is somehow not under the claimed root degrades to a bare
/// filename rather than aborting the batch.
pub fn relative_or_rootless(file: &Path, root: &Path) -> PathBuf {
    match file.strip_prefix(root) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => {
            eprintln!(
                "{} {} is not under {}; using the filename only",
                style("warning:").yellow().bold(),
                file.display(),
                root.display()
            );
            PathBuf::from(file.file_name().unwrap_or_default())
        }
    }
}

pub fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| ReframeError::GlobPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| ReframeError::GlobPattern {
        pattern: "<combined>".into(),
        source: e,
    })
}

/// Detect binary files by sniffing the first 8KB.
pub fn is_binary_file(path: &Path) -> bool {
    use std::io::Read;

    let Ok(file) = std::fs::File::open(path) else {
        return false;
    };

    let mut buf = [0u8; 8192];
    let Ok(n) = file.take(8192).read(&mut buf) else {
        return false;
    };

    !content_inspector::inspect(&buf[..n]).is_text()
}
