pub mod schema;

use std::path::Path;

pub use schema::{CaseStyle, FileConfig, Framework, Pipeline, ProjectConfig, UiLibrary};

use crate::error::{ReframeError, Result};

/// Load an optional `reframe.toml`. Values in it are merged under CLI flags.
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| ReframeError::Io {
        context: format!("reading {}", path.display()),
        source: e,
    })?;
    toml::from_str(&raw).map_err(|e| ReframeError::ConfigParse { source: e })
}
