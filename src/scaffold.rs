//! Boilerplate scaffolding through the system toolchain.
//!
//! Generators run through the user's own binaries (`git`, `composer`,
//! `dotnet`, ...) so their credential and toolchain setup is inherited. A
//! scaffold failure abandons the rest of the run; there is no compensating
//! cleanup.

use std::path::{Path, PathBuf};
use std::process::Command;

use console::style;
use walkdir::WalkDir;

use crate::config::ProjectConfig;
use crate::emit::{Scaffold, TemplateEmitter};
use crate::error::{ReframeError, Result};

pub fn run(config: &ProjectConfig, emitter: &dyn TemplateEmitter) -> Result<()> {
    let Some(scaffold) = emitter.scaffold(config) else {
        println!(
            "{} {} needs no boilerplate scaffold",
            style("i").blue().bold(),
            config.framework
        );
        return Ok(());
    };

    std::fs::create_dir_all(&config.dest_path).map_err(|e| ReframeError::Io {
        context: format!("creating destination {}", config.dest_path.display()),
        source: e,
    })?;

    match scaffold {
        Scaffold::Clone { url } => {
            clone_boilerplate(&url, &config.dest_path)?;
            remove_git_dirs(&config.dest_path)?;
        }
        Scaffold::Command(argv) => run_generator(&argv, config)?,
    }

    println!(
        "{} scaffolded {} boilerplate in {}",
        style("✓").green().bold(),
        config.framework,
        style(config.dest_path.display()).cyan()
    );
    Ok(())
}

fn run_generator(argv: &[String], config: &ProjectConfig) -> Result<()> {
    let Some((program, args)) = argv.split_first() else {
        return Err(ReframeError::ScaffoldFailed {
            framework: config.framework.display_name().to_string(),
            reason: "empty scaffold command".into(),
        });
    };

    let output = Command::new(program)
        .args(args)
        .current_dir(&config.dest_path)
        .output()
        .map_err(|e| ReframeError::ScaffoldFailed {
            framework: config.framework.display_name().to_string(),
            reason: format!("could not run {program}: {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ReframeError::ScaffoldFailed {
            framework: config.framework.display_name().to_string(),
            reason: stderr.trim().to_string(),
        });
    }

    Ok(())
}

/// Classify git stderr into a message with actionable suggestions for the
/// common failure modes.
fn classify_clone_error(stderr: &str) -> String {
    if stderr.contains("Authentication failed") || stderr.contains("could not read Username") {
        format!("authentication failed — configure git credentials\n\ngit output:\n{stderr}")
    } else if stderr.contains("Repository not found") {
        format!("repository not found — check the boilerplate URL\n\ngit output:\n{stderr}")
    } else if stderr.contains("Could not resolve host") || stderr.contains("Connection refused") {
        format!("network error — check your connection\n\ngit output:\n{stderr}")
    } else {
        stderr.to_string()
    }
}

/// Shallow-clone a boilerplate repository into the destination. Uses the
/// system `git` binary so the user's full credential stack is inherited.
pub fn clone_boilerplate(url: &str, dest: &Path) -> Result<()> {
    Command::new("git")
        .arg("--version")
        .output()
        .map_err(|_| ReframeError::GitNotFound)?;

    let output = Command::new("git")
        .env("GIT_TERMINAL_PROMPT", "0")
        .arg("clone")
        .arg("--depth")
        .arg("1")
        .arg(url)
        .arg(dest)
        .output()
        .map_err(|e| ReframeError::Io {
            context: "running git clone".into(),
            source: e,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ReframeError::CloneFailed {
            url: url.to_string(),
            reason: classify_clone_error(stderr.trim()),
        });
    }

    Ok(())
}

/// Strip `.git` directories from cloned boilerplate so the converted
/// project starts with no history.
pub fn remove_git_dirs(root: &Path) -> Result<()> {
    let git_dirs: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir() && e.file_name() == ".git")
        .map(|e| e.path().to_path_buf())
        .collect();

    for dir in git_dirs {
        std::fs::remove_dir_all(&dir).map_err(|e| ReframeError::Io {
            context: format!("removing {}", dir.display()),
            source: e,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_clone_error() {
        let msg = classify_clone_error("fatal: Repository not found");
        assert!(msg.contains("check the boilerplate URL"));

        let passthrough = classify_clone_error("something else entirely");
        assert_eq!(passthrough, "something else entirely");
    }

    #[test]
    fn test_remove_git_dirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/index.php"), "<?php").unwrap();

        remove_git_dirs(dir.path()).unwrap();
        assert!(!dir.path().join(".git").exists());
        assert!(dir.path().join("src/index.php").exists());
    }
}
