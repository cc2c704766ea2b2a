//! Interactive collection of conversion options.
//!
//! Flags and reframe.toml values arrive pre-filled; anything still missing
//! is prompted for, except under `--defaults` where built-in defaults apply.

use std::path::PathBuf;

use console::style;
use inquire::validator::{ErrorMessage, Validation};
use inquire::{Select, Text};
use regex_lite::Regex;

use crate::config::{Framework, Pipeline, UiLibrary};
use crate::error::{ReframeError, Result};
use crate::ConvertOptions;

/// Options as collected from flags and file config, before prompting.
#[derive(Debug, Default)]
pub struct PartialOptions {
    pub project_name: Option<String>,
    pub framework: Option<String>,
    pub ui_library: Option<String>,
    pub frontend_pipeline: Option<String>,
    pub src_path: Option<PathBuf>,
    pub dest_path: Option<PathBuf>,
    pub exclude: Vec<String>,
    pub defaults: bool,
    pub overwrite: bool,
    pub skip_scaffold: bool,
}

pub fn fill_options(partial: PartialOptions) -> Result<ConvertOptions> {
    let framework = match &partial.framework {
        Some(raw) => raw.parse::<Framework>()?,
        None if partial.defaults => {
            return Err(ReframeError::UnknownFramework {
                name: "(none given; --defaults needs --framework)".into(),
            })
        }
        None => prompt_framework()?,
    };

    let project_name = match &partial.project_name {
        Some(name) => name.clone(),
        None if partial.defaults => "starter".to_string(),
        None => prompt_project_name()?,
    };

    let ui_library = match &partial.ui_library {
        Some(raw) => raw.parse::<UiLibrary>()?,
        None if partial.defaults => UiLibrary::default(),
        None => prompt_ui_library()?,
    };

    let pipeline = if framework.vite_only() {
        if partial.frontend_pipeline.as_deref() == Some("gulp") {
            return Err(ReframeError::PipelineNotSupported {
                framework: framework.display_name().to_string(),
            });
        }
        if partial.frontend_pipeline.is_none() {
            println!(
                "{} {} boilerplates ship with Vite; using it",
                style("i").blue().bold(),
                framework
            );
        }
        Pipeline::Vite
    } else {
        match &partial.frontend_pipeline {
            Some(raw) => raw.parse::<Pipeline>()?,
            None if partial.defaults => Pipeline::default(),
            None => prompt_pipeline()?,
        }
    };

    let src_path = match &partial.src_path {
        Some(path) => path.clone(),
        None if partial.defaults => PathBuf::from("./html"),
        None => prompt_src_path()?,
    };

    let dest_path = match &partial.dest_path {
        Some(path) => path.clone(),
        None => PathBuf::from(".").join(&project_name),
    };

    Ok(ConvertOptions {
        project_name,
        framework,
        ui_library,
        pipeline,
        src_path,
        dest_path,
        exclude: partial.exclude,
        overwrite: partial.overwrite,
        skip_scaffold: partial.skip_scaffold,
    })
}

fn prompt_framework() -> Result<Framework> {
    let choices: Vec<&str> = Framework::ALL.iter().map(|f| f.display_name()).collect();
    let answer = Select::new("Select framework:", choices)
        .prompt()
        .map_err(|_| ReframeError::PromptCancelled)?;
    Framework::ALL
        .iter()
        .copied()
        .find(|f| f.display_name() == answer)
        .ok_or(ReframeError::UnknownFramework {
            name: answer.to_string(),
        })
}

fn prompt_project_name() -> Result<String> {
    let answer = Text::new("Project name:")
        .with_default("starter")
        .with_validator(|input: &str| {
            let shape = Regex::new(r"^[a-z][a-z0-9-]*$")
                .map_err(|e| inquire::CustomUserError::from(e.to_string()))?;
            if shape.is_match(input) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(ErrorMessage::Custom(
                    "Only lowercase letters, digits, and dashes".to_string(),
                )))
            }
        })
        .prompt()
        .map_err(|_| ReframeError::PromptCancelled)?;
    Ok(answer)
}

fn prompt_ui_library() -> Result<UiLibrary> {
    let answer = Select::new("Select UI library:", vec!["Bootstrap", "Tailwind"])
        .prompt()
        .map_err(|_| ReframeError::PromptCancelled)?;
    answer.parse()
}

fn prompt_pipeline() -> Result<Pipeline> {
    let answer = Select::new("Select frontend pipeline:", vec!["Gulp", "Vite"])
        .prompt()
        .map_err(|_| ReframeError::PromptCancelled)?;
    answer.parse()
}

fn prompt_src_path() -> Result<PathBuf> {
    let answer = Text::new("HTML kit path:")
        .with_default("./html")
        .with_validator(|input: &str| {
            let path = PathBuf::from(input.trim());
            if path.is_dir() {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(ErrorMessage::Custom(format!(
                    "Not a folder: {}",
                    path.display()
                ))))
            }
        })
        .prompt()
        .map_err(|_| ReframeError::PromptCancelled)?;
    Ok(PathBuf::from(answer.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(framework: &str) -> PartialOptions {
        PartialOptions {
            framework: Some(framework.to_string()),
            defaults: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_fill_without_prompting() {
        let options = fill_options(flags("php")).unwrap();
        assert_eq!(options.project_name, "starter");
        assert_eq!(options.framework, Framework::Php);
        assert_eq!(options.pipeline, Pipeline::Gulp);
        assert_eq!(options.src_path, PathBuf::from("./html"));
        assert_eq!(options.dest_path, PathBuf::from("./starter"));
    }

    #[test]
    fn test_vite_only_framework_forces_vite() {
        let options = fill_options(flags("laravel")).unwrap();
        assert_eq!(options.pipeline, Pipeline::Vite);
    }

    #[test]
    fn test_vite_only_framework_rejects_gulp() {
        let mut partial = flags("ror");
        partial.frontend_pipeline = Some("gulp".to_string());
        assert!(matches!(
            fill_options(partial),
            Err(ReframeError::PipelineNotSupported { .. })
        ));
    }

    #[test]
    fn test_defaults_without_framework_is_an_error() {
        let partial = PartialOptions {
            defaults: true,
            ..Default::default()
        };
        assert!(matches!(
            fill_options(partial),
            Err(ReframeError::UnknownFramework { .. })
        ));
    }
}
