use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ReframeError {
    #[error("Unknown framework: {name}")]
    #[diagnostic(help("Run `reframe list` to see the supported targets"))]
    UnknownFramework { name: String },

    #[error("Invalid project name '{name}': {reason}")]
    #[diagnostic(help("Project names are lowercase letters, digits, and dashes"))]
    InvalidProjectName { name: String, reason: String },

    #[error("{framework} projects only support the Vite pipeline")]
    #[diagnostic(help("Pass --frontend-pipeline vite for this framework"))]
    PipelineNotSupported { framework: String },

    #[error("Source pages directory not found: {path}")]
    #[diagnostic(help("Point --src-path at the HTML kit root (pages under <src>/src)"))]
    SourceMissing { path: PathBuf },

    #[error("Destination already exists: {path}")]
    #[diagnostic(help("Use --overwrite to convert into an existing directory"))]
    DestinationExists { path: PathBuf },

    #[error("Failed to parse reframe.toml")]
    #[diagnostic(help("Check the TOML syntax in your reframe.toml file"))]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid pattern '{label}' in registry")]
    #[diagnostic(help("Pattern sources must be valid regexes with a named 'path' group"))]
    InvalidPattern {
        label: String,
        #[source]
        source: regex_lite::Error,
    },

    #[error("Pattern registry is not valid JSON")]
    PatternRegistryParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Glob pattern error: {pattern}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to render {file}")]
    #[diagnostic(help("The embedded boilerplate templates should always render; this is a bug"))]
    RenderError {
        file: String,
        #[source]
        source: tera::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Scaffolding failed for {framework}: {reason}")]
    #[diagnostic(help("The rest of this conversion was abandoned; the destination may be partial"))]
    ScaffoldFailed { framework: String, reason: String },

    #[error("Git clone failed for {url}")]
    #[diagnostic(help("Check the URL and your network connection"))]
    CloneFailed { url: String, reason: String },

    #[error("Git executable not found")]
    #[diagnostic(help("Install git; boilerplate scaffolding runs through the system git binary"))]
    GitNotFound,

    #[error("Prompt cancelled by user")]
    PromptCancelled,
}

pub type Result<T> = std::result::Result<T, ReframeError>;
