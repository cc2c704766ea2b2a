use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use regex_lite::Regex;
use serde::Deserialize;

use crate::error::{ReframeError, Result};

/// Supported target frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    Php,
    Laravel,
    CodeIgniter,
    CakePhp,
    Symfony,
    Node,
    Django,
    Flask,
    FastApi,
    Core,
    Mvc,
    Blazor,
    Spring,
    Ror,
}

impl Framework {
    pub const ALL: [Framework; 14] = [
        Framework::Php,
        Framework::Laravel,
        Framework::CodeIgniter,
        Framework::CakePhp,
        Framework::Symfony,
        Framework::Node,
        Framework::Django,
        Framework::Flask,
        Framework::FastApi,
        Framework::Core,
        Framework::Mvc,
        Framework::Blazor,
        Framework::Spring,
        Framework::Ror,
    ];

    /// Stable identifier used on the command line and in reframe.toml.
    pub fn id(&self) -> &'static str {
        match self {
            Framework::Php => "php",
            Framework::Laravel => "laravel",
            Framework::CodeIgniter => "codeigniter",
            Framework::CakePhp => "cakephp",
            Framework::Symfony => "symfony",
            Framework::Node => "node",
            Framework::Django => "django",
            Framework::Flask => "flask",
            Framework::FastApi => "fastapi",
            Framework::Core => "core",
            Framework::Mvc => "mvc",
            Framework::Blazor => "blazor",
            Framework::Spring => "spring",
            Framework::Ror => "ror",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Php => "PHP",
            Framework::Laravel => "Laravel",
            Framework::CodeIgniter => "CodeIgniter",
            Framework::CakePhp => "CakePHP",
            Framework::Symfony => "Symfony",
            Framework::Node => "Node (EJS)",
            Framework::Django => "Django",
            Framework::Flask => "Flask",
            Framework::FastApi => "FastAPI",
            Framework::Core => "ASP.NET Core",
            Framework::Mvc => "ASP.NET MVC",
            Framework::Blazor => "Blazor",
            Framework::Spring => "Spring",
            Framework::Ror => "Ruby on Rails",
        }
    }

    /// Frameworks whose boilerplate only ships a Vite pipeline.
    pub fn vite_only(&self) -> bool {
        matches!(self, Framework::Laravel | Framework::Ror)
    }
}

impl FromStr for Framework {
    type Err = ReframeError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Framework::ALL
            .iter()
            .copied()
            .find(|framework| framework.id() == normalized)
            .or(match normalized.as_str() {
                "rails" => Some(Framework::Ror),
                "ejs" | "express" => Some(Framework::Node),
                "asp.net core" | "aspnetcore" => Some(Framework::Core),
                "asp.net mvc" | "aspnetmvc" => Some(Framework::Mvc),
                _ => None,
            })
            .ok_or(ReframeError::UnknownFramework {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Frontend asset pipeline shipped with the converted project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pipeline {
    #[default]
    Gulp,
    Vite,
}

impl Pipeline {
    pub fn id(&self) -> &'static str {
        match self {
            Pipeline::Gulp => "gulp",
            Pipeline::Vite => "vite",
        }
    }
}

impl FromStr for Pipeline {
    type Err = ReframeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gulp" => Ok(Pipeline::Gulp),
            "vite" => Ok(Pipeline::Vite),
            other => Err(ReframeError::UnknownFramework {
                name: format!("pipeline '{other}'"),
            }),
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pipeline::Gulp => "Gulp",
            Pipeline::Vite => "Vite",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLibrary {
    #[default]
    Bootstrap,
    Tailwind,
}

impl FromStr for UiLibrary {
    type Err = ReframeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bootstrap" => Ok(UiLibrary::Bootstrap),
            "tailwind" => Ok(UiLibrary::Tailwind),
            other => Err(ReframeError::UnknownFramework {
                name: format!("UI library '{other}'"),
            }),
        }
    }
}

impl fmt::Display for UiLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UiLibrary::Bootstrap => "Bootstrap",
            UiLibrary::Tailwind => "Tailwind",
        })
    }
}

/// On-disk naming convention for destination paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseStyle {
    #[default]
    Kebab,
    Pascal,
    Snake,
}

/// Everything one conversion run needs to know.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub project_name: String,
    pub framework: Framework,
    pub ui_library: UiLibrary,
    pub pipeline: Pipeline,
    /// Root of the HTML kit.
    pub src_path: PathBuf,
    /// Pages live here; defaults to `<src>/src`.
    pub pages_path: PathBuf,
    /// Partials live here; defaults to `<src>/src/partials`.
    pub partials_path: PathBuf,
    /// Static assets live here; defaults to `<src>/src/assets`.
    pub assets_path: PathBuf,
    pub dest_path: PathBuf,
    /// Extra glob patterns excluded from the page scan.
    pub exclude: Vec<String>,
}

impl ProjectConfig {
    pub fn new(
        project_name: impl Into<String>,
        framework: Framework,
        ui_library: UiLibrary,
        pipeline: Pipeline,
        src_path: impl Into<PathBuf>,
        dest_path: impl Into<PathBuf>,
    ) -> Self {
        let src_path = src_path.into();
        let pages_path = src_path.join("src");
        let partials_path = pages_path.join("partials");
        let assets_path = pages_path.join("assets");
        Self {
            project_name: project_name.into(),
            framework,
            ui_library,
            pipeline,
            src_path,
            pages_path,
            partials_path,
            assets_path,
            dest_path: dest_path.into(),
            exclude: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let name_shape = Regex::new(r"^[a-z][a-z0-9-]*$").expect("static pattern");
        if !name_shape.is_match(&self.project_name) {
            return Err(ReframeError::InvalidProjectName {
                name: self.project_name.clone(),
                reason: "only lowercase letters, digits, and dashes are allowed".into(),
            });
        }

        if self.framework.vite_only() && self.pipeline != Pipeline::Vite {
            return Err(ReframeError::PipelineNotSupported {
                framework: self.framework.display_name().to_string(),
            });
        }

        Ok(())
    }
}

/// Optional `reframe.toml`, merged under CLI flags.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub project_name: Option<String>,
    pub framework: Option<String>,
    pub ui_library: Option<String>,
    pub frontend_pipeline: Option<String>,
    pub src_path: Option<PathBuf>,
    pub dest_path: Option<PathBuf>,
    pub exclude: Vec<String>,
}
