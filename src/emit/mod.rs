//! Target-framework emitters.
//!
//! All fourteen targets consume the same two core outputs — the route map
//! and the include fragments — and differ only in template-substitution:
//! partial-call syntax, destination layout, casing, link convention, and
//! optional route-table boilerplate.

pub mod blazor;
pub mod cakephp;
pub mod codeigniter;
pub mod core;
pub mod django;
pub mod fastapi;
pub mod flask;
pub mod laravel;
pub mod mvc;
pub mod node;
pub mod php;
pub mod ror;
pub mod spring;
pub mod symfony;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tera::{Context, Tera};

use crate::casing::to_pascal;
use crate::config::{CaseStyle, Framework, ProjectConfig};
use crate::error::{ReframeError, Result};
use crate::fragment::ParamMap;
use crate::restructure::path_key;
use crate::rewrite::LinkMode;

/// One page's worth of routing data, handed to route-table templates.
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    /// Original source filename (route map key).
    pub source: String,
    pub route: String,
    /// Target-native view reference (dots for Blade, template path for Jinja).
    pub view: String,
    /// Identifier-safe name derived from the route.
    pub name: String,
    pub title: Option<String>,
}

/// A generated route-table file, relative to the project root.
#[derive(Debug, Clone)]
pub struct RoutesFile {
    pub dest_rel: PathBuf,
    pub content: String,
}

/// How a target's boilerplate is scaffolded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scaffold {
    /// Clone a boilerplate repository into the destination.
    Clone { url: String },
    /// Run a project generator in the destination.
    Command(Vec<String>),
}

/// Per-target conventions. Implementations never parse anything; they turn
/// already-parsed paths and parameter maps into target syntax.
pub trait TemplateEmitter {
    fn framework(&self) -> Framework;

    /// Target template extension, applied to every restructured page.
    fn file_extension(&self) -> &'static str;

    /// Pages destination, relative to the project root.
    fn pages_root(&self) -> PathBuf;

    /// Asset destination, relative to the project root.
    fn assets_root(&self) -> PathBuf;

    /// Canonical partials prefix inside include calls.
    fn partials_prefix(&self) -> &'static str {
        "partials"
    }

    /// Where partial files land on disk.
    fn partials_dest(&self) -> PathBuf {
        self.pages_root().join(self.partials_prefix())
    }

    fn case_style(&self) -> CaseStyle {
        CaseStyle::Kebab
    }

    fn link_mode(&self) -> LinkMode {
        LinkMode::Route
    }

    /// Replacement string for inline `@@var` / `{{ var }}` occurrences;
    /// `${1}` is the variable name.
    fn variable_replacement(&self) -> &'static str;

    /// Render one include directive. `path` is already normalized (no
    /// leading `./`, no extension, forward slashes) but not yet prefixed.
    fn render_include(&self, path: &str, params: &ParamMap) -> String;

    /// Map a normalized include path onto the target's partials prefix:
    /// bare names are prefixed, `partials/...` is re-rooted, anything else
    /// passes through.
    fn canonical_partial(&self, path: &str) -> String {
        let prefix = self.partials_prefix();
        if let Some(rest) = path.strip_prefix("partials/") {
            format!("{prefix}/{rest}")
        } else if !path.contains('/') {
            format!("{prefix}/{path}")
        } else {
            path.to_string()
        }
    }

    /// Target-native view reference for a page path relative to the pages
    /// root. Default: forward slashes, extension stripped.
    fn view_ref(&self, page_rel: &Path) -> String {
        let key = path_key(page_rel);
        key.strip_suffix(self.file_extension())
            .unwrap_or(&key)
            .to_string()
    }

    /// Optional route-table boilerplate rendered from the route entries.
    fn routes_file(&self, _entries: &[RouteEntry], _config: &ProjectConfig) -> Result<Option<RoutesFile>> {
        Ok(None)
    }

    /// Optional boilerplate scaffold for this target.
    fn scaffold(&self, _config: &ProjectConfig) -> Option<Scaffold> {
        None
    }
}

pub fn emitter_for(framework: Framework) -> Box<dyn TemplateEmitter> {
    match framework {
        Framework::Php => Box::new(php::PhpEmitter),
        Framework::Laravel => Box::new(laravel::LaravelEmitter),
        Framework::CodeIgniter => Box::new(codeigniter::CodeIgniterEmitter),
        Framework::CakePhp => Box::new(cakephp::CakePhpEmitter),
        Framework::Symfony => Box::new(symfony::SymfonyEmitter),
        Framework::Node => Box::new(node::NodeEmitter),
        Framework::Django => Box::new(django::DjangoEmitter),
        Framework::Flask => Box::new(flask::FlaskEmitter),
        Framework::FastApi => Box::new(fastapi::FastApiEmitter),
        Framework::Core => Box::new(core::CoreEmitter),
        Framework::Mvc => Box::new(mvc::MvcEmitter),
        Framework::Blazor => Box::new(blazor::BlazorEmitter),
        Framework::Spring => Box::new(spring::SpringEmitter),
        Framework::Ror => Box::new(ror::RorEmitter),
    }
}

/// Identifier-safe name for a route: `/` is `index`, everything else is
/// the route with separators flattened to underscores.
pub fn route_name(route: &str) -> String {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        "index".to_string()
    } else {
        trimmed.replace(['/', '-'], "_")
    }
}

/// Render an embedded route-table template with the entries as context.
pub(crate) fn render_boilerplate(
    name: &str,
    source: &str,
    entries: &[RouteEntry],
) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(name, source)
        .map_err(|e| ReframeError::RenderError {
            file: name.to_string(),
            source: e,
        })?;
    let mut context = Context::new();
    context.insert("routes", entries);
    tera.render(name, &context)
        .map_err(|e| ReframeError::RenderError {
            file: name.to_string(),
            source: e,
        })
}

// Shared literal formatting. Each emitter picks the pieces matching its
// target language; none of them re-parse anything.

pub(crate) fn single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

pub(crate) fn double_quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// PHP-family literal: single-quoted strings, bare numbers and booleans.
pub(crate) fn php_literal(value: &Value) -> String {
    match value {
        Value::String(s) => single_quoted(s),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => single_quoted(&other.to_string()),
    }
}

/// `$k = 'v'; $n = 3; ` assignment run for plain-PHP includes.
pub(crate) fn php_assignments(params: &ParamMap) -> String {
    params
        .iter()
        .map(|(key, value)| format!("${key} = {}; ", php_literal(value)))
        .collect()
}

/// `'k' => 'v', 'n' => 3` pair list for array-style includes.
pub(crate) fn php_array_items(params: &ParamMap) -> String {
    params
        .iter()
        .map(|(key, value)| format!("'{key}' => {}", php_literal(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compact JS/Twig object literal.
pub(crate) fn json_object(params: &ParamMap) -> String {
    let map: serde_json::Map<String, Value> =
        params.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    serde_json::to_string(&map).unwrap_or_else(|_| "{}".to_string())
}

/// Pascal-case the final path segment (component and .NET partial names).
pub(crate) fn pascal_leaf(path: &str) -> String {
    let (dir, leaf) = match path.rfind('/') {
        Some(slash) => (&path[..slash + 1], &path[slash + 1..]),
        None => ("", path),
    };
    format!("{dir}{}", to_pascal(leaf))
}
