//! Flask target: Jinja `{% set %}` lines feeding a plain `{% include %}`,
//! blueprint routes in `routes.py`.

use std::path::{Path, PathBuf};

use crate::config::{Framework, ProjectConfig};
use crate::emit::{render_boilerplate, single_quoted, RouteEntry, RoutesFile, TemplateEmitter};
use crate::error::Result;
use crate::fragment::ParamMap;
use crate::restructure::path_key;

const ROUTES_TEMPLATE: &str = include_str!("../../resources/templates/flask_routes.py.tera");

pub struct FlaskEmitter;

/// Jinja include takes no arguments, so parameters become `{% set %}` lines
/// in front of it.
pub(crate) fn jinja_set_block(template: &str, params: &ParamMap) -> String {
    if params.is_empty() {
        return format!("{{% include '{template}' %}}");
    }
    let mut lines: Vec<String> = params
        .iter()
        .map(|(key, value)| {
            let literal = match value {
                serde_json::Value::String(s) => single_quoted(s),
                other => other.to_string(),
            };
            format!("{{% set {key}={literal} %}}")
        })
        .collect();
    lines.push(format!("{{% include '{template}' %}}"));
    lines.join("\n")
}

impl TemplateEmitter for FlaskEmitter {
    fn framework(&self) -> Framework {
        Framework::Flask
    }

    fn file_extension(&self) -> &'static str {
        ".html"
    }

    fn pages_root(&self) -> PathBuf {
        PathBuf::from("templates")
    }

    fn assets_root(&self) -> PathBuf {
        PathBuf::from("static")
    }

    fn variable_replacement(&self) -> &'static str {
        "{{ ${1} }}"
    }

    fn render_include(&self, path: &str, params: &ParamMap) -> String {
        let template = format!("{}.html", self.canonical_partial(path));
        jinja_set_block(&template, params)
    }

    fn view_ref(&self, page_rel: &Path) -> String {
        path_key(page_rel)
    }

    fn routes_file(&self, entries: &[RouteEntry], _config: &ProjectConfig) -> Result<Option<RoutesFile>> {
        let content = render_boilerplate("routes.py", ROUTES_TEMPLATE, entries)?;
        Ok(Some(RoutesFile {
            dest_rel: PathBuf::from("routes.py"),
            content,
        }))
    }
}
