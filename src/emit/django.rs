//! Django target: `{% include %}` tags with a `with` clause, URL table in
//! `urls.py`.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::{Framework, ProjectConfig};
use crate::emit::{render_boilerplate, single_quoted, RouteEntry, RoutesFile, Scaffold, TemplateEmitter};
use crate::error::Result;
use crate::fragment::ParamMap;
use crate::restructure::path_key;

const URLS_TEMPLATE: &str = include_str!("../../resources/templates/django_urls.py.tera");

pub struct DjangoEmitter;

/// Django template literal: `True`/`False`, bare numbers, quoted strings.
fn django_literal(value: &Value) -> String {
    match value {
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => single_quoted(s),
        other => single_quoted(&other.to_string()),
    }
}

impl TemplateEmitter for DjangoEmitter {
    fn framework(&self) -> Framework {
        Framework::Django
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
        if params.is_empty() {
            format!("{{% include '{template}' %}}")
        } else {
            let with_parts = params
                .iter()
                .map(|(key, value)| format!("{key}={}", django_literal(value)))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{{% include '{template}' with {with_parts} %}}")
        }
    }

    fn view_ref(&self, page_rel: &Path) -> String {
        // Template names keep their .html extension.
        path_key(page_rel)
    }

    fn routes_file(&self, entries: &[RouteEntry], config: &ProjectConfig) -> Result<Option<RoutesFile>> {
        let content = render_boilerplate("urls.py", URLS_TEMPLATE, entries)?;
        Ok(Some(RoutesFile {
            dest_rel: PathBuf::from(&config.project_name).join("urls.py"),
            content,
        }))
    }

    fn scaffold(&self, config: &ProjectConfig) -> Option<Scaffold> {
        Some(Scaffold::Command(vec![
            "django-admin".into(),
            "startproject".into(),
            config.project_name.replace('-', "_"),
            ".".into(),
        ]))
    }
}
