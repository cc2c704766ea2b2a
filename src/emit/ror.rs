//! Ruby on Rails target: ERB `render` calls with keyword arguments,
//! snake_case view files, routes in `config/routes.rb`.

use std::path::PathBuf;

use serde_json::Value;

use crate::config::{CaseStyle, Framework, ProjectConfig};
use crate::emit::{
    render_boilerplate, single_quoted, RouteEntry, RoutesFile, Scaffold, TemplateEmitter,
};
use crate::error::Result;
use crate::fragment::ParamMap;

const ROUTES_TEMPLATE: &str = include_str!("../../resources/templates/rails_routes.rb.tera");

pub struct RorEmitter;

fn ruby_literal(value: &Value) -> String {
    match value {
        Value::String(s) => single_quoted(s),
        Value::Null => "nil".to_string(),
        other => other.to_string(),
    }
}

impl TemplateEmitter for RorEmitter {
    fn framework(&self) -> Framework {
        Framework::Ror
    }

    fn file_extension(&self) -> &'static str {
        ".html.erb"
    }

    fn pages_root(&self) -> PathBuf {
        PathBuf::from("app/views/pages")
    }

    fn assets_root(&self) -> PathBuf {
        PathBuf::from("app/assets")
    }

    fn partials_dest(&self) -> PathBuf {
        PathBuf::from("app/views/partials")
    }

    fn case_style(&self) -> CaseStyle {
        CaseStyle::Snake
    }

    fn variable_replacement(&self) -> &'static str {
        "<%= ${1} %>"
    }

    fn render_include(&self, path: &str, params: &ParamMap) -> String {
        let partial = self.canonical_partial(path).replace('-', "_");
        if params.is_empty() {
            format!("<%= render '{partial}' %>")
        } else {
            let args: Vec<String> = params
                .iter()
                .map(|(key, value)| format!("{key}: {}", ruby_literal(value)))
                .collect();
            format!("<%= render '{partial}', {} %>", args.join(", "))
        }
    }

    fn routes_file(&self, entries: &[RouteEntry], _config: &ProjectConfig) -> Result<Option<RoutesFile>> {
        let content = render_boilerplate("config/routes.rb", ROUTES_TEMPLATE, entries)?;
        Ok(Some(RoutesFile {
            dest_rel: PathBuf::from("config/routes.rb"),
            content,
        }))
    }

    fn scaffold(&self, _config: &ProjectConfig) -> Option<Scaffold> {
        Some(Scaffold::Command(vec![
            "rails".into(),
            "new".into(),
            ".".into(),
            "--skip-git".into(),
        ]))
    }
}
