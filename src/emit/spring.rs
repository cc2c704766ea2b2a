//! Spring target: Thymeleaf `th:replace` fragment calls.

use std::path::PathBuf;

use serde_json::Value;

use crate::config::{Framework, ProjectConfig};
use crate::emit::{single_quoted, Scaffold, TemplateEmitter};
use crate::fragment::ParamMap;

pub struct SpringEmitter;

fn thymeleaf_literal(value: &Value) -> String {
    match value {
        Value::String(s) => single_quoted(s),
        other => other.to_string(),
    }
}

impl TemplateEmitter for SpringEmitter {
    fn framework(&self) -> Framework {
        Framework::Spring
    }

    fn file_extension(&self) -> &'static str {
        ".html"
    }

    fn pages_root(&self) -> PathBuf {
        PathBuf::from("src/main/resources/templates")
    }

    fn assets_root(&self) -> PathBuf {
        PathBuf::from("src/main/resources/static")
    }

    fn variable_replacement(&self) -> &'static str {
        "[[$${${1}}]]"
    }

    fn render_include(&self, path: &str, params: &ParamMap) -> String {
        let template = self.canonical_partial(path);
        // Fragment names follow the partial's own name.
        let fragment = template.rsplit('/').next().unwrap_or(&template);
        if params.is_empty() {
            format!("<th:block th:replace=\"~{{{template} :: {fragment}}}\"></th:block>")
        } else {
            let args: Vec<String> = params
                .iter()
                .map(|(key, value)| format!("{key}={}", thymeleaf_literal(value)))
                .collect();
            format!(
                "<th:block th:replace=\"~{{{template} :: {fragment}({})}}\"></th:block>",
                args.join(", ")
            )
        }
    }

    fn scaffold(&self, _config: &ProjectConfig) -> Option<Scaffold> {
        None
    }
}
