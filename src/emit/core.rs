//! ASP.NET Core (Razor Pages) target: `Html.PartialAsync` calls with
//! ViewBag parameter blocks, PascalCase paths under `Pages/`.

use std::path::PathBuf;

use serde_json::Value;

use crate::casing::to_pascal;
use crate::config::{CaseStyle, Framework, ProjectConfig};
use crate::emit::{double_quoted, pascal_leaf, Scaffold, TemplateEmitter};
use crate::fragment::ParamMap;

pub struct CoreEmitter;

fn csharp_literal(value: &Value) -> String {
    match value {
        Value::String(s) => double_quoted(s),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => double_quoted(&other.to_string()),
    }
}

/// `@{ ViewBag.Title = "X"; }` block followed by the partial call.
pub(crate) fn razor_partial_call(app_root: &str, partial: &str, params: &ParamMap) -> String {
    let call = format!("@await Html.PartialAsync(\"~/{app_root}/{}.cshtml\")", pascal_leaf(partial));
    if params.is_empty() {
        return call;
    }
    let assignments: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("    ViewBag.{} = {};", to_pascal(key), csharp_literal(value)))
        .collect();
    format!("@{{\n{}\n}}\n{call}", assignments.join("\n"))
}

impl TemplateEmitter for CoreEmitter {
    fn framework(&self) -> Framework {
        Framework::Core
    }

    fn file_extension(&self) -> &'static str {
        ".cshtml"
    }

    fn pages_root(&self) -> PathBuf {
        PathBuf::from("Pages")
    }

    fn assets_root(&self) -> PathBuf {
        PathBuf::from("wwwroot/assets")
    }

    fn partials_prefix(&self) -> &'static str {
        "Shared/Partials"
    }

    fn case_style(&self) -> CaseStyle {
        CaseStyle::Pascal
    }

    fn variable_replacement(&self) -> &'static str {
        "@ViewBag.${1}"
    }

    fn render_include(&self, path: &str, params: &ParamMap) -> String {
        razor_partial_call("Pages", &self.canonical_partial(path), params)
    }

    fn scaffold(&self, _config: &ProjectConfig) -> Option<Scaffold> {
        Some(Scaffold::Command(vec![
            "dotnet".into(),
            "new".into(),
            "webapp".into(),
            "-o".into(),
            ".".into(),
        ]))
    }
}
