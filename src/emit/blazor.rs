//! Blazor target: includes become component tags (`<PageTitle Title="X" />`)
//! under `Components/`.

use std::path::PathBuf;

use serde_json::Value;

use crate::casing::to_pascal;
use crate::config::{CaseStyle, Framework, ProjectConfig};
use crate::emit::{Scaffold, TemplateEmitter};
use crate::fragment::ParamMap;

pub struct BlazorEmitter;

fn attribute_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.replace('"', "&quot;"),
        other => other.to_string(),
    }
}

impl TemplateEmitter for BlazorEmitter {
    fn framework(&self) -> Framework {
        Framework::Blazor
    }

    fn file_extension(&self) -> &'static str {
        ".razor"
    }

    fn pages_root(&self) -> PathBuf {
        PathBuf::from("Components/Pages")
    }

    fn assets_root(&self) -> PathBuf {
        PathBuf::from("wwwroot/assets")
    }

    fn partials_dest(&self) -> PathBuf {
        PathBuf::from("Components/Partials")
    }

    fn case_style(&self) -> CaseStyle {
        CaseStyle::Pascal
    }

    fn variable_replacement(&self) -> &'static str {
        "@${1}"
    }

    fn render_include(&self, path: &str, params: &ParamMap) -> String {
        // Components are referenced by type name; the include path only
        // contributes its leaf.
        let component = to_pascal(path.rsplit('/').next().unwrap_or(path));
        if params.is_empty() {
            format!("<{component} />")
        } else {
            let attrs: Vec<String> = params
                .iter()
                .map(|(key, value)| {
                    format!("{}=\"{}\"", to_pascal(key), attribute_value(value))
                })
                .collect();
            format!("<{component} {} />", attrs.join(" "))
        }
    }

    fn scaffold(&self, _config: &ProjectConfig) -> Option<Scaffold> {
        Some(Scaffold::Command(vec![
            "dotnet".into(),
            "new".into(),
            "blazor".into(),
            "-o".into(),
            ".".into(),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_tag() {
        let emitter = BlazorEmitter;
        assert_eq!(
            emitter.render_include("partials/footer", &ParamMap::new()),
            "<Footer />"
        );
    }

    #[test]
    fn test_component_attributes() {
        let emitter = BlazorEmitter;
        let mut params = ParamMap::new();
        params.insert("title".to_string(), Value::String("Crypto".into()));
        params.insert("count".to_string(), Value::Number(4.into()));
        assert_eq!(
            emitter.render_include("page-title", &params),
            "<PageTitle Count=\"4\" Title=\"Crypto\" />"
        );
    }
}
