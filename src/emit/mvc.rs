//! ASP.NET MVC target: same Razor partial shape as the Core target, rooted
//! under `Views/` with the conventional `Views/Shared` partials folder.

use std::path::PathBuf;

use crate::config::{CaseStyle, Framework, ProjectConfig};
use crate::emit::core::razor_partial_call;
use crate::emit::{Scaffold, TemplateEmitter};
use crate::fragment::ParamMap;

pub struct MvcEmitter;

impl TemplateEmitter for MvcEmitter {
    fn framework(&self) -> Framework {
        Framework::Mvc
    }

    fn file_extension(&self) -> &'static str {
        ".cshtml"
    }

    fn pages_root(&self) -> PathBuf {
        PathBuf::from("Views")
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
        razor_partial_call("Views", &self.canonical_partial(path), params)
    }

    fn scaffold(&self, _config: &ProjectConfig) -> Option<Scaffold> {
        Some(Scaffold::Command(vec![
            "dotnet".into(),
            "new".into(),
            "mvc".into(),
            "-o".into(),
            ".".into(),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_views_rooted_partial() {
        let emitter = MvcEmitter;
        let mut params = ParamMap::new();
        params.insert("subtitle".to_string(), Value::String("Apps".into()));
        let rendered = emitter.render_include("partials/page-title", &params);
        assert!(rendered.contains("ViewBag.Subtitle = \"Apps\";"));
        assert!(rendered
            .contains("@await Html.PartialAsync(\"~/Views/Shared/Partials/PageTitle.cshtml\")"));
    }
}
