//! Symfony target: Twig `include()` with a hash of parameters.

use std::path::PathBuf;

use crate::config::{Framework, ProjectConfig};
use crate::emit::{json_object, Scaffold, TemplateEmitter};
use crate::fragment::ParamMap;

pub struct SymfonyEmitter;

impl TemplateEmitter for SymfonyEmitter {
    fn framework(&self) -> Framework {
        Framework::Symfony
    }

    fn file_extension(&self) -> &'static str {
        ".html.twig"
    }

    fn pages_root(&self) -> PathBuf {
        PathBuf::from("templates")
    }

    fn assets_root(&self) -> PathBuf {
        PathBuf::from("assets")
    }

    fn variable_replacement(&self) -> &'static str {
        "{{ ${1} }}"
    }

    fn render_include(&self, path: &str, params: &ParamMap) -> String {
        let template = format!("{}.html.twig", self.canonical_partial(path));
        if params.is_empty() {
            format!("{{{{ include('{template}') }}}}")
        } else {
            format!("{{{{ include('{template}', {}) }}}}", json_object(params))
        }
    }

    fn scaffold(&self, _config: &ProjectConfig) -> Option<Scaffold> {
        Some(Scaffold::Command(vec![
            "composer".into(),
            "create-project".into(),
            "symfony/skeleton".into(),
            ".".into(),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_twig_include() {
        let emitter = SymfonyEmitter;
        assert_eq!(
            emitter.render_include("partials/footer", &ParamMap::new()),
            "{{ include('partials/footer.html.twig') }}"
        );
    }

    #[test]
    fn test_twig_include_with_hash() {
        let emitter = SymfonyEmitter;
        let mut params = ParamMap::new();
        params.insert("title".to_string(), Value::String("CRM".into()));
        assert_eq!(
            emitter.render_include("page-title", &params),
            r#"{{ include('partials/page-title.html.twig', {"title":"CRM"}) }}"#
        );
    }
}
