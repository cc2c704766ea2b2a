//! CodeIgniter 4 target: `view()` calls with `array(...)` parameters.

use std::path::PathBuf;

use crate::config::{Framework, ProjectConfig};
use crate::emit::{php_array_items, Scaffold, TemplateEmitter};
use crate::fragment::ParamMap;

pub struct CodeIgniterEmitter;

impl TemplateEmitter for CodeIgniterEmitter {
    fn framework(&self) -> Framework {
        Framework::CodeIgniter
    }

    fn file_extension(&self) -> &'static str {
        ".php"
    }

    fn pages_root(&self) -> PathBuf {
        PathBuf::from("app/Views")
    }

    fn assets_root(&self) -> PathBuf {
        PathBuf::from("public/assets")
    }

    fn variable_replacement(&self) -> &'static str {
        "<?php echo ($$${1}); ?>"
    }

    fn render_include(&self, path: &str, params: &ParamMap) -> String {
        let view = self.canonical_partial(path);
        if params.is_empty() {
            format!("<?= $this->include('{view}') ?>")
        } else {
            format!(
                "<?php echo view('{view}', array({})) ?>",
                php_array_items(params)
            )
        }
    }

    fn scaffold(&self, _config: &ProjectConfig) -> Option<Scaffold> {
        Some(Scaffold::Command(vec![
            "composer".into(),
            "create-project".into(),
            "codeigniter4/appstarter".into(),
            ".".into(),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_parameterless_include() {
        let emitter = CodeIgniterEmitter;
        assert_eq!(
            emitter.render_include("partials/sidebar", &ParamMap::new()),
            "<?= $this->include('partials/sidebar') ?>"
        );
    }

    #[test]
    fn test_include_with_array_params() {
        let emitter = CodeIgniterEmitter;
        let mut params = ParamMap::new();
        params.insert("title".to_string(), Value::String("Chat".into()));
        assert_eq!(
            emitter.render_include("page-title", &params),
            "<?php echo view('partials/page-title', array('title' => 'Chat')) ?>"
        );
    }
}
