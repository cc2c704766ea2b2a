//! CakePHP target: `$this->element(...)` calls. Elements are referenced by
//! name only and live under `templates/element`.

use std::path::PathBuf;

use crate::config::{CaseStyle, Framework, ProjectConfig};
use crate::emit::{php_array_items, Scaffold, TemplateEmitter};
use crate::fragment::ParamMap;

pub struct CakePhpEmitter;

impl TemplateEmitter for CakePhpEmitter {
    fn framework(&self) -> Framework {
        Framework::CakePhp
    }

    fn file_extension(&self) -> &'static str {
        ".php"
    }

    fn pages_root(&self) -> PathBuf {
        PathBuf::from("templates/Pages")
    }

    fn assets_root(&self) -> PathBuf {
        PathBuf::from("webroot")
    }

    fn partials_dest(&self) -> PathBuf {
        PathBuf::from("templates/element")
    }

    fn case_style(&self) -> CaseStyle {
        CaseStyle::Snake
    }

    fn variable_replacement(&self) -> &'static str {
        "<?php echo ($$${1}); ?>"
    }

    fn render_include(&self, path: &str, params: &ParamMap) -> String {
        // element() resolves against templates/element, so only the
        // element name survives from the include path.
        let element = path.rsplit('/').next().unwrap_or(path);
        if params.is_empty() {
            format!("<?= $this->element('{element}') ?>")
        } else {
            format!(
                "<?= $this->element('{element}', [{}]) ?>",
                php_array_items(params)
            )
        }
    }

    fn scaffold(&self, _config: &ProjectConfig) -> Option<Scaffold> {
        Some(Scaffold::Command(vec![
            "composer".into(),
            "create-project".into(),
            "--prefer-dist".into(),
            "cakephp/app".into(),
            ".".into(),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_element_uses_leaf_name() {
        let emitter = CakePhpEmitter;
        let mut params = ParamMap::new();
        params.insert("title".to_string(), Value::String("Tasks".into()));
        assert_eq!(
            emitter.render_include("partials/page-title", &params),
            "<?= $this->element('page-title', ['title' => 'Tasks']) ?>"
        );
    }

    #[test]
    fn test_partials_land_in_element_dir() {
        let emitter = CakePhpEmitter;
        assert_eq!(emitter.partials_dest(), PathBuf::from("templates/element"));
    }
}
