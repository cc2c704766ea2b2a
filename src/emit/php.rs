//! Plain PHP target: includes become `<?php include(...); ?>` with variable
//! assignments, links keep their static `.php` extension.

use std::path::PathBuf;

use crate::config::{Framework, Pipeline, ProjectConfig};
use crate::emit::{php_assignments, Scaffold, TemplateEmitter};
use crate::fragment::ParamMap;
use crate::rewrite::LinkMode;

const VITE_BOILERPLATE_URL: &str = "https://github.com/reframe-kits/php-vite-boilerplate.git";

pub struct PhpEmitter;

impl TemplateEmitter for PhpEmitter {
    fn framework(&self) -> Framework {
        Framework::Php
    }

    fn file_extension(&self) -> &'static str {
        ".php"
    }

    fn pages_root(&self) -> PathBuf {
        PathBuf::from("src")
    }

    fn assets_root(&self) -> PathBuf {
        PathBuf::from("src/assets")
    }

    fn link_mode(&self) -> LinkMode {
        LinkMode::Extension(".php")
    }

    fn variable_replacement(&self) -> &'static str {
        "<?php echo ($$${1}); ?>"
    }

    fn render_include(&self, path: &str, params: &ParamMap) -> String {
        let partial = self.canonical_partial(path);
        if params.is_empty() {
            format!("<?php include('./{partial}.php'); ?>")
        } else {
            format!(
                "<?php {}include('./{partial}.php'); ?>",
                php_assignments(params)
            )
        }
    }

    fn scaffold(&self, config: &ProjectConfig) -> Option<Scaffold> {
        // The Gulp variant is plain files; only the Vite kit ships as a
        // boilerplate repository.
        (config.pipeline == Pipeline::Vite).then(|| Scaffold::Clone {
            url: VITE_BOILERPLATE_URL.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_include_without_params() {
        let emitter = PhpEmitter;
        assert_eq!(
            emitter.render_include("partials/footer", &ParamMap::new()),
            "<?php include('./partials/footer.php'); ?>"
        );
    }

    #[test]
    fn test_include_with_params_and_bare_name() {
        let emitter = PhpEmitter;
        let mut params = ParamMap::new();
        params.insert("title".to_string(), Value::String("Dashboard".into()));
        assert_eq!(
            emitter.render_include("page-title", &params),
            "<?php $title = 'Dashboard'; include('./partials/page-title.php'); ?>"
        );
    }
}
