//! Laravel target: Blade `@include` with dotted view names under
//! `shared.partials`, route table in `routes/web.php`.

use std::path::{Path, PathBuf};

use crate::config::{Framework, ProjectConfig};
use crate::emit::{
    php_array_items, render_boilerplate, RouteEntry, RoutesFile, Scaffold, TemplateEmitter,
};
use crate::error::Result;
use crate::fragment::ParamMap;
use crate::restructure::path_key;

const ROUTES_TEMPLATE: &str = include_str!("../../resources/templates/laravel_web.php.tera");

pub struct LaravelEmitter;

impl TemplateEmitter for LaravelEmitter {
    fn framework(&self) -> Framework {
        Framework::Laravel
    }

    fn file_extension(&self) -> &'static str {
        ".blade.php"
    }

    fn pages_root(&self) -> PathBuf {
        PathBuf::from("resources/views")
    }

    fn assets_root(&self) -> PathBuf {
        PathBuf::from("public/assets")
    }

    fn partials_prefix(&self) -> &'static str {
        "shared/partials"
    }

    fn variable_replacement(&self) -> &'static str {
        "{{ $$${1} }}"
    }

    fn render_include(&self, path: &str, params: &ParamMap) -> String {
        let view = self.canonical_partial(path).replace('/', ".");
        if params.is_empty() {
            format!("@include('{view}')")
        } else {
            format!("@include('{view}', [{}])", php_array_items(params))
        }
    }

    fn view_ref(&self, page_rel: &Path) -> String {
        let key = path_key(page_rel);
        key.strip_suffix(self.file_extension())
            .unwrap_or(&key)
            .replace('/', ".")
    }

    fn routes_file(&self, entries: &[RouteEntry], _config: &ProjectConfig) -> Result<Option<RoutesFile>> {
        let content = render_boilerplate("routes/web.php", ROUTES_TEMPLATE, entries)?;
        Ok(Some(RoutesFile {
            dest_rel: PathBuf::from("routes/web.php"),
            content,
        }))
    }

    fn scaffold(&self, _config: &ProjectConfig) -> Option<Scaffold> {
        Some(Scaffold::Command(vec![
            "composer".into(),
            "create-project".into(),
            "laravel/laravel".into(),
            ".".into(),
        ]))
    }
}
