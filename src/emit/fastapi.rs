//! FastAPI target: same Jinja templates as Flask, routes through an
//! `APIRouter` with `Jinja2Templates`.

use std::path::{Path, PathBuf};

use crate::config::{Framework, ProjectConfig};
use crate::emit::flask::jinja_set_block;
use crate::emit::{render_boilerplate, RouteEntry, RoutesFile, TemplateEmitter};
use crate::error::Result;
use crate::fragment::ParamMap;
use crate::restructure::path_key;

const ROUTES_TEMPLATE: &str = include_str!("../../resources/templates/fastapi_routes.py.tera");

pub struct FastApiEmitter;

impl TemplateEmitter for FastApiEmitter {
    fn framework(&self) -> Framework {
        Framework::FastApi
    }

    fn file_extension(&self) -> &'static str {
        ".html"
    }

    fn pages_root(&self) -> PathBuf {
        PathBuf::from("templates")
    }

    fn assets_root(&self) -> PathBuf {
        PathBuf::from("static")
    }

    fn variable_replacement(&self) -> &'static str {
        "{{ ${1} }}"
    }

    fn render_include(&self, path: &str, params: &ParamMap) -> String {
        let template = format!("{}.html", self.canonical_partial(path));
        jinja_set_block(&template, params)
    }

    fn view_ref(&self, page_rel: &Path) -> String {
        path_key(page_rel)
    }

    fn routes_file(&self, entries: &[RouteEntry], _config: &ProjectConfig) -> Result<Option<RoutesFile>> {
        let content = render_boilerplate("routes.py", ROUTES_TEMPLATE, entries)?;
        Ok(Some(RoutesFile {
            dest_rel: PathBuf::from("routes.py"),
            content,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_boilerplate() {
        let emitter = FastApiEmitter;
        let entries = vec![RouteEntry {
            source: "index.html".into(),
            route: "/".into(),
            view: "index.html".into(),
            name: "index".into(),
            title: None,
        }];
        let config = ProjectConfig::new(
            "kit",
            Framework::FastApi,
            Default::default(),
            Default::default(),
            "html",
            "out",
        );
        let file = emitter.routes_file(&entries, &config).unwrap().unwrap();
        assert!(file.content.contains(r#"@router.get("/")"#));
        assert!(file
            .content
            .contains(r#"templates.TemplateResponse("index.html", {"request": request})"#));
    }
}
