//! Node/Express target: EJS `<%- include(...) %>` and an Express router
//! generated from the route map.

use std::path::PathBuf;

use crate::config::{Framework, ProjectConfig};
use crate::emit::{json_object, render_boilerplate, RouteEntry, RoutesFile, TemplateEmitter};
use crate::error::Result;
use crate::fragment::ParamMap;

const ROUTES_TEMPLATE: &str = include_str!("../../resources/templates/node_routes.js.tera");

pub struct NodeEmitter;

impl TemplateEmitter for NodeEmitter {
    fn framework(&self) -> Framework {
        Framework::Node
    }

    fn file_extension(&self) -> &'static str {
        ".ejs"
    }

    fn pages_root(&self) -> PathBuf {
        PathBuf::from("views")
    }

    fn assets_root(&self) -> PathBuf {
        PathBuf::from("public/assets")
    }

    fn variable_replacement(&self) -> &'static str {
        "<%= ${1} %>"
    }

    fn render_include(&self, path: &str, params: &ParamMap) -> String {
        let view = self.canonical_partial(path);
        if params.is_empty() {
            format!("<%- include('{view}') %>")
        } else {
            format!("<%- include('{view}', {}) %>", json_object(params))
        }
    }

    fn routes_file(&self, entries: &[RouteEntry], _config: &ProjectConfig) -> Result<Option<RoutesFile>> {
        let content = render_boilerplate("routes/index.js", ROUTES_TEMPLATE, entries)?;
        Ok(Some(RoutesFile {
            dest_rel: PathBuf::from("routes/index.js"),
            content,
        }))
    }
}
