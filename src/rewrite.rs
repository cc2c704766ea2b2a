//! Anchor/form link rewriting and inline-variable replacement.

use regex_lite::{Captures, Regex};

use crate::pattern::VariableRegistry;
use crate::restructure::RouteMap;

/// How a target links between converted pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    /// Static convention: `foo.html` becomes `foo<ext>` in place.
    Extension(&'static str),
    /// Routed convention: `foo.html` becomes its canonical route.
    Route,
}

/// Rewrite `href=` and `action=` attribute values. Only `.html` links are
/// touched; external URLs keep their host, other values pass through.
pub fn rewrite_links(text: &str, mode: LinkMode, routes: &RouteMap) -> String {
    let attr = Regex::new(r#"((?:href|action)\s*=\s*["'])([^"']+)(["'])"#).expect("static pattern");
    attr.replace_all(text, |caps: &Captures| {
        let prefix = &caps[1];
        let quote = &caps[3];
        format!("{prefix}{}{quote}", rewrite_url(&caps[2], mode, routes))
    })
    .into_owned()
}

fn rewrite_url(url: &str, mode: LinkMode, routes: &RouteMap) -> String {
    let Some(stem) = url.strip_suffix(".html") else {
        return url.to_string();
    };
    let external =
        url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//");

    match mode {
        LinkMode::Extension(ext) => format!("{stem}{ext}"),
        LinkMode::Route => {
            if external {
                // Host stays; only the trailing index page collapses.
                return if stem.ends_with("/index") {
                    stem.trim_end_matches("index").to_string()
                } else {
                    stem.to_string()
                };
            }

            let key = url.trim_start_matches("./").trim_start_matches('/');
            if let Some(route) = routes.get(key) {
                return route.clone();
            }

            // Not a scanned page; degrade to extension stripping with the
            // same index-collapse rule the route map applies.
            let cleaned = stem.trim_start_matches("./").trim_start_matches('/');
            if cleaned == "index" || cleaned.ends_with("/index") {
                let parent = cleaned.trim_end_matches("index").trim_end_matches('/');
                if parent.is_empty() {
                    "/".to_string()
                } else {
                    format!("/{parent}")
                }
            } else {
                format!("/{cleaned}")
            }
        }
    }
}

/// Apply every registered inline-variable pattern with the target's
/// replacement string. Runs after include rewriting so `@@include(...)`
/// never reaches the `@@var` pattern.
pub fn rewrite_variables(text: &str, registry: &VariableRegistry, replacement: &str) -> String {
    let mut out = text.to_string();
    for pattern in registry.patterns() {
        out = pattern.replace_all(&out, replacement).into_owned();
    }
    out
}
