//! Filename restructuring and route derivation.
//!
//! Admin kits ship flat, keyword-encoded filenames like
//! `apps-ecommerce-product-grid.html`. This module turns those into nested
//! destination paths (`apps/ecommerce/product-grid.html`) and canonical URL
//! routes (`/apps/ecommerce/product-grid`) against a [`Vocabulary`] of
//! folder-worthy tokens.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use crate::casing::{apply_casing, to_kebab};
use crate::config::CaseStyle;
use crate::vocab::Vocabulary;

/// Mapping from source-relative filename (forward slashes, case preserved)
/// to its canonical `/`-rooted route. Built once per run.
pub type RouteMap = BTreeMap<String, String>;

/// Where a source page lands after restructuring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestructuredPath {
    /// Directories the file already lived under, relative to the pages root.
    pub parent: PathBuf,
    /// Folder segments derived from the filename's keyword prefix.
    pub folders: Vec<String>,
    /// Final filename, original extension preserved.
    pub file_name: String,
}

impl RestructuredPath {
    /// Destination path relative to the target pages root, with the
    /// target's casing and extension applied.
    pub fn dest_relative(&self, style: CaseStyle, target_ext: &str) -> PathBuf {
        let mut out = PathBuf::new();
        for component in self.parent.components() {
            if let Component::Normal(part) = component {
                out.push(apply_casing(&part.to_string_lossy(), style));
            }
        }
        for folder in &self.folders {
            out.push(apply_casing(folder, style));
        }
        let stem = stem_of(&self.file_name);
        out.push(format!("{}{}", apply_casing(stem, style), target_ext));
        out
    }
}

/// Split a flat filename into folder segments and a final filename.
///
/// Folders only ever come from a prefix run of vocabulary keywords; the
/// first non-keyword token ends nesting. A keyword match that would consume
/// the whole remainder of the name stays in the filename, so a page is
/// never left with an empty name inside a folder named after it. A no-nest
/// keyword keeps its folder but flattens every following token into the
/// filename.
pub fn restructure(filename: &str, existing_parent: &Path, vocab: &Vocabulary) -> RestructuredPath {
    let (stem, ext) = split_extension(filename);
    let tokens: Vec<&str> = stem.split('-').collect();

    let mut folders: Vec<String> = Vec::new();
    let mut file_parts: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let Some(keyword) = vocab.match_at(&tokens, i) else {
            file_parts.extend(&tokens[i..]);
            break;
        };
        let span = keyword.split('-').count();

        // Last-token rule, checked before the no-nest rule: a match that
        // consumes the rest of the name is the filename, not a folder.
        if i + span >= tokens.len() {
            file_parts.extend(&tokens[i..i + span]);
            break;
        }

        folders.push(keyword.to_string());
        i += span;

        if vocab.is_no_nest(keyword) {
            file_parts.extend(&tokens[i..]);
            break;
        }
    }

    let file_name = if file_parts.is_empty() {
        match folders.last() {
            Some(last) => format!("{last}{ext}"),
            None => filename.to_string(),
        }
    } else {
        format!("{}{}", file_parts.join("-"), ext)
    };

    RestructuredPath {
        parent: existing_parent.to_path_buf(),
        folders,
        file_name,
    }
}

/// Canonical route for a restructured path: kebab-cased segments joined
/// with `/`, a trailing `index` segment collapsing to the parent.
///
/// The on-disk casing convention never feeds into this; routes are always
/// kebab-case.
pub fn route_for(path: &RestructuredPath) -> String {
    let mut segments: Vec<String> = Vec::new();
    for component in path.parent.components() {
        if let Component::Normal(part) = component {
            segments.push(to_kebab(&part.to_string_lossy()));
        }
    }
    segments.extend(path.folders.iter().map(|folder| to_kebab(folder)));
    segments.push(to_kebab(stem_of(&path.file_name)));

    if segments.last().is_some_and(|leaf| leaf == "index") {
        segments.pop();
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Build the route map for a set of source-relative page paths.
pub fn build_route_map<I>(rel_paths: I, vocab: &Vocabulary) -> RouteMap
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut map = RouteMap::new();
    for rel in rel_paths {
        let rel = rel.as_ref();
        let parent = rel.parent().unwrap_or_else(|| Path::new(""));
        let file_name = rel
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let restructured = restructure(&file_name, parent, vocab);
        map.insert(path_key(rel), route_for(&restructured));
    }
    map
}

/// Route map keys use forward slashes regardless of platform.
pub fn path_key(rel: &Path) -> String {
    rel.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(dot) if dot > 0 => filename.split_at(dot),
        _ => (filename, ""),
    }
}

fn stem_of(file_name: &str) -> &str {
    split_extension(file_name).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn restructured(filename: &str) -> RestructuredPath {
        restructure(filename, Path::new(""), &Vocabulary::default())
    }

    #[rstest]
    // A name made entirely of one keyword keeps that keyword as filename.
    #[case("dashboard.html", &[], "dashboard.html")]
    // Two keyword folders, non-keyword remainder becomes the filename.
    #[case("apps-ecommerce-product-grid.html", &["apps", "ecommerce"], "product-grid.html")]
    // A trailing keyword run is a filename, not a folder.
    #[case("apps-ecommerce.html", &["apps"], "ecommerce.html")]
    // First non-keyword token stops nesting for good.
    #[case("widgets-data-tables.html", &["widgets"], "data-tables.html")]
    // Plain index page.
    #[case("index.html", &[], "index.html")]
    fn test_restructure(
        #[case] filename: &str,
        #[case] folders: &[&str],
        #[case] file_name: &str,
    ) {
        let result = restructured(filename);
        assert_eq!(result.folders, folders);
        assert_eq!(result.file_name, file_name);
    }

    #[test]
    fn test_no_nest_flattens_remainder() {
        let result = restructured("auth-cover-signin-basic.html");
        assert_eq!(result.folders, vec!["auth-cover"]);
        assert_eq!(result.file_name, "signin-basic.html");
    }

    #[test]
    fn test_no_nest_beats_later_keywords() {
        // "pages" is a folder keyword, but nothing nests past a no-nest match.
        let result = restructured("auth-cover-pages-lockscreen.html");
        assert_eq!(result.folders, vec!["auth-cover"]);
        assert_eq!(result.file_name, "pages-lockscreen.html");
    }

    #[test]
    fn test_existing_parent_is_preserved() {
        let result = restructure(
            "apps-chat.html",
            Path::new("extra"),
            &Vocabulary::default(),
        );
        assert_eq!(result.parent, Path::new("extra"));
        assert_eq!(result.folders, vec!["apps"]);
        assert_eq!(result.file_name, "chat.html");
    }

    #[rstest]
    #[case("index.html", "/")]
    #[case("dashboard.html", "/dashboard")]
    #[case("apps-ecommerce-product-grid.html", "/apps/ecommerce/product-grid")]
    #[case("auth-cover-signin-basic.html", "/auth-cover/signin-basic")]
    fn test_route_for(#[case] filename: &str, #[case] route: &str) {
        assert_eq!(route_for(&restructured(filename)), route);
    }

    #[test]
    fn test_route_index_collapses_to_parent() {
        let path = RestructuredPath {
            parent: PathBuf::new(),
            folders: vec!["dashboard".to_string()],
            file_name: "index.html".to_string(),
        };
        assert_eq!(route_for(&path), "/dashboard");
    }

    #[test]
    fn test_route_map_end_to_end() {
        let files = [
            "index.html",
            "apps-ecommerce-product-grid.html",
            "auth-cover-signin-basic.html",
        ];
        let map = build_route_map(files.iter().map(Path::new), &Vocabulary::default());
        assert_eq!(map["index.html"], "/");
        assert_eq!(
            map["apps-ecommerce-product-grid.html"],
            "/apps/ecommerce/product-grid"
        );
        assert_eq!(
            map["auth-cover-signin-basic.html"],
            "/auth-cover/signin-basic"
        );
    }

    #[rstest]
    #[case(CaseStyle::Kebab, "apps/ecommerce/product-grid.php")]
    #[case(CaseStyle::Pascal, "Apps/Ecommerce/ProductGrid.php")]
    #[case(CaseStyle::Snake, "apps/ecommerce/product_grid.php")]
    fn test_dest_relative_casing(#[case] style: CaseStyle, #[case] expected: &str) {
        let result = restructured("apps-ecommerce-product-grid.html");
        assert_eq!(result.dest_relative(style, ".php"), Path::new(expected));
    }

    #[test]
    fn test_casing_does_not_affect_routes() {
        // Pascal on disk, kebab in the route, always.
        let result = restructured("apps-ecommerce-product-grid.html");
        let _disk = result.dest_relative(CaseStyle::Pascal, ".cshtml");
        assert_eq!(route_for(&result), "/apps/ecommerce/product-grid");
    }
}
