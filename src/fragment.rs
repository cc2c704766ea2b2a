//! Include-fragment extraction, parameter parsing, and the shared rewrite
//! pass.
//!
//! Kits carry include parameters in three loosely-structured shapes: a
//! JSON-ish object (`{title: "Home", active: true}`), a PHP-array-ish blob
//! (`array('title' => 'Home')` / `['title' => 'Home']`), or bare
//! `key="value"` pairs. Parsers are tried in that order; garbage yields an
//! empty map, never an error — emitters must tolerate parameterless
//! includes.

use std::collections::{BTreeMap, HashSet};

use regex_lite::Regex;
use serde_json::Value;

use crate::pattern::PatternRegistry;

/// One recognized include directive in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Full matched text, replaced verbatim during rewriting.
    pub full: String,
    pub path: String,
    pub raw_params: Option<String>,
    /// Label of the registry pattern that matched.
    pub label: String,
}

pub type ParamMap = BTreeMap<String, Value>;

/// Include paths whose parameters carry the page's layout title; the
/// fragment itself is stripped from output instead of rewritten.
pub const TITLE_PARTIALS: [&str; 2] = ["title-meta", "app-meta-title"];

const TITLE_KEYS: [&str; 2] = ["title", "pageTitle"];

/// Scan with every registered pattern (primary and escaped-alternate
/// matchers) and collect fragments in match order. The escaped matcher also
/// accepts the raw form, so results are deduplicated on the full match text.
pub fn extract_fragments(text: &str, registry: &PatternRegistry) -> Vec<Fragment> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut fragments = Vec::new();

    for pattern in registry.patterns() {
        for matcher in pattern.matchers() {
            for caps in matcher.captures_iter(text) {
                let full = caps.get(0).expect("group 0 always present").as_str();
                if !seen.insert(full.to_string()) {
                    continue;
                }
                let Some(path) = caps.name("path").map(|m| m.as_str().trim()) else {
                    continue;
                };
                if path.is_empty() {
                    continue;
                }
                let raw_params = caps
                    .name("params")
                    .map(|m| m.as_str().trim())
                    .filter(|params| !params.is_empty())
                    .map(str::to_string);
                fragments.push(Fragment {
                    full: full.to_string(),
                    path: path.to_string(),
                    raw_params,
                    label: pattern.label.clone(),
                });
            }
        }
    }

    fragments
}

/// Parse an include's raw parameter blob. Grammars are tried in priority
/// order; the first success wins, and a valid-but-empty JSON object is a
/// success. No grammar matching is normal control flow, not an error.
pub fn parse_params(raw: Option<&str>) -> ParamMap {
    let Some(raw) = raw else {
        return ParamMap::new();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParamMap::new();
    }

    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        if let Some(map) = parse_json_object(trimmed) {
            return map;
        }
    }
    if let Some(map) = parse_bracket_array(trimmed) {
        return map;
    }
    if let Some(map) = parse_key_value(trimmed) {
        return map;
    }
    ParamMap::new()
}

/// JSON-object syntax, tolerating single quotes, unquoted keys, and
/// trailing commas.
fn parse_json_object(raw: &str) -> Option<ParamMap> {
    let single_quoted = Regex::new(r"'([^']*)'").expect("static pattern");
    let normalized = single_quoted.replace_all(raw, "\"$1\"");

    let unquoted_keys =
        Regex::new(r"([{,]\s*)([A-Za-z_][A-Za-z0-9_-]*)\s*:").expect("static pattern");
    let normalized = unquoted_keys.replace_all(&normalized, "$1\"$2\":");

    let trailing_commas = Regex::new(r",(\s*[}\]])").expect("static pattern");
    let normalized = trailing_commas.replace_all(&normalized, "$1");

    let object: serde_json::Map<String, Value> = serde_json::from_str(&normalized).ok()?;
    Some(object.into_iter().collect())
}

/// `array('k' => 'v', ...)` / `['k' => 'v', ...]` pair syntax.
fn parse_bracket_array(raw: &str) -> Option<ParamMap> {
    if !(raw.starts_with("array") || raw.starts_with('[')) {
        return None;
    }
    let pair = Regex::new(
        r#"["']([\w-]+)["']\s*=>\s*(?:"([^"]*)"|'([^']*)'|(true|false|null)|(-?\d+(?:\.\d+)?))"#,
    )
    .expect("static pattern");

    let mut map = ParamMap::new();
    for caps in pair.captures_iter(raw) {
        let key = caps.get(1).expect("key group").as_str().to_string();
        let value = if let Some(s) = caps.get(2).or_else(|| caps.get(3)) {
            Value::String(s.as_str().to_string())
        } else if let Some(word) = caps.get(4) {
            match word.as_str() {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => Value::Null,
            }
        } else if let Some(num) = caps.get(5) {
            serde_json::from_str(num.as_str()).unwrap_or(Value::Null)
        } else {
            continue;
        };
        map.insert(key, value);
    }

    (!map.is_empty()).then_some(map)
}

/// Bare `key="value"` / `key='value'` pairs.
fn parse_key_value(raw: &str) -> Option<ParamMap> {
    let pair = Regex::new(r#"([\w-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("static pattern");
    let mut map = ParamMap::new();
    for caps in pair.captures_iter(raw) {
        let key = caps.get(1).expect("key group").as_str().to_string();
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str())
            .unwrap_or_default();
        map.insert(key, Value::String(value.to_string()));
    }
    (!map.is_empty()).then_some(map)
}

/// Uniform include-path normalization applied before any target-specific
/// prefixing: strip leading `./`/`../` runs, drop the extension, forward
/// slashes.
pub fn normalize_include_path(raw: &str) -> String {
    let mut path = raw.trim().replace('\\', "/");
    loop {
        if let Some(rest) = path.strip_prefix("./") {
            path = rest.to_string();
        } else if let Some(rest) = path.strip_prefix("../") {
            path = rest.to_string();
        } else {
            break;
        }
    }

    let leaf_start = path.rfind('/').map_or(0, |slash| slash + 1);
    if let Some(dot) = path[leaf_start..].rfind('.') {
        if dot > 0 {
            path.truncate(leaf_start + dot);
        }
    }
    path
}

/// Result of one rewrite pass over a page.
#[derive(Debug)]
pub struct RewriteOutcome {
    pub text: String,
    /// Layout title harvested from a stripped `title-meta` fragment.
    pub title: Option<String>,
}

/// Replace every fragment's full match with the emitter-supplied rendering.
/// Title fragments are stripped (replaced with nothing) and their title
/// recorded; they never reach the callback.
pub fn rewrite_includes<F>(text: &str, registry: &PatternRegistry, mut render: F) -> RewriteOutcome
where
    F: FnMut(&str, &ParamMap, &Fragment) -> String,
{
    let fragments = extract_fragments(text, registry);
    let mut out = text.to_string();
    let mut title: Option<String> = None;

    for fragment in &fragments {
        let normalized = normalize_include_path(&fragment.path);
        let params = parse_params(fragment.raw_params.as_deref());
        let leaf = normalized.rsplit('/').next().unwrap_or(&normalized);

        let replacement = if TITLE_PARTIALS.contains(&leaf) {
            if title.is_none() {
                title = TITLE_KEYS
                    .iter()
                    .find_map(|key| params.get(*key))
                    .and_then(|value| value.as_str())
                    .map(str::to_string);
            }
            String::new()
        } else {
            render(&normalized, &params, fragment)
        };

        out = out.replace(&fragment.full, &replacement);
    }

    RewriteOutcome { text: out, title }
}
