//! Include and inline-variable pattern registries.
//!
//! Pattern sources live in embedded JSON resources, keyed by label. Each
//! include pattern must carry a named `path` group and may carry a named
//! `params` group. Upstream tooling sometimes HTML-escapes the kit before we
//! see it, turning `{{> x}}` into `{{&gt; x}}`, so every pattern also gets a
//! precomputed escaped-alternate matcher built once at registry construction.

use std::collections::BTreeMap;

use console::style;
use regex_lite::Regex;
use serde::Deserialize;

use crate::error::{ReframeError, Result};

const IMPORT_PATTERNS_JSON: &str = include_str!("../resources/import_patterns.json");
const VARIABLE_PATTERNS_JSON: &str = include_str!("../resources/variable_patterns.json");

#[derive(Deserialize)]
struct PatternFile {
    patterns: BTreeMap<String, String>,
}

/// One include syntax: the primary matcher plus the `&gt;`-tolerant variant.
#[derive(Debug)]
pub struct Pattern {
    pub label: String,
    primary: Regex,
    escaped: Regex,
}

impl Pattern {
    pub fn new(label: impl Into<String>, source: &str) -> Result<Self> {
        let label = label.into();
        let primary = Regex::new(source).map_err(|e| ReframeError::InvalidPattern {
            label: label.clone(),
            source: e,
        })?;
        // The alternate tolerates entity-escaped input; it still matches the
        // raw form too, so extraction dedupes on the full match text.
        let escaped_source = source.replace('>', "(?:>|&gt;)");
        let escaped = Regex::new(&escaped_source).map_err(|e| ReframeError::InvalidPattern {
            label: label.clone(),
            source: e,
        })?;
        Ok(Self {
            label,
            primary,
            escaped,
        })
    }

    pub fn matchers(&self) -> [&Regex; 2] {
        [&self.primary, &self.escaped]
    }
}

/// The registered include syntaxes, in label order.
#[derive(Debug)]
pub struct PatternRegistry {
    patterns: Vec<Pattern>,
}

impl PatternRegistry {
    /// Built-in registry from the embedded resource file.
    pub fn load_default() -> Result<Self> {
        let file: PatternFile = serde_json::from_str(IMPORT_PATTERNS_JSON)
            .map_err(|e| ReframeError::PatternRegistryParse { source: e })?;
        Ok(Self::from_sources(&file.patterns))
    }

    /// Compile a label → source map, skipping invalid entries with a warning.
    pub fn from_sources(sources: &BTreeMap<String, String>) -> Self {
        let mut patterns = Vec::new();
        for (label, source) in sources {
            match Pattern::new(label.clone(), source) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => eprintln!(
                    "{} invalid pattern '{}': {}",
                    style("warning:").yellow().bold(),
                    label,
                    e
                ),
            }
        }
        Self { patterns }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

/// Inline-variable syntaxes (`@@var`, `{{ var }}`), applied after include
/// rewriting with an emitter-supplied replacement string.
#[derive(Debug)]
pub struct VariableRegistry {
    patterns: Vec<(String, Regex)>,
}

impl VariableRegistry {
    pub fn load_default() -> Result<Self> {
        let file: PatternFile = serde_json::from_str(VARIABLE_PATTERNS_JSON)
            .map_err(|e| ReframeError::PatternRegistryParse { source: e })?;
        let mut patterns = Vec::new();
        for (label, source) in &file.patterns {
            match Regex::new(source) {
                Ok(regex) => patterns.push((label.clone(), regex)),
                Err(e) => eprintln!(
                    "{} invalid variable pattern '{}': {}",
                    style("warning:").yellow().bold(),
                    label,
                    e
                ),
            }
        }
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> impl Iterator<Item = &Regex> {
        self.patterns.iter().map(|(_, regex)| regex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_registry() {
        let registry = PatternRegistry::load_default().unwrap();
        let labels: Vec<&str> = registry
            .patterns()
            .iter()
            .map(|p| p.label.as_str())
            .collect();
        assert_eq!(labels, vec!["at_include", "handlebars"]);
    }

    #[test]
    fn test_escaped_alternate_matches_entity_form() {
        let pattern = Pattern::new("hb", r"\{\{>\s*(?P<path>[^\s}]+)\s*(?P<params>[^}]*)\}\}")
            .unwrap();
        let [primary, escaped] = pattern.matchers();

        assert!(primary.is_match("{{> partials/footer}}"));
        assert!(!primary.is_match("{{&gt; partials/footer}}"));
        assert!(escaped.is_match("{{&gt; partials/footer}}"));
        // The alternate still accepts the raw form.
        assert!(escaped.is_match("{{> partials/footer}}"));
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let mut sources = BTreeMap::new();
        sources.insert("bad".to_string(), "(".to_string());
        sources.insert(
            "good".to_string(),
            r"@@include\((?P<path>[^)]+)\)".to_string(),
        );
        let registry = PatternRegistry::from_sources(&sources);
        assert_eq!(registry.patterns().len(), 1);
        assert_eq!(registry.patterns()[0].label, "good");
    }

    #[test]
    fn test_variable_registry_loads() {
        let registry = VariableRegistry::load_default().unwrap();
        assert_eq!(registry.patterns().count(), 2);
    }
}
