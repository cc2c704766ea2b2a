use std::collections::BTreeSet;

/// The filename tokens recognized as folder-worthy, plus the subset that
/// stops any further nesting once matched.
///
/// Matching is greedy-longest: a multi-token keyword like `auth-cover` is
/// tried before `auth` at the same position. The set is an explicit value
/// passed into the restructurer, so callers can supply their own table.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Folder keywords, sorted by token count descending.
    folders: Vec<String>,
    no_nest: BTreeSet<String>,
}

impl Vocabulary {
    pub fn new<I, J>(folders: I, no_nest: J) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        J: IntoIterator,
        J::Item: Into<String>,
    {
        let mut folders: Vec<String> = folders.into_iter().map(Into::into).collect();
        folders.sort_by_key(|kw| std::cmp::Reverse(kw.split('-').count()));
        Self {
            folders,
            no_nest: no_nest.into_iter().map(Into::into).collect(),
        }
    }

    /// Longest keyword whose token sequence matches `tokens` at `at`.
    pub fn match_at(&self, tokens: &[&str], at: usize) -> Option<&str> {
        self.folders.iter().map(String::as_str).find(|kw| {
            let kw_tokens: Vec<&str> = kw.split('-').collect();
            tokens[at..]
                .get(..kw_tokens.len())
                .is_some_and(|span| span == kw_tokens.as_slice())
        })
    }

    pub fn is_no_nest(&self, keyword: &str) -> bool {
        self.no_nest.contains(keyword)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.folders.iter().any(|kw| kw == keyword)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(FOLDER_KEYWORDS.iter().copied(), NO_NEST_KEYWORDS.iter().copied())
    }
}

/// Folder-worthy tokens found in the admin-kit filenames this tool is fed.
const FOLDER_KEYWORDS: &[&str] = &[
    "apps",
    "auth",
    "auth-basic",
    "auth-cover",
    "calendar",
    "charts",
    "chat",
    "crm",
    "crypto",
    "dashboard",
    "dashboards",
    "ecommerce",
    "email",
    "extended",
    "forms",
    "icons",
    "invoices",
    "landing",
    "layouts",
    "maps",
    "pages",
    "projects",
    "tables",
    "tasks",
    "ui",
    "widgets",
    "wizard",
];

/// Keywords that flatten everything after them into the filename.
const NO_NEST_KEYWORDS: &[&str] = &["auth", "auth-basic", "auth-cover", "landing"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_match_wins() {
        let vocab = Vocabulary::default();
        let tokens = ["auth", "cover", "signin"];
        assert_eq!(vocab.match_at(&tokens, 0), Some("auth-cover"));
    }

    #[test]
    fn test_single_token_match() {
        let vocab = Vocabulary::default();
        let tokens = ["apps", "ecommerce", "product", "grid"];
        assert_eq!(vocab.match_at(&tokens, 0), Some("apps"));
        assert_eq!(vocab.match_at(&tokens, 1), Some("ecommerce"));
        assert_eq!(vocab.match_at(&tokens, 2), None);
    }

    #[test]
    fn test_no_match_past_end() {
        let vocab = Vocabulary::new(["auth-cover"], Vec::<String>::new());
        let tokens = ["auth"];
        assert_eq!(vocab.match_at(&tokens, 0), None);
    }

    #[test]
    fn test_no_nest_membership() {
        let vocab = Vocabulary::default();
        assert!(vocab.is_no_nest("auth-cover"));
        assert!(!vocab.is_no_nest("apps"));
    }
}
