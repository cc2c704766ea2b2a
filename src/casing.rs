use regex_lite::Regex;

use crate::config::CaseStyle;

/// Transform a path segment into the target's on-disk casing.
///
/// Route computation never goes through here; routes are always kebab.
pub fn apply_casing(s: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Kebab => to_kebab(s),
        CaseStyle::Pascal => to_pascal(s),
        CaseStyle::Snake => to_kebab(s).replace('-', "_"),
    }
}

pub fn to_kebab(s: &str) -> String {
    let boundary = Regex::new(r"([a-z0-9])([A-Z])").expect("static pattern");
    let spaced = boundary.replace_all(s, "$1-$2");
    let separators = Regex::new(r"[\s_]+").expect("static pattern");
    separators.replace_all(&spaced, "-").to_lowercase()
}

pub fn to_pascal(s: &str) -> String {
    s.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("product-grid", CaseStyle::Kebab, "product-grid")]
    #[case("ProductGrid", CaseStyle::Kebab, "product-grid")]
    #[case("product_grid", CaseStyle::Kebab, "product-grid")]
    #[case("product-grid", CaseStyle::Pascal, "ProductGrid")]
    #[case("auth-cover", CaseStyle::Pascal, "AuthCover")]
    #[case("product-grid", CaseStyle::Snake, "product_grid")]
    #[case("ProductGrid", CaseStyle::Snake, "product_grid")]
    fn test_apply_casing(#[case] input: &str, #[case] style: CaseStyle, #[case] expected: &str) {
        assert_eq!(apply_casing(input, style), expected);
    }
}
