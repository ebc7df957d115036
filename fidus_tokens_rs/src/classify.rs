//! Prefix-based token classification and label derivation.
//!
//! Category assignment is an ordered first-match prefix scan, so the mapping
//! stays a pure function of the variable name. Unknown prefixes always land
//! in [`TokenCategory::Other`]; classification never fails.

use heck::ToTitleCase;

use crate::regexes::regex_category_prefix;
use crate::types::TokenCategory;

/// Ordered prefix rules; first match wins.
const PREFIX_RULES: &[(&str, TokenCategory)] = &[
    ("--color-", TokenCategory::Color),
    ("--spacing-", TokenCategory::Spacing),
    ("--radius-", TokenCategory::Radius),
    ("--shadow-", TokenCategory::Shadow),
    ("--z-", TokenCategory::ZIndex),
    ("--font-", TokenCategory::Typography),
    ("--line-height-", TokenCategory::Typography),
    ("--duration-", TokenCategory::Motion),
    ("--easing-", TokenCategory::Motion),
];

/// Map a raw variable name to its category.
pub fn classify(variable: &str) -> TokenCategory {
    for (prefix, category) in PREFIX_RULES {
        if variable.starts_with(prefix) {
            return *category;
        }
    }
    TokenCategory::Other
}

/// Derive the human-readable label: strip the leading `--<segment>-` prefix,
/// then title-case the kebab-case remainder.
///
/// `--color-primary-hover` → `Primary Hover`, `--duration-fast` → `Fast`.
pub fn variable_to_name(variable: &str) -> String {
    let rest = regex_category_prefix().replace(variable, "");
    rest.to_title_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_prefixes() {
        assert_eq!(classify("--color-primary"), TokenCategory::Color);
        assert_eq!(classify("--spacing-md"), TokenCategory::Spacing);
        assert_eq!(classify("--radius-full"), TokenCategory::Radius);
        assert_eq!(classify("--shadow-lg"), TokenCategory::Shadow);
        assert_eq!(classify("--z-sticky"), TokenCategory::ZIndex);
        assert_eq!(classify("--font-size-md"), TokenCategory::Typography);
        assert_eq!(classify("--line-height-tight"), TokenCategory::Typography);
        assert_eq!(classify("--duration-fast"), TokenCategory::Motion);
        assert_eq!(classify("--easing-standard"), TokenCategory::Motion);
    }

    #[test]
    fn test_classify_unknown_prefix_is_other() {
        assert_eq!(classify("--brand-watermark"), TokenCategory::Other);
        assert_eq!(classify("--breakpoint-lg"), TokenCategory::Other);
        assert_eq!(classify("--x"), TokenCategory::Other);
    }

    // Classification is total: anything that looks like a custom property
    // resolves to exactly one category without panicking.
    #[test]
    fn test_classify_is_total_over_odd_names() {
        for name in ["--", "---", "--UPPER-CASE", "--1digit", "--color", "--z"] {
            let category = classify(name);
            assert!(TokenCategory::ALL.contains(&category));
        }
    }

    #[test]
    fn test_name_derivation() {
        assert_eq!(variable_to_name("--color-primary-hover"), "Primary Hover");
        assert_eq!(variable_to_name("--duration-fast"), "Fast");
        assert_eq!(variable_to_name("--spacing-2xl"), "2xl");
        assert_eq!(variable_to_name("--z-sticky"), "Sticky");
    }

    // The prefix strip removes one segment only, matching how labels read in
    // the documentation: `--line-height-tight` keeps its `height` word.
    #[test]
    fn test_name_derivation_strips_single_segment() {
        assert_eq!(variable_to_name("--line-height-tight"), "Height Tight");
        assert_eq!(variable_to_name("--font-size-md"), "Size Md");
    }

    #[test]
    fn test_name_derivation_without_prefix_segment() {
        // No `--word-` prefix to strip; the whole name becomes the label.
        assert_eq!(variable_to_name("--primary"), "Primary");
    }
}
