//! Free-text filtering over a token list.

use crate::types::DesignToken;

/// Keep tokens where `query` (case-insensitively) is a substring of the
/// name, the variable, or the description. An empty query passes every
/// token through unchanged, in order.
pub fn filter_tokens(tokens: &[DesignToken], query: &str) -> Vec<DesignToken> {
    if query.is_empty() {
        return tokens.to_vec();
    }
    let needle = query.to_lowercase();
    tokens
        .iter()
        .filter(|token| {
            token.name.to_lowercase().contains(&needle)
                || token.variable.to_lowercase().contains(&needle)
                || token
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenCategory;

    fn token(name: &str, variable: &str, description: Option<&str>) -> DesignToken {
        DesignToken {
            name: name.to_string(),
            variable: variable.to_string(),
            value: "16px".to_string(),
            category: TokenCategory::Spacing,
            description: description.map(|d| d.to_string()),
        }
    }

    fn fixture() -> Vec<DesignToken> {
        vec![
            token("Primary", "--color-primary", None),
            token("Success", "--color-success", Some("positive actions")),
            token("Md", "--spacing-md", None),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let tokens = fixture();
        assert_eq!(filter_tokens(&tokens, ""), tokens);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let filtered = filter_tokens(&fixture(), "PRIM");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Primary");
    }

    #[test]
    fn test_matches_variable() {
        let filtered = filter_tokens(&fixture(), "spacing-");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].variable, "--spacing-md");
    }

    #[test]
    fn test_matches_description() {
        let filtered = filter_tokens(&fixture(), "positive");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Success");
    }

    #[test]
    fn test_preserves_input_order() {
        let filtered = filter_tokens(&fixture(), "color");
        let names: Vec<_> = filtered.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Primary", "Success"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter_tokens(&fixture(), "nothing-here").is_empty());
    }
}
