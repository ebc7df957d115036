//! The classified token catalog.
//!
//! A catalog owns a [`StyleSource`] and nothing else: every read pulls a
//! fresh snapshot, so runtime style changes (theme edits, regenerated
//! stylesheets) are always reflected. Tokens exist only for the duration of
//! the read; there is no mutation or cross-read identity.

use crate::classify::{classify, variable_to_name};
use crate::source::StyleSource;
use crate::types::{DesignToken, TokenCategory};

pub struct TokenCatalog<S: StyleSource> {
    source: S,
}

impl<S: StyleSource> TokenCatalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Every classified token from the current source, in snapshot order.
    pub fn all_tokens(&self) -> Vec<DesignToken> {
        self.source
            .snapshot()
            .iter()
            .map(|(variable, decl)| DesignToken {
                name: variable_to_name(variable),
                variable: variable.to_string(),
                value: decl.value.clone(),
                category: classify(variable),
                description: decl.description.clone(),
            })
            .collect()
    }

    /// The subset of `all_tokens()` matching `category`, order preserved.
    pub fn tokens_by_category(&self, category: TokenCategory) -> Vec<DesignToken> {
        self.all_tokens()
            .into_iter()
            .filter(|token| token.category == category)
            .collect()
    }

    /// Token counts per category, in display order, including empty buckets.
    pub fn category_counts(&self) -> Vec<(TokenCategory, usize)> {
        let tokens = self.all_tokens();
        TokenCategory::ALL
            .iter()
            .map(|category| {
                let count = tokens.iter().filter(|t| t.category == *category).count();
                (*category, count)
            })
            .collect()
    }
}
