//! Terminal color utilities for CLI output.
//!
//! Provides ANSI color codes and semantic helpers so every fitok command
//! colors the same things the same way: variables cyan, values green,
//! token names bold, categories by their own hue.

use std::io::IsTerminal;

use crate::types::{ColorMode, TokenCategory};

// ============================================================================
// ANSI Color Codes
// ============================================================================

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RESET: &str = "\x1b[0m";

// Bright variants
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";

/// Determines if colors should be used based on ColorMode and terminal detection.
pub fn is_enabled(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Colorizer that can be passed around to render functions.
#[derive(Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            enabled: is_enabled(mode),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    // === Semantic colors ===

    /// Failures - RED
    pub fn error(&self, s: &str) -> String {
        self.wrap(s, RED)
    }

    /// Collisions, degraded states - YELLOW
    pub fn warn(&self, s: &str) -> String {
        self.wrap(s, YELLOW)
    }

    /// Confirmations - GREEN
    pub fn ok(&self, s: &str) -> String {
        self.wrap(s, GREEN)
    }

    /// Headers, token names - BOLD
    pub fn header(&self, s: &str) -> String {
        self.wrap(s, BOLD)
    }

    /// Secondary info, hints, descriptions - DIM
    pub fn dim(&self, s: &str) -> String {
        self.wrap(s, DIM)
    }

    /// Custom-property names - CYAN
    pub fn variable(&self, s: &str) -> String {
        self.wrap(s, CYAN)
    }

    /// Raw token values - GREEN
    pub fn value(&self, s: &str) -> String {
        self.wrap(s, GREEN)
    }

    /// Structural punctuation in code views - MAGENTA
    pub fn punct(&self, s: &str) -> String {
        self.wrap(s, MAGENTA)
    }

    /// Counts - BRIGHT_CYAN
    pub fn number(&self, n: impl std::fmt::Display) -> String {
        self.wrap(&n.to_string(), BRIGHT_CYAN)
    }

    /// Category labels, each bucket in its own hue.
    pub fn category(&self, category: TokenCategory) -> String {
        self.wrap(category.slug(), category_code(category))
    }

    // === Raw color access ===

    pub fn wrap(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

fn category_code(category: TokenCategory) -> &'static str {
    match category {
        TokenCategory::Color => MAGENTA,
        TokenCategory::Spacing => GREEN,
        TokenCategory::Radius => CYAN,
        TokenCategory::Shadow => BLUE,
        TokenCategory::ZIndex => BRIGHT_YELLOW,
        TokenCategory::Typography => BOLD,
        TokenCategory::Motion => BRIGHT_CYAN,
        TokenCategory::Other => DIM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_painter_disabled() {
        let p = Painter { enabled: false };
        assert_eq!(p.error("test"), "test");
        assert_eq!(p.variable("--color-primary"), "--color-primary");
        assert_eq!(p.value("16px"), "16px");
    }

    #[test]
    fn test_painter_enabled() {
        let p = Painter { enabled: true };
        assert_eq!(p.error("test"), "\x1b[31mtest\x1b[0m");
        assert_eq!(p.variable("test"), "\x1b[36mtest\x1b[0m");
        assert_eq!(p.value("test"), "\x1b[32mtest\x1b[0m");
    }

    #[test]
    fn test_every_category_has_a_hue() {
        let p = Painter { enabled: true };
        for category in TokenCategory::ALL {
            assert!(p.category(category).contains(category.slug()));
        }
    }

    #[test]
    fn test_color_mode_detection() {
        assert!(is_enabled(ColorMode::Always));
        assert!(!is_enabled(ColorMode::Never));
        // Auto depends on terminal, can't reliably test
    }
}
