use std::sync::OnceLock;

use regex::Regex;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

/// One custom-property declaration: `--name: value;` with an optional
/// trailing `/* description */` on the same line.
pub(crate) fn regex_custom_property() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?m)^\s*(--[A-Za-z0-9_-]+)\s*:\s*([^;\n]+);[ \t]*(?:/\*\s*(.*?)\s*\*/)?"#)
    })
}

/// Leading category segment of a variable name (`--color-`, `--spacing-`, ...).
pub(crate) fn regex_category_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"^--[a-z]+-"))
}

/// Space-separated HSL triplet as used by Fidus color tokens: `45 100% 51%`.
pub(crate) fn regex_hsl_triplet() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"^\s*(\d+(?:\.\d+)?)(?:deg)?\s+(\d+(?:\.\d+)?)%\s+(\d+(?:\.\d+)?)%\s*$")
    })
}

/// Six- or three-digit hex color.
pub(crate) fn regex_hex_color() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$"))
}

/// Leading `rgb(`/`rgba(` channels, comma or space separated.
pub(crate) fn regex_rgb_color() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"^rgba?\(\s*(\d+)\s*[, ]\s*(\d+)\s*[, ]\s*(\d+)"))
}

/// A px/rem/em length at the start of a value.
pub(crate) fn regex_length() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"^(\d+(?:\.\d+)?)(px|rem|em)$"))
}

/// A `"key": "value"` pair inside serialized JSON, for code-view highlighting.
pub(crate) fn regex_json_pair() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#""([^"]*)"\s*:\s*"([^"]*)""#))
}
