use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefixes used internally by the styling framework; variables carrying one
/// of these never surface in the catalog.
pub const RESERVED_PREFIXES: &[&str] = &["--tw-"];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Serialization format for token sets (code view, clipboard, file export).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Css,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Css => "css",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "css" => Ok(ExportFormat::Css),
            other => Err(format!("unknown format `{other}` (expected json or css)")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// How the inspector renders the filtered set: one serialized block, or one
/// card per token with a category-appropriate preview.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ViewMode {
    #[default]
    Code,
    Grid,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "code" => Ok(ViewMode::Code),
            "grid" => Ok(ViewMode::Grid),
            other => Err(format!("unknown view `{other}` (expected code or grid)")),
        }
    }
}

/// The closed set of classification buckets. Category is always derived from
/// the variable prefix, never stored independently of it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenCategory {
    Color,
    Spacing,
    Radius,
    Shadow,
    ZIndex,
    Typography,
    Motion,
    Other,
}

impl TokenCategory {
    /// Every category, in display order.
    pub const ALL: [TokenCategory; 8] = [
        TokenCategory::Color,
        TokenCategory::Spacing,
        TokenCategory::Radius,
        TokenCategory::Shadow,
        TokenCategory::ZIndex,
        TokenCategory::Typography,
        TokenCategory::Motion,
        TokenCategory::Other,
    ];

    /// Kebab-case slug used in export file names and CLI arguments.
    pub fn slug(&self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Radius => "radius",
            TokenCategory::Shadow => "shadow",
            TokenCategory::ZIndex => "z-index",
            TokenCategory::Typography => "typography",
            TokenCategory::Motion => "motion",
            TokenCategory::Other => "other",
        }
    }
}

impl FromStr for TokenCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "color" => Ok(TokenCategory::Color),
            "spacing" => Ok(TokenCategory::Spacing),
            "radius" => Ok(TokenCategory::Radius),
            "shadow" => Ok(TokenCategory::Shadow),
            "z-index" | "zindex" | "z" => Ok(TokenCategory::ZIndex),
            "typography" => Ok(TokenCategory::Typography),
            "motion" => Ok(TokenCategory::Motion),
            "other" => Ok(TokenCategory::Other),
            other => Err(format!("unknown category `{other}`")),
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One design token as observed in a catalog snapshot.
///
/// `variable` is the raw custom-property name and the unique key; `name` is
/// the human-readable label derived from it; `value` is the raw declaration
/// value, opaque except to category-specific preview rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignToken {
    pub name: String,
    pub variable: String,
    pub value: String,
    pub category: TokenCategory,
    /// Trailing `/* comment */` on the declaration line, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_round_trip() {
        for category in TokenCategory::ALL {
            let parsed: TokenCategory = category.slug().parse().expect("slug parses back");
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_serializes_camel_case() {
        let json = serde_json::to_string(&TokenCategory::ZIndex).expect("serializes");
        assert_eq!(json, "\"zIndex\"");
    }

    #[test]
    fn test_format_parse_and_extension() {
        assert_eq!("JSON".parse::<ExportFormat>().ok(), Some(ExportFormat::Json));
        assert_eq!("css".parse::<ExportFormat>().ok(), Some(ExportFormat::Css));
        assert!("yaml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Css.extension(), "css");
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("grid".parse::<ViewMode>().ok(), Some(ViewMode::Grid));
        assert!("table".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_token_serializes_without_empty_description() {
        let token = DesignToken {
            name: "Primary".into(),
            variable: "--color-primary".into(),
            value: "45 100% 51%".into(),
            category: TokenCategory::Color,
            description: None,
        };
        let json = serde_json::to_string(&token).expect("serializes");
        assert!(!json.contains("description"));
    }
}
