//! Inspector rendering: the code and grid views over a filtered token set.
//!
//! Each invocation owns its view state (query, format, view mode) and
//! renders once; nothing here mutates the catalog. The code view prints the
//! whole filtered set as one highlighted block in the active export format.
//! The grid view prints one card per token with a category-appropriate
//! preview and a per-token copy hint.

use colored::Colorize;

use crate::colors::Painter;
use crate::export::serialize_tokens;
use crate::regexes::{
    regex_custom_property, regex_hex_color, regex_hsl_triplet, regex_json_pair, regex_length,
    regex_rgb_color,
};
use crate::types::{DesignToken, ExportFormat, TokenCategory, ViewMode};

/// One render of the inspector over an already-filtered token set.
pub struct InspectorState<'a> {
    pub tokens: &'a [DesignToken],
    pub query: Option<&'a str>,
    pub format: ExportFormat,
    pub view: ViewMode,
}

pub fn render(state: &InspectorState<'_>, painter: &Painter) -> String {
    if state.tokens.is_empty() {
        // An active query with no hits gets the explicit message; an empty
        // catalog is a valid "nothing here yet" state, not an error.
        return match state.query {
            Some(query) if !query.is_empty() => {
                format!("no tokens found matching \"{query}\"")
            }
            _ => painter.dim("(no design tokens found)"),
        };
    }
    match state.view {
        ViewMode::Code => render_code(state.tokens, state.format, painter),
        ViewMode::Grid => render_grid(state.tokens, state.format, painter),
    }
}

/// The filtered set as one syntax-highlighted block in the export format.
fn render_code(tokens: &[DesignToken], format: ExportFormat, painter: &Painter) -> String {
    let serialized = serialize_tokens(tokens, format);
    if !painter.enabled() {
        return serialized;
    }
    match format {
        ExportFormat::Json => highlight_json(&serialized, painter),
        ExportFormat::Css => highlight_css(&serialized, painter),
    }
}

fn highlight_json(serialized: &str, painter: &Painter) -> String {
    serialized
        .lines()
        .map(|line| {
            regex_json_pair()
                .replace(line, |caps: &regex::Captures<'_>| {
                    format!(
                        "\"{}\": \"{}\"",
                        painter.variable(&caps[1]),
                        painter.value(&caps[2])
                    )
                })
                .into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn highlight_css(serialized: &str, painter: &Painter) -> String {
    serialized
        .lines()
        .map(|line| {
            if let Some(caps) = regex_custom_property().captures(line) {
                format!(
                    "  {}: {};",
                    painter.variable(&caps[1]),
                    painter.value(caps[2].trim())
                )
            } else {
                painter.punct(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One card per token: preview, name, category, declaration, copy hint.
fn render_grid(tokens: &[DesignToken], format: ExportFormat, painter: &Painter) -> String {
    let mut cards = Vec::with_capacity(tokens.len());
    for token in tokens {
        let mut card = format!(
            "{} {}  {}",
            preview(token),
            painter.header(&token.name),
            painter.category(token.category)
        );
        card.push_str(&format!(
            "\n   {}: {};",
            painter.variable(&token.variable),
            painter.value(&token.value)
        ));
        if let Some(description) = &token.description {
            card.push_str(&format!("  {}", painter.dim(&format!("/* {description} */"))));
        }
        card.push_str(&format!(
            "\n   {}",
            painter.dim(&format!(
                "copy: fitok copy --var {} --format {}",
                token.variable, format
            ))
        ));
        cards.push(card);
    }
    cards.join("\n\n")
}

/// Category-appropriate visual sample for a grid card.
fn preview(token: &DesignToken) -> String {
    match token.category {
        TokenCategory::Color => match parse_color_value(&token.value) {
            Some((r, g, b)) => "    ".on_truecolor(r, g, b).to_string(),
            None => "····".dimmed().to_string(),
        },
        TokenCategory::Spacing | TokenCategory::Radius => {
            let width = parse_length_px(&token.value)
                .map(|px| (px / 4.0).round().clamp(1.0, 12.0) as usize)
                .unwrap_or(1);
            "▰".repeat(width).green().to_string()
        }
        TokenCategory::Shadow => "░▒▓".blue().to_string(),
        TokenCategory::Typography => "Aa".bold().to_string(),
        TokenCategory::Motion => token.value.italic().to_string(),
        TokenCategory::ZIndex | TokenCategory::Other => token.value.clone(),
    }
}

/// Parse a color value in any of the forms Fidus tokens use: a space
/// separated HSL triplet (`45 100% 51%`), hex, or `rgb()`/`rgba()`.
fn parse_color_value(value: &str) -> Option<(u8, u8, u8)> {
    let value = value.trim();
    if let Some(caps) = regex_hsl_triplet().captures(value) {
        let h: f64 = caps[1].parse().ok()?;
        let s: f64 = caps[2].parse().ok()?;
        let l: f64 = caps[3].parse().ok()?;
        return Some(hsl_to_rgb(h, s / 100.0, l / 100.0));
    }
    if regex_hex_color().is_match(value) {
        return parse_hex(value);
    }
    if let Some(caps) = regex_rgb_color().captures(value) {
        let r: u8 = caps[1].parse().ok()?;
        let g: u8 = caps[2].parse().ok()?;
        let b: u8 = caps[3].parse().ok()?;
        return Some((r, g, b));
    }
    None
}

fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    match hex.len() {
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        3 => {
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 1], 16)
                    .ok()
                    .map(|n| n * 17)
            };
            Some((channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r1, g1, b1) = if hp < 1.0 {
        (c, x, 0.0)
    } else if hp < 2.0 {
        (x, c, 0.0)
    } else if hp < 3.0 {
        (0.0, c, x)
    } else if hp < 4.0 {
        (0.0, x, c)
    } else if hp < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    let m = l - c / 2.0;
    let to_byte = |v: f64| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
    (to_byte(r1), to_byte(g1), to_byte(b1))
}

/// A length in device pixels; rem/em assume the 16px documentation root.
fn parse_length_px(value: &str) -> Option<f64> {
    let caps = regex_length().captures(value.trim())?;
    let n: f64 = caps[1].parse().ok()?;
    match &caps[2] {
        "px" => Some(n),
        _ => Some(n * 16.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorMode;

    fn plain() -> Painter {
        Painter::new(ColorMode::Never)
    }

    fn token(variable: &str, value: &str, category: TokenCategory) -> DesignToken {
        DesignToken {
            name: crate::classify::variable_to_name(variable),
            variable: variable.to_string(),
            value: value.to_string(),
            category,
            description: None,
        }
    }

    #[test]
    fn test_empty_query_state_message() {
        let state = InspectorState {
            tokens: &[],
            query: Some("prim"),
            format: ExportFormat::Json,
            view: ViewMode::Code,
        };
        assert_eq!(render(&state, &plain()), "no tokens found matching \"prim\"");
    }

    #[test]
    fn test_empty_catalog_is_not_an_error_state() {
        let state = InspectorState {
            tokens: &[],
            query: None,
            format: ExportFormat::Json,
            view: ViewMode::Grid,
        };
        assert_eq!(render(&state, &plain()), "(no design tokens found)");
    }

    #[test]
    fn test_code_view_without_color_is_the_serialization() {
        let tokens = vec![token("--color-primary", "45 100% 51%", TokenCategory::Color)];
        let state = InspectorState {
            tokens: &tokens,
            query: None,
            format: ExportFormat::Css,
            view: ViewMode::Code,
        };
        assert_eq!(
            render(&state, &plain()),
            ":root {\n  --color-primary: 45 100% 51%;\n}"
        );
    }

    #[test]
    fn test_grid_view_lists_every_token_with_copy_hint() {
        let tokens = vec![
            token("--color-primary", "45 100% 51%", TokenCategory::Color),
            token("--spacing-md", "16px", TokenCategory::Spacing),
        ];
        let state = InspectorState {
            tokens: &tokens,
            query: None,
            format: ExportFormat::Css,
            view: ViewMode::Grid,
        };
        let rendered = render(&state, &plain());
        assert!(rendered.contains("--color-primary: 45 100% 51%;"));
        assert!(rendered.contains("copy: fitok copy --var --spacing-md"));
    }

    #[test]
    fn test_hsl_to_rgb_corners() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), (255, 255, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), (0, 0, 0));
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
    }

    #[test]
    fn test_parse_color_forms() {
        assert!(parse_color_value("45 100% 51%").is_some());
        assert_eq!(parse_color_value("#ffffff"), Some((255, 255, 255)));
        assert_eq!(parse_color_value("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_color_value("rgb(10, 20, 30)"), Some((10, 20, 30)));
        assert_eq!(parse_color_value("currentColor"), None);
    }

    #[test]
    fn test_parse_length_px() {
        assert_eq!(parse_length_px("16px"), Some(16.0));
        assert_eq!(parse_length_px("1rem"), Some(16.0));
        assert_eq!(parse_length_px("0.5em"), Some(8.0));
        assert_eq!(parse_length_px("1100"), None);
    }

    // Previews never panic, whatever the value looks like.
    #[test]
    fn test_preview_total_over_categories() {
        for category in TokenCategory::ALL {
            for value in ["45 100% 51%", "16px", "garbage", ""] {
                let _ = preview(&token("--x-y", value, category));
            }
        }
    }
}
