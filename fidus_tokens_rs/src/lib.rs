//! # fidus-tokens
//!
//! **Design-token catalog and inspector for the Fidus design system.**
//!
//! fidus-tokens reads the CSS custom properties that make up the Fidus
//! theme, classifies them by naming convention, and lets you search,
//! preview, and export the result as JSON or a CSS `:root` block.
//!
//! ## Features
//!
//! - **Fresh reads** - every catalog read re-parses the stylesheets, so
//!   theme edits are always reflected
//! - **Prefix classification** - `--color-*`, `--spacing-*`, `--radius-*`,
//!   `--shadow-*`, `--z-*`, `--font-*`/`--line-height-*`,
//!   `--duration-*`/`--easing-*`, everything else as `other`
//! - **Search** - case-insensitive substring match over name, variable,
//!   and description
//! - **Two views** - highlighted code block or per-token card grid with
//!   color swatches and size bars
//! - **Export** - JSON name/value object or lossless CSS block, to file
//!   or clipboard
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use fidus_tokens::{StyleSnapshot, TokenCatalog, filter_tokens};
//!
//! let snapshot = StyleSnapshot::from_pairs([
//!     ("--color-primary", "45 100% 51%"),
//!     ("--spacing-md", "16px"),
//! ]);
//! let catalog = TokenCatalog::new(snapshot);
//! let tokens = catalog.all_tokens();
//! let hits = filter_tokens(&tokens, "prim");
//! assert_eq!(hits[0].name, "Primary");
//! ```
//!
//! ## CLI Usage
//!
//! For command-line usage, install with `cargo install fidus-tokens` and run:
//!
//! ```bash
//! fitok                          # Inspect tokens under the current directory
//! fitok --query prim             # Search as the docs search box does
//! fitok inspect --view grid      # Card grid with previews
//! fitok export --category color  # Write fidus-color-tokens.json
//! fitok copy --format css        # CSS block to the clipboard
//! fitok watch                    # Re-render on stylesheet changes
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// The classified token catalog over a [`source::StyleSource`].
pub mod catalog;

/// Prefix classification and label derivation.
pub mod classify;

/// Command-line interface (parser, dispatcher, entrypoint).
pub mod cli;

/// System clipboard access for the copy actions.
pub mod clipboard;

/// Terminal color utilities (ANSI codes, [`colors::Painter`]).
pub mod colors;

/// Optional `fidustok.toml` configuration.
pub mod config;

/// JSON/CSS serialization and export file naming.
pub mod export;

/// Code and grid view rendering.
pub mod inspect;

/// Spinner feedback for stylesheet scans.
pub mod progress;

pub(crate) mod regexes;

/// Free-text filtering over token lists.
pub mod search;

/// Style snapshots and the stylesheet reader.
pub mod source;

/// Common types used throughout the crate.
///
/// # Key Types
///
/// - [`types::DesignToken`] - one observed token
/// - [`types::TokenCategory`] - the closed category set
/// - [`types::ExportFormat`] - JSON or CSS serialization
/// - [`types::ViewMode`] - code block or card grid
pub mod types;

/// Watch mode for live re-rendering.
pub mod watch;

// ============================================================================
// Re-exports for convenience
// ============================================================================

/// One observed design token.
pub use types::DesignToken;

/// The closed category set.
pub use types::TokenCategory;

/// Export format (Json, Css).
pub use types::ExportFormat;

/// Inspector view mode (Code, Grid).
pub use types::ViewMode;

/// Color mode (Auto, Always, Never).
pub use types::ColorMode;

/// The classified catalog.
pub use catalog::TokenCatalog;

/// An injected `variable → declaration` snapshot.
pub use source::StyleSnapshot;

/// Stylesheet-backed snapshot source.
pub use source::StylesheetSource;

/// The source seam the catalog reads through.
pub use source::StyleSource;

/// Case-insensitive token filtering.
pub use search::filter_tokens;

/// Prefix classification.
pub use classify::classify;

/// Label derivation from a variable name.
pub use classify::variable_to_name;

/// Token-set serialization.
pub use export::serialize_tokens;
