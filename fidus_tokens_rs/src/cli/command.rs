//! Command enum and related types for the `fitok <command>` interface.
//!
//! The Command enum is the source of truth for all CLI commands and backs
//! both the parser and the help output.

use std::path::PathBuf;

use crate::types::{ColorMode, ExportFormat, TokenCategory, ViewMode};

// ============================================================================
// Global Options (shared across all commands)
// ============================================================================

/// Global options that apply to all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output as JSON (stdout is JSON only, warnings go to stderr)
    pub json: bool,

    /// Suppress all non-essential output
    pub quiet: bool,

    /// Color mode for terminal output
    pub color: ColorMode,

    /// Verbose output with scan information
    pub verbose: bool,
}

// ============================================================================
// Command Enum - Source of Truth
// ============================================================================

/// The canonical command enum for the `fitok <command>` interface.
#[derive(Debug, Clone)]
pub enum Command {
    /// Render the token inspector (default when no command is given).
    ///
    /// Reads the catalog fresh, applies category scope and search query,
    /// and renders the code or grid view.
    Inspect(InspectOptions),

    /// Serialize the currently filtered set and write it to a file.
    ///
    /// Default file name: `fidus-<category>-tokens[-filtered].<ext>`.
    Export(ExportOptions),

    /// Serialize the currently filtered set (or one token) to the clipboard.
    ///
    /// Falls back to stdout with a warning when no clipboard is available.
    Copy(CopyOptions),

    /// Show per-category token counts.
    Categories(CategoriesOptions),

    /// Re-render the inspector whenever a watched stylesheet changes.
    Watch(InspectOptions),

    /// Show help for commands.
    Help(HelpOptions),

    /// Show version.
    Version,
}

impl Default for Command {
    fn default() -> Self {
        Command::Inspect(InspectOptions::default())
    }
}

// ============================================================================
// Per-Command Options
// ============================================================================

/// Options for `inspect` and `watch`.
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    /// Stylesheet roots: css files or directories (defaults to `.`)
    pub roots: Vec<PathBuf>,

    /// Restrict the catalog to one category
    pub category: Option<TokenCategory>,

    /// Free-text filter over name, variable, and description
    pub query: Option<String>,

    /// Code block or card grid
    pub view: ViewMode,

    /// Export format backing the code view (config default when absent)
    pub format: Option<ExportFormat>,
}

/// Options for the `export` command.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub roots: Vec<PathBuf>,
    pub category: Option<TokenCategory>,
    pub query: Option<String>,
    pub format: Option<ExportFormat>,

    /// Explicit output path; otherwise the derived file name in the
    /// current directory.
    pub out: Option<PathBuf>,
}

/// Options for the `copy` command.
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    pub roots: Vec<PathBuf>,
    pub category: Option<TokenCategory>,
    pub query: Option<String>,
    pub format: Option<ExportFormat>,

    /// Copy a single token's value (JSON) or declaration line (CSS)
    /// instead of the whole filtered set.
    pub var: Option<String>,
}

/// Options for the `categories` command.
#[derive(Debug, Clone, Default)]
pub struct CategoriesOptions {
    pub roots: Vec<PathBuf>,
}

/// Options for the `help` command.
#[derive(Debug, Clone, Default)]
pub struct HelpOptions {
    /// Command to show help for; main help when absent.
    pub topic: Option<String>,
}

// ============================================================================
// Parsing result
// ============================================================================

/// A fully parsed invocation: the command plus global options.
#[derive(Debug, Clone)]
pub struct ParsedCommand {
    pub command: Command,
    pub global: GlobalOptions,
}

impl ParsedCommand {
    pub fn new(command: Command, global: GlobalOptions) -> Self {
        Self { command, global }
    }
}

// ============================================================================
// Help text
// ============================================================================

impl Command {
    /// Help for one command, or `None` for an unknown topic.
    pub fn format_command_help(topic: &str) -> Option<String> {
        let text = match topic {
            "inspect" | "list" => {
                "fitok inspect [paths...] [options]\n\n\
                 Render the token inspector for the stylesheets under the given\n\
                 paths (default: current directory).\n\n\
                 Options:\n  \
                 --category <c>    color|spacing|radius|shadow|z-index|typography|motion|other\n  \
                 --query <q>       keep tokens whose name, variable, or description contains <q>\n  \
                 --view <v>        code (default) or grid\n  \
                 --format <f>      json (default) or css"
            }
            "export" => {
                "fitok export [paths...] [options]\n\n\
                 Serialize the filtered token set to a file.\n\n\
                 Options:\n  \
                 --category <c>    restrict to one category\n  \
                 --query <q>       filter before exporting\n  \
                 --format <f>      json (default) or css\n  \
                 --out <path>      output file (default: fidus-<category>-tokens[-filtered].<ext>)"
            }
            "copy" => {
                "fitok copy [paths...] [options]\n\n\
                 Write the filtered token set to the system clipboard. When no\n\
                 clipboard is available the text is printed to stdout instead.\n\n\
                 Options:\n  \
                 --category <c>    restrict to one category\n  \
                 --query <q>       filter before copying\n  \
                 --format <f>      json (default) or css\n  \
                 --var <variable>  copy one token: its value (json) or `variable: value;` (css)"
            }
            "categories" => {
                "fitok categories [paths...]\n\n\
                 Show per-category token counts for the current catalog."
            }
            "watch" => {
                "fitok watch [paths...] [options]\n\n\
                 Re-render the inspector whenever a stylesheet under the given\n\
                 paths changes. Accepts the same options as `fitok inspect`."
            }
            _ => return None,
        };
        Some(text.to_string())
    }
}
