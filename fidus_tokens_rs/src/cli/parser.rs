//! Parser for the `fitok <command> [options]` interface.
//!
//! Hand-rolled flag handling: global options may appear anywhere, the first
//! positional selects the command, remaining positionals are stylesheet
//! roots. Mistyped commands and categories get a fuzzy suggestion instead
//! of a bare error.

use std::path::PathBuf;

use super::command::*;
use crate::types::{ColorMode, ExportFormat, TokenCategory, ViewMode};

/// Known subcommand names.
const SUBCOMMANDS: &[&str] = &[
    "inspect",
    "list",
    "export",
    "copy",
    "categories",
    "watch",
    "help",
    "version",
];

/// Check if an argument is a known subcommand.
pub fn is_subcommand(arg: &str) -> bool {
    SUBCOMMANDS.contains(&arg)
}

/// Parse command-line arguments into a ParsedCommand.
///
/// 1. Extracts global options (--json, --quiet, --verbose, --color)
/// 2. Identifies the subcommand (default: inspect)
/// 3. Parses command-specific options
pub fn parse_command(args: &[String]) -> Result<ParsedCommand, String> {
    let mut global = GlobalOptions::default();
    let mut rest: Vec<String> = Vec::new();
    let mut help_requested = false;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--json" => {
                global.json = true;
                i += 1;
            }
            "--quiet" | "-q" => {
                global.quiet = true;
                i += 1;
            }
            "--verbose" | "-v" => {
                global.verbose = true;
                i += 1;
            }
            "--color" => {
                if let Some(value) = args.get(i + 1) {
                    global.color = parse_color_mode(value)?;
                    i += 2;
                } else {
                    global.color = ColorMode::Always;
                    i += 1;
                }
            }
            _ if arg.starts_with("--color=") => {
                let value = arg.trim_start_matches("--color=");
                global.color = parse_color_mode(value)?;
                i += 1;
            }
            "--help" | "-h" => {
                help_requested = true;
                i += 1;
            }
            "--version" | "-V" => {
                return Ok(ParsedCommand::new(Command::Version, global));
            }
            _ => {
                rest.push(arg.clone());
                i += 1;
            }
        }
    }

    let (name, tail) = match rest.split_first() {
        Some((first, tail)) if !first.starts_with('-') => {
            if !is_subcommand(first) {
                return Err(unknown_command_error(first));
            }
            (first.as_str(), tail)
        }
        // No subcommand: everything (flags and paths) belongs to inspect.
        _ => ("inspect", rest.as_slice()),
    };

    if help_requested {
        // Explicitly typed subcommand becomes the help topic; bare --help
        // shows the main usage.
        let explicit = rest.first().is_some_and(|first| is_subcommand(first));
        let topic = explicit.then(|| name.to_string());
        return Ok(ParsedCommand::new(
            Command::Help(HelpOptions { topic }),
            global,
        ));
    }

    let command = match name {
        "inspect" | "list" => Command::Inspect(parse_inspect_options(tail, name)?),
        "watch" => Command::Watch(parse_inspect_options(tail, name)?),
        "export" => Command::Export(parse_export_options(tail)?),
        "copy" => Command::Copy(parse_copy_options(tail)?),
        "categories" => Command::Categories(parse_categories_options(tail)?),
        "help" => Command::Help(HelpOptions {
            topic: tail.first().map(|t| t.to_string()),
        }),
        "version" => Command::Version,
        _ => unreachable!("subcommand list is exhaustive"),
    };

    Ok(ParsedCommand::new(command, global))
}

// ============================================================================
// Per-command option parsing
// ============================================================================

fn parse_inspect_options(args: &[String], name: &str) -> Result<InspectOptions, String> {
    let mut opts = InspectOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if let Some(value) = flag_value(args, &mut i, "--category")? {
            opts.category = Some(parse_category(&value)?);
        } else if let Some(value) = flag_value(args, &mut i, "--query")? {
            opts.query = Some(value);
        } else if let Some(value) = flag_value(args, &mut i, "--view")? {
            opts.view = value.parse::<ViewMode>()?;
        } else if let Some(value) = flag_value(args, &mut i, "--format")? {
            opts.format = Some(value.parse::<ExportFormat>()?);
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}` for `fitok {name}`"));
        } else {
            opts.roots.push(PathBuf::from(arg));
            i += 1;
        }
    }
    Ok(opts)
}

fn parse_export_options(args: &[String]) -> Result<ExportOptions, String> {
    let mut opts = ExportOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if let Some(value) = flag_value(args, &mut i, "--category")? {
            opts.category = Some(parse_category(&value)?);
        } else if let Some(value) = flag_value(args, &mut i, "--query")? {
            opts.query = Some(value);
        } else if let Some(value) = flag_value(args, &mut i, "--format")? {
            opts.format = Some(value.parse::<ExportFormat>()?);
        } else if let Some(value) = flag_value(args, &mut i, "--out")? {
            opts.out = Some(PathBuf::from(value));
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}` for `fitok export`"));
        } else {
            opts.roots.push(PathBuf::from(arg));
            i += 1;
        }
    }
    Ok(opts)
}

fn parse_copy_options(args: &[String]) -> Result<CopyOptions, String> {
    let mut opts = CopyOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if let Some(value) = flag_value(args, &mut i, "--category")? {
            opts.category = Some(parse_category(&value)?);
        } else if let Some(value) = flag_value(args, &mut i, "--query")? {
            opts.query = Some(value);
        } else if let Some(value) = flag_value(args, &mut i, "--format")? {
            opts.format = Some(value.parse::<ExportFormat>()?);
        } else if let Some(value) = flag_value(args, &mut i, "--var")? {
            opts.var = Some(value);
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}` for `fitok copy`"));
        } else {
            opts.roots.push(PathBuf::from(arg));
            i += 1;
        }
    }
    Ok(opts)
}

fn parse_categories_options(args: &[String]) -> Result<CategoriesOptions, String> {
    let mut opts = CategoriesOptions::default();
    for arg in args {
        if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}` for `fitok categories`"));
        }
        opts.roots.push(PathBuf::from(arg));
    }
    Ok(opts)
}

// ============================================================================
// Helpers
// ============================================================================

/// Consume `--flag value` or `--flag=value` at position `*i`. Returns
/// `Ok(None)` when the current argument is a different flag.
fn flag_value(args: &[String], i: &mut usize, flag: &str) -> Result<Option<String>, String> {
    let arg = &args[*i];
    if arg == flag {
        match args.get(*i + 1) {
            Some(value) => {
                *i += 2;
                Ok(Some(value.clone()))
            }
            None => Err(format!("`{flag}` expects a value")),
        }
    } else if let Some(value) = arg.strip_prefix(&format!("{flag}=")) {
        *i += 1;
        Ok(Some(value.to_string()))
    } else {
        Ok(None)
    }
}

fn parse_color_mode(value: &str) -> Result<ColorMode, String> {
    match value {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        other => Err(format!(
            "invalid color mode `{other}` (expected auto, always, or never)"
        )),
    }
}

fn parse_category(value: &str) -> Result<TokenCategory, String> {
    value.parse::<TokenCategory>().map_err(|err| {
        let slugs: Vec<&str> = TokenCategory::ALL.iter().map(|c| c.slug()).collect();
        match suggest(value, &slugs, 2) {
            Some(candidate) => format!("{err} (did you mean `{candidate}`?)"),
            None => err,
        }
    })
}

fn unknown_command_error(input: &str) -> String {
    match suggest(input, SUBCOMMANDS, 2) {
        Some(candidate) => {
            format!("unknown command `{input}` (did you mean `{candidate}`?)")
        }
        None => format!("unknown command `{input}` (see `fitok help`)"),
    }
}

/// Closest candidate within the given edit distance.
pub(crate) fn suggest<'a>(
    input: &str,
    candidates: &[&'a str],
    max_distance: usize,
) -> Option<&'a str> {
    candidates
        .iter()
        .map(|candidate| (strsim::levenshtein(input, candidate), *candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}
