//! Command dispatcher.
//!
//! Builds the stylesheet source from the scan roots and config, reads the
//! catalog fresh, and executes the requested operation. Help and version
//! are printed by the entrypoint; everything else lands here.

use std::path::PathBuf;

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Serialize;
use serde_json::json;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::command::{
    CategoriesOptions, Command, CopyOptions, ExportOptions, GlobalOptions, InspectOptions,
    ParsedCommand,
};
use super::parser::suggest;
use crate::catalog::TokenCatalog;
use crate::clipboard;
use crate::colors::Painter;
use crate::config::FitokConfig;
use crate::export::{
    export_filename, name_collisions, serialize_tokens, single_token_snippet, write_export,
};
use crate::inspect::{self, InspectorState};
use crate::progress::Spinner;
use crate::search::filter_tokens;
use crate::source::StylesheetSource;
use crate::types::{ColorMode, DesignToken, ExportFormat, TokenCategory};
use crate::watch::{self, WatchConfig};

/// Metadata about one catalog read, included in `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotMetadata {
    /// Read timestamp (RFC 3339).
    pub generated_at: String,
    /// Stylesheets that fed the snapshot, in scan order.
    pub stylesheets: Vec<String>,
    /// Tokens surviving scope and query.
    pub token_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<TokenCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// One catalog read: the scoped set, the query-filtered set, metadata.
struct CatalogRead {
    scoped: Vec<DesignToken>,
    filtered: Vec<DesignToken>,
    metadata: SnapshotMetadata,
}

/// Execute a parsed command. `Help` and `Version` are no-ops here.
pub fn dispatch_command(parsed: &ParsedCommand) -> anyhow::Result<()> {
    let global = &parsed.global;
    apply_color_override(global.color);
    let painter = Painter::new(global.color);

    match &parsed.command {
        Command::Inspect(opts) => run_inspect(opts, global, &painter),
        Command::Watch(opts) => run_watch(opts, global, &painter),
        Command::Export(opts) => run_export(opts, global, &painter),
        Command::Copy(opts) => run_copy(opts, global, &painter),
        Command::Categories(opts) => run_categories(opts, global, &painter),
        Command::Help(_) | Command::Version => Ok(()),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

fn run_inspect(
    opts: &InspectOptions,
    global: &GlobalOptions,
    painter: &Painter,
) -> anyhow::Result<()> {
    let roots = resolve_roots(&opts.roots);
    let config = FitokConfig::load(&roots[0]);
    let read = read_catalog(&roots, opts.category, opts.query.as_deref(), global, &config);
    let format = resolve_format(opts.format, &config, global.quiet);

    if global.json {
        let envelope = json!({
            "metadata": &read.metadata,
            "tokens": &read.filtered,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    warn_collisions(&read.filtered, format, global.quiet);
    let state = InspectorState {
        tokens: &read.filtered,
        query: opts.query.as_deref(),
        format,
        view: opts.view,
    };
    println!("{}", inspect::render(&state, painter));
    Ok(())
}

fn run_export(
    opts: &ExportOptions,
    global: &GlobalOptions,
    painter: &Painter,
) -> anyhow::Result<()> {
    let roots = resolve_roots(&opts.roots);
    let config = FitokConfig::load(&roots[0]);
    let read = read_catalog(&roots, opts.category, opts.query.as_deref(), global, &config);
    let format = resolve_format(opts.format, &config, global.quiet);

    let filtered = opts.query.as_deref().is_some_and(|q| !q.is_empty());
    let path = opts
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(export_filename(opts.category, filtered, format)));

    warn_collisions(&read.filtered, format, global.quiet);
    let content = serialize_tokens(&read.filtered, format);
    write_export(&path, &content)?;

    if global.json {
        let envelope = json!({
            "metadata": &read.metadata,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else if !global.quiet {
        println!(
            "{}",
            painter.ok(&format!(
                "[fitok] exported {} tokens to {}",
                read.filtered.len(),
                path.display()
            ))
        );
    }
    Ok(())
}

fn run_copy(opts: &CopyOptions, global: &GlobalOptions, painter: &Painter) -> anyhow::Result<()> {
    let roots = resolve_roots(&opts.roots);
    let config = FitokConfig::load(&roots[0]);
    let read = read_catalog(&roots, opts.category, opts.query.as_deref(), global, &config);
    let format = resolve_format(opts.format, &config, global.quiet);

    let (text, what) = match &opts.var {
        Some(var) => {
            let token = read
                .scoped
                .iter()
                .find(|t| &t.variable == var)
                .ok_or_else(|| unknown_variable_error(var, &read.scoped))?;
            (single_token_snippet(token, format), format!("`{var}`"))
        }
        None => {
            warn_collisions(&read.filtered, format, global.quiet);
            (
                serialize_tokens(&read.filtered, format),
                format!("{} tokens", read.filtered.len()),
            )
        }
    };

    match clipboard::copy_text(&text) {
        Ok(()) => {
            if global.json {
                let envelope = json!({ "copied": true, "target": what });
                println!("{}", serde_json::to_string_pretty(&envelope)?);
            } else if !global.quiet {
                println!(
                    "{}",
                    painter.ok(&format!("[fitok] copied {what} to clipboard ({format})"))
                );
            }
        }
        Err(err) => {
            // Surfaced, not fatal: the serialized text still reaches the
            // user through stdout.
            eprintln!("[fitok][warn] {err:#}; writing to stdout instead");
            println!("{text}");
        }
    }
    Ok(())
}

fn run_categories(
    opts: &CategoriesOptions,
    global: &GlobalOptions,
    painter: &Painter,
) -> anyhow::Result<()> {
    let roots = resolve_roots(&opts.roots);
    let config = FitokConfig::load(&roots[0]);
    let source = build_source(&roots, &config, global);
    let catalog = TokenCatalog::new(source);
    let counts = catalog.category_counts();

    if global.json {
        let entries: Vec<_> = counts
            .iter()
            .map(|(category, count)| json!({ "category": category, "count": count }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let total: usize = counts.iter().map(|(_, count)| count).sum();
    for (category, count) in &counts {
        let pad = " ".repeat(12usize.saturating_sub(category.slug().len()));
        println!("{}{pad} {}", painter.category(*category), painter.number(count));
    }
    if !global.quiet {
        println!("{}", painter.dim(&format!("{total} tokens total")));
    }
    Ok(())
}

fn run_watch(
    opts: &InspectOptions,
    global: &GlobalOptions,
    painter: &Painter,
) -> anyhow::Result<()> {
    let roots = resolve_roots(&opts.roots);
    let config = WatchConfig {
        roots,
        ..Default::default()
    };
    watch::watch_and_render(config, || run_inspect(opts, global, painter))
}

// ============================================================================
// Plumbing
// ============================================================================

fn resolve_roots(roots: &[PathBuf]) -> Vec<PathBuf> {
    if roots.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        roots.to_vec()
    }
}

fn build_source(
    roots: &[PathBuf],
    config: &FitokConfig,
    global: &GlobalOptions,
) -> StylesheetSource {
    let mut all_roots = roots.to_vec();
    all_roots.extend(config.stylesheets.iter().map(PathBuf::from));
    StylesheetSource::new(all_roots)
        .with_reserved_prefixes(&config.reserved_prefixes)
        .with_ignore(build_ignore(&config.ignore, global.quiet))
        .with_verbose(global.verbose)
}

fn build_ignore(patterns: &[String], quiet: bool) -> Option<GlobSet> {
    if patterns.is_empty() {
        return None;
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => {
                if !quiet {
                    eprintln!("[fitok][warn] invalid ignore glob `{pattern}`: {e}");
                }
            }
        }
    }
    builder.build().ok()
}

/// Read the catalog once: scope by category, filter by query, and collect
/// the metadata for machine output.
fn read_catalog(
    roots: &[PathBuf],
    category: Option<TokenCategory>,
    query: Option<&str>,
    global: &GlobalOptions,
    config: &FitokConfig,
) -> CatalogRead {
    let source = build_source(roots, config, global);
    let stylesheets = source.collect_stylesheets();

    let spinner = (global.verbose && !global.json && !global.quiet)
        .then(|| Spinner::new("scanning stylesheets..."));
    let catalog = TokenCatalog::new(source);
    let scoped = match category {
        Some(category) => catalog.tokens_by_category(category),
        None => catalog.all_tokens(),
    };
    if let Some(spinner) = spinner {
        spinner.finish_success(&format!(
            "{} tokens from {} stylesheets",
            scoped.len(),
            stylesheets.len()
        ));
    }
    if stylesheets.is_empty() && !global.quiet {
        eprintln!("[fitok] no stylesheets found; the catalog is empty");
    }

    let filtered = filter_tokens(&scoped, query.unwrap_or(""));
    let metadata = SnapshotMetadata {
        generated_at: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default(),
        stylesheets: stylesheets.iter().map(|p| p.display().to_string()).collect(),
        token_count: filtered.len(),
        category,
        query: query.filter(|q| !q.is_empty()).map(str::to_string),
    };

    CatalogRead {
        scoped,
        filtered,
        metadata,
    }
}

fn resolve_format(
    flag: Option<ExportFormat>,
    config: &FitokConfig,
    quiet: bool,
) -> ExportFormat {
    if let Some(format) = flag {
        return format;
    }
    if let Some(value) = config.format.as_deref() {
        match value.parse::<ExportFormat>() {
            Ok(format) => return format,
            Err(err) => {
                if !quiet {
                    eprintln!("[fitok][warn] config: {err}");
                }
            }
        }
    }
    ExportFormat::default()
}

/// JSON exports key by derived name; same-name tokens collapse to the last
/// value. Warn instead of silently dropping entries.
fn warn_collisions(tokens: &[DesignToken], format: ExportFormat, quiet: bool) {
    if format != ExportFormat::Json || quiet {
        return;
    }
    for name in name_collisions(tokens) {
        eprintln!(
            "[fitok][warn] duplicate token name \"{name}\": the JSON object keeps only the last value"
        );
    }
}

fn unknown_variable_error(var: &str, tokens: &[DesignToken]) -> anyhow::Error {
    let candidates: Vec<&str> = tokens.iter().map(|t| t.variable.as_str()).collect();
    match suggest(var, &candidates, 3) {
        Some(candidate) => {
            anyhow::anyhow!("no token with variable `{var}` (did you mean `{candidate}`?)")
        }
        None => anyhow::anyhow!("no token with variable `{var}`"),
    }
}

fn apply_color_override(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }
}
