//! Style snapshot reading.
//!
//! The catalog never touches ambient style state directly; it consumes a
//! [`StyleSnapshot`] produced by a [`StyleSource`]. The CLI uses
//! [`StylesheetSource`], which re-reads `.css` files from the configured
//! roots on every call so theme edits are always reflected. Tests construct
//! a [`StyleSnapshot`] directly.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use globset::GlobSet;
use walkdir::WalkDir;

use crate::regexes::regex_custom_property;
use crate::types::RESERVED_PREFIXES;

/// Directories that never contain hand-maintained stylesheets.
const SKIP_DIRS: &[&str] = &["node_modules", ".git", ".next", "dist", "build", "target"];

/// One custom-property declaration as read from a stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub value: String,
    pub description: Option<String>,
}

/// An immutable `variable → declaration` mapping: one catalog read's worth
/// of style state, lexicographically ordered by variable name.
///
/// Inserting a variable twice keeps the later declaration, mirroring the
/// cascade: the last declaration in source order wins.
#[derive(Clone, Debug, Default)]
pub struct StyleSnapshot {
    entries: BTreeMap<String, Declaration>,
}

impl StyleSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, variable: &str, value: &str, description: Option<&str>) {
        self.entries.insert(
            variable.to_string(),
            Declaration {
                value: value.trim().to_string(),
                description: description.map(|d| d.to_string()),
            },
        );
    }

    /// Build a snapshot from plain `variable → value` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut snapshot = Self::new();
        for (variable, value) in pairs {
            snapshot.insert(variable, value, None);
        }
        snapshot
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in lexicographic variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declaration)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Anything that can produce a fresh style snapshot on demand.
pub trait StyleSource {
    fn snapshot(&self) -> StyleSnapshot;
}

impl StyleSource for StyleSnapshot {
    fn snapshot(&self) -> StyleSnapshot {
        self.clone()
    }
}

/// Reads custom properties out of `.css` files under the configured roots.
///
/// Roots may be files or directories; directories are walked recursively,
/// skipping build-artifact directories and user-supplied ignore globs.
/// Missing roots and unreadable files degrade to an empty (or partial)
/// snapshot rather than an error: "no tokens yet" is a displayable state.
pub struct StylesheetSource {
    roots: Vec<PathBuf>,
    reserved_prefixes: Vec<String>,
    ignore: Option<GlobSet>,
    verbose: bool,
}

impl StylesheetSource {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            reserved_prefixes: RESERVED_PREFIXES.iter().map(|p| p.to_string()).collect(),
            ignore: None,
            verbose: false,
        }
    }

    /// Add reserved prefixes beyond the built-in styling-framework ones.
    pub fn with_reserved_prefixes(mut self, extra: &[String]) -> Self {
        self.reserved_prefixes.extend(extra.iter().cloned());
        self
    }

    pub fn with_ignore(mut self, ignore: Option<GlobSet>) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Stylesheets under the roots, in stable scan order.
    pub fn collect_stylesheets(&self) -> Vec<PathBuf> {
        let mut sheets = Vec::new();
        for root in &self.roots {
            if root.is_file() {
                if is_stylesheet(root) {
                    sheets.push(root.clone());
                } else if self.verbose {
                    eprintln!("[fitok] skipping non-css root {}", root.display());
                }
                continue;
            }
            for entry in WalkDir::new(root)
                .follow_links(false)
                .into_iter()
                .filter_entry(|e| !is_skipped_dir(e.path()))
                .filter_map(Result::ok)
            {
                let path = entry.path();
                if !entry.file_type().is_file() || !is_stylesheet(path) {
                    continue;
                }
                if let Some(ignore) = &self.ignore {
                    if ignore.is_match(path) {
                        continue;
                    }
                }
                sheets.push(path.to_path_buf());
            }
        }
        sheets.sort();
        sheets
    }
}

impl StyleSource for StylesheetSource {
    fn snapshot(&self) -> StyleSnapshot {
        let mut snapshot = StyleSnapshot::new();
        for sheet in self.collect_stylesheets() {
            match fs::read_to_string(&sheet) {
                Ok(css) => {
                    parse_custom_properties(&css, &self.reserved_prefixes, &mut snapshot);
                }
                Err(err) => {
                    if self.verbose {
                        eprintln!("[fitok][warn] failed to read {}: {err}", sheet.display());
                    }
                }
            }
        }
        snapshot
    }
}

/// Extract custom-property declarations from CSS text into the snapshot.
/// Later declarations of the same variable override earlier ones.
pub fn parse_custom_properties(css: &str, reserved: &[String], snapshot: &mut StyleSnapshot) {
    for caps in regex_custom_property().captures_iter(css) {
        let variable = &caps[1];
        if reserved.iter().any(|prefix| variable.starts_with(prefix)) {
            continue;
        }
        let value = caps[2].trim();
        let description = caps.get(3).map(|m| m.as_str()).filter(|d| !d.is_empty());
        snapshot.insert(variable, value, description);
    }
}

fn is_stylesheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("css"))
}

fn is_skipped_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| SKIP_DIRS.contains(&name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn reserved() -> Vec<String> {
        RESERVED_PREFIXES.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_parse_basic_declarations() {
        let css = ":root {\n  --color-primary: 45 100% 51%;\n  --spacing-md: 16px;\n}\n";
        let mut snapshot = StyleSnapshot::new();
        parse_custom_properties(css, &reserved(), &mut snapshot);

        assert_eq!(snapshot.len(), 2);
        let entries: Vec<_> = snapshot.iter().collect();
        assert_eq!(entries[0].0, "--color-primary");
        assert_eq!(entries[0].1.value, "45 100% 51%");
    }

    #[test]
    fn test_parse_trailing_comment_becomes_description() {
        let css = "  --color-primary: 45 100% 51%; /* brand yellow */\n";
        let mut snapshot = StyleSnapshot::new();
        parse_custom_properties(css, &reserved(), &mut snapshot);

        let (_, decl) = snapshot.iter().next().expect("one entry");
        assert_eq!(decl.description.as_deref(), Some("brand yellow"));
    }

    #[test]
    fn test_parse_excludes_reserved_prefixes() {
        let css = "--tw-ring-offset: 0px;\n--color-primary: red;\n";
        let mut snapshot = StyleSnapshot::new();
        parse_custom_properties(css, &reserved(), &mut snapshot);

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.iter().all(|(v, _)| v == "--color-primary"));
    }

    #[test]
    fn test_later_declaration_wins() {
        let css = "--color-primary: red;\n--color-primary: blue;\n";
        let mut snapshot = StyleSnapshot::new();
        parse_custom_properties(css, &reserved(), &mut snapshot);

        let (_, decl) = snapshot.iter().next().expect("one entry");
        assert_eq!(decl.value, "blue");
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_snapshot_iterates_lexicographically() {
        let css = "--z-modal: 1000;\n--color-primary: red;\n--spacing-md: 16px;\n";
        let mut snapshot = StyleSnapshot::new();
        parse_custom_properties(css, &reserved(), &mut snapshot);

        let names: Vec<_> = snapshot.iter().map(|(v, _)| v.to_string()).collect();
        assert_eq!(names, ["--color-primary", "--spacing-md", "--z-modal"]);
    }

    #[test]
    fn test_missing_root_yields_empty_snapshot() {
        let source = StylesheetSource::new(vec![PathBuf::from("/nonexistent/fidus")]);
        assert!(source.snapshot().is_empty());
    }

    #[test]
    fn test_scan_finds_nested_stylesheets_and_skips_artifacts() {
        let temp = TempDir::new().expect("tempdir");
        let styles = temp.path().join("styles");
        fs::create_dir_all(&styles).expect("mkdir");
        fs::write(styles.join("globals.css"), "--color-primary: red;").expect("write");
        fs::write(temp.path().join("notes.txt"), "--color-fake: x;").expect("write");

        let modules = temp.path().join("node_modules");
        fs::create_dir_all(&modules).expect("mkdir");
        fs::write(modules.join("vendor.css"), "--color-vendor: green;").expect("write");

        let source = StylesheetSource::new(vec![temp.path().to_path_buf()]);
        let snapshot = source.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.iter().any(|(v, _)| v == "--color-primary"));
    }

    #[test]
    fn test_extra_reserved_prefixes() {
        let temp = TempDir::new().expect("tempdir");
        fs::write(
            temp.path().join("theme.css"),
            "--color-primary: red;\n--internal-cache: 1;\n",
        )
        .expect("write");

        let source = StylesheetSource::new(vec![temp.path().to_path_buf()])
            .with_reserved_prefixes(&["--internal-".to_string()]);
        let snapshot = source.snapshot();
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_ignore_globs_skip_stylesheets() {
        let temp = TempDir::new().expect("tempdir");
        fs::write(temp.path().join("theme.css"), "--color-primary: red;").expect("write");
        fs::write(temp.path().join("theme.min.css"), "--color-minified: red;").expect("write");

        let mut builder = globset::GlobSetBuilder::new();
        builder.add(globset::Glob::new("**/*.min.css").expect("valid glob"));
        let ignore = builder.build().expect("glob set builds");

        let source =
            StylesheetSource::new(vec![temp.path().to_path_buf()]).with_ignore(Some(ignore));
        let snapshot = source.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.iter().any(|(v, _)| v == "--color-primary"));
    }

    #[test]
    fn test_file_root_must_be_css() {
        let temp = TempDir::new().expect("tempdir");
        let file = temp.path().join("tokens.scss");
        fs::write(&file, "--color-primary: red;").expect("write");

        let source = StylesheetSource::new(vec![file]);
        assert!(source.snapshot().is_empty());
    }
}
