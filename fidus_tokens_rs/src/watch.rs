//! Watch mode for live re-rendering while a theme is being edited.
//!
//! Monitors the stylesheet roots, debounces change bursts (500ms default),
//! and re-renders the inspector after every relevant change. The catalog's
//! read-fresh-every-call contract does the rest: each re-render reflects
//! whatever the stylesheets say right now.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_full::{DebounceEventResult, Debouncer, FileIdMap, new_debouncer};

/// Watch configuration
pub struct WatchConfig {
    /// Paths to watch
    pub roots: Vec<PathBuf>,
    /// Debounce duration (default: 500ms)
    pub debounce_duration: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from(".")],
            debounce_duration: Duration::from_millis(500),
        }
    }
}

/// Watch the roots and invoke `render` after each debounced stylesheet
/// change. Blocks until the watch channel closes (Ctrl+C exits the process).
pub fn watch_and_render<F>(config: WatchConfig, mut render: F) -> anyhow::Result<()>
where
    F: FnMut() -> anyhow::Result<()>,
{
    let (tx, rx) = channel();

    let mut debouncer: Debouncer<RecommendedWatcher, FileIdMap> = new_debouncer(
        config.debounce_duration,
        None, // No separate tick rate
        move |result: DebounceEventResult| {
            if let Err(e) = tx.send(result) {
                eprintln!("[watch] error sending event: {e}");
            }
        },
    )?;

    for root in &config.roots {
        debouncer
            .watch(root, RecursiveMode::Recursive)
            .map_err(|e| anyhow::anyhow!("failed to watch {}: {}", root.display(), e))?;
    }

    eprintln!("[watch] initial render...");
    render()?;
    let timestamp = chrono::Local::now().format("%H:%M:%S");
    eprintln!("[{timestamp}] watching for stylesheet changes, Ctrl+C to exit");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let changed = collect_changed_stylesheets(&events);
                if changed.is_empty() {
                    continue;
                }

                let timestamp = chrono::Local::now().format("%H:%M:%S");
                if changed.len() == 1 {
                    eprintln!(
                        "[{}] changed: {} → re-rendering...",
                        timestamp,
                        changed.iter().next().map(|p| p.display().to_string()).unwrap_or_default()
                    );
                } else {
                    eprintln!(
                        "[{}] changed {} stylesheets → re-rendering...",
                        timestamp,
                        changed.len()
                    );
                }

                if let Err(e) = render() {
                    eprintln!("[watch] render failed: {e}");
                }
            }
            Ok(Err(errors)) => {
                for error in errors {
                    eprintln!("[watch] error: {error}");
                }
            }
            Err(e) => {
                eprintln!("[watch] watch channel closed: {e}");
                break;
            }
        }
    }

    Ok(())
}

/// Stylesheet paths touched by a debounced event batch.
fn collect_changed_stylesheets(
    events: &[notify_debouncer_full::DebouncedEvent],
) -> HashSet<PathBuf> {
    let mut paths = HashSet::new();
    for event in events {
        for path in &event.paths {
            if path.is_dir() || !is_stylesheet(path) {
                continue;
            }
            paths.insert(path.clone());
        }
    }
    paths
}

fn is_stylesheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("css"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_config_defaults() {
        let config = WatchConfig::default();
        assert_eq!(config.roots, vec![PathBuf::from(".")]);
        assert_eq!(config.debounce_duration, Duration::from_millis(500));
    }

    #[test]
    fn test_watch_config_custom() {
        let config = WatchConfig {
            roots: vec![PathBuf::from("styles"), PathBuf::from("themes")],
            debounce_duration: Duration::from_millis(250),
        };
        assert_eq!(config.roots.len(), 2);
        assert_eq!(config.debounce_duration, Duration::from_millis(250));
    }

    #[test]
    fn test_only_stylesheets_count_as_changes() {
        assert!(is_stylesheet(Path::new("styles/globals.css")));
        assert!(is_stylesheet(Path::new("THEME.CSS")));
        assert!(!is_stylesheet(Path::new("styles/globals.scss")));
        assert!(!is_stylesheet(Path::new("README.md")));
        assert!(!is_stylesheet(Path::new("styles")));
    }
}
