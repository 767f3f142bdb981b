//! Watch Mode
//!
//! Re-analyzes files when they change on disk. Directories are watched
//! rather than the files themselves, since slicers and editors often replace
//! a file instead of writing to it in place.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{
    Config as WatcherConfig, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
};
use tokio::sync::mpsc;

use super::{analyze_file, output, FileReport};
use crate::config::Config;

/// Writes arrive in bursts; wait this long before re-reading a file.
const SETTLE_DELAY: Duration = Duration::from_millis(250);

#[derive(Debug)]
enum WatchEvent {
    FileChanged(PathBuf),
    WatcherError(notify::Error),
}

/// Watch `config.files` until the watcher shuts down, printing a fresh
/// report after every change.
pub async fn watch_files(config: &Config) -> Result<()> {
    watch_with(config, |report| {
        print!("{}", output::render(std::slice::from_ref(&report), config.format)?);
        Ok(())
    })
    .await
}

/// Watch `config.files`, handing each re-analysis to `on_report`. Stops at
/// the first error `on_report` returns.
pub async fn watch_with<F>(config: &Config, mut on_report: F) -> Result<()>
where
    F: FnMut(FileReport) -> Result<()>,
{
    let targets = config
        .files
        .iter()
        .map(|path| resolve(path))
        .collect::<Result<Vec<_>>>()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let watched = targets.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                if let EventKind::Create(_) | EventKind::Modify(_) = event.kind {
                    for path in event.paths {
                        if watched.contains(&path) {
                            let _ = tx.send(WatchEvent::FileChanged(path));
                        }
                    }
                }
            }
            Err(e) => {
                let _ = tx.send(WatchEvent::WatcherError(e));
            }
        },
        WatcherConfig::default().with_poll_interval(Duration::from_secs(1)),
    )?;

    for dir in watch_dirs(&targets) {
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", dir.display()))?;
    }

    log::info!("Watching {} file(s) for changes", targets.len());

    while let Some(event) = rx.recv().await {
        let path = match event {
            WatchEvent::FileChanged(path) => path,
            WatchEvent::WatcherError(e) => {
                log::error!("File watcher error: {}", e);
                continue;
            }
        };

        tokio::time::sleep(SETTLE_DELAY).await;

        let mut changed = BTreeSet::from([path]);
        while let Ok(event) = rx.try_recv() {
            match event {
                WatchEvent::FileChanged(path) => {
                    changed.insert(path);
                }
                WatchEvent::WatcherError(e) => log::error!("File watcher error: {}", e),
            }
        }

        for path in changed {
            log::info!("File changed: {}", path.display());
            on_report(analyze_file(path, config.estimator).await)?;
        }
    }

    Ok(())
}

/// Absolute form of `path` as the watcher reports it: the canonical parent
/// directory joined with the file name. The file itself need not exist yet.
fn resolve(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .with_context(|| format!("Not a file path: {}", path.display()))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let dir = parent
        .canonicalize()
        .with_context(|| format!("Failed to resolve directory of {}", path.display()))?;

    Ok(dir.join(name))
}

/// Distinct parent directories of the watched files.
fn watch_dirs(targets: &[PathBuf]) -> BTreeSet<PathBuf> {
    targets
        .iter()
        .filter_map(|path| path.parent().map(Path::to_path_buf))
        .collect()
}
