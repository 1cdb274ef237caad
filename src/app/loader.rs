// LandSearch - app/loader.rs
//
// Record Store loading. Reads and parses the data file on a background
// thread, sending progress messages to the UI thread via an mpsc channel.
//
// Architecture:
//   - `LoadManager` lives on the UI thread; `run_load` runs on a background thread.
//   - All cross-thread communication is via `LoadProgress` channel messages.
//   - Starting a new load drops the previous receiver, so a superseded
//     load's result is discarded when its send fails.
//   - No retries: a failure is reported once and the user reloads manually.

use crate::core::model::LandRecord;
use crate::platform::fs;
use crate::util::error::LoadError;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Progress messages sent from the load thread to the UI thread.
#[derive(Debug)]
pub enum LoadProgress {
    /// The background thread began reading the file.
    Started { path: PathBuf },

    /// The dataset was parsed successfully.
    Completed {
        path: PathBuf,
        records: Vec<LandRecord>,
        duration: Duration,
    },

    /// The dataset could not be obtained or parsed. The store stays empty.
    Failed { error: LoadError },
}

/// Manages a dataset load on a background thread.
pub struct LoadManager {
    progress_rx: Option<mpsc::Receiver<LoadProgress>>,
}

impl LoadManager {
    pub fn new() -> Self {
        Self { progress_rx: None }
    }

    /// Start loading `path`. Spawns a background thread immediately; a load
    /// already in flight is abandoned.
    pub fn start_load(&mut self, path: PathBuf) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        tracing::info!(path = %path.display(), "Load started");
        std::thread::spawn(move || run_load(path, tx));
    }

    /// Poll for progress messages without blocking. Returns all pending
    /// messages; the channel is released once a terminal message arrives.
    pub fn poll_progress(&mut self) -> Vec<LoadProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        let finished = messages.iter().any(|m| {
            matches!(
                m,
                LoadProgress::Completed { .. } | LoadProgress::Failed { .. }
            )
        });
        if finished {
            self.progress_rx = None;
        }
        messages
    }

    /// Whether a load is in flight.
    pub fn is_active(&self) -> bool {
        self.progress_rx.is_some()
    }
}

impl Default for LoadManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Load pipeline: read → parse → deliver. Runs on a background thread.
fn run_load(path: PathBuf, tx: mpsc::Sender<LoadProgress>) {
    if tx
        .send(LoadProgress::Started { path: path.clone() })
        .is_err()
    {
        return; // Receiver dropped (superseded or UI closed); exit quietly.
    }

    let start = Instant::now();
    let msg = match fs::read_dataset(&path) {
        Ok(records) => {
            tracing::info!(
                path = %path.display(),
                records = records.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Dataset loaded"
            );
            LoadProgress::Completed {
                path,
                records,
                duration: start.elapsed(),
            }
        }
        Err(error) => {
            tracing::error!(error = %error, "Dataset load failed");
            LoadProgress::Failed { error }
        }
    };

    let _ = tx.send(msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Poll until a terminal message arrives or the deadline passes.
    fn wait_for_result(manager: &mut LoadManager) -> Vec<LoadProgress> {
        let deadline = Instant::now() + Duration::from_secs(10);
        let mut all = Vec::new();
        while Instant::now() < deadline {
            all.extend(manager.poll_progress());
            if !manager.is_active() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        all
    }

    #[test]
    fn test_load_completes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{"landRecords":[{"taluka":"A"},{"taluka":"B"}]}"#,
        )
        .unwrap();

        let mut manager = LoadManager::new();
        manager.start_load(path.clone());
        assert!(manager.is_active());
        let messages = wait_for_result(&mut manager);

        assert!(matches!(messages.first(), Some(LoadProgress::Started { .. })));
        match messages.last() {
            Some(LoadProgress::Completed { records, .. }) => assert_eq!(records.len(), 2),
            other => panic!("expected Completed, got {other:?}"),
        }
        assert!(!manager.is_active());
    }

    #[test]
    fn test_load_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = LoadManager::new();
        manager.start_load(dir.path().join("absent.json"));
        let messages = wait_for_result(&mut manager);
        assert!(matches!(
            messages.last(),
            Some(LoadProgress::Failed {
                error: LoadError::Io { .. }
            })
        ));
    }
}
