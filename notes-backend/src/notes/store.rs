//! NoteStore: append-only line store over a single text file
//!
//! Holds the configured path and serializes this process's appends. Reads are
//! unsynchronized; every call hits the file, there is no in-memory copy.

use super::file_ops;
use std::io;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Point-in-time view of the backing file's presence on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageStatus {
    pub notes_present: bool,
    pub storage_dir_present: bool,
}

pub struct NoteStore {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl NoteStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            append_lock: Mutex::new(()),
        }
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the directory holding the backing file exists (e.g. the volume is mounted)
    pub fn storage_dir_exists(&self) -> bool {
        file_ops::parent_dir_exists(&self.path)
    }

    /// Probe the backing file and its directory off the async worker
    pub async fn status(&self) -> io::Result<StorageStatus> {
        let path = self.path.clone();
        run_blocking(move || {
            Ok(StorageStatus {
                notes_present: path.is_file(),
                storage_dir_present: file_ops::parent_dir_exists(&path),
            })
        })
        .await
    }

    /// Read the full content; an absent file reads as empty
    pub async fn read_all(&self) -> io::Result<String> {
        let path = self.path.clone();
        run_blocking(move || file_ops::read_notes(&path)).await
    }

    /// Append `text` as one line
    pub async fn append(&self, text: &str) -> io::Result<()> {
        let _guard = self.append_lock.lock().await;
        let path = self.path.clone();
        let text = text.to_string();
        run_blocking(move || file_ops::append_line(&path, &text)).await
    }
}

async fn run_blocking<T, F>(f: F) -> io::Result<T>
where
    F: FnOnce() -> io::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| io::Error::other(format!("blocking file task failed: {}", e)))?
}
