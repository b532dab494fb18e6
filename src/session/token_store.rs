//! Persistent bearer-token storage
//!
//! The token lives under a fixed key in a small JSON document so it survives
//! restarts until an explicit logout or a failed identity check. Writes are
//! atomic (temp file + rename) so a crash never leaves a half-written file.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::{PfmError, PfmResult};

/// Fixed storage key for the bearer token
pub const TOKEN_KEY: &str = "pfm_token";

/// Storage for the session's bearer token
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any
    fn load(&self) -> PfmResult<Option<String>>;

    /// Persist a new token, replacing any previous one
    fn save(&self, token: &str) -> PfmResult<()>;

    /// Forget the persisted token
    fn clear(&self) -> PfmResult<()>;
}

/// Token store backed by `session.json` in the config directory
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> PfmResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let file = File::open(&self.path).map_err(|e| {
            PfmError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            PfmError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> PfmResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PfmError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Temp file in the same directory so the rename stays atomic
        let temp_path = self.path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| PfmError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)
            .map_err(|e| PfmError::Storage(format!("Failed to serialize session: {}", e)))?;

        writer
            .flush()
            .map_err(|e| PfmError::Storage(format!("Failed to flush session: {}", e)))?;

        writer
            .get_ref()
            .sync_all()
            .map_err(|e| PfmError::Storage(format!("Failed to sync session: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            PfmError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> PfmResult<Option<String>> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(TOKEN_KEY).filter(|t| !t.is_empty()))
    }

    fn save(&self, token: &str) -> PfmResult<()> {
        let mut entries = self.read_entries()?;
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.write_entries(&entries)
    }

    fn clear(&self) -> PfmResult<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(TOKEN_KEY).is_none() {
            return Ok(());
        }
        if entries.is_empty() {
            fs::remove_file(&self.path).map_err(|e| {
                PfmError::Storage(format!("Failed to remove {}: {}", self.path.display(), e))
            })
        } else {
            self.write_entries(&entries)
        }
    }
}

/// In-memory token store for embedding and tests
///
/// Counts `clear` calls so callers can check that a logout happened once.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
    clears: AtomicUsize,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
            clears: AtomicUsize::new(0),
        }
    }

    /// Number of times `clear` has been called
    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }

    fn slot(&self) -> PfmResult<std::sync::MutexGuard<'_, Option<String>>> {
        self.token
            .lock()
            .map_err(|_| PfmError::Storage("Token store lock poisoned".into()))
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> PfmResult<Option<String>> {
        Ok(self.slot()?.clone())
    }

    fn save(&self, token: &str) -> PfmResult<()> {
        *self.slot()? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> PfmResult<()> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        *self.slot()? = None;
        Ok(())
    }
}
