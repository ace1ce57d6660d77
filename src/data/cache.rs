use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

use super::model::ProductTable;
use super::prepare;
use crate::error::{DashboardError, DashboardResult};

// ---------------------------------------------------------------------------
// Source identity
// ---------------------------------------------------------------------------

/// What makes two reads of the same path interchangeable.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceSignature {
    len: u64,
    modified: Option<SystemTime>,
}

impl SourceSignature {
    fn of(path: &Path) -> DashboardResult<Self> {
        let meta = std::fs::metadata(path).map_err(|e| DashboardError::DataLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(SourceSignature {
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

type Slot = Arc<Mutex<Option<Arc<ProductTable>>>>;

struct Entry {
    signature: SourceSignature,
    slot: Slot,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// PreparedCache
// ---------------------------------------------------------------------------

/// Memoizes prepared tables per source file.
///
/// A table is prepared at most once per (path, size, mtime). Callers racing
/// on the same key wait on that key's slot and all receive the one result.
/// Failures are not cached, so the next call retries.
#[derive(Default)]
pub struct PreparedCache {
    entries: Mutex<HashMap<PathBuf, Entry>>,
    prepared: AtomicUsize,
}

impl PreparedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the prepared table for `path`, preparing it only if the cache
    /// holds nothing for the file's current signature.
    pub fn get_or_prepare(&self, path: &Path) -> DashboardResult<Arc<ProductTable>> {
        let signature = SourceSignature::of(path)?;

        let slot = {
            let mut entries = lock(&self.entries);
            let entry = entries.entry(path.to_path_buf()).or_insert_with(|| Entry {
                signature: signature.clone(),
                slot: Slot::default(),
            });
            if entry.signature != signature {
                log::info!("{} changed on disk, dropping cached table", path.display());
                *entry = Entry {
                    signature,
                    slot: Slot::default(),
                };
            }
            Arc::clone(&entry.slot)
        };

        let mut guard = lock(&slot);
        if let Some(table) = guard.as_ref() {
            log::debug!("Cache hit for {}", path.display());
            return Ok(Arc::clone(table));
        }

        self.prepared.fetch_add(1, Ordering::SeqCst);
        let table = Arc::new(prepare::prepare_file(path)?);
        *guard = Some(Arc::clone(&table));
        Ok(table)
    }

    /// Forget the cached table for `path`. A preparation already running
    /// for it still completes for its own callers, but later callers start
    /// a fresh one.
    pub fn invalidate(&self, path: &Path) {
        if lock(&self.entries).remove(path).is_some() {
            log::debug!("Invalidated cached table for {}", path.display());
        }
    }

    /// How many times a source has actually been read and prepared.
    pub fn prepare_count(&self) -> usize {
        self.prepared.load(Ordering::SeqCst)
    }
}
