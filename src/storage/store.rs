use anyhow::{Context, Result, anyhow};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::logging::STORE_TARGET;

/// Key-addressed store with no schema.
/// Callers are responsible for validating the shape of what they read back.
pub trait SyncStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: Value) -> Result<()>;
}

/// JSON-file implementation of SyncStore.
/// The file holds one object mapping keys to values; writes go through a .tmp file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            log::debug!(
                target: STORE_TARGET,
                "Store file {:?} not found, treating as empty",
                self.path
            );
            return Ok(Map::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read store from {:?}", self.path))?;

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => {
                self.backup_corrupted(&format!("top level is not an object: {}", type_name(&other)));
                Ok(Map::new())
            }
            Err(e) => {
                self.backup_corrupted(&e.to_string());
                Ok(Map::new())
            }
        }
    }

    /// `store.json.corrupted.<timestamp>`, so earlier backups are never replaced
    fn corrupted_backup_path(&self) -> PathBuf {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S%3f");
        let mut backup_path = self.path.with_extension(format!("json.corrupted.{}", stamp));
        let mut n = 1;
        while backup_path.exists() {
            backup_path = self
                .path
                .with_extension(format!("json.corrupted.{}-{}", stamp, n));
            n += 1;
        }
        backup_path
    }

    fn backup_corrupted(&self, reason: &str) {
        let backup_path = self.corrupted_backup_path();
        log::warn!(
            target: STORE_TARGET,
            "Store file corrupted, backing up to {:?}: {}",
            backup_path,
            reason
        );
        if let Err(e) = fs::rename(&self.path, &backup_path) {
            log::error!(target: STORE_TARGET, "Failed to backup corrupted store: {}", e);
        }
    }
}

impl SyncStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let mut map = self.read_map()?;
        Ok(map.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value);

        let json = serde_json::to_string_pretty(&Value::Object(map))
            .context("Failed to serialize store")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write to temporary file {:?}", tmp_path))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to rename {:?} to {:?}", tmp_path, self.path))?;

        log::debug!(target: STORE_TARGET, "Wrote key '{}' to {:?}", key, self.path);
        Ok(())
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// In-process store. Clones share the same entries, so a test can keep a
/// handle while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Value>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Store pre-seeded with one key
    pub fn with_entry(key: &str, value: Value) -> Self {
        let store = MemoryStore::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value);
        }
        store
    }

    /// Number of successful `set` calls
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current value under `key`
    pub fn snapshot(&self, key: &str) -> Option<Value> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }
}

impl SyncStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("Memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("Memory store lock poisoned"))?;
        entries.insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct WriteRequest {
    key: String,
    value: Value,
}

/// Fire-and-forget wrapper: `set` queues the write for a worker thread and
/// returns immediately. Writes are applied in submission order and failures
/// are only logged. Dropping the store waits for queued writes to finish.
pub struct BackgroundStore<S: SyncStore + 'static> {
    inner: Arc<S>,
    write_tx: Option<Sender<WriteRequest>>,
    worker: Option<JoinHandle<()>>,
}

impl<S: SyncStore + 'static> BackgroundStore<S> {
    pub fn new(inner: S) -> Self {
        let inner = Arc::new(inner);
        let (write_tx, write_rx) = mpsc::channel::<WriteRequest>();

        let writer = Arc::clone(&inner);
        let worker = std::thread::spawn(move || {
            log::debug!(target: STORE_TARGET, "Store writer thread started");
            while let Ok(request) = write_rx.recv() {
                match writer.set(&request.key, request.value) {
                    Ok(()) => log::debug!(target: STORE_TARGET, "Saved key '{}'", request.key),
                    Err(e) => {
                        log::error!(
                            target: STORE_TARGET,
                            "Error saving '{}': {:#}",
                            request.key,
                            e
                        );
                    }
                }
            }
            log::debug!(target: STORE_TARGET, "Store writer thread exiting");
        });

        BackgroundStore {
            inner,
            write_tx: Some(write_tx),
            worker: Some(worker),
        }
    }
}

impl<S: SyncStore + 'static> SyncStore for BackgroundStore<S> {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let tx = self
            .write_tx
            .as_ref()
            .ok_or_else(|| anyhow!("Store writer has shut down"))?;
        tx.send(WriteRequest {
            key: key.to_string(),
            value,
        })
        .map_err(|_| anyhow!("Store writer thread has stopped"))
    }
}

impl<S: SyncStore + 'static> Drop for BackgroundStore<S> {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain and exit
        self.write_tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!(target: STORE_TARGET, "Store writer thread panicked");
            }
        }
    }
}
