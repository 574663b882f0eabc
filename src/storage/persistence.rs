use serde_json::Value;

use super::SyncStore;
use crate::logging::STORE_TARGET;
use crate::models::{Clip, ClipList, MAX_ALIAS_CHARS};

/// Default key the clip list is stored under
pub const DEFAULT_STORAGE_KEY: &str = "quickClipItems";

/// Mirrors the clip list to a SyncStore under a fixed key.
///
/// Best effort in both directions: a failed load yields an empty list and a
/// failed save is logged, never surfaced.
pub struct ClipPersistence {
    store: Box<dyn SyncStore>,
    key: String,
}

impl ClipPersistence {
    pub fn new(store: Box<dyn SyncStore>, key: impl Into<String>) -> Self {
        ClipPersistence {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored list, failing open to an empty list
    pub fn load(&self) -> ClipList {
        match self.store.get(&self.key) {
            Ok(Some(value)) => {
                let clips = clips_from_value(value);
                log::info!(
                    target: STORE_TARGET,
                    "Loaded {} clips from key '{}'",
                    clips.len(),
                    self.key
                );
                clips
            }
            Ok(None) => {
                log::info!(
                    target: STORE_TARGET,
                    "No clips stored under '{}', starting empty",
                    self.key
                );
                ClipList::new()
            }
            Err(e) => {
                log::error!(target: STORE_TARGET, "Error loading clips: {:#}", e);
                ClipList::new()
            }
        }
    }

    /// Write the whole list. Failures are logged and otherwise ignored.
    pub fn save(&self, clips: &ClipList) {
        let value = match serde_json::to_value(clips) {
            Ok(value) => value,
            Err(e) => {
                log::error!(target: STORE_TARGET, "Error serializing clips: {}", e);
                return;
            }
        };

        match self.store.set(&self.key, value) {
            Ok(()) => log::debug!(target: STORE_TARGET, "Clips saved ({} items)", clips.len()),
            Err(e) => log::error!(target: STORE_TARGET, "Error saving clips: {:#}", e),
        }
    }
}

/// Rebuild a clip list from an unvalidated stored value.
///
/// Records without a non-blank string `value` are skipped. A non-string or
/// blank alias becomes `None`; an over-long alias is cut to the limit.
pub fn clips_from_value(value: Value) -> ClipList {
    let records = match value {
        Value::Array(records) => records,
        Value::Null => return ClipList::new(),
        other => {
            log::warn!(target: STORE_TARGET, "Stored clips are not a list ({}), ignoring", other);
            return ClipList::new();
        }
    };

    let mut clips = Vec::with_capacity(records.len());
    for (i, record) in records.into_iter().enumerate() {
        let Value::Object(mut fields) = record else {
            log::warn!(target: STORE_TARGET, "Skipping stored clip {}: not an object", i);
            continue;
        };

        let value = match fields.remove("value") {
            Some(Value::String(s)) if !s.trim().is_empty() => s,
            _ => {
                log::warn!(
                    target: STORE_TARGET,
                    "Skipping stored clip {}: missing or empty value",
                    i
                );
                continue;
            }
        };

        let alias = match fields.remove("alias") {
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else if trimmed.chars().count() > MAX_ALIAS_CHARS {
                    log::warn!(
                        target: STORE_TARGET,
                        "Stored clip {} has an over-long alias, truncating",
                        i
                    );
                    Some(trimmed.chars().take(MAX_ALIAS_CHARS).collect())
                } else {
                    Some(trimmed.to_string())
                }
            }
            _ => None,
        };

        clips.push(Clip { value, alias });
    }

    ClipList::from_clips(clips)
}
