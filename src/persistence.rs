//! Key-value persistence for the two values the game keeps
//!
//! Exactly two logical values are stored, both as text: the last-known high
//! score and the mute preference. Storage failures and malformed values are
//! treated as missing and fall back to defaults (0 and unmuted); the round
//! always proceeds. Writes are fire-and-forget, performed at the moment of
//! the triggering event (game over, mute toggle).

use std::collections::HashMap;

/// High score, stored as numeric text
pub const HIGH_SCORE_KEY: &str = "trex_dash_highscore_v1";
/// Mute preference, stored as "true"/"false"
pub const MUTED_KEY: &str = "trex_dash_muted";

/// Minimal key-value store the core persists through
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Fire-and-forget; failures are swallowed
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for native runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Browser LocalStorage store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if let Some(storage) = storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist {key}");
            }
        }
    }
}

/// Load the stored high score, defaulting to 0 when absent or malformed
pub fn load_high_score(store: &impl KeyValueStore) -> f32 {
    store
        .get(HIGH_SCORE_KEY)
        .and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// Load the stored mute preference, defaulting to unmuted
pub fn load_muted(store: &impl KeyValueStore) -> bool {
    store
        .get(MUTED_KEY)
        .map(|s| s == "true")
        .unwrap_or(false)
}
