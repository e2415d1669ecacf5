//! Key-value persistence for the save blob and UI preferences.
//!
//! The browser build goes through `window.localStorage`; tests swap in an
//! in-memory map.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::config::SAVE_KEY;
use crate::error::StorageError;
use crate::model::{GameState, UpgradeDef};
use crate::save::Decoded;
use crate::util::clog;

pub trait SaveStore {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub struct LocalStore {
    inner: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let win = web_sys::window().ok_or(StorageError::Unavailable)?;
        match win.local_storage() {
            Ok(Some(inner)) => Ok(Self { inner }),
            _ => Err(StorageError::Unavailable),
        }
    }
}

impl SaveStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed(format!("{:?}", e)))
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl SaveStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the saved game. A missing save is a clean fresh start.
pub fn load_game(store: &dyn SaveStore, defs: &'static [UpgradeDef]) -> Decoded {
    match store.load(SAVE_KEY) {
        Some(raw) if !raw.is_empty() => GameState::deserialize(defs, &raw),
        _ => Decoded::Clean(GameState::new(defs)),
    }
}

pub fn save_game(store: &dyn SaveStore, game: &GameState) -> Result<(), StorageError> {
    let text = game.serialize().to_json()?;
    store.store(SAVE_KEY, &text)
}

/// Best-effort save from UI glue. Without a store there is nothing to do;
/// write failures are logged. Returns whether the game was written.
pub fn persist<S: SaveStore>(store: Option<&S>, game: &GameState) -> bool {
    let Some(store) = store else { return false };
    match save_game(store, game) {
        Ok(()) => true,
        Err(e) => {
            clog(&format!("save failed: {e}"));
            false
        }
    }
}
