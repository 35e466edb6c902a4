use std::collections::HashMap;

use thiserror::Error;

/// Failure while persisting config state to durable media.
///
/// `get` and `set` operate on the in-memory view and cannot fail; only
/// `save` crosses the durability boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not persist config: {0}")]
    Io(#[from] std::io::Error),
}

/// The key/value collaborator behind [`Config`](crate::Config).
///
/// Stores raw strings under string keys. Typing and serialization are the
/// caller's concern, which keeps backends (files, platform preferences,
/// in-memory fakes) interchangeable. Changes made with `set` become durable
/// only once `save` returns.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` if the key was never set.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrites the value under `key`.
    fn set(&mut self, key: &str, value: &str);

    /// Flushes pending changes to durable media.
    fn save(&mut self) -> Result<(), StoreError>;
}

/// `HashMap`-backed store. Used in tests and for sessions that don't
/// persist anything; `save` succeeds without touching any media.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn save(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}
