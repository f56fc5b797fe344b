//! Persisted session token.

use crate::error::{WebError, WebResult};
use std::sync::{Arc, PoisonError, RwLock};

/// Where the session token lives between page loads.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Browser local storage. Looks the storage up on every access so nothing
/// `!Send` is held.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorage {
    key: &'static str,
}

impl LocalStorage {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> WebResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| WebError::new("no window"))?;
        window
            .local_storage()?
            .ok_or_else(|| WebError::new("local storage is unavailable"))
    }
}

impl TokenStore for LocalStorage {
    fn load(&self) -> Option<String> {
        match Self::storage().and_then(|s| s.get_item(self.key).map_err(WebError::from)) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(err) => {
                tracing::warn!("Failed to read session token: {err}");
                None
            }
        }
    }

    fn save(&self, token: &str) {
        if let Err(err) =
            Self::storage().and_then(|s| s.set_item(self.key, token).map_err(WebError::from))
        {
            tracing::warn!("Failed to persist session token: {err}");
        }
    }

    fn clear(&self) {
        if let Err(err) =
            Self::storage().and_then(|s| s.remove_item(self.key).map_err(WebError::from))
        {
            tracing::warn!("Failed to clear session token: {err}");
        }
    }
}

/// In-memory store. Clones share the same token.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, token: &str) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clones_share_the_token() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.save("abc123");
        assert_eq!(other.load().as_deref(), Some("abc123"));
        other.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn last_write_wins() {
        let store = MemoryStore::with_token("first");
        store.save("second");
        assert_eq!(store.load().as_deref(), Some("second"));
    }
}
