//! Key/value session storage contract (JSON stored as text per key).

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future used by [`SessionStore`] async methods.
pub type SessionStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service holding small JSON records that outlive a page load.
pub trait SessionStore {
    /// Loads the raw JSON stored under `key`.
    fn load_entry<'a>(
        &'a self,
        key: &'a str,
    ) -> SessionStoreFuture<'a, Result<Option<String>, String>>;

    /// Stores raw JSON under `key`, replacing any previous value.
    fn save_entry<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> SessionStoreFuture<'a, Result<(), String>>;

    /// Removes `key`.
    fn delete_entry<'a>(&'a self, key: &'a str) -> SessionStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Session store that keeps nothing.
pub struct NoopSessionStore;

impl SessionStore for NoopSessionStore {
    fn load_entry<'a>(
        &'a self,
        _key: &'a str,
    ) -> SessionStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_entry<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> SessionStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_entry<'a>(&'a self, _key: &'a str) -> SessionStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory session store; clones share the same map.
pub struct MemorySessionStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns whether no key is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn load_entry<'a>(
        &'a self,
        key: &'a str,
    ) -> SessionStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_entry<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> SessionStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }

    fn delete_entry<'a>(&'a self, key: &'a str) -> SessionStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Loads and deserializes a typed value through a [`SessionStore`].
///
/// # Errors
///
/// Returns an error when the store read or JSON deserialization fails.
pub async fn load_session_entry_with<S: SessionStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_entry(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| format!("{key}: {e}"))?;
    Ok(Some(value))
}

/// Serializes and saves a typed value through a [`SessionStore`].
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_session_entry_with<S: SessionStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_entry(key, &raw).await
}

/// Removes a key through a [`SessionStore`].
///
/// # Errors
///
/// Returns an error when the store delete fails.
pub async fn delete_session_entry_with<S: SessionStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<(), String> {
    store.delete_entry(key).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: String,
    }

    #[test]
    fn memory_store_round_trip_and_delete() {
        let store = MemorySessionStore::default();
        let store_obj: &dyn SessionStore = &store;

        block_on(store_obj.save_entry("k", "{\"id\":\"a\"}")).expect("save");
        assert_eq!(
            block_on(store_obj.load_entry("k")).expect("load"),
            Some("{\"id\":\"a\"}".to_string())
        );
        block_on(store_obj.delete_entry("k")).expect("delete");
        assert_eq!(block_on(store_obj.load_entry("k")).expect("load"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn clones_share_entries() {
        let store = MemorySessionStore::default();
        let clone = store.clone();
        block_on(store.save_entry("k", "1")).expect("save");
        assert_eq!(block_on(clone.load_entry("k")).expect("load").as_deref(), Some("1"));
        assert_eq!(clone.len(), 1);
    }

    #[test]
    fn typed_helpers_round_trip_and_report_bad_json() {
        let store = MemorySessionStore::default();
        block_on(save_session_entry_with(
            &store,
            "user",
            &Record { id: "u1".into() },
        ))
        .expect("save typed");
        let loaded: Option<Record> =
            block_on(load_session_entry_with(&store, "user")).expect("load typed");
        assert_eq!(loaded, Some(Record { id: "u1".into() }));

        block_on(store.save_entry("user", "not json")).expect("save raw");
        let err = block_on(load_session_entry_with::<_, Record>(&store, "user"))
            .expect_err("corrupt entry");
        assert!(err.starts_with("user: "));
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store_obj: &dyn SessionStore = &NoopSessionStore;
        assert_eq!(block_on(store_obj.load_entry("k")).expect("load"), None);
        block_on(store_obj.save_entry("k", "{}")).expect("save");
        block_on(delete_session_entry_with(store_obj, "k")).expect("delete");
    }
}
