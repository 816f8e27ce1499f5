//! Single-record session repository bound to one store key.

use std::{marker::PhantomData, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

use crate::storage::{
    delete_session_entry_with, load_session_entry_with, save_session_entry_with, SessionStore,
};

/// Typed get/set/clear access to the record stored under one key.
pub struct SessionRepository<T> {
    store: Rc<dyn SessionStore>,
    key: Rc<str>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for SessionRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            key: Rc::clone(&self.key),
            _record: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for SessionRepository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRepository")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl<T> SessionRepository<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Binds a repository to `key` in `store`.
    pub fn new(store: Rc<dyn SessionStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: Rc::from(key.into()),
            _record: PhantomData,
        }
    }

    /// Store key this repository owns.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error when the store read fails or the stored JSON does not decode.
    pub async fn get(&self) -> Result<Option<T>, String> {
        load_session_entry_with(self.store.as_ref(), &self.key).await
    }

    /// Replaces the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the store write fails.
    pub async fn set(&self, value: &T) -> Result<(), String> {
        save_session_entry_with(self.store.as_ref(), &self.key, value).await
    }

    /// Removes the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error when the store delete fails.
    pub async fn clear(&self) -> Result<(), String> {
        delete_session_entry_with(self.store.as_ref(), &self.key).await
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde::Deserialize;

    use super::*;
    use crate::storage::MemorySessionStore;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Profile {
        id: String,
        email: Option<String>,
    }

    #[test]
    fn get_set_clear_round_trip() {
        let store = MemorySessionStore::default();
        let repo: SessionRepository<Profile> = SessionRepository::new(Rc::new(store.clone()), "me");
        assert_eq!(block_on(repo.get()).expect("empty get"), None);

        let profile = Profile {
            id: "1".into(),
            email: Some("a@b.c".into()),
        };
        block_on(repo.set(&profile)).expect("set");
        assert_eq!(block_on(repo.get()).expect("get"), Some(profile));
        assert_eq!(store.len(), 1);

        block_on(repo.clear()).expect("clear");
        assert_eq!(block_on(repo.get()).expect("get after clear"), None);
    }

    #[test]
    fn repositories_on_different_keys_are_isolated() {
        let store: Rc<dyn SessionStore> = Rc::new(MemorySessionStore::default());
        let first: SessionRepository<Profile> = SessionRepository::new(store.clone(), "a");
        let second: SessionRepository<Profile> = SessionRepository::new(store, "b");
        block_on(first.set(&Profile {
            id: "1".into(),
            email: None,
        }))
        .expect("set");
        assert_eq!(block_on(second.get()).expect("get"), None);
        assert_eq!(second.key(), "b");
    }
}
