//! Session Persistence
//!
//! The client keeps exactly one `{user, token}` value under one storage key.
//! Stores serialize the session as JSON, the way browser local storage holds
//! it, so a value written by one frontend reads back in another.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;

use crate::error::{CoreError, Result};
use crate::model::Session;

/// Storage key the session lives under
pub const DEFAULT_SESSION_KEY: &str = "vexon_session";

/// Session store trait for persistence
///
/// Stores hold the session as the backend sent it; `save`/`load` are the
/// typed view on top. Writes replace the stored value wholesale; the last
/// writer wins.
pub trait SessionStore: Send + Sync {
    /// Persist a raw session value, replacing any previous one
    fn save_raw(&self, value: &Value) -> Result<()>;

    /// Load the raw stored value, `None` when the key is absent
    fn load_raw(&self) -> Result<Option<Value>>;

    /// Remove the stored session; absent keys are not an error
    fn delete(&self) -> Result<()>;

    /// Persist a typed session
    fn save(&self, session: &Session) -> Result<()> {
        self.save_raw(&serde_json::to_value(session)?)
    }

    /// Load the stored session as a typed view
    fn load(&self) -> Result<Option<Session>> {
        match self.load_raw()? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}

/// In-memory session store (for tests and embedding)
#[derive(Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing session
    pub fn with_session(session: &Session) -> Result<Self> {
        let store = Self::new();
        store.save(session)?;
        Ok(store)
    }

    /// Store holding an arbitrary raw value, as a tampered browser would
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(raw.into())),
        }
    }

    /// The raw JSON currently stored
    pub fn raw(&self) -> Option<String> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }
}

fn poisoned<T>(_: T) -> CoreError {
    CoreError::StorageUnavailable("session lock poisoned".into())
}

impl SessionStore for MemorySessionStore {
    fn save_raw(&self, value: &Value) -> Result<()> {
        let json = serde_json::to_string(value)?;
        *self.slot.write().map_err(poisoned)? = Some(json);
        Ok(())
    }

    fn load_raw(&self) -> Result<Option<Value>> {
        let slot = self.slot.read().map_err(poisoned)?;
        match slot.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn delete(&self) -> Result<()> {
        *self.slot.write().map_err(poisoned)? = None;
        Ok(())
    }
}

/// File-backed session store used by the CLI
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/<key>.json`
    pub fn in_dir(dir: impl AsRef<Path>, key: &str) -> Self {
        Self::new(dir.as_ref().join(format!("{key}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn save_raw(&self, value: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec(value)?)?;
        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    fn load_raw(&self) -> Result<Option<Value>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "session removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    fn session(token: &str) -> Session {
        Session {
            user: User {
                id: serde_json::json!(7),
                username: "morpheus".into(),
                email: "m@vexon.ai".into(),
                current_plan: Some("basic".into()),
                ..Default::default()
            },
            token: token.into(),
        }
    }

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("vexon-core-{}", uuid::Uuid::new_v4()))
            .join("vexon_session.json")
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&session("t1")).unwrap();
        assert_eq!(store.load().unwrap().unwrap().token, "t1");

        store.save(&session("t2")).unwrap();
        assert_eq!(store.load().unwrap().unwrap().token, "t2");

        store.delete().unwrap();
        assert!(store.load().unwrap().is_none());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_memory_store_corrupt_value() {
        let store = MemorySessionStore::from_raw("{not json");
        assert!(matches!(store.load(), Err(CoreError::Json(_))));
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = temp_path();
        let store = FileSessionStore::new(&path);

        assert!(store.load().unwrap().is_none());
        store.delete().unwrap();

        store.save(&session("t1")).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, session("t1"));

        store.delete().unwrap();
        assert!(!path.exists());
        assert!(store.load().unwrap().is_none());

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_raw_value_kept_verbatim() {
        let raw = serde_json::json!({
            "user": {"id": "u-17", "role": "admin", "first_name": null},
            "token": "t1",
            "expires_in": 3600
        });

        let memory = MemorySessionStore::new();
        memory.save_raw(&raw).unwrap();
        assert_eq!(memory.load_raw().unwrap(), Some(raw.clone()));
        assert_eq!(memory.load().unwrap().unwrap().token, "t1");

        let path = temp_path();
        let file = FileSessionStore::new(&path);
        file.save_raw(&raw).unwrap();
        assert_eq!(file.load_raw().unwrap(), Some(raw));

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_file_store_in_dir() {
        let store = FileSessionStore::in_dir("/tmp/vexon", DEFAULT_SESSION_KEY);
        assert_eq!(store.path(), Path::new("/tmp/vexon/vexon_session.json"));
    }

    #[test]
    fn test_trait_object() {
        let store: Box<dyn SessionStore> = Box::new(MemorySessionStore::new());
        store.save(&session("t9")).unwrap();
        assert_eq!(store.load().unwrap().unwrap().token, "t9");
    }
}
