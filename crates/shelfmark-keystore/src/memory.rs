use std::collections::HashMap;
use std::sync::Mutex;

use crate::{CredentialKind, SessionStore, StoreError};

/// Process-local store, for tests and short-lived embedding.
#[derive(Default)]
pub struct MemorySessionStore {
    slots: Mutex<HashMap<CredentialKind, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(access: Option<&str>, refresh: Option<&str>) -> Self {
        let mut slots = HashMap::new();
        if let Some(access) = access {
            slots.insert(CredentialKind::Access, access.to_string());
        }
        if let Some(refresh) = refresh {
            slots.insert(CredentialKind::Refresh, refresh.to_string());
        }
        Self {
            slots: Mutex::new(slots),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<CredentialKind, String>>, StoreError> {
        self.slots.lock().map_err(|_| StoreError::Internal {
            message: "failed to lock memory store".to_string(),
        })
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, kind: CredentialKind) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(&kind).cloned())
    }

    fn store(&self, kind: CredentialKind, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(kind, value.to_string());
        Ok(())
    }

    fn delete(&self, kind: CredentialKind) -> Result<(), StoreError> {
        self.lock()?.remove(&kind);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_roundtrip_and_clear() -> Result<(), StoreError> {
        let store = MemorySessionStore::new();
        assert_eq!(store.access_token()?, None);
        store.store_pair("access", "refresh")?;
        assert_eq!(store.access_token()?, Some("access".to_string()));
        assert_eq!(store.refresh_token()?, Some("refresh".to_string()));
        store.clear()?;
        assert_eq!(store.access_token()?, None);
        assert_eq!(store.refresh_token()?, None);
        store.delete(CredentialKind::Refresh)?;
        Ok(())
    }
}
