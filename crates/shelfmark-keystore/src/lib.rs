//! Persistent slots for the two session credentials.
//!
//! The API client never touches storage directly; it is handed a
//! [`SessionStore`] at construction and reads the access credential before
//! every call.

mod file;
mod keyring_store;
mod memory;

pub use file::FileSessionStore;
pub use keyring_store::KeyringSessionStore;
pub use memory::MemorySessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    Access,
    Refresh,
}

impl CredentialKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("credential store unavailable: {message}")]
    Unavailable { message: String },
    #[error("credential file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("credential file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("internal error: {message}")]
    Internal { message: String },
}

pub trait SessionStore: Send + Sync {
    fn load(&self, kind: CredentialKind) -> Result<Option<String>, StoreError>;
    fn store(&self, kind: CredentialKind, value: &str) -> Result<(), StoreError>;
    /// Removing a missing credential is not an error.
    fn delete(&self, kind: CredentialKind) -> Result<(), StoreError>;

    fn access_token(&self) -> Result<Option<String>, StoreError> {
        self.load(CredentialKind::Access)
    }

    fn refresh_token(&self) -> Result<Option<String>, StoreError> {
        self.load(CredentialKind::Refresh)
    }

    fn store_pair(&self, access: &str, refresh: &str) -> Result<(), StoreError> {
        self.store(CredentialKind::Access, access)?;
        self.store(CredentialKind::Refresh, refresh)
    }

    /// Attempts both deletes and returns the first failure.
    fn clear(&self) -> Result<(), StoreError> {
        let access = self.delete(CredentialKind::Access);
        let refresh = self.delete(CredentialKind::Refresh);
        access.and(refresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LockedAccessSlot(MemorySessionStore);

    impl SessionStore for LockedAccessSlot {
        fn load(&self, kind: CredentialKind) -> Result<Option<String>, StoreError> {
            self.0.load(kind)
        }

        fn store(&self, kind: CredentialKind, value: &str) -> Result<(), StoreError> {
            self.0.store(kind, value)
        }

        fn delete(&self, kind: CredentialKind) -> Result<(), StoreError> {
            match kind {
                CredentialKind::Access => Err(StoreError::Internal {
                    message: "access slot locked".to_string(),
                }),
                CredentialKind::Refresh => self.0.delete(kind),
            }
        }
    }

    #[test]
    fn clear_removes_refresh_even_when_access_delete_fails() {
        let store = LockedAccessSlot(MemorySessionStore::with_tokens(
            Some("access"),
            Some("refresh"),
        ));

        let err = store.clear().expect_err("access delete failure reported");
        assert!(err.to_string().contains("access slot locked"));
        assert_eq!(store.refresh_token().expect("load"), None);
        assert_eq!(store.access_token().expect("load").as_deref(), Some("access"));
    }
}
