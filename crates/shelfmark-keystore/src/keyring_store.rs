use keyring::Entry;
use tracing::{debug, warn};

use crate::{CredentialKind, SessionStore, StoreError};

/// Credentials in the OS keychain, one entry per kind and context.
pub struct KeyringSessionStore {
    service: String,
    context: String,
}

impl KeyringSessionStore {
    pub fn new(service: &str, context: &str) -> Self {
        Self {
            service: service.to_string(),
            context: context.to_string(),
        }
    }

    fn key(&self, kind: CredentialKind) -> String {
        format!("{}::{}", kind.as_str(), self.context)
    }

    fn entry(&self, kind: CredentialKind) -> Result<Entry, StoreError> {
        Entry::new(&self.service, &self.key(kind)).map_err(|err| StoreError::Unavailable {
            message: format!("failed to access keyring: {err}"),
        })
    }
}

impl SessionStore for KeyringSessionStore {
    fn load(&self, kind: CredentialKind) -> Result<Option<String>, StoreError> {
        let entry = self.entry(kind)?;
        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(StoreError::Internal {
                message: format!(
                    "failed to load {} token from keychain for context '{}': {err}",
                    kind.as_str(),
                    self.context
                ),
            }),
        }
    }

    fn store(&self, kind: CredentialKind, value: &str) -> Result<(), StoreError> {
        let entry = self.entry(kind)?;
        entry
            .set_password(value)
            .map_err(|err| StoreError::Internal {
                message: format!("failed to store {} token: {err}", kind.as_str()),
            })?;
        debug!(context = %self.context, kind = kind.as_str(), "stored token in keyring");
        Ok(())
    }

    fn delete(&self, kind: CredentialKind) -> Result<(), StoreError> {
        let entry = self.entry(kind)?;
        match entry.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => {
                warn!(context = %self.context, "failed to delete {} token: {err}", kind.as_str());
                Err(StoreError::Internal {
                    message: format!(
                        "failed to delete {} token from keychain for context '{}': {err}",
                        kind.as_str(),
                        self.context
                    ),
                })
            }
        }
    }
}
