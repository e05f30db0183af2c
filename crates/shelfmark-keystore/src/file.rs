use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CredentialKind, SessionStore, StoreError};

#[derive(Serialize, Deserialize, Default, Clone)]
struct StoredCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh: Option<String>,
}

impl StoredCredentials {
    fn slot(&mut self, kind: CredentialKind) -> &mut Option<String> {
        match kind {
            CredentialKind::Access => &mut self.access,
            CredentialKind::Refresh => &mut self.refresh,
        }
    }

    fn is_empty(&self) -> bool {
        self.access.is_none() && self.refresh.is_none()
    }
}

/// JSON file keyed by context name, for machines without a usable keychain.
/// The file is written owner-only on unix.
pub struct FileSessionStore {
    path: PathBuf,
    context: String,
    guard: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>, context: &str) -> Self {
        Self {
            path: path.into(),
            context: context.to_string(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, StoredCredentials>, StoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_all(&self, entries: &HashMap<String, StoredCredentials>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents)?;
        restrict_permissions(&self.path)?;
        Ok(())
    }

    fn update<F>(&self, apply: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut StoredCredentials),
    {
        let _guard = self.guard.lock().map_err(|_| StoreError::Internal {
            message: "failed to lock credential file".to_string(),
        })?;
        let mut entries = self.read_all()?;
        let mut credentials = entries.remove(&self.context).unwrap_or_default();
        apply(&mut credentials);
        if !credentials.is_empty() {
            entries.insert(self.context.clone(), credentials);
        }
        self.write_all(&entries)
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

impl SessionStore for FileSessionStore {
    fn load(&self, kind: CredentialKind) -> Result<Option<String>, StoreError> {
        let _guard = self.guard.lock().map_err(|_| StoreError::Internal {
            message: "failed to lock credential file".to_string(),
        })?;
        let mut entries = self.read_all()?;
        Ok(entries
            .get_mut(&self.context)
            .and_then(|credentials| credentials.slot(kind).clone()))
    }

    fn store(&self, kind: CredentialKind, value: &str) -> Result<(), StoreError> {
        self.update(|credentials| *credentials.slot(kind) = Some(value.to_string()))?;
        debug!(context = %self.context, kind = kind.as_str(), "stored token in credential file");
        Ok(())
    }

    fn delete(&self, kind: CredentialKind) -> Result<(), StoreError> {
        self.update(|credentials| *credentials.slot(kind) = None)
    }
}
