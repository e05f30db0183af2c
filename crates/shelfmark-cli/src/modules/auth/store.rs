#[cfg(test)]
use std::collections::HashMap;
use std::sync::Arc;
#[cfg(test)]
use std::sync::{Mutex, OnceLock};

#[cfg(test)]
use shelfmark_client::MemorySessionStore;
#[cfg(not(test))]
use shelfmark_client::KeyringSessionStore;
use shelfmark_client::{FileSessionStore, SessionStore};
use tracing::debug;

use crate::modules::system::credentials_path;
use crate::CREDENTIAL_STORE_ENV;
#[cfg(not(test))]
use crate::KEYRING_SERVICE;

/// Session store for `context`, chosen by `SHELFMARK_CREDENTIAL_STORE`
/// (`keyring` by default, or `file`).
pub(crate) fn open_session_store(context: &str) -> anyhow::Result<Arc<dyn SessionStore>> {
    let backend = std::env::var(CREDENTIAL_STORE_ENV).unwrap_or_else(|_| "keyring".to_string());
    match backend.as_str() {
        "keyring" => {
            debug!(context = %context, "using keyring credential store");
            Ok(keyring_store(context))
        }
        "file" => {
            let path = credentials_path()?;
            debug!(context = %context, path = %path.display(), "using file credential store");
            Ok(Arc::new(FileSessionStore::new(path, context)))
        }
        other => anyhow::bail!("unknown credential store: {other} (expected keyring or file)"),
    }
}

#[cfg(not(test))]
fn keyring_store(context: &str) -> Arc<dyn SessionStore> {
    Arc::new(KeyringSessionStore::new(KEYRING_SERVICE, context))
}

#[cfg(test)]
fn keyring_mock() -> &'static Mutex<HashMap<String, Arc<MemorySessionStore>>> {
    static STORE: OnceLock<Mutex<HashMap<String, Arc<MemorySessionStore>>>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(HashMap::new()))
}

#[cfg(test)]
fn keyring_store(context: &str) -> Arc<dyn SessionStore> {
    let mut stores = keyring_mock().lock().unwrap_or_else(|err| err.into_inner());
    let store = stores
        .entry(context.to_string())
        .or_insert_with(|| Arc::new(MemorySessionStore::new()))
        .clone();
    store
}
