//! Temporary display URLs for stored blobs
//!
//! An [`ObjectUrl`] is live for as long as the guard exists; dropping it
//! revokes the URL, so a page that forgets to clean up cannot leak blobs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use super::{BlobError, BlobStore};

const URL_SCHEME: &str = "blob:showroom/";

type UrlTable = HashMap<String, Arc<Vec<u8>>>;

#[derive(Clone, Default)]
pub struct UrlRegistry {
    urls: Arc<Mutex<UrlTable>>,
}

impl UrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, UrlTable> {
        // Poisoning is ignored: every operation is a single insert or remove
        match self.urls.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Register `bytes` under a fresh URL
    pub fn create(&self, bytes: Vec<u8>) -> ObjectUrl {
        let url = format!("{}{}", URL_SCHEME, Uuid::new_v4());
        self.table().insert(url.clone(), Arc::new(bytes));
        ObjectUrl {
            url,
            registry: self.clone(),
        }
    }

    /// Load `key` from `store` and register it; `None` when the key is absent
    pub async fn open(
        &self,
        store: &dyn BlobStore,
        key: &str,
    ) -> Result<Option<ObjectUrl>, BlobError> {
        Ok(store.get(key).await?.map(|bytes| self.create(bytes)))
    }

    /// Content behind a live URL
    pub fn resolve(&self, url: &str) -> Option<Arc<Vec<u8>>> {
        self.table().get(url).cloned()
    }

    pub fn live_count(&self) -> usize {
        self.table().len()
    }

    fn revoke(&self, url: &str) {
        if self.table().remove(url).is_some() {
            tracing::trace!("Revoked {}", url);
        }
    }
}

/// Scoped display URL, revoked on drop
pub struct ObjectUrl {
    url: String,
    registry: UrlRegistry,
}

impl ObjectUrl {
    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn content(&self) -> Option<Arc<Vec<u8>>> {
        self.registry.resolve(&self.url)
    }
}

impl std::fmt::Debug for ObjectUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ObjectUrl").field(&self.url).finish()
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        self.registry.revoke(&self.url);
    }
}
