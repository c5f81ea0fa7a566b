//! Keyed storage for uploaded documents (NIC copies, invoices, model images)
//!
//! Keys are path-like (`customers/12/3fa4c1d2e9b0a7f1-nic.jpg`). Stores are
//! injected where uploads happen; display goes through [`object_url`].

pub mod object_url;
pub mod sqlite;

use std::collections::HashMap;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tokio::sync::RwLock;

pub use object_url::{ObjectUrl, UrlRegistry};
pub use sqlite::SqliteBlobStore;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("Invalid blob key: {0}")]
    InvalidKey(String),

    #[error("Blob database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Blob storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `key`, replacing any previous content; returns the normalized key
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<String, BlobError>;

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BlobError>;

    /// Returns `true` if something was removed
    async fn delete(&self, key: &str) -> Result<bool, BlobError>;
}

/// Normalize separators and reject keys that could escape their folder
pub fn normalize_key(key: &str) -> Result<String, BlobError> {
    let key = key.trim().replace('\\', "/");
    let key = key.trim_start_matches('/').to_string();

    if key.is_empty() {
        return Err(BlobError::InvalidKey("empty key".to_string()));
    }
    if key.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..") {
        return Err(BlobError::InvalidKey(key));
    }
    Ok(key)
}

/// Build an upload key: `<folder>/<first 16 hex chars of sha256>-<sanitized file name>`
pub fn content_key(folder: &str, file_name: &str, bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let hash: String = digest.iter().take(8).map(|b| format!("{:02x}", b)).collect();

    let sanitized: String = file_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let sanitized = if sanitized.is_empty() {
        "file".to_string()
    } else {
        sanitized
    };

    format!("{}/{}-{}", folder.trim_matches('/'), hash, sanitized)
}

/// Process-local store, used in tests and when no database is configured
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<String, BlobError> {
        let key = normalize_key(key)?;
        self.blobs.write().await.insert(key.clone(), bytes);
        Ok(key)
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BlobError> {
        let key = normalize_key(key)?;
        Ok(self.blobs.read().await.get(&key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<bool, BlobError> {
        let key = normalize_key(key)?;
        Ok(self.blobs.write().await.remove(&key).is_some())
    }
}
