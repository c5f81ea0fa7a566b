use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectOptions, Database, DatabaseBackend, Set, Statement};

use super::{normalize_key, BlobError, BlobStore};

/// Stored blob row
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blob_storage")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub blob_key: String,
    pub content: Vec<u8>,
    pub size: i64,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS blob_storage (
        blob_key TEXT PRIMARY KEY NOT NULL,
        content BLOB NOT NULL,
        size INTEGER NOT NULL,
        created_at TEXT NOT NULL
    );
"#;

/// `sqlite://` URL for an absolute path, created on first open
fn sqlite_url(absolute_path: &Path) -> String {
    // Windows drive paths need a leading slash: sqlite:///C:/...
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

/// SQLite-backed blob store; the connection is owned by the store, not a global
#[derive(Clone)]
pub struct SqliteBlobStore {
    conn: DatabaseConnection,
}

impl SqliteBlobStore {
    /// Open (creating if needed) the database file at `path`
    pub async fn open(path: &Path) -> Result<Self, BlobError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let absolute_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        let mut options = ConnectOptions::new(sqlite_url(&absolute_path));
        options.sqlx_logging(false);
        let conn = Database::connect(options).await?;
        tracing::info!("Blob store opened at {}", absolute_path.display());
        Self::with_connection(conn).await
    }

    /// Private in-memory database; a single pooled connection keeps the data alive
    pub async fn in_memory() -> Result<Self, BlobError> {
        let mut options = ConnectOptions::new("sqlite::memory:".to_string());
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        let conn = Database::connect(options).await?;
        Self::with_connection(conn).await
    }

    pub async fn with_connection(conn: DatabaseConnection) -> Result<Self, BlobError> {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            CREATE_TABLE.to_string(),
        ))
        .await?;
        Ok(Self { conn })
    }

    /// Keys stored under `folder/`
    pub async fn list_keys(&self, folder: &str) -> Result<Vec<String>, BlobError> {
        let prefix = format!("{}/", folder.trim_matches('/'));
        let rows = Entity::find()
            .filter(Column::BlobKey.starts_with(prefix.as_str()))
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(|m| m.blob_key).collect())
    }
}

#[async_trait]
impl BlobStore for SqliteBlobStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<String, BlobError> {
        let key = normalize_key(key)?;
        let size = bytes.len() as i64;

        let active = ActiveModel {
            blob_key: Set(key.clone()),
            content: Set(bytes),
            size: Set(size),
            created_at: Set(Utc::now().to_rfc3339()),
        };

        Entity::insert(active)
            .on_conflict(
                OnConflict::column(Column::BlobKey)
                    .update_columns([Column::Content, Column::Size, Column::CreatedAt])
                    .to_owned(),
            )
            .exec(&self.conn)
            .await?;

        tracing::debug!("Stored blob {} ({} bytes)", key, size);
        Ok(key)
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BlobError> {
        let key = normalize_key(key)?;
        let result = Entity::find_by_id(key).one(&self.conn).await?;
        Ok(result.map(|m| m.content))
    }

    async fn delete(&self, key: &str) -> Result<bool, BlobError> {
        let key = normalize_key(key)?;
        let result = Entity::delete_by_id(key.clone()).exec(&self.conn).await?;
        if result.rows_affected > 0 {
            tracing::debug!("Deleted blob {}", key);
        }
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_replace_delete() {
        let store = SqliteBlobStore::in_memory().await.unwrap();

        let key = store
            .put("customers/1/nic.jpg", vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(store.get(&key).await.unwrap(), Some(vec![1, 2, 3]));

        store.put(&key, vec![9]).await.unwrap();
        assert_eq!(store.get(&key).await.unwrap(), Some(vec![9]));

        assert!(store.delete(&key).await.unwrap());
        assert_eq!(store.get(&key).await.unwrap(), None);
        assert!(!store.delete(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_keys_by_folder() {
        let store = SqliteBlobStore::in_memory().await.unwrap();
        store.put("customers/1/a.pdf", vec![1]).await.unwrap();
        store.put("customers/1/b.pdf", vec![2]).await.unwrap();
        store.put("customers/10/c.pdf", vec![3]).await.unwrap();

        let mut keys = store.list_keys("customers/1").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["customers/1/a.pdf", "customers/1/b.pdf"]);
    }

    #[test]
    fn test_sqlite_url() {
        assert_eq!(
            sqlite_url(Path::new("/var/showroom/blobs.db")),
            "sqlite:///var/showroom/blobs.db?mode=rwc"
        );
        assert_eq!(
            sqlite_url(Path::new("C:\\showroom\\blobs.db")),
            "sqlite:///C:/showroom/blobs.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db").join("blobs.db");

        let store = SqliteBlobStore::open(&path).await.unwrap();
        store.put("customers/7/nic.jpg", vec![4, 5]).await.unwrap();
        drop(store);
        assert!(path.exists());

        let reopened = SqliteBlobStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("customers/7/nic.jpg").await.unwrap(),
            Some(vec![4, 5])
        );
    }

    #[tokio::test]
    async fn test_invalid_key_rejected() {
        let store = SqliteBlobStore::in_memory().await.unwrap();
        assert!(matches!(
            store.put("../x", vec![]).await,
            Err(BlobError::InvalidKey(_))
        ));
    }
}
