//! Customer document uploads (NIC copy, utility bill, signed invoice)

use contracts::domain::a004_customer::aggregate::CustomerDto;

use crate::shared::blob_store::{content_key, BlobError, BlobStore};

/// Folder for a customer's documents; unsaved customers share a staging folder
pub fn document_folder(customer_id: Option<i64>) -> String {
    match customer_id {
        Some(id) => format!("customers/{}", id),
        None => "customers/pending".to_string(),
    }
}

/// Store one uploaded file and return its key
pub async fn upload_document(
    store: &dyn BlobStore,
    customer_id: Option<i64>,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<String, BlobError> {
    let key = content_key(&document_folder(customer_id), file_name, &bytes);
    let size = bytes.len();
    let key = store.put(&key, bytes).await?;
    tracing::info!("Uploaded customer document {} ({} bytes)", key, size);
    Ok(key)
}

/// Upload and record the key on the DTO (identical content is recorded once)
pub async fn attach_document(
    store: &dyn BlobStore,
    customer: &mut CustomerDto,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<String, BlobError> {
    let key = upload_document(store, customer.id, file_name, bytes).await?;
    if !customer.document_keys.contains(&key) {
        customer.document_keys.push(key.clone());
    }
    Ok(key)
}

/// Remove a document from the store and from the DTO
pub async fn detach_document(
    store: &dyn BlobStore,
    customer: &mut CustomerDto,
    key: &str,
) -> Result<bool, BlobError> {
    customer.document_keys.retain(|k| k != key);
    store.delete(key).await
}
