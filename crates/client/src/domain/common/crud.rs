//! List/get/save/update shared by every resource API module
//!
//! Routes follow `/api/v1/<collection_name>[/<id>]`. Writes are validated
//! client-side first and never reach the backend when validation fails.

use contracts::domain::common::Resource;
use contracts::shared::paging::{PageRequest, PagedList};

use crate::shared::api_client::{ApiClient, ApiError};

fn collection_path<T: Resource>() -> String {
    format!("/{}", T::collection_name())
}

fn element_path<T: Resource>(id: i64) -> String {
    format!("/{}/{}", T::collection_name(), id)
}

/// Log prefix for a resource, e.g. "a001 Categories"
pub fn resource_label<T: Resource>() -> String {
    format!("{} {}", T::resource_index(), T::list_name())
}

/// Fetch one page of records
pub async fn fetch_page<T: Resource>(
    client: &ApiClient,
    page: PageRequest,
) -> Result<PagedList<T>, ApiError> {
    client.require(T::required_capability())?;
    tracing::debug!("{}: page {} size {}", resource_label::<T>(), page.page, page.size);
    client
        .get_query(&collection_path::<T>(), &[("page", page.page), ("size", page.size)])
        .await
}

/// Fetch the whole (small) collection
pub async fn fetch_all<T: Resource>(client: &ApiClient) -> Result<Vec<T>, ApiError> {
    client.require(T::required_capability())?;
    tracing::debug!("{}: all", resource_label::<T>());
    client.get(&collection_path::<T>()).await
}

pub async fn fetch_by_id<T: Resource>(client: &ApiClient, id: i64) -> Result<T, ApiError> {
    client.require(T::required_capability())?;
    client.get(&element_path::<T>(id)).await
}

/// Fetch a sub-collection, e.g. `/models/by-category/3`
pub async fn fetch_related<T: Resource>(
    client: &ApiClient,
    relation: &str,
    key: &str,
) -> Result<Vec<T>, ApiError> {
    client.require(T::required_capability())?;
    let path = format!(
        "/{}/{}/{}",
        T::collection_name(),
        relation,
        urlencoding::encode(key)
    );
    client.get(&path).await
}

/// Create a new record; the backend assigns the id
pub async fn save<T: Resource>(client: &ApiClient, dto: &T) -> Result<T, ApiError> {
    client.require(T::required_capability())?;
    if dto.id().is_some() {
        return Err(ApiError::Validation(format!(
            "{} already exists, use update",
            T::element_name()
        )));
    }
    dto.validate().map_err(ApiError::Validation)?;

    let saved: T = client.post(&collection_path::<T>(), dto).await?;
    tracing::info!(
        "{}: saved {} id={:?}",
        resource_label::<T>(),
        T::element_name(),
        saved.id()
    );
    Ok(saved)
}

/// Update an existing record
pub async fn update<T: Resource>(client: &ApiClient, dto: &T) -> Result<T, ApiError> {
    client.require(T::required_capability())?;
    let id = dto.id().ok_or_else(|| {
        ApiError::Validation(format!("{} has no id, use save", T::element_name()))
    })?;
    dto.validate().map_err(ApiError::Validation)?;

    let updated: T = client.put(&element_path::<T>(id), dto).await?;
    tracing::info!(
        "{}: updated {} id={}",
        resource_label::<T>(),
        T::element_name(),
        id
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use contracts::domain::a001_category::aggregate::CategoryDto;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::shared::api_client::test_support::client_for;

    #[tokio::test]
    async fn test_fetch_page_sends_paging_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/categories")
                    .query_param("page", "2")
                    .query_param("size", "10");
                then.status(200).json_body(json!({
                    "status": true,
                    "responseDto": {
                        "items": [{"id": 1, "name": "Scooters"}],
                        "totalCount": 21,
                        "page": 2,
                        "size": 10
                    }
                }));
            })
            .await;

        let client = client_for(&server, "CASHIER");
        let page: PagedList<CategoryDto> = fetch_page(&client, PageRequest::new(2, 10))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(page.items[0].name, "Scooters");
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_resource_label() {
        use contracts::domain::a008_dealer_consignment::aggregate::DealerConsignmentNoteDto;

        assert_eq!(resource_label::<CategoryDto>(), "a001 Categories");
        assert!(resource_label::<DealerConsignmentNoteDto>().starts_with("a008 "));
    }

    #[tokio::test]
    async fn test_invalid_dto_never_sent() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/categories");
                then.status(200);
            })
            .await;

        let client = client_for(&server, "ADMIN");
        let err = save(&client, &CategoryDto::default()).await.unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_update_requires_id() {
        let server = MockServer::start_async().await;
        let client = client_for(&server, "ADMIN");
        let dto = CategoryDto {
            name: "Scooters".to_string(),
            ..Default::default()
        };
        let err = update(&client, &dto).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Category has no id, use save"
        );
    }

    #[tokio::test]
    async fn test_update_puts_to_element_path() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/v1/categories/5")
                    .json_body_partial(r#"{"id": 5, "name": "Motorbikes"}"#);
                then.status(200).json_body(json!({
                    "status": true,
                    "responseDto": {"id": 5, "name": "Motorbikes", "isActive": true}
                }));
            })
            .await;

        let client = client_for(&server, "ADMIN");
        let dto = CategoryDto {
            id: Some(5),
            name: "Motorbikes".to_string(),
            ..Default::default()
        };
        let updated = update(&client, &dto).await.unwrap();

        mock.assert_async().await;
        assert_eq!(updated.id, Some(5));
    }
}
