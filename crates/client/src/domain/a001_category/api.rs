use contracts::domain::a001_category::aggregate::CategoryDto;

use crate::domain::common::crud;
use crate::shared::api_client::{ApiClient, ApiError};

pub async fn list_categories(client: &ApiClient) -> Result<Vec<CategoryDto>, ApiError> {
    crud::fetch_all(client).await
}

pub async fn get_category(client: &ApiClient, id: i64) -> Result<CategoryDto, ApiError> {
    crud::fetch_by_id(client, id).await
}

pub async fn save_category(
    client: &ApiClient,
    dto: &CategoryDto,
) -> Result<CategoryDto, ApiError> {
    crud::save(client, dto).await
}

pub async fn update_category(
    client: &ApiClient,
    dto: &CategoryDto,
) -> Result<CategoryDto, ApiError> {
    crud::update(client, dto).await
}
