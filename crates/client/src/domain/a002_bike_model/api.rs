use contracts::domain::a002_bike_model::aggregate::BikeModelDto;
use contracts::shared::paging::{PageRequest, PagedList};

use crate::domain::common::crud;
use crate::shared::api_client::{ApiClient, ApiError};

pub async fn list_models(
    client: &ApiClient,
    page: PageRequest,
) -> Result<PagedList<BikeModelDto>, ApiError> {
    crud::fetch_page(client, page).await
}

pub async fn get_model(client: &ApiClient, id: i64) -> Result<BikeModelDto, ApiError> {
    crud::fetch_by_id(client, id).await
}

pub async fn save_model(client: &ApiClient, dto: &BikeModelDto) -> Result<BikeModelDto, ApiError> {
    crud::save(client, dto).await
}

pub async fn update_model(
    client: &ApiClient,
    dto: &BikeModelDto,
) -> Result<BikeModelDto, ApiError> {
    crud::update(client, dto).await
}

/// Models of one category, for the catalog browser
pub async fn list_models_by_category(
    client: &ApiClient,
    category_id: i64,
) -> Result<Vec<BikeModelDto>, ApiError> {
    crud::fetch_related(client, "by-category", &category_id.to_string()).await
}
