use contracts::domain::a005_courier::aggregate::CourierDto;
use contracts::shared::paging::{PageRequest, PagedList};

use crate::domain::common::crud;
use crate::shared::api_client::{ApiClient, ApiError};

pub async fn list_couriers(
    client: &ApiClient,
    page: PageRequest,
) -> Result<PagedList<CourierDto>, ApiError> {
    crud::fetch_page(client, page).await
}

pub async fn get_courier(client: &ApiClient, id: i64) -> Result<CourierDto, ApiError> {
    crud::fetch_by_id(client, id).await
}

pub async fn save_courier(client: &ApiClient, dto: &CourierDto) -> Result<CourierDto, ApiError> {
    crud::save(client, dto).await
}

pub async fn update_courier(client: &ApiClient, dto: &CourierDto) -> Result<CourierDto, ApiError> {
    crud::update(client, dto).await
}
