use contracts::domain::a006_transfer::aggregate::TransferDto;
use contracts::shared::paging::{PageRequest, PagedList};

use crate::domain::common::crud;
use crate::shared::api_client::{ApiClient, ApiError};

pub async fn list_transfers(
    client: &ApiClient,
    page: PageRequest,
) -> Result<PagedList<TransferDto>, ApiError> {
    crud::fetch_page(client, page).await
}

pub async fn get_transfer(client: &ApiClient, id: i64) -> Result<TransferDto, ApiError> {
    crud::fetch_by_id(client, id).await
}

pub async fn save_transfer(
    client: &ApiClient,
    dto: &TransferDto,
) -> Result<TransferDto, ApiError> {
    crud::save(client, dto).await
}

pub async fn update_transfer(
    client: &ApiClient,
    dto: &TransferDto,
) -> Result<TransferDto, ApiError> {
    crud::update(client, dto).await
}
