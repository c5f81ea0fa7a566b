use contracts::domain::a003_stock::aggregate::StockDto;
use contracts::shared::paging::{PageRequest, PagedList};

use crate::domain::common::crud;
use crate::shared::api_client::{ApiClient, ApiError};

pub async fn list_stock(
    client: &ApiClient,
    page: PageRequest,
) -> Result<PagedList<StockDto>, ApiError> {
    crud::fetch_page(client, page).await
}

pub async fn get_stock(client: &ApiClient, id: i64) -> Result<StockDto, ApiError> {
    crud::fetch_by_id(client, id).await
}

pub async fn save_stock(client: &ApiClient, dto: &StockDto) -> Result<StockDto, ApiError> {
    crud::save(client, dto).await
}

pub async fn update_stock(client: &ApiClient, dto: &StockDto) -> Result<StockDto, ApiError> {
    crud::update(client, dto).await
}

/// Look up a unit by chassis number
pub async fn find_by_chassis(
    client: &ApiClient,
    chassis_number: &str,
) -> Result<Vec<StockDto>, ApiError> {
    crud::fetch_related(client, "by-chassis", chassis_number.trim()).await
}
