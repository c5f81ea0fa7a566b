use contracts::domain::a007_payment::aggregate::PaymentDto;
use contracts::shared::paging::{PageRequest, PagedList};

use crate::domain::common::crud;
use crate::shared::api_client::{ApiClient, ApiError};

pub async fn list_payments(
    client: &ApiClient,
    page: PageRequest,
) -> Result<PagedList<PaymentDto>, ApiError> {
    crud::fetch_page(client, page).await
}

pub async fn get_payment(client: &ApiClient, id: i64) -> Result<PaymentDto, ApiError> {
    crud::fetch_by_id(client, id).await
}

pub async fn save_payment(client: &ApiClient, dto: &PaymentDto) -> Result<PaymentDto, ApiError> {
    crud::save(client, dto).await
}

pub async fn update_payment(client: &ApiClient, dto: &PaymentDto) -> Result<PaymentDto, ApiError> {
    crud::update(client, dto).await
}

/// Payments made by one customer
pub async fn list_payments_by_customer(
    client: &ApiClient,
    customer_id: i64,
) -> Result<Vec<PaymentDto>, ApiError> {
    crud::fetch_related(client, "by-customer", &customer_id.to_string()).await
}
