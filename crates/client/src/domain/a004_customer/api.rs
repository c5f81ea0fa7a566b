use contracts::domain::a004_customer::aggregate::CustomerDto;
use contracts::shared::paging::{PageRequest, PagedList};

use crate::domain::common::crud;
use crate::shared::api_client::{ApiClient, ApiError};

pub async fn list_customers(
    client: &ApiClient,
    page: PageRequest,
) -> Result<PagedList<CustomerDto>, ApiError> {
    crud::fetch_page(client, page).await
}

pub async fn get_customer(client: &ApiClient, id: i64) -> Result<CustomerDto, ApiError> {
    crud::fetch_by_id(client, id).await
}

pub async fn save_customer(
    client: &ApiClient,
    dto: &CustomerDto,
) -> Result<CustomerDto, ApiError> {
    crud::save(client, dto).await
}

pub async fn update_customer(
    client: &ApiClient,
    dto: &CustomerDto,
) -> Result<CustomerDto, ApiError> {
    crud::update(client, dto).await
}

/// Look up customers by NIC, e.g. to avoid duplicate registrations
pub async fn find_by_nic(client: &ApiClient, nic: &str) -> Result<Vec<CustomerDto>, ApiError> {
    crud::fetch_related(client, "by-nic", &nic.trim().to_ascii_uppercase()).await
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::shared::api_client::test_support::client_for;

    #[tokio::test]
    async fn test_find_by_nic_normalizes_letter_case() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/customers/by-nic/901234567V");
                then.status(200).json_body(json!({
                    "status": true,
                    "responseDto": [{
                        "id": 12,
                        "name": "Nimal Perera",
                        "nic": "901234567V",
                        "mobile": "0771234567",
                        "dateOfBirth": "1990-05-02"
                    }]
                }));
            })
            .await;

        let client = client_for(&server, "CASHIER");
        let found = find_by_nic(&client, " 901234567v ").await.unwrap();

        mock.assert_async().await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].date_of_birth.as_deref(), Some("1990-05-02"));
    }

    #[tokio::test]
    async fn test_dealer_cannot_list_customers() {
        let server = MockServer::start_async().await;
        let client = client_for(&server, "DEALER");
        let err = list_customers(&client, PageRequest::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }
}
