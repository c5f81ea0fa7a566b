use contracts::domain::a008_dealer_consignment::aggregate::DealerConsignmentNoteDto;
use contracts::shared::paging::{PageRequest, PagedList};

use crate::domain::common::crud;
use crate::shared::api_client::{ApiClient, ApiError};

pub async fn list_notes(
    client: &ApiClient,
    page: PageRequest,
) -> Result<PagedList<DealerConsignmentNoteDto>, ApiError> {
    crud::fetch_page(client, page).await
}

pub async fn get_note(client: &ApiClient, id: i64) -> Result<DealerConsignmentNoteDto, ApiError> {
    crud::fetch_by_id(client, id).await
}

pub async fn save_note(
    client: &ApiClient,
    dto: &DealerConsignmentNoteDto,
) -> Result<DealerConsignmentNoteDto, ApiError> {
    crud::save(client, dto).await
}

pub async fn update_note(
    client: &ApiClient,
    dto: &DealerConsignmentNoteDto,
) -> Result<DealerConsignmentNoteDto, ApiError> {
    crud::update(client, dto).await
}

#[cfg(test)]
mod tests {
    use contracts::domain::a008_dealer_consignment::aggregate::ConsignmentLineDto;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::shared::api_client::test_support::client_for;

    #[tokio::test]
    async fn test_save_note_returns_assigned_number() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/dealer-consignment-notes")
                    .json_body_partial(r#"{"dealerName": "Galle Motors"}"#);
                then.status(200).json_body(json!({
                    "status": true,
                    "responseDto": {
                        "id": 40,
                        "noteNumber": "DCN-000040",
                        "dealerName": "Galle Motors",
                        "lines": [{"modelId": 2, "quantity": 3, "unitPrice": 500000.0}]
                    }
                }));
            })
            .await;

        let client = client_for(&server, "DEALER");
        let note = DealerConsignmentNoteDto {
            dealer_name: "Galle Motors".to_string(),
            lines: vec![ConsignmentLineDto {
                model_id: Some(2),
                chassis_number: None,
                quantity: 3,
                unit_price: 500_000.0,
            }],
            ..Default::default()
        };
        let saved = save_note(&client, &note).await.unwrap();

        mock.assert_async().await;
        assert_eq!(saved.note_number.as_deref(), Some("DCN-000040"));
        assert_eq!(saved.total_quantity(), 3);
    }
}
