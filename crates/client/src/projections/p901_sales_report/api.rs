use contracts::projections::p901_sales_report::dto::{SalesReportRequest, SalesReportResponse};
use contracts::shared::validation::validate_iso_date;
use contracts::system::auth::Capability;

use crate::shared::api_client::{ApiClient, ApiError};

/// Fetch invoiced sales between two dates (inclusive)
pub async fn sales_report(
    client: &ApiClient,
    request: &SalesReportRequest,
) -> Result<SalesReportResponse, ApiError> {
    client.require(Capability::Reports)?;
    validate_iso_date(Some(&request.date_from), "From date").map_err(ApiError::Validation)?;
    validate_iso_date(Some(&request.date_to), "To date").map_err(ApiError::Validation)?;
    if request.date_from > request.date_to {
        return Err(ApiError::Validation(
            "From date must not be after to date".to_string(),
        ));
    }

    client.get_query("/reports/sales", request).await
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::shared::api_client::test_support::client_for;

    #[tokio::test]
    async fn test_sales_report_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/reports/sales")
                    .query_param("dateFrom", "2024-01-01")
                    .query_param("dateTo", "2024-01-31");
                then.status(200).json_body(json!({
                    "status": true,
                    "responseDto": {
                        "rows": [{
                            "invoiceNumber": "INV-1001",
                            "saleDate": "2024-01-05",
                            "customerName": "Nimal Perera",
                            "customerNic": "901234567V",
                            "modelName": "Pulsar 150",
                            "chassisNumber": "MD2A11CZ",
                            "amount": 745000.0,
                            "paid": 500000.0
                        }],
                        "totalAmount": 745000.0,
                        "totalPaid": 500000.0
                    }
                }));
            })
            .await;

        let client = client_for(&server, "MANAGER");
        let request = SalesReportRequest {
            date_from: "2024-01-01".to_string(),
            date_to: "2024-01-31".to_string(),
            category_id: None,
        };
        let report = sales_report(&client, &request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].balance(), 245000.0);
    }

    #[tokio::test]
    async fn test_reversed_range_rejected() {
        let server = MockServer::start_async().await;
        let client = client_for(&server, "ADMIN");
        let request = SalesReportRequest {
            date_from: "2024-02-01".to_string(),
            date_to: "2024-01-01".to_string(),
            category_id: None,
        };
        assert!(matches!(
            sales_report(&client, &request).await,
            Err(ApiError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_cashier_has_no_reports() {
        let server = MockServer::start_async().await;
        let client = client_for(&server, "CASHIER");
        let request = SalesReportRequest {
            date_from: "2024-01-01".to_string(),
            date_to: "2024-01-31".to_string(),
            category_id: None,
        };
        assert!(matches!(
            sales_report(&client, &request).await,
            Err(ApiError::Forbidden(Capability::Reports))
        ));
    }
}
