use contracts::projections::p902_stock_report::dto::StockReportRow;
use contracts::system::auth::Capability;

use crate::shared::api_client::{ApiClient, ApiError};

/// Stock on hand grouped by model and location
pub async fn stock_report(client: &ApiClient) -> Result<Vec<StockReportRow>, ApiError> {
    client.require(Capability::Reports)?;
    client.get("/reports/stock").await
}
