use serde::{Deserialize, Serialize};

/// Request for the sales (invoice) report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportRequest {
    pub date_from: String, // "YYYY-MM-DD"
    pub date_to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// One invoiced sale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportRow {
    pub invoice_number: String,
    pub sale_date: String,
    pub customer_name: String,
    pub customer_nic: String,
    pub model_name: String,
    pub chassis_number: String,
    pub amount: f64,
    pub paid: f64,
}

impl SalesReportRow {
    pub fn balance(&self) -> f64 {
        self.amount - self.paid
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportResponse {
    pub rows: Vec<SalesReportRow>,
    pub total_amount: f64,
    pub total_paid: f64,
}
