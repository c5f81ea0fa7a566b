use serde::{Deserialize, Serialize};

/// Stock on hand per model and location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockReportRow {
    pub model_name: String,
    pub category_name: String,
    pub location: String,
    pub available: u32,
    pub reserved: u32,
    pub in_transit: u32,
    pub consigned: u32,
}

impl StockReportRow {
    pub fn on_hand(&self) -> u32 {
        self.available + self.reserved
    }
}
