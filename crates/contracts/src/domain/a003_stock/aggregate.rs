use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::{validate_iso_date, validate_reference, ValidationRules};
use crate::system::auth::Capability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    #[default]
    Available,
    Reserved,
    InTransit,
    Consigned,
    Sold,
}

impl StockStatus {
    /// Units in these states can still be sold or transferred
    pub fn is_on_hand(&self) -> bool {
        matches!(self, StockStatus::Available | StockStatus::Reserved)
    }
}

// ============================================================================
// DTO
// ============================================================================
/// A single physical bike identified by its chassis number
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockDto {
    pub id: Option<i64>,
    pub model_id: Option<i64>,
    pub chassis_number: String,
    pub engine_number: String,
    pub color: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub status: StockStatus,
    pub received_date: Option<String>,
}

impl Resource for StockDto {
    fn resource_index() -> &'static str {
        "a003"
    }

    fn required_capability() -> Capability {
        Capability::Stock
    }

    fn collection_name() -> &'static str {
        "stock"
    }

    fn element_name() -> &'static str {
        "Stock item"
    }

    fn list_name() -> &'static str {
        "Stock"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        validate_reference(self.model_id, "Model")?;
        ValidationRules::required().validate_string(&self.chassis_number, "Chassis number")?;
        ValidationRules::required().validate_string(&self.engine_number, "Engine number")?;
        validate_iso_date(self.received_date.as_deref(), "Received date")
    }
}
