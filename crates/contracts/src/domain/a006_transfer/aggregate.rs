use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::{validate_iso_date, validate_reference, ValidationRules};
use crate::system::auth::Capability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    #[default]
    Pending,
    Dispatched,
    Received,
    Cancelled,
}

// ============================================================================
// DTO
// ============================================================================
/// Movement of one stock item between locations
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferDto {
    pub id: Option<i64>,
    pub stock_id: Option<i64>,
    pub from_location: String,
    pub to_location: String,
    pub courier_id: Option<i64>,
    pub transfer_date: Option<String>,
    #[serde(default)]
    pub status: TransferStatus,
    pub remarks: Option<String>,
}

impl Resource for TransferDto {
    fn resource_index() -> &'static str {
        "a006"
    }

    fn required_capability() -> Capability {
        Capability::Transfers
    }

    fn collection_name() -> &'static str {
        "transfers"
    }

    fn element_name() -> &'static str {
        "Transfer"
    }

    fn list_name() -> &'static str {
        "Transfers"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        validate_reference(self.stock_id, "Stock item")?;
        ValidationRules::required().validate_string(&self.from_location, "From location")?;
        ValidationRules::required().validate_string(&self.to_location, "To location")?;
        if self.from_location.trim().eq_ignore_ascii_case(self.to_location.trim()) {
            return Err("From and to locations must differ".to_string());
        }
        validate_iso_date(self.transfer_date.as_deref(), "Transfer date")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_location_rejected() {
        let dto = TransferDto {
            stock_id: Some(9),
            from_location: "Kandy".to_string(),
            to_location: "kandy ".to_string(),
            ..Default::default()
        };
        assert_eq!(dto.validate().unwrap_err(), "From and to locations must differ");
    }

    #[test]
    fn test_valid_transfer() {
        let dto = TransferDto {
            stock_id: Some(9),
            from_location: "Kandy".to_string(),
            to_location: "Colombo".to_string(),
            transfer_date: Some("2024-03-15".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
