use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::{validate_iso_date, validate_mobile, validate_nic, ValidationRules};
use crate::system::auth::Capability;

// ============================================================================
// DTO
// ============================================================================
/// Person delivering bikes between showroom locations
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourierDto {
    pub id: Option<i64>,
    pub name: String,
    pub nic: String,
    pub mobile: String,
    pub vehicle_number: Option<String>,
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub document_keys: Vec<String>,
}

impl Resource for CourierDto {
    fn resource_index() -> &'static str {
        "a005"
    }

    fn required_capability() -> Capability {
        Capability::Couriers
    }

    fn collection_name() -> &'static str {
        "couriers"
    }

    fn element_name() -> &'static str {
        "Courier"
    }

    fn list_name() -> &'static str {
        "Couriers"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        ValidationRules::required().validate_string(&self.name, "Courier name")?;
        validate_nic(&self.nic)?;
        validate_mobile(&self.mobile)?;
        validate_iso_date(self.date_of_birth.as_deref(), "Date of birth")
    }
}
