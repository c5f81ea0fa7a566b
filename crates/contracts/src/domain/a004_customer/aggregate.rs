use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::{validate_iso_date, validate_mobile, validate_nic, ValidationRules};
use crate::system::auth::Capability;

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: Option<i64>,
    pub name: String,
    pub nic: String,
    pub mobile: String,
    pub email: Option<String>,
    pub address: Option<String>,
    /// ISO date, pre-filled from the NIC
    pub date_of_birth: Option<String>,
    /// Blob store keys of the uploaded documents (NIC copy, utility bill)
    #[serde(default)]
    pub document_keys: Vec<String>,
}

impl Resource for CustomerDto {
    fn resource_index() -> &'static str {
        "a004"
    }

    fn required_capability() -> Capability {
        Capability::Customers
    }

    fn collection_name() -> &'static str {
        "customers"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        ValidationRules::required().validate_string(&self.name, "Customer name")?;
        validate_nic(&self.nic)?;
        validate_mobile(&self.mobile)?;
        validate_iso_date(self.date_of_birth.as_deref(), "Date of birth")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> CustomerDto {
        CustomerDto {
            name: "Nimal Perera".to_string(),
            nic: "901234567V".to_string(),
            mobile: "0771234567".to_string(),
            date_of_birth: Some("1990-05-02".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_customer() {
        assert!(customer().validate().is_ok());
    }

    #[test]
    fn test_bad_nic_rejected() {
        let dto = CustomerDto {
            nic: "90123".to_string(),
            ..customer()
        };
        assert!(dto.validate().unwrap_err().starts_with("NIC"));
    }

    #[test]
    fn test_bad_mobile_rejected() {
        let dto = CustomerDto {
            mobile: "12345".to_string(),
            ..customer()
        };
        assert!(dto.validate().unwrap_err().starts_with("Mobile"));
    }
}
