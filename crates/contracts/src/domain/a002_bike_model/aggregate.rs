use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::{validate_reference, ValidationRules};
use crate::system::auth::Capability;

// ============================================================================
// DTO
// ============================================================================
/// Bike model offered in the showroom catalog
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BikeModelDto {
    pub id: Option<i64>,
    pub category_id: Option<i64>,
    pub name: String,
    pub brand: Option<String>,
    /// Engine displacement, cc
    pub engine_capacity: Option<u32>,
    pub colors: Vec<String>,
    pub price: f64,
    pub image_key: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for BikeModelDto {
    fn resource_index() -> &'static str {
        "a002"
    }

    fn required_capability() -> Capability {
        Capability::Catalog
    }

    fn collection_name() -> &'static str {
        "models"
    }

    fn element_name() -> &'static str {
        "Model"
    }

    fn list_name() -> &'static str {
        "Models"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        ValidationRules::required().validate_string(&self.name, "Model name")?;
        validate_reference(self.category_id, "Category")?;
        ValidationRules::positive().validate_number(self.price, "Price")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> BikeModelDto {
        BikeModelDto {
            category_id: Some(1),
            name: "Pulsar 150".to_string(),
            price: 745_000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_model() {
        assert!(model().validate().is_ok());
    }

    #[test]
    fn test_category_required() {
        let dto = BikeModelDto {
            category_id: None,
            ..model()
        };
        assert_eq!(dto.validate().unwrap_err(), "Category must be selected");
    }

    #[test]
    fn test_price_must_be_positive() {
        let dto = BikeModelDto {
            price: 0.0,
            ..model()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_nan_price_rejected() {
        let dto = BikeModelDto {
            price: f64::NAN,
            ..model()
        };
        assert_eq!(dto.validate().unwrap_err(), "Price must be a number");
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = serde_json::to_value(model()).unwrap();
        assert_eq!(json["categoryId"], 1);
        assert!(json.get("engineCapacity").is_some());
    }
}
