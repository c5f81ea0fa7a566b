use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::ValidationRules;
use crate::system::auth::Capability;

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Resource for CategoryDto {
    fn resource_index() -> &'static str {
        "a001"
    }

    fn required_capability() -> Capability {
        Capability::Catalog
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        ValidationRules::required()
            .with_max_length(100)
            .validate_string(&self.name, "Category name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_active_flag_defaults_to_true() {
        let dto: CategoryDto = serde_json::from_str(r#"{"id":3,"name":"Scooters"}"#).unwrap();
        assert!(dto.is_active);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let dto = CategoryDto {
            name: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(dto.validate().unwrap_err(), "Category name is required");
    }
}
