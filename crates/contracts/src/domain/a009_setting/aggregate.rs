use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::ValidationRules;
use crate::system::auth::Capability;

// ============================================================================
// DTO
// ============================================================================
/// Key/value application setting (showroom name, invoice prefix, VAT rate)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingDto {
    pub id: Option<i64>,
    pub key: String,
    pub value: String,
    pub description: Option<String>,
}

impl SettingDto {
    pub fn value_as<T: std::str::FromStr>(&self) -> Option<T> {
        self.value.trim().parse().ok()
    }
}

impl Resource for SettingDto {
    fn resource_index() -> &'static str {
        "a009"
    }

    fn required_capability() -> Capability {
        Capability::Settings
    }

    fn collection_name() -> &'static str {
        "settings"
    }

    fn element_name() -> &'static str {
        "Setting"
    }

    fn list_name() -> &'static str {
        "Settings"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        ValidationRules::required()
            .with_max_length(64)
            .validate_string(&self.key, "Setting key")
    }
}
