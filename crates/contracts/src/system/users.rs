use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::ValidationRules;
use crate::system::auth::Capability;

/// Back-office user account
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Option<i64>,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: String,
    /// Only sent on create or password change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub admin_active: bool,
    #[serde(default)]
    pub manager_active: bool,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for UserDto {
    fn resource_index() -> &'static str {
        "a010"
    }

    fn required_capability() -> Capability {
        Capability::Users
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        ValidationRules::required()
            .with_min_length(3)
            .with_max_length(50)
            .validate_string(&self.username, "Username")?;
        ValidationRules::required().validate_string(&self.role, "Role")?;

        match (&self.password, self.id) {
            (Some(password), _) => ValidationRules::required()
                .with_min_length(6)
                .validate_string(password, "Password"),
            (None, None) => Err("Password is required".to_string()),
            (None, Some(_)) => Ok(()),
        }
    }
}
