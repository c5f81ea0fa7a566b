pub mod capabilities;

use serde::{Deserialize, Serialize};

pub use capabilities::{Capabilities, Capability, Role};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

/// Authenticated user as reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
    /// Role string, e.g. "ADMIN", "MANAGER", "CASHIER", "DEALER"
    pub role: String,
    #[serde(default)]
    pub admin_active: bool,
    #[serde(default)]
    pub manager_active: bool,
}
