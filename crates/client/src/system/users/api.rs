use contracts::system::users::UserDto;

use crate::domain::common::crud;
use crate::shared::api_client::{ApiClient, ApiError};

/// Fetch all users
pub async fn list_users(client: &ApiClient) -> Result<Vec<UserDto>, ApiError> {
    crud::fetch_all(client).await
}

pub async fn get_user(client: &ApiClient, id: i64) -> Result<UserDto, ApiError> {
    crud::fetch_by_id(client, id).await
}

/// Create new user
pub async fn save_user(client: &ApiClient, dto: &UserDto) -> Result<UserDto, ApiError> {
    crud::save(client, dto).await
}

/// Update user; the password is only sent when set
pub async fn update_user(client: &ApiClient, dto: &UserDto) -> Result<UserDto, ApiError> {
    crud::update(client, dto).await
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::shared::api_client::test_support::client_for;

    #[tokio::test]
    async fn test_only_admin_manages_users() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/users");
                then.status(200).json_body(json!({
                    "status": true,
                    "responseDto": [
                        {"id": 1, "username": "admin", "role": "ADMIN", "adminActive": true}
                    ]
                }));
            })
            .await;

        let manager = client_for(&server, "MANAGER");
        assert!(matches!(
            list_users(&manager).await,
            Err(ApiError::Forbidden(_))
        ));
        mock.assert_hits_async(0).await;

        let admin = client_for(&server, "ADMIN");
        let users = list_users(&admin).await.unwrap();
        assert_eq!(users[0].username, "admin");
        mock.assert_hits_async(1).await;
    }
}
