use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use super::session::Session;
use crate::shared::api_client::{ApiClient, ApiError};

/// Login with username and password, returning an authenticated client
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<ApiClient, ApiError> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response: LoginResponse = client.post_public("/auth/login", &request).await?;
    tracing::info!(
        "Logged in as {} (role {})",
        response.user.username,
        response.user.role
    );

    Ok(client.with_session(Session::new(response.access_token, response.user)))
}

/// Restore a session from a stored token by asking the backend who it belongs to
pub async fn restore_session(
    client: &ApiClient,
    access_token: &str,
) -> Result<ApiClient, ApiError> {
    let lookup = client.with_session(Session::new(access_token, UserInfo::default()));
    let user = current_user(&lookup).await?;
    Ok(client.with_session(Session::new(access_token, user)))
}

/// Get current user info
pub async fn current_user(client: &ApiClient) -> Result<UserInfo, ApiError> {
    client.get("/auth/me").await
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use contracts::system::auth::Capability;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_login_builds_session() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/auth/login")
                    .json_body(json!({"username": "kamal", "password": "pw123456"}));
                then.status(200).json_body(json!({
                    "status": true,
                    "responseDto": {
                        "accessToken": "tok-1",
                        "user": {
                            "id": 3,
                            "username": "kamal",
                            "role": "MANAGER",
                            "managerActive": true
                        }
                    }
                }));
            })
            .await;

        let anonymous = ApiClient::new(server.base_url(), Duration::from_secs(5)).unwrap();
        let client = login(&anonymous, "kamal", "pw123456").await.unwrap();

        mock.assert_async().await;
        let session = client.session().unwrap();
        assert_eq!(session.access_token, "tok-1");
        assert!(session.capabilities().has(Capability::Reports));
        assert!(!session.capabilities().has(Capability::Settings));
        assert!(anonymous.session().is_none());
    }

    #[tokio::test]
    async fn test_restore_session_uses_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/auth/me")
                    .header("Authorization", "Bearer stored");
                then.status(200).json_body(json!({
                    "status": true,
                    "responseDto": {
                        "id": 1,
                        "username": "admin",
                        "role": "ADMIN",
                        "adminActive": true
                    }
                }));
            })
            .await;

        let anonymous = ApiClient::new(server.base_url(), Duration::from_secs(5)).unwrap();
        let client = restore_session(&anonymous, "stored").await.unwrap();
        assert!(client.capabilities().has(Capability::Users));
    }

    #[tokio::test]
    async fn test_bad_credentials() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/auth/login");
                then.status(401).json_body(json!({
                    "status": false,
                    "errorCode": "AUTH-001",
                    "errorDescription": "Invalid username or password"
                }));
            })
            .await;

        let anonymous = ApiClient::new(server.base_url(), Duration::from_secs(5)).unwrap();
        let err = login(&anonymous, "kamal", "wrong").await.unwrap_err();
        assert_eq!(err.backend_code(), Some("AUTH-001"));
    }
}
