//! HTTP client for the showroom REST backend
//!
//! Every endpoint answers with the [`ApiResponse`] envelope; the helpers
//! here attach the bearer token of the injected [`Session`], unwrap the
//! envelope and hand back `responseDto`.

use std::sync::Arc;
use std::time::Duration;

use contracts::shared::envelope::{ApiResponse, EnvelopeError};
use contracts::system::auth::{Capabilities, Capability};
use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::shared::config::ApiConfig;
use crate::system::auth::session::Session;

/// Prefix of every backend route
pub const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Access denied: {0:?} is not granted to this session")]
    Forbidden(Capability),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Error code reported by the backend, if the failure came from the envelope
    pub fn backend_code(&self) -> Option<&str> {
        match self {
            ApiError::Envelope(EnvelopeError::Backend { code, .. }) => Some(code),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<Arc<Session>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            session: None,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// Same connection pool, authenticated as `session`
    pub fn with_session(&self, session: Session) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            session: Some(Arc::new(session)),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn capabilities(&self) -> Capabilities {
        self.session
            .as_ref()
            .map(|s| s.capabilities().clone())
            .unwrap_or_else(Capabilities::anonymous)
    }

    /// Fails without I/O when the session lacks `capability`
    pub fn require(&self, capability: Capability) -> Result<(), ApiError> {
        let session = self.session().ok_or(ApiError::NotAuthenticated)?;
        if session.capabilities().has(capability) {
            Ok(())
        } else {
            Err(ApiError::Forbidden(capability))
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let session = self.session().ok_or(ApiError::NotAuthenticated)?;
        Ok(self
            .http
            .request(method, self.url(path))
            .bearer_auth(&session.access_token)
            .header("Accept", "application/json"))
    }

    /// Send and parse the envelope; the envelope may carry an error even on non-2xx
    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<ApiResponse<T>, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ApiResponse<T>>(&body) {
            Ok(envelope) => {
                if !envelope.status {
                    tracing::warn!(
                        "Backend error {}: {}",
                        envelope.error_code.as_deref().unwrap_or("UNKNOWN"),
                        envelope.error_description.as_deref().unwrap_or_default()
                    );
                }
                Ok(envelope)
            }
            Err(_) if !status.is_success() => {
                tracing::error!("Request failed with HTTP {}: {}", status, body);
                Err(ApiError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
            Err(e) => {
                let preview: String = body.chars().take(500).collect();
                tracing::error!("Failed to parse response envelope: {}. Body: {}", e, preview);
                Err(ApiError::Decode(e))
            }
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", path);
        let builder = self.request(Method::GET, path)?;
        Ok(self.send::<T>(builder).await?.into_result()?)
    }

    pub async fn get_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("GET {} (with query)", path);
        let builder = self.request(Method::GET, path)?.query(query);
        Ok(self.send::<T>(builder).await?.into_result()?)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {}", path);
        let builder = self.request(Method::POST, path)?.json(body);
        Ok(self.send::<T>(builder).await?.into_result()?)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("PUT {}", path);
        let builder = self.request(Method::PUT, path)?.json(body);
        Ok(self.send::<T>(builder).await?.into_result()?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        tracing::debug!("DELETE {}", path);
        let builder = self.request(Method::DELETE, path)?;
        self.send::<serde_json::Value>(builder)
            .await?
            .into_optional()?;
        Ok(())
    }

    /// POST without a bearer token (login)
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {} (public)", path);
        let builder = self
            .http
            .post(self.url(path))
            .header("Accept", "application/json")
            .json(body);
        Ok(self.send::<T>(builder).await?.into_result()?)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use contracts::system::auth::UserInfo;

    use super::*;

    pub fn session_for(role: &str) -> Session {
        Session::new(
            "test-token",
            UserInfo {
                id: 1,
                username: "tester".to_string(),
                role: role.to_string(),
                admin_active: true,
                manager_active: true,
                ..Default::default()
            },
        )
    }

    pub fn client_for(server: &httpmock::MockServer, role: &str) -> ApiClient {
        ApiClient::new(server.base_url(), Duration::from_secs(5))
            .unwrap()
            .with_session(session_for(role))
    }
}
