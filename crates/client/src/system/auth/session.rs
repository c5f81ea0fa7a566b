use contracts::system::auth::{Capabilities, UserInfo};

/// Credentials of a logged-in user, injected into [`crate::shared::api_client::ApiClient`]
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user: UserInfo,
    capabilities: Capabilities,
}

impl Session {
    /// Capabilities are evaluated here once and never change for this session
    pub fn new(access_token: impl Into<String>, user: UserInfo) -> Self {
        let capabilities = Capabilities::for_user(&user);
        Self {
            access_token: access_token.into(),
            user,
            capabilities,
        }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}
