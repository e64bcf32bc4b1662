use vitrine_api_types::{LoginRequest, LoginResponse};

use super::client::ApiClient;
use super::error::ApiError;

impl ApiClient {
    /// `POST /login`. The token is returned, not installed.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("login", credentials).await
    }
}
