use super::client::ApiClient;
use super::error::ApiError;

impl ApiClient {
    pub async fn pause_processor(&self) -> Result<(), ApiError> {
        self.processor_post("pause").await
    }

    pub async fn start_processor(&self) -> Result<(), ApiError> {
        self.processor_post("start").await
    }
}
