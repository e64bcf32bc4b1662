use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::ApiError;

/// HTTP client for the shop backend and the processor-control service.
///
/// The session token, when present, is sent as a bearer token to the shop
/// backend only. Every non-success status is returned as an error; nothing
/// is retried.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base: Url,
    processor: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, processor_url: &str) -> Result<Self, ApiError> {
        let base = parse_base(base_url)?;
        let processor = parse_base(processor_url)?;
        let http = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self {
            http,
            base,
            processor,
            token: None,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("vitrine/", env!("CARGO_PKG_VERSION"))
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(ApiError::Url)
    }

    fn processor_url(&self, path: &str) -> Result<Url, ApiError> {
        self.processor
            .join(path.trim_start_matches('/'))
            .map_err(ApiError::Url)
    }

    fn backend(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let req = self.http.request(method, self.url(path)?);
        Ok(match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.execute(self.backend(Method::GET, path)?).await?;
        Self::decode(resp).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .execute(self.backend(Method::POST, path)?.json(body))
            .await?;
        Self::decode(resp).await
    }

    /// Send `body` and discard whatever the backend answers on success.
    pub(crate) async fn send_json<B>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(self.backend(method, path)?.json(body)).await?;
        Ok(())
    }

    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
        self.execute(self.backend(method, path)?).await?;
        Ok(())
    }

    pub(crate) async fn processor_post(&self, path: &str) -> Result<(), ApiError> {
        let req = self.http.post(self.processor_url(path)?);
        self.execute(req).await?;
        Ok(())
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let resp = self.http.execute(request).await?;
        let status = resp.status();
        debug!(%method, %url, status = status.as_u16(), "backend request");

        if !status.is_success() {
            let body = error_body(resp.text().await);
            warn!(%method, %url, status = status.as_u16(), "backend request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }
}

/// Parse a service root so that relative joins keep any path prefix.
fn parse_base(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// A failed body read still yields text for `ApiError::Status`.
fn error_body(read: Result<String, reqwest::Error>) -> String {
    match read {
        Ok(body) => body,
        Err(err) => {
            debug!(error = %err, "failed to read error response body");
            format!("<unreadable body: {err}>")
        }
    }
}
