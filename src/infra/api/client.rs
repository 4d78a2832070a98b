use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::ApiSettings;

use super::error::ApiError;

/// Shared request context for the TaskClass API.
///
/// Holds the base URL, the underlying HTTP client, and an optional bearer
/// token. Cheap to clone; the per-resource clients each wrap one.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let base = Url::parse(&settings.base_url)?.join("/")?;
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(settings.timeout())
            .build()?;
        Ok(Self {
            client,
            base,
            token: None,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("taskclass/", env!("CARGO_PKG_VERSION"))
    }

    /// Attach a bearer token for subsequent privileged calls.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(ApiError::Url)
    }

    fn bearer(token: &str) -> Result<HeaderValue, ApiError> {
        HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|err| ApiError::InvalidInput(err.to_string()))
    }

    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let resp = self.send(method, path, query, body).await?;
        Self::handle(resp).await
    }

    pub(crate) async fn request_unit(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
    ) -> Result<(), ApiError> {
        let resp = self.send(method, path, query, body).await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        let mut url = self.url(path)?;
        if let Some(q) = query {
            url.set_query(None);
            let mut qp = url.query_pairs_mut();
            for (k, v) in q {
                qp.append_pair(k, v);
            }
        }

        let mut req = self.client.request(method, url);
        if let Some(token) = &self.token {
            req = req.header(AUTHORIZATION, Self::bearer(token)?);
        }
        if let Some(b) = body {
            req = req.json(&b);
        }

        Ok(req.send().await?)
    }

    async fn handle<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Err(ApiError::Status { status, body });
        }
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
    }
}
