//! Authentication endpoint client.

use reqwest::Method;
use taskclass_api_types::{LoginRequest, LoginResponse};

use crate::application::session::Session;

use super::client::ApiClient;
use super::error::ApiError;
use super::to_body;

#[derive(Clone, Debug)]
pub struct AuthApi {
    ctx: ApiClient,
}

impl AuthApi {
    pub fn new(ctx: ApiClient) -> Self {
        Self { ctx }
    }

    /// Exchange credentials for a session. The remote answers with
    /// `{access_token, role}`; nothing is persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let req = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp: LoginResponse = self
            .ctx
            .request(Method::POST, "auth/login", None, Some(to_body(&req)?))
            .await?;
        Ok(Session::authenticated(resp.access_token, resp.role))
    }
}
