//! Teachers resource client.
//!
//! Account list endpoints wrap their results in a page envelope
//! (`{items, total, page, limit, totalPages}`); `list` surfaces the
//! envelope metadata, while the `ResourceSource` impl flattens it for the
//! list synchronizer.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use taskclass_api_types::{
    AccountCreateRequest, AccountResponse, AccountUpdateRequest, PageEnvelope,
};

use crate::application::lists::{PageWindow, ResourceSource, SourceError};
use crate::domain::Teacher;

use super::client::ApiClient;
use super::error::ApiError;
use super::{collect_valid, to_body};

/// Normalized account page with the envelope metadata preserved.
#[derive(Debug, Clone, Serialize)]
pub struct AccountPage<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> AccountPage<T> {
    pub(crate) fn from_envelope<R>(
        envelope: PageEnvelope<R>,
        kind: &'static str,
        convert: impl Fn(R) -> Option<T>,
    ) -> Self {
        Self {
            items: collect_valid(envelope.items, kind, convert),
            total: envelope.total,
            page: envelope.page,
            limit: envelope.limit,
            total_pages: envelope.total_pages,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TeachersApi {
    ctx: ApiClient,
}

impl TeachersApi {
    pub fn new(ctx: ApiClient) -> Self {
        Self { ctx }
    }

    pub async fn list(&self, limit: u32, page: u32) -> Result<AccountPage<Teacher>, ApiError> {
        let query = [("limit", limit.to_string()), ("page", page.to_string())];
        let raw: PageEnvelope<AccountResponse> = self
            .ctx
            .request(Method::GET, "teachers", Some(&query), None)
            .await?;
        Ok(AccountPage::from_envelope(raw, "teacher", Teacher::from_response))
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Teacher>, ApiError> {
        let query = [("search", term.to_string())];
        let raw: Vec<AccountResponse> = self
            .ctx
            .request(Method::GET, "teachers/search", Some(&query), None)
            .await?;
        Ok(collect_valid(raw, "teacher", Teacher::from_response))
    }

    pub async fn create(&self, req: &AccountCreateRequest) -> Result<Teacher, ApiError> {
        let raw: AccountResponse = self
            .ctx
            .request(Method::POST, "teachers", None, Some(to_body(req)?))
            .await?;
        Teacher::from_response(raw)
            .ok_or_else(|| ApiError::Decode("created teacher came back without identifier".into()))
    }

    pub async fn update(&self, id: &str, req: &AccountUpdateRequest) -> Result<Teacher, ApiError> {
        let path = format!("teachers/{id}");
        let raw: AccountResponse = self
            .ctx
            .request(Method::PUT, &path, None, Some(to_body(req)?))
            .await?;
        Teacher::from_response(raw)
            .ok_or_else(|| ApiError::Decode("updated teacher came back without identifier".into()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("teachers/{id}");
        self.ctx.request_unit(Method::DELETE, &path, None, None).await
    }
}

#[async_trait]
impl ResourceSource for TeachersApi {
    type Item = Teacher;

    async fn fetch_page(&self, window: PageWindow) -> Result<Vec<Teacher>, SourceError> {
        self.list(window.limit, window.page)
            .await
            .map(|page| page.items)
            .map_err(SourceError::from)
    }

    async fn search(&self, query: &str) -> Result<Vec<Teacher>, SourceError> {
        TeachersApi::search(self, query)
            .await
            .map_err(SourceError::from)
    }

    async fn delete(&self, id: &str) -> Result<(), SourceError> {
        TeachersApi::delete(self, id).await.map_err(SourceError::from)
    }
}
