//! Students resource client. Same wire shapes as teachers, different path.

use async_trait::async_trait;
use reqwest::Method;
use taskclass_api_types::{
    AccountCreateRequest, AccountResponse, AccountUpdateRequest, PageEnvelope,
};

use crate::application::lists::{PageWindow, ResourceSource, SourceError};
use crate::domain::Student;

use super::client::ApiClient;
use super::error::ApiError;
use super::teachers::AccountPage;
use super::{collect_valid, to_body};

#[derive(Clone, Debug)]
pub struct StudentsApi {
    ctx: ApiClient,
}

impl StudentsApi {
    pub fn new(ctx: ApiClient) -> Self {
        Self { ctx }
    }

    pub async fn list(&self, limit: u32, page: u32) -> Result<AccountPage<Student>, ApiError> {
        let query = [("limit", limit.to_string()), ("page", page.to_string())];
        let raw: PageEnvelope<AccountResponse> = self
            .ctx
            .request(Method::GET, "students", Some(&query), None)
            .await?;
        Ok(AccountPage::from_envelope(raw, "student", Student::from_response))
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Student>, ApiError> {
        let query = [("search", term.to_string())];
        let raw: Vec<AccountResponse> = self
            .ctx
            .request(Method::GET, "students/search", Some(&query), None)
            .await?;
        Ok(collect_valid(raw, "student", Student::from_response))
    }

    pub async fn create(&self, req: &AccountCreateRequest) -> Result<Student, ApiError> {
        let raw: AccountResponse = self
            .ctx
            .request(Method::POST, "students", None, Some(to_body(req)?))
            .await?;
        Student::from_response(raw)
            .ok_or_else(|| ApiError::Decode("created student came back without identifier".into()))
    }

    pub async fn update(&self, id: &str, req: &AccountUpdateRequest) -> Result<Student, ApiError> {
        let path = format!("students/{id}");
        let raw: AccountResponse = self
            .ctx
            .request(Method::PUT, &path, None, Some(to_body(req)?))
            .await?;
        Student::from_response(raw)
            .ok_or_else(|| ApiError::Decode("updated student came back without identifier".into()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("students/{id}");
        self.ctx.request_unit(Method::DELETE, &path, None, None).await
    }
}

#[async_trait]
impl ResourceSource for StudentsApi {
    type Item = Student;

    async fn fetch_page(&self, window: PageWindow) -> Result<Vec<Student>, SourceError> {
        self.list(window.limit, window.page)
            .await
            .map(|page| page.items)
            .map_err(SourceError::from)
    }

    async fn search(&self, query: &str) -> Result<Vec<Student>, SourceError> {
        StudentsApi::search(self, query)
            .await
            .map_err(SourceError::from)
    }

    async fn delete(&self, id: &str) -> Result<(), SourceError> {
        StudentsApi::delete(self, id).await.map_err(SourceError::from)
    }
}
