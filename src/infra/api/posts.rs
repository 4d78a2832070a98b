//! Posts resource client.
//!
//! The posts list endpoint returns a bare array rather than the page
//! envelope the account endpoints use; this adapter handles that shape
//! individually.

use async_trait::async_trait;
use reqwest::Method;
use taskclass_api_types::{PostCreateRequest, PostResponse, PostUpdateRequest};

use crate::application::lists::{PageWindow, ResourceSource, SourceError};
use crate::domain::Post;

use super::client::ApiClient;
use super::error::ApiError;
use super::{collect_valid, to_body};

#[derive(Clone, Debug)]
pub struct PostsApi {
    ctx: ApiClient,
}

impl PostsApi {
    pub fn new(ctx: ApiClient) -> Self {
        Self { ctx }
    }

    pub async fn list(&self, limit: u32, page: u32) -> Result<Vec<Post>, ApiError> {
        let query = [("limit", limit.to_string()), ("page", page.to_string())];
        let raw: Vec<PostResponse> = self
            .ctx
            .request(Method::GET, "posts", Some(&query), None)
            .await?;
        Ok(collect_valid(raw, "post", Post::from_response))
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Post>, ApiError> {
        let query = [("search", term.to_string())];
        let raw: Vec<PostResponse> = self
            .ctx
            .request(Method::GET, "posts/search", Some(&query), None)
            .await?;
        Ok(collect_valid(raw, "post", Post::from_response))
    }

    pub async fn find(&self, id: &str) -> Result<Post, ApiError> {
        let path = format!("posts/{id}");
        let raw: PostResponse = self.ctx.request(Method::GET, &path, None, None).await?;
        Post::from_response(raw)
            .ok_or_else(|| ApiError::Decode("post record without identifier".into()))
    }

    pub async fn create(&self, req: &PostCreateRequest) -> Result<Post, ApiError> {
        let raw: PostResponse = self
            .ctx
            .request(Method::POST, "posts", None, Some(to_body(req)?))
            .await?;
        Post::from_response(raw)
            .ok_or_else(|| ApiError::Decode("created post came back without identifier".into()))
    }

    pub async fn update(&self, id: &str, req: &PostUpdateRequest) -> Result<Post, ApiError> {
        let path = format!("posts/{id}");
        let raw: PostResponse = self
            .ctx
            .request(Method::PUT, &path, None, Some(to_body(req)?))
            .await?;
        Post::from_response(raw)
            .ok_or_else(|| ApiError::Decode("updated post came back without identifier".into()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("posts/{id}");
        self.ctx.request_unit(Method::DELETE, &path, None, None).await
    }
}

#[async_trait]
impl ResourceSource for PostsApi {
    type Item = Post;

    async fn fetch_page(&self, window: PageWindow) -> Result<Vec<Post>, SourceError> {
        self.list(window.limit, window.page)
            .await
            .map_err(SourceError::from)
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, SourceError> {
        PostsApi::search(self, query).await.map_err(SourceError::from)
    }

    async fn delete(&self, id: &str) -> Result<(), SourceError> {
        PostsApi::delete(self, id).await.map_err(SourceError::from)
    }
}
