//! Shared request and response types for the TaskClass school API.
//!
//! These types describe the wire contract only. Normalization (identifier
//! cleanup, invalid-record filtering) happens in the client adapters.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Actor role attached to an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: Role,
}

/// Wrapped page envelope returned by the account list endpoints.
///
/// The posts list endpoint returns a bare array instead; adapters handle
/// the asymmetry individually.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// Raw post record as the remote serves it.
///
/// The identifier may arrive under `_id` (the remote's primary-key field)
/// or `id`; a record without one deserializes with an empty identifier and
/// is dropped by the adapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub title: String,
    pub body: String,
    pub author: String,
    #[serde(default)]
    pub discipline: Option<String>,
    #[serde(default, rename = "classGroup")]
    pub class_group: Option<String>,
    #[serde(default, rename = "createdAt", with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreateRequest {
    pub title: String,
    pub body: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(rename = "classGroup", skip_serializing_if = "Option::is_none")]
    pub class_group: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(rename = "classGroup", skip_serializing_if = "Option::is_none")]
    pub class_group: Option<String>,
}

/// Raw teacher or student account record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default, rename = "createdAt", with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, rename = "updatedAt", with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCreateRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_response_accepts_primary_key_alias() {
        let raw = r#"{"_id":"p1","title":"T","body":"B","author":"A"}"#;
        let post: PostResponse = serde_json::from_str(raw).expect("decoded post");
        assert_eq!(post.id, "p1");
        assert!(post.created_at.is_none());
    }

    #[test]
    fn post_response_defaults_missing_identifier_to_empty() {
        let raw = r#"{"title":"T","body":"B","author":"A"}"#;
        let post: PostResponse = serde_json::from_str(raw).expect("decoded post");
        assert!(post.id.is_empty());
    }

    #[test]
    fn page_envelope_decodes_camel_cased_total_pages() {
        let raw = r#"{"items":[{"_id":"t1","email":"t@school.edu","role":"admin"}],"total":1,"page":1,"limit":10,"totalPages":1}"#;
        let envelope: PageEnvelope<AccountResponse> =
            serde_json::from_str(raw).expect("decoded envelope");
        assert_eq!(envelope.total_pages, 1);
        assert_eq!(envelope.items[0].role, Some(Role::Admin));
    }

    #[test]
    fn update_request_omits_unset_fields() {
        let req = PostUpdateRequest {
            title: Some("New".into()),
            ..PostUpdateRequest::default()
        };
        let value = serde_json::to_value(&req).expect("serialized request");
        assert_eq!(value, serde_json::json!({"title": "New"}));
    }
}
