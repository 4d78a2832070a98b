//! Teacher and student account entities.

use serde::Serialize;
use taskclass_api_types::AccountResponse;
use time::OffsetDateTime;

use crate::domain::types::ListEntry;

/// An administrator account (the remote calls the role `admin`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Teacher {
    pub id: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

/// A student account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Teacher {
    pub fn from_response(raw: AccountResponse) -> Option<Self> {
        if raw.id.trim().is_empty() {
            return None;
        }
        Some(Self {
            id: raw.id,
            email: raw.email,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

impl Student {
    pub fn from_response(raw: AccountResponse) -> Option<Self> {
        if raw.id.trim().is_empty() {
            return None;
        }
        Some(Self {
            id: raw.id,
            email: raw.email,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

impl ListEntry for Teacher {
    fn entry_id(&self) -> &str {
        &self.id
    }
}

impl ListEntry for Student {
    fn entry_id(&self) -> &str {
        &self.id
    }
}
