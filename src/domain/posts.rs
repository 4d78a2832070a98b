use serde::Serialize;
use taskclass_api_types::PostResponse;
use time::OffsetDateTime;

use crate::domain::types::ListEntry;

/// A class activity published to a group of students.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub discipline: Option<String>,
    pub class_group: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl Post {
    /// Normalize a wire record. Returns `None` when the remote failed to
    /// assign an identifier; such a record is unusable by every caller.
    pub fn from_response(raw: PostResponse) -> Option<Self> {
        if raw.id.trim().is_empty() {
            return None;
        }
        Some(Self {
            id: raw.id,
            title: raw.title,
            body: raw.body,
            author: raw.author,
            discipline: raw.discipline,
            class_group: raw.class_group,
            created_at: raw.created_at,
        })
    }

    /// Short preview of the body for list rendering.
    pub fn snippet(&self, max: usize) -> String {
        if self.body.chars().count() <= max {
            return self.body.clone();
        }
        let cut: String = self.body.chars().take(max).collect();
        format!("{}…", cut.trim_end())
    }
}

impl ListEntry for Post {
    fn entry_id(&self) -> &str {
        &self.id
    }
}
