//! In-memory session capability: who is signed in and what they may do.

use taskclass_api_types::Role;

/// Session state produced by a successful login.
///
/// Explicitly constructed and passed to the components that need it, never
/// ambient global state. Holds nothing beyond the token and role; there is
/// no persistence across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    role: Option<Role>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    /// UI-level gate only: callers withhold create/edit/delete affordances
    /// based on this, but the remote is the actual authority and rejects
    /// unauthorized mutations on its own.
    pub fn can_manage_posts(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    /// Teacher and student account administration is admin-only.
    pub fn can_manage_accounts(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.role = None;
    }
}
