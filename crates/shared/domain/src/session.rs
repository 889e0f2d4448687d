//! Session model published by the authentication provider.

use serde::{Deserialize, Serialize};

/// Signed-in user as seen by the application.
///
/// The provider owns the session; only the identifier and the email are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Provider-side user identifier
    pub uid: String,
    /// Email address, absent for providers that do not expose one
    pub email: Option<String>,
}

impl SessionUser {
    pub fn new(uid: impl Into<String>, email: Option<String>) -> Self {
        Self {
            uid: uid.into(),
            email,
        }
    }

    /// Email for display, empty when unknown
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

/// The `(user, loading)` pair pushed by the provider on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthSnapshot {
    /// Provider has not resolved the initial state yet
    pub fn loading() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn status(&self) -> AuthStatus {
        AuthStatus::from(self)
    }
}

/// Three-way view of a snapshot used by the page gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Authenticated(SessionUser),
    Unauthenticated,
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated(_))
    }
}

impl From<&AuthSnapshot> for AuthStatus {
    fn from(snapshot: &AuthSnapshot) -> Self {
        // Loading wins over a stale user
        if snapshot.loading {
            return AuthStatus::Loading;
        }
        match &snapshot.user {
            Some(user) => AuthStatus::Authenticated(user.clone()),
            None => AuthStatus::Unauthenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_snapshot() {
        let user = SessionUser::new("uid-1", Some("user@example.com".to_string()));

        assert_eq!(AuthSnapshot::loading().status(), AuthStatus::Loading);
        assert_eq!(AuthSnapshot::signed_out().status(), AuthStatus::Unauthenticated);
        assert_eq!(
            AuthSnapshot::signed_in(user.clone()).status(),
            AuthStatus::Authenticated(user.clone())
        );

        let stale = AuthSnapshot {
            user: Some(user),
            loading: true,
        };
        assert_eq!(stale.status(), AuthStatus::Loading);
    }

    #[test]
    fn test_display_email() {
        assert_eq!(SessionUser::new("uid", None).display_email(), "");
        assert_eq!(
            SessionUser::new("uid", Some("a@b.com".to_string())).display_email(),
            "a@b.com"
        );
    }
}
