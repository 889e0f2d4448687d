//! Firebase-backed [`AuthProvider`].
//!
//! Publishes the session of one browser through an [`AuthStateCell`].
//! Sign-out is local: the user is dropped and `signed_out` is published.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use domain::{AuthResult, AuthSnapshot, SessionUser};

use crate::api::{IdentityApi, SignedInAccount};
use crate::provider::AuthProvider;
use crate::state::AuthStateCell;

/// Per-client Firebase session.
pub struct FirebaseAuth {
    api: Arc<dyn IdentityApi>,
    state: AuthStateCell,
}

impl FirebaseAuth {
    /// Create a provider in the `loading` state.
    ///
    /// Call [`FirebaseAuth::resolve_initial_state`] once any persisted
    /// session has been restored (or found absent).
    pub fn new(api: Arc<dyn IdentityApi>) -> Self {
        Self {
            api,
            state: AuthStateCell::default(),
        }
    }

    /// Leave the `loading` state without a user.
    ///
    /// No-op when an action already resolved the state.
    pub fn resolve_initial_state(&self) {
        let current = self.state.snapshot();
        if current.loading {
            self.state.publish(AuthSnapshot {
                user: current.user,
                loading: false,
            });
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> AuthSnapshot {
        self.state.snapshot()
    }

    fn establish(&self, account: SignedInAccount) {
        let user = SessionUser::new(account.local_id, account.email);
        self.state.publish(AuthSnapshot::signed_in(user));
    }
}

#[async_trait]
impl AuthProvider for FirebaseAuth {
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<()> {
        debug!(email = %email, "Signing in");
        match self.api.sign_in_with_password(email, password).await {
            Ok(account) => {
                info!(uid = %account.local_id, "User signed in");
                self.establish(account);
                Ok(())
            }
            Err(err) => {
                warn!(code = %err.code, "Sign-in rejected");
                Err(err)
            }
        }
    }

    async fn sign_up(&self, email: &str, password: &str) -> AuthResult<()> {
        debug!(email = %email, "Signing up");
        match self.api.sign_up(email, password).await {
            Ok(account) => {
                info!(uid = %account.local_id, "User signed up");
                self.establish(account);
                Ok(())
            }
            Err(err) => {
                warn!(code = %err.code, "Sign-up rejected");
                Err(err)
            }
        }
    }

    async fn sign_out(&self) -> AuthResult<()> {
        if self.state.snapshot().user.is_some() {
            info!("User signed out");
        }
        self.state.publish(AuthSnapshot::signed_out());
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockIdentityApi;
    use domain::AuthError;

    fn account() -> SignedInAccount {
        SignedInAccount {
            local_id: "uid-1".to_string(),
            email: Some("a@b.com".to_string()),
        }
    }

    #[test]
    fn test_starts_loading() {
        let auth = FirebaseAuth::new(Arc::new(MockIdentityApi::new()));
        assert!(auth.snapshot().loading);

        auth.resolve_initial_state();
        assert_eq!(auth.snapshot(), AuthSnapshot::signed_out());
    }

    #[tokio::test]
    async fn test_sign_in_publishes_user() {
        let mut api = MockIdentityApi::new();
        api.expect_sign_in_with_password()
            .times(1)
            .returning(|email, password| {
                assert_eq!(email, "a@b.com");
                assert_eq!(password, "abcdef");
                Ok(account())
            });

        let auth = FirebaseAuth::new(Arc::new(api));
        let mut rx = auth.subscribe();

        auth.sign_in("a@b.com", "abcdef").await.unwrap();

        rx.changed().await.unwrap();
        let snapshot = rx.borrow_and_update().clone();
        assert!(!snapshot.loading);
        assert_eq!(
            snapshot.user,
            Some(SessionUser::new("uid-1", Some("a@b.com".to_string())))
        );
    }

    #[tokio::test]
    async fn test_rejection_leaves_state_untouched() {
        let mut api = MockIdentityApi::new();
        api.expect_sign_in_with_password()
            .returning(|_, _| Err(AuthError::new("auth/wrong-password")));

        let auth = FirebaseAuth::new(Arc::new(api));
        auth.resolve_initial_state();

        let err = auth.sign_in("a@b.com", "nope").await.unwrap_err();
        assert_eq!(err.code, "auth/wrong-password");
        assert_eq!(auth.snapshot(), AuthSnapshot::signed_out());
    }

    #[tokio::test]
    async fn test_sign_up_signs_in() {
        let mut api = MockIdentityApi::new();
        api.expect_sign_up().times(1).returning(|_, _| Ok(account()));

        let auth = FirebaseAuth::new(Arc::new(api));
        auth.sign_up("a@b.com", "abcdef").await.unwrap();
        assert!(auth.snapshot().status().is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_out_drops_session() {
        let mut api = MockIdentityApi::new();
        api.expect_sign_in_with_password().returning(|_, _| Ok(account()));

        let auth = FirebaseAuth::new(Arc::new(api));
        auth.sign_in("a@b.com", "abcdef").await.unwrap();
        auth.sign_out().await.unwrap();

        assert_eq!(auth.snapshot(), AuthSnapshot::signed_out());
    }
}
