//! Identity backend contract used by [`crate::FirebaseAuth`].

use async_trait::async_trait;

use domain::AuthResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account returned by a successful password sign-in or sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedInAccount {
    /// Provider user id
    pub local_id: String,
    pub email: Option<String>,
}

/// Email/password endpoints of the identity backend.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// Verify email and password
    async fn sign_in_with_password(&self, email: &str, password: &str) -> AuthResult<SignedInAccount>;

    /// Create an account and return it
    async fn sign_up(&self, email: &str, password: &str) -> AuthResult<SignedInAccount>;
}
