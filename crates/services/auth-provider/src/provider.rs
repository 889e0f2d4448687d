//! Authentication provider boundary.

use async_trait::async_trait;
use tokio::sync::watch;

use domain::{AuthResult, AuthSnapshot};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// External authentication service as seen by the pages.
///
/// Actions resolve once the provider has answered; the resulting session
/// change is published through [`AuthProvider::subscribe`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Sign in with email and password
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<()>;

    /// Create an account and sign it in
    async fn sign_up(&self, email: &str, password: &str) -> AuthResult<()>;

    /// End the current session
    async fn sign_out(&self) -> AuthResult<()>;

    /// Subscribe to `(user, loading)` updates
    fn subscribe(&self) -> watch::Receiver<AuthSnapshot>;
}
