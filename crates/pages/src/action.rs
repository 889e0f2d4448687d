//! Provider call issued by each credential form.

use async_trait::async_trait;

use auth_provider::AuthProvider;
use domain::{AuthResult, SignInCredentials, SignUpCredentials};

/// Send validated form values to the provider.
#[async_trait]
pub trait SubmitAction {
    async fn dispatch(&self, provider: &dyn AuthProvider) -> AuthResult<()>;
}

#[async_trait]
impl SubmitAction for SignInCredentials {
    async fn dispatch(&self, provider: &dyn AuthProvider) -> AuthResult<()> {
        provider.sign_in(&self.email, &self.password).await
    }
}

#[async_trait]
impl SubmitAction for SignUpCredentials {
    async fn dispatch(&self, provider: &dyn AuthProvider) -> AuthResult<()> {
        // The confirmation never leaves the form
        provider.sign_up(&self.email, &self.password).await
    }
}
