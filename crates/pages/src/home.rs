//! Home page actions.

use tracing::{error, info};

use auth_provider::AuthProvider;
use domain::{LOGIN_PATH, ROOT_PATH};

/// Where the visitor's sign-in action leads
pub const SIGN_IN_TARGET: &str = LOGIN_PATH;

/// Sign the user out.
///
/// A provider failure is logged and otherwise ignored: the page stays where
/// it is and the auth state keeps whatever the provider last published.
/// Returns the path to show next.
pub async fn sign_out(provider: &dyn AuthProvider) -> &'static str {
    match provider.sign_out().await {
        Ok(()) => info!("Signed out from home page"),
        Err(err) => error!(code = %err.code, "Error signing out: {}", err.message),
    }
    ROOT_PATH
}
