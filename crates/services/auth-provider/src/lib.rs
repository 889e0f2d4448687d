//! Auth Provider Library
//!
//! This crate is the boundary to the external authentication service. It
//! exposes the [`AuthProvider`] trait the pages depend on and a Firebase
//! implementation backed by the Identity Toolkit REST API.

pub mod api;
pub mod firebase;
pub mod provider;
pub mod rest;
pub mod state;

pub use api::{IdentityApi, SignedInAccount};
pub use firebase::FirebaseAuth;
pub use provider::AuthProvider;
pub use rest::{rest_error_code, IdentityToolkitClient};
pub use state::AuthStateCell;

#[cfg(any(test, feature = "test-utils"))]
pub use api::MockIdentityApi;
#[cfg(any(test, feature = "test-utils"))]
pub use provider::MockAuthProvider;
