//! Request middleware.

mod client;

pub use client::browser_client_middleware;
