//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling for the web layer
//! - Configuration structures
//! - Tracing bootstrap

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
