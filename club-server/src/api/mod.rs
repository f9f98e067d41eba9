//! API route modules
//!
//! # Structure
//!
//! - [`health`] — health check
//! - [`members`] — member registration and listing
//! - [`payments`] — payment registration
//! - [`attendances`] — check-in registration and per-member listing
//! - [`staff`] — staff registration and listing
//! - [`dependents`] — dependent registration and per-member listing

pub mod attendances;
pub mod dependents;
pub mod health;
pub mod members;
pub mod payments;
pub mod staff;

use axum::Router;
use serde::Serialize;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppJson, AppResult};

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(members::router())
        .merge(payments::router())
        .merge(attendances::router())
        .merge(staff::router())
        .merge(dependents::router())
}

/// 201 response body for create operations
///
/// Payment and attendance registration historically omit the id; the
/// field is skipped rather than null to keep those bodies unchanged.
#[derive(Debug, Serialize)]
pub struct Created {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl Created {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id: Some(id),
        }
    }
}
