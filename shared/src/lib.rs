//! Shared types for the club membership backend
//!
//! Data models used by both the server and API consumers.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
