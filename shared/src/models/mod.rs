//! Data models
//!
//! Shared between club-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod attendance;
pub mod dependent;
pub mod member;
pub mod payment;
pub mod staff;

// Re-exports
pub use attendance::*;
pub use dependent::*;
pub use member::*;
pub use payment::*;
pub use staff::*;
