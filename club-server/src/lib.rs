//! Club membership backend
//!
//! Records members (associados), their dependents, payments, attendance
//! check-ins and staff (funcionários), exposing create/list operations
//! over an HTTP/JSON API backed by an embedded SQLite store.
//!
//! # Module structure
//!
//! ```text
//! club-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Connection pool, migrations, repositories
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
