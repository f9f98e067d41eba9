//! Utility module — error handling and logging

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, AppJson};
pub use result::AppResult;
