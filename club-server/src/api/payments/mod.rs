//! Payment API module
//!
//! Registration only — there is no payment listing on this surface.

mod handler;

use axum::{routing::post, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::create))
}
