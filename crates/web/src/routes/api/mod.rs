//! JSON API route handlers.

pub mod orders;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router.
pub fn router() -> Router<AppState> {
    Router::new().merge(orders::router())
}
