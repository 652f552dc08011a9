//! Browsing the catalog: restaurants, their menus and score profiles.

pub mod dto;
pub mod handlers;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::browse_routes()
}
