pub mod geocode;
pub mod pages;
pub mod profile;
pub mod trips;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(pages::router())
        .merge(trips::router())
        .merge(profile::router())
        .merge(geocode::router())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}
