pub mod health;

use axum::{routing::get, Router};

use crate::careers::{handlers, pages};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::home_page))
        .route("/details", get(pages::details_page))
        .route("/add", get(pages::add_page).post(pages::submit_add))
        // Careers API
        .route(
            "/api/v1/careers",
            get(handlers::handle_list_careers).post(handlers::handle_create_career),
        )
        .route("/api/v1/careers/:name", get(handlers::handle_get_career))
        .with_state(state)
}
