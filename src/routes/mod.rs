use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod index;

pub use contact::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_command: careweave_contact::Command,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            contact_command: careweave_contact::Command,
        }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    let api = Router::new()
        .route("/contact", post(contact::action))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .nest("/api", api)
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
