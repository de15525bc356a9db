pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::persona::handlers as persona;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // AI chat
        .route("/api/ai/initialize", post(persona::handle_initialize))
        .route("/api/ai/chat", post(persona::handle_chat))
        .route("/api/ai/prompts", get(persona::handle_list_prompts))
        // Contact form
        .route("/api/contact", post(contact::handle_contact))
        .with_state(state)
}
