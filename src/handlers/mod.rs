pub mod analytics;
pub mod bookings;
pub mod chat;
pub mod events;
pub mod health;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/api/bookings/summary", get(bookings::list_summary))
        .route("/api/bookings/:reference", get(bookings::get_booking))
        .route(
            "/api/bookings/:reference/status",
            post(bookings::update_status),
        )
        .route(
            "/api/bookings/:reference/advance",
            post(bookings::advance_status),
        )
        .route(
            "/api/bookings/:reference/chat",
            get(chat::get_history).post(chat::send_message),
        )
        .route("/api/dashboard", get(bookings::dashboard))
        .route("/api/analytics", get(analytics::get_analytics))
        .route("/api/events", get(events::events_stream))
        .with_state(state)
}
