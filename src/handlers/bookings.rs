use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{Booking, BookingEvent, BookingRequest, BookingStatus};
use crate::services::events::publish;
use crate::services::stats::{self, DashboardSummary, ListSummary};
use crate::state::AppState;

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = state.form.submit(&body).await.map_err(|e| {
        tracing::warn!(error = %e, "booking submission rejected");
        AppError::from(e)
    })?;

    let stored = {
        let mut store = state.store();
        store.insert(booking)?.clone()
    };

    tracing::info!(reference = %stored.reference, guest = %stored.guest_name, "booking created");
    publish(
        &state,
        BookingEvent::Created {
            booking: stored.clone(),
        },
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

// GET /api/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
    pub date: Option<String>,
    pub limit: Option<usize>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let status = query.status.as_deref().map(parse_status).transpose()?;
    let limit = query.limit.unwrap_or(usize::MAX);

    let bookings: Vec<Booking> = {
        let store = state.store();
        store
            .list()
            .iter()
            .filter(|b| status.map_or(true, |s| b.status == s))
            .filter(|b| query.date.as_deref().map_or(true, |d| b.date == d))
            .take(limit)
            .cloned()
            .collect()
    };

    Ok(Json(bookings))
}

// GET /api/bookings/:reference
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
) -> Result<Json<Booking>, AppError> {
    let store = state.store();
    store
        .get(&reference)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("booking {reference}")))
}

// POST /api/bookings/:reference/status
#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
    Json(body): Json<StatusRequest>,
) -> Result<Json<Booking>, AppError> {
    let to = parse_status(&body.status)?;

    let (from, updated) = {
        let mut store = state.store();
        let from = store.update_status(&reference, to)?;
        let updated = store
            .get(&reference)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("booking {reference}")))?;
        (from, updated)
    };

    publish(
        &state,
        BookingEvent::StatusChanged {
            reference,
            from,
            to,
        },
    );
    Ok(Json(updated))
}

// POST /api/bookings/:reference/advance
pub async fn advance_status(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
) -> Result<Json<Booking>, AppError> {
    let (from, to, updated) = {
        let mut store = state.store();
        let (from, to) = store.advance(&reference)?;
        let updated = store
            .get(&reference)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("booking {reference}")))?;
        (from, to, updated)
    };

    publish(
        &state,
        BookingEvent::StatusChanged {
            reference,
            from,
            to,
        },
    );
    Ok(Json(updated))
}

// GET /api/bookings/summary
pub async fn list_summary(State(state): State<Arc<AppState>>) -> Json<ListSummary> {
    let store = state.store();
    Json(stats::list_summary(store.list()))
}

// GET /api/dashboard
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSummary> {
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let store = state.store();
    Json(stats::dashboard_summary(store.list(), &today))
}

fn parse_status(raw: &str) -> Result<BookingStatus, AppError> {
    BookingStatus::parse(raw.trim())
        .ok_or_else(|| AppError::BadRequest(format!("unknown booking status {raw:?}")))
}
