use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::errors::AppError;
use crate::models::{OperatorRole, SessionContext};
use crate::services::stats::{self, Analytics};
use crate::state::AppState;

pub const ROLE_HEADER: &str = "x-operator-role";

/// Build the request's session from the role header. No header means staff.
pub fn session_from_headers(headers: &HeaderMap) -> Result<SessionContext, AppError> {
    let Some(raw) = headers.get(ROLE_HEADER) else {
        return Ok(SessionContext::default());
    };
    let raw = raw
        .to_str()
        .map_err(|_| AppError::BadRequest("operator role header is not valid text".to_string()))?;
    OperatorRole::parse(raw.trim().to_ascii_lowercase().as_str())
        .map(SessionContext::new)
        .ok_or_else(|| AppError::BadRequest(format!("unknown operator role {raw:?}")))
}

pub fn analytics_view(session: &SessionContext, state: &AppState) -> Result<Analytics, AppError> {
    if !session.can_view_analytics() {
        tracing::warn!(role = session.role.as_str(), "analytics access denied");
        return Err(AppError::Forbidden(format!(
            "analytics are only available to {}s",
            OperatorRole::Admin.label()
        )));
    }
    let store = state.store();
    Ok(stats::analytics(store.list()))
}

// GET /api/analytics
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Analytics>, AppError> {
    let session = session_from_headers(&headers)?;
    analytics_view(&session, &state).map(Json)
}
