use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::events::use_cases::errors::ApplicationError;
use crate::shared::core::instant::now_millis;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.get_handler.detail(&id, now_millis()).await {
        Ok(Some(detail)) => Json(detail).into_response(),
        Ok(None) | Err(ApplicationError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(ApplicationError::Repository(error)) => {
            (StatusCode::BAD_GATEWAY, error.to_string()).into_response()
        }
    }
}
