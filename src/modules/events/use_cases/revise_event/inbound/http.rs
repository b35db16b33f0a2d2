use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::events::adapters::outbound::row::CreateEventInput;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::revise_event::command::ReviseEvent;
use crate::shared::core::instant::now_millis;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<CreateEventInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(input) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = ReviseEvent {
        id,
        input,
        revised_at: now_millis(),
    };

    match state.revise_handler.handle(command) {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(ApplicationError::NotFound(id)) => {
            (StatusCode::NOT_FOUND, format!("event not found: {id}")).into_response()
        }
        Err(ApplicationError::Repository(error)) => {
            (StatusCode::BAD_GATEWAY, error.to_string()).into_response()
        }
    }
}
