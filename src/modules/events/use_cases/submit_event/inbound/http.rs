use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::adapters::outbound::row::CreateEventInput;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::submit_event::command::SubmitEvent;
use crate::shared::core::instant::now_millis;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEventBody {
    #[serde(flatten)]
    pub input: CreateEventInput,
    pub custom_vendor: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = SubmitEvent {
        input: body.input,
        custom_vendor: body.custom_vendor,
        submitted_at: now_millis(),
    };

    match state.submit_handler.handle(command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(ApplicationError::Repository(error)) => {
            (StatusCode::BAD_GATEWAY, error.to_string()).into_response()
        }
        Err(ApplicationError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
    }
}
