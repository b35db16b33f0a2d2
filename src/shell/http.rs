use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;

use crate::modules::events::store::RefreshOutcome;
use crate::modules::events::use_cases::get_event::inbound::http as get_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::revise_event::inbound::http as revise_http;
use crate::modules::events::use_cases::submit_event::inbound::http as submit_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events", get(list_http::handle).post(submit_http::handle))
        .route("/events/stats", get(list_http::stats))
        .route("/events/refresh", post(refresh))
        .route("/events/{id}", get(get_http::handle).put(revise_http::handle))
        .with_state(state)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshReport {
    pub outcome: &'static str,
    pub error: Option<String>,
    pub total: usize,
    pub is_loading: bool,
    pub is_syncing: bool,
}

pub async fn refresh(State(state): State<AppState>) -> impl IntoResponse {
    let outcome = state.store.refresh().await;
    let snapshot = state.store.snapshot();
    let outcome = match outcome {
        RefreshOutcome::Refreshed(_) => "refreshed",
        RefreshOutcome::Fallback => "fallback",
        RefreshOutcome::Offline => "offline",
        RefreshOutcome::Failed(_) => "failed",
        RefreshOutcome::Skipped => "skipped",
    };
    Json(RefreshReport {
        outcome,
        error: snapshot.error,
        total: snapshot.events.len(),
        is_loading: snapshot.is_loading,
        is_syncing: snapshot.is_syncing,
    })
}
