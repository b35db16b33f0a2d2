use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use thiserror::Error;

use crate::modules::events::core::event::{EventType, KnownVendor};
use crate::modules::events::core::filters::EventFilter;
use crate::modules::events::core::status::EventStatus;
use crate::modules::events::use_cases::list_events::query::{EventView, ListEventsQuery};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListEventsParams {
    pub view: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub vendor: Option<String>,
    pub q: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Error)]
#[error("invalid {name}: {value}")]
pub struct InvalidParam {
    name: &'static str,
    value: String,
}

/// `None` and "All" mean no constraint; any other unknown value is rejected.
fn criterion<T>(
    name: &'static str,
    raw: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, InvalidParam> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some(value) if value.is_empty() || value.eq_ignore_ascii_case("all") => Ok(None),
        Some(value) => parse(value).map(Some).ok_or_else(|| InvalidParam {
            name,
            value: value.to_string(),
        }),
    }
}

impl ListEventsParams {
    fn into_query(self) -> Result<ListEventsQuery, InvalidParam> {
        let view = criterion("view", self.view.as_deref(), EventView::parse)?.unwrap_or_default();
        Ok(ListEventsQuery {
            view,
            filter: EventFilter {
                status: criterion("status", self.status.as_deref(), EventStatus::parse)?,
                event_type: criterion("type", self.event_type.as_deref(), EventType::parse)?,
                vendor: criterion("vendor", self.vendor.as_deref(), KnownVendor::parse)?,
                search: self.q,
                search_fields: view.search_fields(),
            },
            page: self.page.unwrap_or(1),
            page_size: self.page_size,
        })
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> impl IntoResponse {
    match params.into_query() {
        Ok(query) => Json(state.list_handler.handle(&query)).into_response(),
        Err(error) => (StatusCode::BAD_REQUEST, error.to_string()).into_response(),
    }
}

pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.list_handler.stats())
}
