// Static event dataset bundled for offline or unconfigured operation.
// Stored in the row shape so it goes through the same mapper as live data.

use crate::modules::events::adapters::outbound::row::{EventRow, row_to_event};
use crate::modules::events::core::event::Event;

const FALLBACK_ROWS: &str = include_str!("fallback_events.json");

pub fn fallback_events() -> Vec<Event> {
    match serde_json::from_str::<Vec<EventRow>>(FALLBACK_ROWS) {
        Ok(rows) => rows
            .into_iter()
            .map(|row| row_to_event(row.normalized()))
            .collect(),
        Err(error) => {
            tracing::warn!(%error, "bundled fallback dataset is unreadable");
            Vec::new()
        }
    }
}
