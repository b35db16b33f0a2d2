// In memory event repository.
//
// Purpose
// - Stand in for the external event backend in the binary and in tests.
//
// Responsibilities
// - Keep storage rows, not domain events, so every read and write goes through the mapper.
// - List rows ordered by event start, rows without a start last.

use crate::modules::events::adapters::outbound::repository::{EventRepository, RepositoryError};
use crate::modules::events::adapters::outbound::row::{
    CreateEventInput, EventRow, event_to_row, row_to_event,
};
use crate::modules::events::core::event::Event;
use crate::shared::core::instant::parse_optional_instant;
use tokio::sync::RwLock;

const OFFLINE: &str = "Event repository offline";

#[derive(Default)]
pub struct InMemoryEventRepository {
    rows: RwLock<Vec<EventRow>>,
    is_offline: bool,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds raw rows, normalising their date columns on the way in.
    pub fn with_rows(rows: impl IntoIterator<Item = EventRow>) -> Self {
        Self {
            rows: RwLock::new(rows.into_iter().map(EventRow::normalized).collect()),
            is_offline: false,
        }
    }

    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        Self::with_rows(
            events
                .into_iter()
                .map(|event| event_to_row(CreateEventInput::from(event))),
        )
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list(&self) -> Result<Vec<Event>, RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::List(OFFLINE.to_string()));
        }

        let mut rows = self.rows.read().await.clone();
        rows.sort_by_key(|row| {
            parse_optional_instant(row.event_start.as_deref())
                .map_or(i64::MAX, |at| at.timestamp_millis())
        });
        Ok(rows.into_iter().map(row_to_event).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Event>, RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Get {
                id: id.to_string(),
                reason: OFFLINE.to_string(),
            });
        }

        let guard = self.rows.read().await;
        Ok(guard
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .map(row_to_event))
    }

    async fn create(&self, input: CreateEventInput) -> Result<Event, RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Create(OFFLINE.to_string()));
        }

        let row = event_to_row(input);
        let mut guard = self.rows.write().await;
        if guard.iter().any(|existing| existing.id == row.id) {
            return Err(RepositoryError::Create(format!(
                "duplicate key value violates unique constraint on id {}",
                row.id
            )));
        }
        guard.push(row.clone());
        Ok(row_to_event(row))
    }
}
