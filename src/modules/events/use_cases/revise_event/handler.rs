use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::modules::events::core::event::Event;
use crate::modules::events::core::status::EventStatus;
use crate::modules::events::store::EventStore;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::revise_event::command::ReviseEvent;
use std::sync::Arc;

/// Edits are applied to the store only; the backend has no update operation.
pub struct ReviseEventHandler<TRepository>
where
    TRepository: EventRepository + 'static,
{
    store: Arc<EventStore<TRepository>>,
}

impl<TRepository> ReviseEventHandler<TRepository>
where
    TRepository: EventRepository + 'static,
{
    pub fn new(store: Arc<EventStore<TRepository>>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: ReviseEvent) -> Result<Event, ApplicationError> {
        let ReviseEvent {
            id,
            mut input,
            revised_at,
        } = command;
        let existing = self
            .store
            .get_by_id(&id)
            .ok_or_else(|| ApplicationError::NotFound(id.clone()))?;

        input.id = Some(existing.id);
        input.created_at = Some(existing.created_at);
        input.updated_at = Some(revised_at);
        let mut event = input.into_event(revised_at);

        // Cancellation comes from moderation and survives edits.
        if existing.status == EventStatus::Cancelled {
            event.status = EventStatus::Cancelled;
        } else {
            event.recompute_status(revised_at);
        }

        self.store.update(event.clone());
        tracing::info!(id = %event.id, status = %event.status, "event revised");
        Ok(event)
    }
}
