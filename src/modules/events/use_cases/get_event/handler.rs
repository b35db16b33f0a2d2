use crate::modules::events::adapters::outbound::repository::{EventRepository, ReadinessProbe};
use crate::modules::events::core::event::Event;
use crate::modules::events::core::timeline::{
    Milestone, RegistrationAvailability, registration_availability, timeline,
};
use crate::modules::events::store::EventStore;
use crate::modules::events::use_cases::errors::ApplicationError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// An event with its milestones and registration state evaluated at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub event: Event,
    pub timeline: Vec<Milestone>,
    pub registration: RegistrationAvailability,
}

impl EventDetail {
    pub fn at(event: Event, now: DateTime<Utc>) -> Self {
        Self {
            timeline: timeline(&event, now),
            registration: registration_availability(&event, now),
            event,
        }
    }
}

pub struct GetEventHandler<TRepository>
where
    TRepository: EventRepository + 'static,
{
    repository: Arc<TRepository>,
    readiness: Arc<dyn ReadinessProbe>,
    store: Arc<EventStore<TRepository>>,
}

impl<TRepository> GetEventHandler<TRepository>
where
    TRepository: EventRepository + 'static,
{
    pub fn new(
        repository: Arc<TRepository>,
        readiness: Arc<dyn ReadinessProbe>,
        store: Arc<EventStore<TRepository>>,
    ) -> Self {
        Self {
            repository,
            readiness,
            store,
        }
    }

    /// Store first; the repository is only asked when the backend is ready.
    pub async fn handle(&self, id: &str) -> Result<Option<Event>, ApplicationError> {
        if let Some(event) = self.store.get_by_id(id) {
            return Ok(Some(event));
        }
        if !self.readiness.is_ready() {
            return Ok(None);
        }
        Ok(self.repository.get_by_id(id).await?)
    }

    pub async fn detail(
        &self,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<EventDetail>, ApplicationError> {
        Ok(self
            .handle(id)
            .await?
            .map(|event| EventDetail::at(event, now)))
    }
}
