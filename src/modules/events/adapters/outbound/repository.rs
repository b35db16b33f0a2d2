// Ports for the external event repository.
//
// Purpose
// - Describe what the store and the use cases need from long-lived storage without
//   naming a storage technology.
//
// Notes
// - Failure is always distinct from an empty result: `list` returns `Ok(vec![])` when there
//   is nothing, `get_by_id` returns `Ok(None)` for an unknown id.

use crate::modules::events::adapters::outbound::row::CreateEventInput;
use crate::modules::events::core::event::Event;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Failed to fetch events: {0}")]
    List(String),

    #[error("Failed to fetch event {id}: {reason}")]
    Get { id: String, reason: String },

    #[error("Failed to create event: {0}")]
    Create(String),
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, RepositoryError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Event>, RepositoryError>;
    /// Assigns id and timestamps when absent and returns the persisted record.
    async fn create(&self, input: CreateEventInput) -> Result<Event, RepositoryError>;
}

/// Consulted before any repository call to choose between live and fallback mode.
pub trait ReadinessProbe: Send + Sync {
    fn is_ready(&self) -> bool;
}

impl ReadinessProbe for bool {
    fn is_ready(&self) -> bool {
        *self
    }
}
