use crate::modules::events::adapters::outbound::row::CreateEventInput;
use chrono::{DateTime, Utc};

/// A local edit of an event already held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviseEvent {
    pub id: String,
    pub input: CreateEventInput,
    pub revised_at: DateTime<Utc>,
}
