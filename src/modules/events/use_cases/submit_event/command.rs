use crate::modules::events::adapters::outbound::row::CreateEventInput;
use chrono::{DateTime, Utc};

/// A new event as entered by a submitter. `input.status` is ignored and derived on handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    pub input: CreateEventInput,
    /// Free text used when the chosen vendor is `Other`.
    pub custom_vendor: Option<String>,
    pub submitted_at: DateTime<Utc>,
}
