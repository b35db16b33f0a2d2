use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::modules::events::adapters::outbound::row::CreateEventInput;
use crate::modules::events::core::event::{Event, EventType, KnownVendor, LocationType, Vendor};
use crate::modules::events::core::status::{StatusInput, compute_status};
use crate::modules::events::store::EventStore;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::modules::events::use_cases::submit_event::command::SubmitEvent;
use chrono::{DateTime, Days, NaiveTime, Utc};
use std::sync::Arc;

/// A meetup without a registration end closes registration at 23:59 the day before it starts.
pub fn derive_registration_end(
    event_type: EventType,
    registration_end: Option<DateTime<Utc>>,
    event_start: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    if event_type != EventType::Meetup || registration_end.is_some() {
        return registration_end;
    }
    let start = event_start?;
    let day_before = start.date_naive().checked_sub_days(Days::new(1))?;
    let closing = NaiveTime::from_hms_opt(23, 59, 0)?;
    Some(day_before.and_time(closing).and_utc())
}

/// Applies submission rules and stamps the status computed at submission time.
pub fn prepare_submission(command: SubmitEvent) -> CreateEventInput {
    let SubmitEvent {
        mut input,
        custom_vendor,
        submitted_at,
    } = command;

    if input.vendor == Some(Vendor::Known(KnownVendor::Other)) {
        if let Some(custom) = custom_vendor.as_deref().map(str::trim) {
            if !custom.is_empty() {
                input.vendor = Some(Vendor::parse(custom));
            }
        }
    }
    if input.location_type == LocationType::Online {
        input.location_detail = None;
    }
    input.registration_end = derive_registration_end(
        input.event_type,
        input.registration_end,
        input.event_start,
    );
    if !input.is_postponed {
        input.original_event_start = None;
        input.original_event_end = None;
        input.postponed_reason = None;
    }

    input.status = compute_status(
        &StatusInput {
            is_postponed: input.is_postponed,
            registration_start: input.registration_start,
            registration_end: input.registration_end,
            event_start: input.event_start,
            event_end: input.event_end,
            review_start: input.review_start,
            review_end: input.review_end,
        },
        submitted_at,
    );
    input
}

pub struct SubmitEventHandler<TRepository>
where
    TRepository: EventRepository + 'static,
{
    repository: Arc<TRepository>,
    store: Arc<EventStore<TRepository>>,
}

impl<TRepository> SubmitEventHandler<TRepository>
where
    TRepository: EventRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, store: Arc<EventStore<TRepository>>) -> Self {
        Self { repository, store }
    }

    /// The store only sees the event once the repository confirmed its creation.
    pub async fn handle(&self, command: SubmitEvent) -> Result<Event, ApplicationError> {
        let input = prepare_submission(command);
        let created = self.repository.create(input).await.map_err(|error| {
            tracing::warn!(%error, "event submission rejected by repository");
            ApplicationError::Repository(error)
        })?;
        tracing::info!(id = %created.id, status = %created.status, "event submitted");

        self.store.add(created.clone());
        self.store.refresh().await;
        Ok(created)
    }
}
