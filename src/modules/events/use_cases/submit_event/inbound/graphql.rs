use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::events::adapters::outbound::row::CreateEventInput;
use crate::modules::events::core::event::{EventType, LocationType, OrganizerType, Vendor};
use crate::modules::events::use_cases::list_events::inbound::graphql::GqlEvent;
use crate::modules::events::use_cases::submit_event::command::SubmitEvent;
use crate::shared::core::instant::{now_millis, parse_optional_instant};
use crate::shell::state::AppState;

/// Dates are taken as text so loose or invalid values degrade to absent instead of failing
/// scalar validation.
#[derive(InputObject)]
pub struct SubmitEventInput {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub event_type: String,
    pub vendor: Option<String>,
    pub custom_vendor: Option<String>,
    #[graphql(default)]
    pub tags: Vec<String>,
    pub location_type: String,
    pub location_detail: Option<String>,
    pub poster_url: Option<String>,
    pub registration_start: Option<String>,
    pub registration_end: Option<String>,
    pub event_start: Option<String>,
    pub event_end: Option<String>,
    pub submission_deadline: Option<String>,
    pub review_start: Option<String>,
    pub review_end: Option<String>,
    pub announcement_date: Option<String>,
    pub demo_day_date: Option<String>,
    pub award_ceremony_date: Option<String>,
    #[graphql(default)]
    pub is_postponed: bool,
    pub original_event_start: Option<String>,
    pub original_event_end: Option<String>,
    pub postponed_reason: Option<String>,
    pub organizer_name: String,
    pub organizer_type: String,
    pub organizer_avatar_url: Option<String>,
    pub organizer_contact: Option<String>,
    pub registration_url: Option<String>,
    pub official_site_url: Option<String>,
    pub livestream_url: Option<String>,
    pub recording_url: Option<String>,
}

fn parse_enum<T>(field: &str, raw: &str, parse: impl Fn(&str) -> Option<T>) -> GqlResult<T> {
    parse(raw).ok_or_else(|| async_graphql::Error::new(format!("invalid {field}: {raw}")))
}

impl SubmitEventInput {
    fn into_command(self, submitted_at: DateTime<Utc>) -> GqlResult<SubmitEvent> {
        let input = CreateEventInput {
            id: self.id,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            event_type: parse_enum("eventType", &self.event_type, EventType::parse)?,
            vendor: Vendor::from_optional(self.vendor.as_deref()),
            tags: self.tags,
            location_type: parse_enum("locationType", &self.location_type, LocationType::parse)?,
            location_detail: self.location_detail,
            poster_url: self.poster_url,
            registration_start: parse_optional_instant(self.registration_start.as_deref()),
            registration_end: parse_optional_instant(self.registration_end.as_deref()),
            event_start: parse_optional_instant(self.event_start.as_deref()),
            event_end: parse_optional_instant(self.event_end.as_deref()),
            submission_deadline: parse_optional_instant(self.submission_deadline.as_deref()),
            review_start: parse_optional_instant(self.review_start.as_deref()),
            review_end: parse_optional_instant(self.review_end.as_deref()),
            announcement_date: parse_optional_instant(self.announcement_date.as_deref()),
            demo_day_date: parse_optional_instant(self.demo_day_date.as_deref()),
            award_ceremony_date: parse_optional_instant(self.award_ceremony_date.as_deref()),
            status: Default::default(),
            is_postponed: self.is_postponed,
            original_event_start: parse_optional_instant(self.original_event_start.as_deref()),
            original_event_end: parse_optional_instant(self.original_event_end.as_deref()),
            postponed_reason: self.postponed_reason,
            organizer_name: self.organizer_name,
            organizer_type: parse_enum(
                "organizerType",
                &self.organizer_type,
                OrganizerType::parse,
            )?,
            organizer_avatar_url: self.organizer_avatar_url,
            organizer_contact: self.organizer_contact,
            registration_url: self.registration_url,
            official_site_url: self.official_site_url,
            livestream_url: self.livestream_url,
            recording_url: self.recording_url,
            created_at: None,
            updated_at: None,
        };
        Ok(SubmitEvent {
            input,
            custom_vendor: self.custom_vendor,
            submitted_at,
        })
    }
}

#[derive(Default)]
pub struct SubmitEventMutationRoot;

#[Object]
impl SubmitEventMutationRoot {
    async fn submit_event(
        &self,
        context: &Context<'_>,
        input: SubmitEventInput,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let command = input.into_command(now_millis())?;
        let created = state
            .submit_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(created.into())
    }
}
