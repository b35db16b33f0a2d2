// Storage row shape and the mapping to and from the domain Event.
//
// Purpose
// - Keep the domain model independent from storage representation (snake_case columns,
//   nulls, date strings).
//
// Notes
// - Every date column goes through the same parsing path as the status engine. An invalid
//   value becomes null, never an error.
// - `row_to_event(event_to_row(input))` preserves every semantic field of the input.

use crate::modules::events::core::event::{
    Event, EventType, LocationType, OrganizerType, Vendor, deserialize_optional_vendor,
};
use crate::modules::events::core::status::EventStatus;
use crate::shared::core::instant::{
    deserialize_lenient, normalize_iso, now_millis, parse_instant, parse_optional_instant,
    to_iso_string, truncate_millis,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRow {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub event_type: EventType,
    pub vendor: Option<String>,
    pub tags: Option<Vec<String>>,
    pub location_type: LocationType,
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
    pub status: EventStatus,
    pub is_postponed: Option<bool>,
    pub original_event_start: Option<String>,
    pub original_event_end: Option<String>,
    pub postponed_reason: Option<String>,
    pub organizer_name: String,
    pub organizer_type: OrganizerType,
    pub organizer_avatar_url: Option<String>,
    pub organizer_contact: Option<String>,
    pub registration_url: Option<String>,
    pub official_site_url: Option<String>,
    pub livestream_url: Option<String>,
    pub recording_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl EventRow {
    /// Re-renders every date column canonically, nulling the ones that do not parse.
    pub fn normalized(mut self) -> Self {
        for column in [
            &mut self.registration_start,
            &mut self.registration_end,
            &mut self.event_start,
            &mut self.event_end,
            &mut self.submission_deadline,
            &mut self.review_start,
            &mut self.review_end,
            &mut self.announcement_date,
            &mut self.demo_day_date,
            &mut self.award_ceremony_date,
            &mut self.original_event_start,
            &mut self.original_event_end,
        ] {
            *column = normalize_iso(column.as_deref());
        }
        self
    }
}

/// Creation input: an Event whose identity and audit timestamps may still be missing.
/// Dates that do not parse are absent, and blank vendor text is no vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventInput {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub event_type: EventType,
    #[serde(default, deserialize_with = "deserialize_optional_vendor")]
    pub vendor: Option<Vendor>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub location_type: LocationType,
    pub location_detail: Option<String>,
    pub poster_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub registration_start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub registration_end: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub event_start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub event_end: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub submission_deadline: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub review_start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub review_end: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub announcement_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub demo_day_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub award_ceremony_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub is_postponed: bool,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub original_event_start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub original_event_end: Option<DateTime<Utc>>,
    pub postponed_reason: Option<String>,
    pub organizer_name: String,
    pub organizer_type: OrganizerType,
    pub organizer_avatar_url: Option<String>,
    pub organizer_contact: Option<String>,
    pub registration_url: Option<String>,
    pub official_site_url: Option<String>,
    pub livestream_url: Option<String>,
    pub recording_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Event> for CreateEventInput {
    fn from(event: Event) -> Self {
        Self {
            id: Some(event.id),
            title: event.title,
            subtitle: event.subtitle,
            description: event.description,
            event_type: event.event_type,
            vendor: event.vendor,
            tags: event.tags,
            location_type: event.location_type,
            location_detail: event.location_detail,
            poster_url: event.poster_url,
            registration_start: event.registration_start,
            registration_end: event.registration_end,
            event_start: event.event_start,
            event_end: event.event_end,
            submission_deadline: event.submission_deadline,
            review_start: event.review_start,
            review_end: event.review_end,
            announcement_date: event.announcement_date,
            demo_day_date: event.demo_day_date,
            award_ceremony_date: event.award_ceremony_date,
            status: event.status,
            is_postponed: event.is_postponed,
            original_event_start: event.original_event_start,
            original_event_end: event.original_event_end,
            postponed_reason: event.postponed_reason,
            organizer_name: event.organizer_name,
            organizer_type: event.organizer_type,
            organizer_avatar_url: event.organizer_avatar_url,
            organizer_contact: event.organizer_contact,
            registration_url: event.registration_url,
            official_site_url: event.official_site_url,
            livestream_url: event.livestream_url,
            recording_url: event.recording_url,
            created_at: Some(event.created_at),
            updated_at: Some(event.updated_at),
        }
    }
}

impl CreateEventInput {
    /// Completes the input into a domain event, filling identity and audit defaults.
    pub fn into_event(self, now: DateTime<Utc>) -> Event {
        Event {
            id: self
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| Uuid::now_v7().to_string()),
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            event_type: self.event_type,
            vendor: self.vendor,
            tags: self.tags,
            location_type: self.location_type,
            location_detail: self.location_detail,
            poster_url: self.poster_url,
            registration_start: self.registration_start.map(truncate_millis),
            registration_end: self.registration_end.map(truncate_millis),
            event_start: self.event_start.map(truncate_millis),
            event_end: self.event_end.map(truncate_millis),
            submission_deadline: self.submission_deadline.map(truncate_millis),
            review_start: self.review_start.map(truncate_millis),
            review_end: self.review_end.map(truncate_millis),
            announcement_date: self.announcement_date.map(truncate_millis),
            demo_day_date: self.demo_day_date.map(truncate_millis),
            award_ceremony_date: self.award_ceremony_date.map(truncate_millis),
            status: self.status,
            is_postponed: self.is_postponed,
            original_event_start: self.original_event_start.map(truncate_millis),
            original_event_end: self.original_event_end.map(truncate_millis),
            postponed_reason: self.postponed_reason,
            organizer_name: self.organizer_name,
            organizer_type: self.organizer_type,
            organizer_avatar_url: self.organizer_avatar_url,
            organizer_contact: self.organizer_contact,
            registration_url: self.registration_url,
            official_site_url: self.official_site_url,
            livestream_url: self.livestream_url,
            recording_url: self.recording_url,
            created_at: truncate_millis(self.created_at.unwrap_or(now)),
            updated_at: truncate_millis(self.updated_at.unwrap_or(now)),
        }
    }
}

fn iso(instant: Option<DateTime<Utc>>) -> Option<String> {
    instant.map(to_iso_string)
}

fn audit_instant(raw: &str, column: &str, id: &str) -> DateTime<Utc> {
    parse_instant(raw).unwrap_or_else(|| {
        tracing::warn!(%id, column, value = raw, "unparsable audit timestamp, using the epoch");
        DateTime::UNIX_EPOCH
    })
}

pub fn row_to_event(row: EventRow) -> Event {
    let created_at = audit_instant(&row.created_at, "created_at", &row.id);
    let updated_at = audit_instant(&row.updated_at, "updated_at", &row.id);
    Event {
        vendor: Vendor::from_optional(row.vendor.as_deref()),
        tags: row.tags.unwrap_or_default(),
        registration_start: parse_optional_instant(row.registration_start.as_deref()),
        registration_end: parse_optional_instant(row.registration_end.as_deref()),
        event_start: parse_optional_instant(row.event_start.as_deref()),
        event_end: parse_optional_instant(row.event_end.as_deref()),
        submission_deadline: parse_optional_instant(row.submission_deadline.as_deref()),
        review_start: parse_optional_instant(row.review_start.as_deref()),
        review_end: parse_optional_instant(row.review_end.as_deref()),
        announcement_date: parse_optional_instant(row.announcement_date.as_deref()),
        demo_day_date: parse_optional_instant(row.demo_day_date.as_deref()),
        award_ceremony_date: parse_optional_instant(row.award_ceremony_date.as_deref()),
        is_postponed: row.is_postponed.unwrap_or(false),
        original_event_start: parse_optional_instant(row.original_event_start.as_deref()),
        original_event_end: parse_optional_instant(row.original_event_end.as_deref()),
        id: row.id,
        title: row.title,
        subtitle: row.subtitle,
        description: row.description,
        event_type: row.event_type,
        location_type: row.location_type,
        location_detail: row.location_detail,
        poster_url: row.poster_url,
        status: row.status,
        postponed_reason: row.postponed_reason,
        organizer_name: row.organizer_name,
        organizer_type: row.organizer_type,
        organizer_avatar_url: row.organizer_avatar_url,
        organizer_contact: row.organizer_contact,
        registration_url: row.registration_url,
        official_site_url: row.official_site_url,
        livestream_url: row.livestream_url,
        recording_url: row.recording_url,
        created_at,
        updated_at,
    }
}

/// Fills a missing id with a fresh UUID and missing audit timestamps with the current time.
pub fn event_to_row(input: CreateEventInput) -> EventRow {
    event_to_row_at(input, now_millis())
}

pub fn event_to_row_at(input: CreateEventInput, now: DateTime<Utc>) -> EventRow {
    let id = input
        .id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string());

    EventRow {
        id,
        title: input.title,
        subtitle: input.subtitle,
        description: input.description,
        event_type: input.event_type,
        vendor: input.vendor.map(String::from),
        tags: Some(input.tags),
        location_type: input.location_type,
        location_detail: input.location_detail,
        poster_url: input.poster_url,
        registration_start: iso(input.registration_start),
        registration_end: iso(input.registration_end),
        event_start: iso(input.event_start),
        event_end: iso(input.event_end),
        submission_deadline: iso(input.submission_deadline),
        review_start: iso(input.review_start),
        review_end: iso(input.review_end),
        announcement_date: iso(input.announcement_date),
        demo_day_date: iso(input.demo_day_date),
        award_ceremony_date: iso(input.award_ceremony_date),
        status: input.status,
        is_postponed: Some(input.is_postponed),
        original_event_start: iso(input.original_event_start),
        original_event_end: iso(input.original_event_end),
        postponed_reason: input.postponed_reason,
        organizer_name: input.organizer_name,
        organizer_type: input.organizer_type,
        organizer_avatar_url: input.organizer_avatar_url,
        organizer_contact: input.organizer_contact,
        registration_url: input.registration_url,
        official_site_url: input.official_site_url,
        livestream_url: input.livestream_url,
        recording_url: input.recording_url,
        created_at: to_iso_string(input.created_at.unwrap_or(now)),
        updated_at: to_iso_string(input.updated_at.unwrap_or(now)),
    }
}
