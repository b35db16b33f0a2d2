// Shared test fixture for events.
// Compiled only for tests; exposed under `crate::tests::fixtures::events`.

use crate::modules::events::core::event::{
    Event, EventType, KnownVendor, LocationType, OrganizerType, Vendor,
};
use crate::modules::events::core::status::EventStatus;
use crate::shared::core::instant::parse_instant;
use chrono::{DateTime, Utc};

pub const FIXED_CREATED_AT: &str = "2024-01-01T00:00:00.000Z";

fn instant(raw: &str) -> DateTime<Utc> {
    parse_instant(raw).unwrap_or_else(|| panic!("fixture instant {raw:?} must parse"))
}

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        let created_at = instant(FIXED_CREATED_AT);
        Self {
            inner: Event {
                id: "evt-fixed-0001".to_string(),
                title: "Rust Meetup".to_string(),
                subtitle: None,
                description: "Monthly gathering of the local Rust community".to_string(),
                event_type: EventType::Meetup,
                vendor: Some(Vendor::Known(KnownVendor::Other)),
                tags: vec!["rust".to_string(), "systems".to_string()],
                location_type: LocationType::Online,
                location_detail: None,
                poster_url: None,
                registration_start: None,
                registration_end: None,
                event_start: None,
                event_end: None,
                submission_deadline: None,
                review_start: None,
                review_end: None,
                announcement_date: None,
                demo_day_date: None,
                award_ceremony_date: None,
                status: EventStatus::Upcoming,
                is_postponed: false,
                original_event_start: None,
                original_event_end: None,
                postponed_reason: None,
                organizer_name: "Ferris Community".to_string(),
                organizer_type: OrganizerType::Community,
                organizer_avatar_url: None,
                organizer_contact: None,
                registration_url: None,
                official_site_url: None,
                livestream_url: None,
                recording_url: None,
                created_at,
                updated_at: created_at,
            },
        }
    }

    /// Every optional field set, for mapping laws.
    pub fn fully_populated() -> Self {
        Self::new()
            .subtitle("Edition 42")
            .vendor(Some(Vendor::Custom("Rust Foundation".to_string())))
            .location(LocationType::Hybrid, Some("Shanghai, Hall 3"))
            .poster_url("https://example.com/poster.png")
            .registration_start("2024-06-01T00:00:00.000Z")
            .registration_end("2024-06-10T00:00:00.000Z")
            .event_start("2024-06-15T09:00:00.000Z")
            .event_end("2024-06-16T18:00:00.000Z")
            .submission_deadline("2024-06-16T12:00:00.000Z")
            .review_start("2024-06-17T00:00:00.000Z")
            .review_end("2024-06-20T00:00:00.000Z")
            .announcement_date("2024-06-21T10:00:00.000Z")
            .demo_day_date("2024-06-22T10:00:00.000Z")
            .award_ceremony_date("2024-06-23T10:00:00.000Z")
            .postponed(
                "2024-05-15T09:00:00.000Z",
                "2024-05-16T18:00:00.000Z",
                "Venue change",
            )
            .organizer_avatar_url("https://example.com/avatar.png")
            .organizer_contact("hello@example.com")
            .registration_url("https://example.com/register")
            .official_site_url("https://example.com")
            .livestream_url("https://example.com/live")
            .recording_url("https://example.com/recording")
            .updated_at("2024-02-01T08:30:15.250Z")
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn subtitle(mut self, v: impl Into<String>) -> Self {
        self.inner.subtitle = Some(v.into());
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn event_type(mut self, v: EventType) -> Self {
        self.inner.event_type = v;
        self
    }

    pub fn vendor(mut self, v: Option<Vendor>) -> Self {
        self.inner.vendor = v;
        self
    }

    pub fn tags(mut self, v: &[&str]) -> Self {
        self.inner.tags = v.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn location(mut self, kind: LocationType, detail: Option<&str>) -> Self {
        self.inner.location_type = kind;
        self.inner.location_detail = detail.map(str::to_string);
        self
    }

    pub fn poster_url(mut self, v: impl Into<String>) -> Self {
        self.inner.poster_url = Some(v.into());
        self
    }

    pub fn registration_start(mut self, v: &str) -> Self {
        self.inner.registration_start = Some(instant(v));
        self
    }

    pub fn registration_end(mut self, v: &str) -> Self {
        self.inner.registration_end = Some(instant(v));
        self
    }

    pub fn event_start(mut self, v: &str) -> Self {
        self.inner.event_start = Some(instant(v));
        self
    }

    pub fn event_end(mut self, v: &str) -> Self {
        self.inner.event_end = Some(instant(v));
        self
    }

    pub fn submission_deadline(mut self, v: &str) -> Self {
        self.inner.submission_deadline = Some(instant(v));
        self
    }

    pub fn review_start(mut self, v: &str) -> Self {
        self.inner.review_start = Some(instant(v));
        self
    }

    pub fn review_end(mut self, v: &str) -> Self {
        self.inner.review_end = Some(instant(v));
        self
    }

    pub fn announcement_date(mut self, v: &str) -> Self {
        self.inner.announcement_date = Some(instant(v));
        self
    }

    pub fn demo_day_date(mut self, v: &str) -> Self {
        self.inner.demo_day_date = Some(instant(v));
        self
    }

    pub fn award_ceremony_date(mut self, v: &str) -> Self {
        self.inner.award_ceremony_date = Some(instant(v));
        self
    }

    pub fn status(mut self, v: EventStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn postponed(mut self, original_start: &str, original_end: &str, reason: &str) -> Self {
        self.inner.is_postponed = true;
        self.inner.status = EventStatus::Postponed;
        self.inner.original_event_start = Some(instant(original_start));
        self.inner.original_event_end = Some(instant(original_end));
        self.inner.postponed_reason = Some(reason.to_string());
        self
    }

    pub fn organizer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.organizer_name = v.into();
        self
    }

    pub fn organizer_avatar_url(mut self, v: impl Into<String>) -> Self {
        self.inner.organizer_avatar_url = Some(v.into());
        self
    }

    pub fn organizer_contact(mut self, v: impl Into<String>) -> Self {
        self.inner.organizer_contact = Some(v.into());
        self
    }

    pub fn registration_url(mut self, v: impl Into<String>) -> Self {
        self.inner.registration_url = Some(v.into());
        self
    }

    pub fn official_site_url(mut self, v: impl Into<String>) -> Self {
        self.inner.official_site_url = Some(v.into());
        self
    }

    pub fn livestream_url(mut self, v: impl Into<String>) -> Self {
        self.inner.livestream_url = Some(v.into());
        self
    }

    pub fn recording_url(mut self, v: impl Into<String>) -> Self {
        self.inner.recording_url = Some(v.into());
        self
    }

    pub fn created_at(mut self, v: &str) -> Self {
        self.inner.created_at = instant(v);
        self
    }

    pub fn updated_at(mut self, v: &str) -> Self {
        self.inner.updated_at = instant(v);
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}

pub fn make_event(id: &str, status: EventStatus) -> Event {
    EventBuilder::new().id(id).status(status).build()
}
