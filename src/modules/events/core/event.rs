// Event is the canonical domain record of one community tech event.
//
// Boundaries
// - This file must not perform input or output.
// - Timeline fields are parsed instants; storage strings live in the row shape only.
//
// Notes
// - `status` is a materialised value. It is written at creation and by `recompute_status`,
//   never derived on read.

use crate::modules::events::core::status::{EventStatus, StatusInput, compute_status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Meetup,
    Hackathon,
    Competition,
    Workshop,
    Webinar,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Meetup,
        EventType::Hackathon,
        EventType::Competition,
        EventType::Workshop,
        EventType::Webinar,
        EventType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Meetup => "Meetup",
            EventType::Hackathon => "Hackathon",
            EventType::Competition => "Competition",
            EventType::Workshop => "Workshop",
            EventType::Webinar => "Webinar",
            EventType::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Option<EventType> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    Online,
    Offline,
    Hybrid,
}

impl LocationType {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationType::Online => "Online",
            LocationType::Offline => "Offline",
            LocationType::Hybrid => "Hybrid",
        }
    }

    pub fn parse(raw: &str) -> Option<LocationType> {
        [LocationType::Online, LocationType::Offline, LocationType::Hybrid]
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganizerType {
    Individual,
    Organization,
    Community,
}

impl OrganizerType {
    pub fn as_str(self) -> &'static str {
        match self {
            OrganizerType::Individual => "Individual",
            OrganizerType::Organization => "Organization",
            OrganizerType::Community => "Community",
        }
    }

    pub fn parse(raw: &str) -> Option<OrganizerType> {
        [
            OrganizerType::Individual,
            OrganizerType::Organization,
            OrganizerType::Community,
        ]
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownVendor {
    Tencent,
    Alibaba,
    ByteDance,
    #[serde(rename = "Huawei Cloud")]
    HuaweiCloud,
    Google,
    Amazon,
    Other,
}

impl KnownVendor {
    pub const ALL: [KnownVendor; 7] = [
        KnownVendor::Tencent,
        KnownVendor::Alibaba,
        KnownVendor::ByteDance,
        KnownVendor::HuaweiCloud,
        KnownVendor::Google,
        KnownVendor::Amazon,
        KnownVendor::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KnownVendor::Tencent => "Tencent",
            KnownVendor::Alibaba => "Alibaba",
            KnownVendor::ByteDance => "ByteDance",
            KnownVendor::HuaweiCloud => "Huawei Cloud",
            KnownVendor::Google => "Google",
            KnownVendor::Amazon => "Amazon",
            KnownVendor::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Option<KnownVendor> {
        KnownVendor::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// A vendor is either one of the known platforms or free text entered by a submitter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Vendor {
    Known(KnownVendor),
    Custom(String),
}

impl Vendor {
    pub fn parse(raw: &str) -> Vendor {
        match KnownVendor::parse(raw) {
            Some(known) => Vendor::Known(known),
            None => Vendor::Custom(raw.trim().to_string()),
        }
    }

    /// Like `parse`, but blank input means no vendor at all.
    pub fn from_optional(raw: Option<&str>) -> Option<Vendor> {
        raw.map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(Vendor::parse)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Vendor::Known(known) => known.as_str(),
            Vendor::Custom(name) => name,
        }
    }

    /// Display and filter bucket. Free-text vendors fall into `Other`.
    pub fn bucket(&self) -> KnownVendor {
        match self {
            Vendor::Known(known) => *known,
            Vendor::Custom(_) => KnownVendor::Other,
        }
    }
}

/// Serde adapter for optional vendors: blank text means no vendor.
pub fn deserialize_optional_vendor<'de, D>(deserializer: D) -> Result<Option<Vendor>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(Vendor::from_optional(raw.as_deref()))
}

impl From<String> for Vendor {
    fn from(raw: String) -> Self {
        Vendor::parse(&raw)
    }
}

impl From<Vendor> for String {
    fn from(vendor: Vendor) -> Self {
        match vendor {
            Vendor::Known(known) => known.as_str().to_string(),
            Vendor::Custom(name) => name,
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
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

    pub registration_start: Option<DateTime<Utc>>,
    pub registration_end: Option<DateTime<Utc>>,
    pub event_start: Option<DateTime<Utc>>,
    pub event_end: Option<DateTime<Utc>>,
    pub submission_deadline: Option<DateTime<Utc>>,
    pub review_start: Option<DateTime<Utc>>,
    pub review_end: Option<DateTime<Utc>>,
    pub announcement_date: Option<DateTime<Utc>>,
    pub demo_day_date: Option<DateTime<Utc>>,
    pub award_ceremony_date: Option<DateTime<Utc>>,

    pub status: EventStatus,
    #[serde(default)]
    pub is_postponed: bool,
    pub original_event_start: Option<DateTime<Utc>>,
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

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn status_input(&self) -> StatusInput {
        StatusInput::from(self)
    }

    /// Re-derives the stored status after a change and stamps `updated_at`.
    pub fn recompute_status(&mut self, now: DateTime<Utc>) {
        self.status = compute_status(&self.status_input(), now);
        self.updated_at = now;
    }

    pub fn vendor_bucket(&self) -> KnownVendor {
        self.vendor
            .as_ref()
            .map(Vendor::bucket)
            .unwrap_or(KnownVendor::Other)
    }
}

impl From<&Event> for StatusInput {
    fn from(event: &Event) -> Self {
        Self {
            is_postponed: event.is_postponed,
            registration_start: event.registration_start,
            registration_end: event.registration_end,
            event_start: event.event_start,
            event_end: event.event_end,
            review_start: event.review_start,
            review_end: event.review_end,
        }
    }
}
