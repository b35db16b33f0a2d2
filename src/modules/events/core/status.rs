// Event lifecycle status and the engine that derives it.
//
// Purpose
// - Map an event's optional timeline plus its postponed flag to one discrete status.
//
// Boundaries
// - Pure. No input or output, no clock. The caller supplies `now`.
// - This is the only place a status is computed. Stores and views read the stored value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum EventStatus {
    #[default]
    Upcoming,
    OpenForRegistration,
    RegistrationClosed,
    Ongoing,
    InReview,
    Completed,
    /// Set by moderation outside this crate; never produced by `compute_status`.
    Cancelled,
    Postponed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusClass {
    Active,
    Historical,
}

impl EventStatus {
    pub const ALL: [EventStatus; 8] = [
        EventStatus::Upcoming,
        EventStatus::OpenForRegistration,
        EventStatus::RegistrationClosed,
        EventStatus::Ongoing,
        EventStatus::InReview,
        EventStatus::Completed,
        EventStatus::Cancelled,
        EventStatus::Postponed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::OpenForRegistration => "OpenForRegistration",
            EventStatus::RegistrationClosed => "RegistrationClosed",
            EventStatus::Ongoing => "Ongoing",
            EventStatus::InReview => "InReview",
            EventStatus::Completed => "Completed",
            EventStatus::Cancelled => "Cancelled",
            EventStatus::Postponed => "Postponed",
        }
    }

    pub fn parse(raw: &str) -> Option<EventStatus> {
        EventStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    /// Static partition of already computed statuses. Independent of any dates.
    pub fn class(self) -> StatusClass {
        match self {
            EventStatus::Completed | EventStatus::Cancelled => StatusClass::Historical,
            EventStatus::Upcoming
            | EventStatus::OpenForRegistration
            | EventStatus::RegistrationClosed
            | EventStatus::Ongoing
            | EventStatus::InReview
            | EventStatus::Postponed => StatusClass::Active,
        }
    }

    pub fn is_active(self) -> bool {
        self.class() == StatusClass::Active
    }

    pub fn is_historical(self) -> bool {
        self.class() == StatusClass::Historical
    }

    /// No further lifecycle transition is expected from a terminal status.
    pub fn is_terminal(self) -> bool {
        matches!(self, EventStatus::Completed | EventStatus::Cancelled)
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The slice of an event the engine looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusInput {
    pub is_postponed: bool,
    pub registration_start: Option<DateTime<Utc>>,
    pub registration_end: Option<DateTime<Utc>>,
    pub event_start: Option<DateTime<Utc>>,
    pub event_end: Option<DateTime<Utc>>,
    pub review_start: Option<DateTime<Utc>>,
    pub review_end: Option<DateTime<Utc>>,
}

/// First matching rule wins. Absent instants make a rule not match, so later rules still
/// get a chance; the pre-event fallback catches events that only carry a start date.
pub fn compute_status(input: &StatusInput, now: DateTime<Utc>) -> EventStatus {
    if input.is_postponed {
        return EventStatus::Postponed;
    }

    let now = now.timestamp_millis();
    let millis = |instant: Option<DateTime<Utc>>| instant.map(|i| i.timestamp_millis());
    let registration_start = millis(input.registration_start);
    let registration_end = millis(input.registration_end);
    let event_start = millis(input.event_start);
    let event_end = millis(input.event_end);
    let review_start = millis(input.review_start);
    let review_end = millis(input.review_end);

    if registration_start.is_some_and(|start| now < start) {
        return EventStatus::Upcoming;
    }

    match (registration_start, registration_end) {
        (Some(start), Some(end)) if start <= now && now <= end => {
            return EventStatus::OpenForRegistration;
        }
        (None, Some(end)) if now <= end => return EventStatus::OpenForRegistration,
        _ => {}
    }

    if let (Some(reg_end), Some(start)) = (registration_end, event_start) {
        if reg_end < now && now < start {
            return EventStatus::RegistrationClosed;
        }
    }

    if let (Some(start), Some(end)) = (event_start, event_end) {
        if start <= now && now <= end {
            return EventStatus::Ongoing;
        }
    }

    if let (Some(end), Some(rev_end)) = (event_end, review_end) {
        if now > end && now <= rev_end && review_start.is_none_or(|rev_start| now >= rev_start) {
            return EventStatus::InReview;
        }
    }

    if event_end.is_some_and(|end| now > end) && review_end.is_none_or(|rev_end| now > rev_end) {
        return EventStatus::Completed;
    }

    if event_start.is_some_and(|start| now < start) {
        return EventStatus::Upcoming;
    }

    EventStatus::Upcoming
}
