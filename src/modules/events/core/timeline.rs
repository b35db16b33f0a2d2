// Chronological milestones of an event and whether registration is currently available.

use crate::modules::events::core::event::Event;
use crate::modules::events::core::status::EventStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MilestoneKind {
    RegistrationOpens,
    RegistrationCloses,
    EventStarts,
    EventEnds,
    SubmissionDeadline,
    ReviewStarts,
    ReviewEnds,
    Announcement,
    DemoDay,
    AwardCeremony,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub kind: MilestoneKind,
    pub at: DateTime<Utc>,
    pub is_past: bool,
}

/// Present milestones in ascending order. Ties keep declaration order.
pub fn timeline(event: &Event, now: DateTime<Utc>) -> Vec<Milestone> {
    let candidates = [
        (MilestoneKind::RegistrationOpens, event.registration_start),
        (MilestoneKind::RegistrationCloses, event.registration_end),
        (MilestoneKind::EventStarts, event.event_start),
        (MilestoneKind::EventEnds, event.event_end),
        (MilestoneKind::SubmissionDeadline, event.submission_deadline),
        (MilestoneKind::ReviewStarts, event.review_start),
        (MilestoneKind::ReviewEnds, event.review_end),
        (MilestoneKind::Announcement, event.announcement_date),
        (MilestoneKind::DemoDay, event.demo_day_date),
        (MilestoneKind::AwardCeremony, event.award_ceremony_date),
    ];

    let mut milestones: Vec<Milestone> = candidates
        .into_iter()
        .filter_map(|(kind, at)| {
            at.map(|at| Milestone {
                kind,
                at,
                is_past: at < now,
            })
        })
        .collect();
    milestones.sort_by_key(|m| m.at);
    milestones
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationAvailability {
    pub is_open: bool,
    pub is_closed: bool,
}

/// Combines the stored status with the live registration window.
pub fn registration_availability(event: &Event, now: DateTime<Utc>) -> RegistrationAvailability {
    let within_window = match (event.registration_start, event.registration_end) {
        (Some(start), Some(end)) => start <= now && now <= end,
        _ => false,
    };
    let halted = matches!(
        event.status,
        EventStatus::Cancelled | EventStatus::Postponed
    );

    let is_open = event.status == EventStatus::OpenForRegistration || (within_window && !halted);
    let is_closed = matches!(
        event.status,
        EventStatus::RegistrationClosed | EventStatus::Completed
    ) || event.registration_end.is_some_and(|end| now > end);

    RegistrationAvailability { is_open, is_closed }
}
