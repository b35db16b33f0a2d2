// Filtering, categorisation and ordering of an event collection.
//
// Boundaries
// - Works on already computed statuses. Never looks at the clock.
// - Every function preserves the relative order of its input unless it is a sort.

use crate::modules::events::core::event::{Event, EventType, KnownVendor};
use crate::modules::events::core::status::EventStatus;
use crate::shared::core::pagination::{Page, paginate};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Which text fields a search looks at. Listing views search the description, the browse
/// view searches the organizer instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchFields {
    #[default]
    TitleDescriptionTags,
    TitleOrganizerTags,
}

/// `None` on any criterion means "All". Criteria compose with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub status: Option<EventStatus>,
    pub event_type: Option<EventType>,
    pub vendor: Option<KnownVendor>,
    pub search: Option<String>,
    pub search_fields: SearchFields,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        if self.status.is_some_and(|status| event.status != status) {
            return false;
        }
        if self.event_type.is_some_and(|kind| event.event_type != kind) {
            return false;
        }
        if self.vendor.is_some_and(|vendor| event.vendor_bucket() != vendor) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => self.matches_text(event, &query.to_lowercase()),
            _ => true,
        }
    }

    fn matches_text(&self, event: &Event, query: &str) -> bool {
        let contains = |text: &str| text.to_lowercase().contains(query);
        let second_field = match self.search_fields {
            SearchFields::TitleDescriptionTags => &event.description,
            SearchFields::TitleOrganizerTags => &event.organizer_name,
        };
        contains(&event.title) || contains(second_field) || event.tags.iter().any(|t| contains(t))
    }
}

pub fn filter_events(events: &[Event], filter: &EventFilter) -> Vec<Event> {
    events.iter().filter(|e| filter.matches(e)).cloned().collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categorized {
    pub active: Vec<Event>,
    pub historical: Vec<Event>,
}

pub fn categorize(events: &[Event]) -> Categorized {
    let (historical, active) = events
        .iter()
        .cloned()
        .partition(|event| event.status.is_historical());
    Categorized { active, historical }
}

/// Ascending by event start; events without a start go last.
pub fn sort_active(events: &mut [Event]) {
    events.sort_by_key(|e| e.event_start.map_or(i64::MAX, |at| at.timestamp_millis()));
}

/// Descending by event end; events without an end count as the epoch, so they go last.
pub fn sort_historical(events: &mut [Event]) {
    events.sort_by_key(|e| Reverse(e.event_end.map_or(0, |at| at.timestamp_millis())));
}

/// Ascending by event start, falling back to the creation time.
pub fn sort_browse(events: &mut [Event]) {
    events.sort_by_key(|e| e.event_start.unwrap_or(e.created_at));
}

pub fn active_page(events: &[Event], page: usize, page_size: usize) -> Page<Event> {
    let mut active: Vec<Event> = events
        .iter()
        .filter(|e| e.status.is_active())
        .cloned()
        .collect();
    sort_active(&mut active);
    paginate(&active, page, page_size)
}

pub fn historical_page(events: &[Event], page: usize, page_size: usize) -> Page<Event> {
    let mut historical: Vec<Event> = events
        .iter()
        .filter(|e| e.status.is_historical())
        .cloned()
        .collect();
    sort_historical(&mut historical);
    paginate(&historical, page, page_size)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub total: usize,
    pub active: usize,
    pub historical: usize,
    pub by_status: BTreeMap<EventStatus, usize>,
}

pub fn event_stats(events: &[Event]) -> EventStats {
    let mut stats = EventStats {
        total: events.len(),
        ..EventStats::default()
    };
    for event in events {
        *stats.by_status.entry(event.status).or_default() += 1;
        if event.status.is_active() {
            stats.active += 1;
        } else {
            stats.historical += 1;
        }
    }
    stats
}
