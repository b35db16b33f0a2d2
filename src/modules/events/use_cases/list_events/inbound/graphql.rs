use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::events::core::event::Event;
use crate::modules::events::core::filters::{EventFilter, EventStats};
use crate::modules::events::core::status::EventStatus;
use crate::modules::events::use_cases::list_events::query::{EventView, ListEventsQuery};
use crate::shared::core::pagination::Page;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlEvent {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub event_type: String,
    pub vendor: Option<String>,
    pub tags: Vec<String>,
    pub location_type: String,
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
    pub status: String,
    pub is_active: bool,
    pub is_postponed: bool,
    pub original_event_start: Option<DateTime<Utc>>,
    pub original_event_end: Option<DateTime<Utc>>,
    pub postponed_reason: Option<String>,
    pub organizer_name: String,
    pub organizer_type: String,
    pub organizer_avatar_url: Option<String>,
    pub organizer_contact: Option<String>,
    pub registration_url: Option<String>,
    pub official_site_url: Option<String>,
    pub livestream_url: Option<String>,
    pub recording_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            event_type: e.event_type.as_str().to_string(),
            vendor: e.vendor.map(String::from),
            location_type: e.location_type.as_str().to_string(),
            status: e.status.as_str().to_string(),
            is_active: e.status.is_active(),
            organizer_type: e.organizer_type.as_str().to_string(),
            id: e.id,
            title: e.title,
            subtitle: e.subtitle,
            description: e.description,
            tags: e.tags,
            location_detail: e.location_detail,
            poster_url: e.poster_url,
            registration_start: e.registration_start,
            registration_end: e.registration_end,
            event_start: e.event_start,
            event_end: e.event_end,
            submission_deadline: e.submission_deadline,
            review_start: e.review_start,
            review_end: e.review_end,
            announcement_date: e.announcement_date,
            demo_day_date: e.demo_day_date,
            award_ceremony_date: e.award_ceremony_date,
            is_postponed: e.is_postponed,
            original_event_start: e.original_event_start,
            original_event_end: e.original_event_end,
            postponed_reason: e.postponed_reason,
            organizer_name: e.organizer_name,
            organizer_avatar_url: e.organizer_avatar_url,
            organizer_contact: e.organizer_contact,
            registration_url: e.registration_url,
            official_site_url: e.official_site_url,
            livestream_url: e.livestream_url,
            recording_url: e.recording_url,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlEventPage {
    pub items: Vec<GqlEvent>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub has_more: bool,
}

impl From<Page<Event>> for GqlEventPage {
    fn from(page: Page<Event>) -> Self {
        Self {
            total: page.total as u64,
            page: page.page as u64,
            page_size: page.page_size as u64,
            total_pages: page.total_pages as u64,
            has_more: page.has_more,
            items: page.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlStatusCount {
    pub status: String,
    pub count: u64,
}

#[derive(SimpleObject)]
pub struct GqlEventStats {
    pub total: u64,
    pub active: u64,
    pub historical: u64,
    pub by_status: Vec<GqlStatusCount>,
}

impl From<EventStats> for GqlEventStats {
    fn from(stats: EventStats) -> Self {
        Self {
            total: stats.total as u64,
            active: stats.active as u64,
            historical: stats.historical as u64,
            by_status: stats
                .by_status
                .into_iter()
                .map(|(status, count)| GqlStatusCount {
                    status: status.as_str().to_string(),
                    count: count as u64,
                })
                .collect(),
        }
    }
}

#[derive(Default)]
pub struct ListEventsQueryRoot;

#[Object]
impl ListEventsQueryRoot {
    async fn events(
        &self,
        context: &Context<'_>,
        view: Option<String>,
        status: Option<String>,
        search: Option<String>,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> GqlResult<GqlEventPage> {
        let state = context.data_unchecked::<AppState>();
        let view = match view {
            Some(raw) => EventView::parse(&raw)
                .ok_or_else(|| async_graphql::Error::new(format!("invalid view: {raw}")))?,
            None => EventView::All,
        };
        let status = match status {
            Some(raw) => Some(
                EventStatus::parse(&raw)
                    .ok_or_else(|| async_graphql::Error::new(format!("invalid status: {raw}")))?,
            ),
            None => None,
        };
        let query = ListEventsQuery {
            view,
            filter: EventFilter {
                status,
                search,
                search_fields: view.search_fields(),
                ..EventFilter::default()
            },
            page: page.unwrap_or(1).max(1) as usize,
            page_size: page_size.map(|size| size.max(1) as usize),
        };
        Ok(state.list_handler.handle(&query).into())
    }

    async fn event_stats(&self, context: &Context<'_>) -> GqlEventStats {
        let state = context.data_unchecked::<AppState>();
        state.list_handler.stats().into()
    }
}
