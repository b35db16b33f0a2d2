use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::modules::events::core::event::Event;
use crate::modules::events::core::filters::{
    EventStats, event_stats, filter_events, sort_active, sort_browse, sort_historical,
};
use crate::modules::events::store::EventStore;
use crate::modules::events::use_cases::list_events::query::{EventView, ListEventsQuery};
use crate::shared::core::pagination::{Page, normalize_page_size, paginate};
use std::sync::Arc;

/// Derived views over the store. Filter first, then partition and sort, then paginate.
pub struct ListEventsHandler<TRepository>
where
    TRepository: EventRepository + 'static,
{
    store: Arc<EventStore<TRepository>>,
}

impl<TRepository> ListEventsHandler<TRepository>
where
    TRepository: EventRepository + 'static,
{
    pub fn new(store: Arc<EventStore<TRepository>>) -> Self {
        Self { store }
    }

    pub fn handle(&self, query: &ListEventsQuery) -> Page<Event> {
        let mut events = filter_events(&self.store.events(), &query.filter);
        match query.view {
            EventView::All => sort_browse(&mut events),
            EventView::Active => {
                events.retain(|e| e.status.is_active());
                sort_active(&mut events);
            }
            EventView::Historical => {
                events.retain(|e| e.status.is_historical());
                sort_historical(&mut events);
            }
        }
        paginate(&events, query.page, normalize_page_size(query.page_size))
    }

    pub fn stats(&self) -> EventStats {
        event_stats(&self.store.events())
    }
}
