use crate::modules::events::adapters::outbound::repository::ReadinessProbe;
use crate::modules::events::adapters::outbound::repository_in_memory::InMemoryEventRepository;
use crate::modules::events::core::event::Event;
use crate::modules::events::store::EventStore;
use crate::modules::events::use_cases::get_event::handler::GetEventHandler;
use crate::modules::events::use_cases::list_events::handler::ListEventsHandler;
use crate::modules::events::use_cases::revise_event::handler::ReviseEventHandler;
use crate::modules::events::use_cases::submit_event::handler::SubmitEventHandler;
use crate::shared::infrastructure::cache::DurableCache;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EventStore<InMemoryEventRepository>>,
    pub submit_handler: Arc<SubmitEventHandler<InMemoryEventRepository>>,
    pub revise_handler: Arc<ReviseEventHandler<InMemoryEventRepository>>,
    pub list_handler: Arc<ListEventsHandler<InMemoryEventRepository>>,
    pub get_handler: Arc<GetEventHandler<InMemoryEventRepository>>,
}

impl AppState {
    pub fn new(
        repository: Arc<InMemoryEventRepository>,
        readiness: Arc<dyn ReadinessProbe>,
        cache: Arc<dyn DurableCache>,
        fallback: Vec<Event>,
    ) -> Self {
        let store = Arc::new(EventStore::new(
            repository.clone(),
            readiness.clone(),
            cache,
            fallback,
        ));
        Self {
            submit_handler: Arc::new(SubmitEventHandler::new(repository.clone(), store.clone())),
            revise_handler: Arc::new(ReviseEventHandler::new(store.clone())),
            list_handler: Arc::new(ListEventsHandler::new(store.clone())),
            get_handler: Arc::new(GetEventHandler::new(repository, readiness, store.clone())),
            store,
        }
    }

    /// Wiring without a remote backend: the in-memory repository starts empty, so it is
    /// never reported ready and the store keeps its cached or fallback data.
    pub fn local(cache: Arc<dyn DurableCache>, fallback: Vec<Event>) -> Self {
        Self::new(
            Arc::new(InMemoryEventRepository::new()),
            Arc::new(false),
            cache,
            fallback,
        )
    }
}
