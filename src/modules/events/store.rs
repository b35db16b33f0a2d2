// Event store: the in-session collection of events.
//
// Purpose
// - Own the canonical collection for the process and mediate between local mutations and
//   refreshes from the external repository.
//
// Responsibilities
// - Rehydrate from the durable cache before the first refresh.
// - Replace the collection on a successful refresh, keep stale data on failure.
// - Serve the bundled fallback dataset when the backend is not configured, or when the
//   first refresh fails before anything was ever loaded.
// - Mirror the collection to the durable cache after every successful mutation or refresh.
//
// Concurrency
// - At most one refresh runs at a time. A call made while one is in flight returns
//   `RefreshOutcome::Skipped` without touching the repository.
// - Local mutations are applied immediately. Those made while a refresh is in flight are
//   also recorded and replayed on top of the fetched collection, so a refresh never
//   clobbers them.
//
// Notes
// - The store never recomputes statuses. It stores what it is given.
// - The fallback dataset is never written to the durable cache.
// - Cache writes happen after the state lock is released. Each write carries the revision
//   it was taken at, and a write older than the last one persisted is dropped.

use crate::modules::events::adapters::outbound::repository::{EventRepository, ReadinessProbe};
use crate::modules::events::core::event::Event;
use crate::modules::events::core::status::EventStatus;
use crate::shared::infrastructure::cache::{DurableCache, load_json, save_json};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub const EVENT_CACHE_STORAGE_KEY: &str = "event-overview-data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Fetched from the repository; holds the collection size after replay.
    Refreshed(usize),
    /// Backend not configured and nothing loaded yet, the fallback dataset was applied.
    Fallback,
    /// Backend not configured, existing data kept.
    Offline,
    /// Repository failure; existing data kept (or the fallback applied if never loaded).
    Failed(String),
    /// Another refresh was already in flight.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub events: Vec<Event>,
    pub is_loading: bool,
    pub is_syncing: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
enum Mutation {
    Add(Event),
    Update(Event),
    Remove(String),
}

impl Mutation {
    /// Returns whether the collection changed.
    fn apply(self, events: &mut Vec<Event>) -> bool {
        match self {
            Mutation::Add(event) => {
                events.retain(|existing| existing.id != event.id);
                events.insert(0, event);
                true
            }
            Mutation::Update(event) => match events.iter_mut().find(|e| e.id == event.id) {
                Some(slot) => {
                    *slot = event;
                    true
                }
                None => false,
            },
            Mutation::Remove(id) => {
                let before = events.len();
                events.retain(|e| e.id != id);
                events.len() != before
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Empty,
    Fallback,
    Live,
}

struct StoreState {
    events: Vec<Event>,
    source: Source,
    is_loading: bool,
    error: Option<String>,
    has_initialized: bool,
    pending: Option<Vec<Mutation>>,
    revision: u64,
}

impl StoreState {
    /// Bumps the revision and copies the collection for the cache, unless it is fallback data.
    fn cache_snapshot(&mut self) -> Option<(u64, Vec<Event>)> {
        if self.source == Source::Fallback {
            return None;
        }
        self.revision += 1;
        Some((self.revision, self.events.clone()))
    }
}

/// Ends a refresh, including one whose future was dropped mid-flight.
struct SyncGuard<'a, TRepository>(&'a EventStore<TRepository>)
where
    TRepository: EventRepository + 'static;

impl<TRepository> Drop for SyncGuard<'_, TRepository>
where
    TRepository: EventRepository + 'static,
{
    fn drop(&mut self) {
        self.0.write_state().pending = None;
        self.0.is_syncing.store(false, Ordering::Release);
    }
}

pub struct EventStore<TRepository>
where
    TRepository: EventRepository + 'static,
{
    repository: Arc<TRepository>,
    readiness: Arc<dyn ReadinessProbe>,
    cache: Arc<dyn DurableCache>,
    fallback: Vec<Event>,
    state: RwLock<StoreState>,
    is_syncing: AtomicBool,
    persisted_revision: Mutex<u64>,
}

impl<TRepository> EventStore<TRepository>
where
    TRepository: EventRepository + 'static,
{
    pub fn new(
        repository: Arc<TRepository>,
        readiness: Arc<dyn ReadinessProbe>,
        cache: Arc<dyn DurableCache>,
        fallback: Vec<Event>,
    ) -> Self {
        Self {
            repository,
            readiness,
            cache,
            fallback,
            state: RwLock::new(StoreState {
                events: Vec::new(),
                source: Source::Empty,
                is_loading: true,
                error: None,
                has_initialized: false,
                pending: None,
                revision: 0,
            }),
            is_syncing: AtomicBool::new(false),
            persisted_revision: Mutex::new(0),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Must be called without holding the state lock.
    fn persist(&self, snapshot: Option<(u64, Vec<Event>)>) {
        let Some((revision, events)) = snapshot else {
            return;
        };
        let mut persisted = self
            .persisted_revision
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if revision <= *persisted {
            return;
        }
        match save_json(&*self.cache, EVENT_CACHE_STORAGE_KEY, &events) {
            Ok(()) => *persisted = revision,
            Err(error) => tracing::warn!(%error, "failed to persist events cache"),
        }
    }

    /// Loads the cached collection into an empty store. Returns the number of events loaded.
    pub fn hydrate(&self) -> usize {
        let cached = match load_json::<Vec<Event>, _>(&*self.cache, EVENT_CACHE_STORAGE_KEY) {
            Ok(Some(events)) if !events.is_empty() => events,
            Ok(_) => return 0,
            Err(error) => {
                tracing::warn!(%error, "failed to read cached events");
                return 0;
            }
        };

        let mut state = self.write_state();
        if !state.events.is_empty() {
            return 0;
        }
        let count = cached.len();
        state.events = cached;
        state.source = Source::Live;
        state.is_loading = false;
        state.has_initialized = true;
        tracing::debug!(count, "rehydrated events from cache");
        count
    }

    pub async fn refresh(&self) -> RefreshOutcome {
        if self
            .is_syncing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("refresh already in flight, skipping");
            return RefreshOutcome::Skipped;
        }
        let _guard = SyncGuard(self);

        if !self.readiness.is_ready() {
            let mut state = self.write_state();
            state.is_loading = false;
            state.error = None;
            if state.events.is_empty() {
                state.events = self.fallback.clone();
                state.source = Source::Fallback;
                state.has_initialized = true;
                tracing::warn!(
                    count = state.events.len(),
                    "event backend not configured, serving fallback dataset"
                );
                return RefreshOutcome::Fallback;
            }
            return RefreshOutcome::Offline;
        }

        self.write_state().pending = Some(Vec::new());
        tracing::info!("refreshing events from repository");
        let fetched = self.repository.list().await;

        let mut state = self.write_state();
        let pending = state.pending.take().unwrap_or_default();
        state.is_loading = false;
        match fetched {
            Ok(events) => {
                state.events = events;
                let replayed = pending.len();
                for mutation in pending {
                    mutation.apply(&mut state.events);
                }
                state.source = Source::Live;
                state.error = None;
                state.has_initialized = true;
                let count = state.events.len();
                let snapshot = state.cache_snapshot();
                drop(state);
                self.persist(snapshot);
                tracing::info!(count, replayed, "events refreshed");
                RefreshOutcome::Refreshed(count)
            }
            Err(error) => {
                let message = error.to_string();
                tracing::warn!(error = %message, "event refresh failed");
                state.error = Some(message.clone());
                if !state.has_initialized {
                    state.events = self.fallback.clone();
                    state.source = Source::Fallback;
                    state.has_initialized = true;
                }
                RefreshOutcome::Failed(message)
            }
        }
    }

    fn mutate(&self, mutation: Mutation) -> bool {
        let mut state = self.write_state();
        if let Some(pending) = state.pending.as_mut() {
            pending.push(mutation.clone());
        }
        let changed = mutation.apply(&mut state.events);
        if !changed {
            return false;
        }
        state.has_initialized = true;
        if state.source == Source::Empty {
            state.source = Source::Live;
        }
        let snapshot = state.cache_snapshot();
        drop(state);
        self.persist(snapshot);
        true
    }

    /// Inserts at the front, replacing any event with the same id.
    pub fn add(&self, event: Event) {
        self.mutate(Mutation::Add(event));
    }

    /// Replaces the event with the same id. Returns false when no such event is held.
    pub fn update(&self, event: Event) -> bool {
        self.mutate(Mutation::Update(event))
    }

    pub fn remove(&self, id: &str) -> bool {
        self.mutate(Mutation::Remove(id.to_string()))
    }

    pub fn get_by_id(&self, id: &str) -> Option<Event> {
        self.read_state().events.iter().find(|e| e.id == id).cloned()
    }

    pub fn events(&self) -> Vec<Event> {
        self.read_state().events.clone()
    }

    pub fn events_with_status(&self, status: EventStatus) -> Vec<Event> {
        self.read_state()
            .events
            .iter()
            .filter(|e| e.status == status)
            .cloned()
            .collect()
    }

    pub fn is_syncing(&self) -> bool {
        self.is_syncing.load(Ordering::Acquire)
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.read_state();
        StoreSnapshot {
            events: state.events.clone(),
            is_loading: state.is_loading,
            is_syncing: self.is_syncing(),
            error: state.error.clone(),
        }
    }
}

#[cfg(test)]
mod event_store_tests {
    use super::*;
    use crate::modules::events::adapters::outbound::repository::RepositoryError;
    use crate::modules::events::adapters::outbound::repository_in_memory::InMemoryEventRepository;
    use crate::modules::events::adapters::outbound::row::CreateEventInput;
    use crate::shared::infrastructure::cache::CacheError;
    use crate::shared::infrastructure::cache::in_memory::InMemoryCache;
    use crate::tests::fixtures::events::{EventBuilder, make_event};
    use async_trait::async_trait;
    use rstest::{fixture, rstest};
    use tokio::sync::Notify;

    fn ids(events: &[Event]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    fn fallback() -> Vec<Event> {
        vec![
            make_event("fallback-a", EventStatus::Upcoming),
            make_event("fallback-b", EventStatus::Completed),
        ]
    }

    fn cached(cache: &InMemoryCache) -> Option<Vec<Event>> {
        load_json(cache, EVENT_CACHE_STORAGE_KEY).unwrap()
    }

    type BeforeEachReturn = (Arc<InMemoryEventRepository>, Arc<InMemoryCache>);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let repository = InMemoryEventRepository::with_events([
            EventBuilder::new().id("remote-1").event_start("2024-06-01").build(),
            EventBuilder::new().id("remote-2").event_start("2024-07-01").build(),
        ]);
        (Arc::new(repository), Arc::new(InMemoryCache::new()))
    }

    fn store_with<R: EventRepository + 'static>(
        repository: Arc<R>,
        ready: bool,
        cache: Arc<InMemoryCache>,
    ) -> EventStore<R> {
        EventStore::new(repository, Arc::new(ready), cache, fallback())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replace_the_collection_on_refresh(before_each: BeforeEachReturn) {
        let (repository, cache) = before_each;
        let store = store_with(repository, true, cache.clone());
        store.add(make_event("local", EventStatus::Upcoming));

        let outcome = store.refresh().await;

        assert_eq!(outcome, RefreshOutcome::Refreshed(2));
        assert_eq!(ids(&store.events()), vec!["remote-1", "remote-2"]);
        let snapshot = store.snapshot();
        assert!(!snapshot.is_loading);
        assert!(!snapshot.is_syncing);
        assert_eq!(snapshot.error, None);
        assert_eq!(ids(&cached(&cache).unwrap()), vec!["remote-1", "remote-2"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_start_loading_until_the_first_refresh(before_each: BeforeEachReturn) {
        let (repository, cache) = before_each;
        let store = store_with(repository, true, cache);
        assert!(store.snapshot().is_loading);
        store.refresh().await;
        assert!(!store.snapshot().is_loading);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_serve_the_fallback_when_not_configured(before_each: BeforeEachReturn) {
        let (repository, cache) = before_each;
        let store = store_with(repository, false, cache.clone());

        assert_eq!(store.refresh().await, RefreshOutcome::Fallback);
        assert_eq!(ids(&store.events()), vec!["fallback-a", "fallback-b"]);
        assert!(!store.snapshot().is_loading);
        assert_eq!(cached(&cache), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_local_data_when_not_configured(before_each: BeforeEachReturn) {
        let (repository, cache) = before_each;
        let store = store_with(repository, false, cache);
        store.add(make_event("local", EventStatus::Upcoming));

        assert_eq!(store.refresh().await, RefreshOutcome::Offline);
        assert_eq!(ids(&store.events()), vec!["local"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fall_back_when_the_first_refresh_fails() {
        let mut repository = InMemoryEventRepository::new();
        repository.toggle_offline();
        let store = store_with(Arc::new(repository), true, Arc::new(InMemoryCache::new()));

        let outcome = store.refresh().await;

        assert_eq!(
            outcome,
            RefreshOutcome::Failed("Failed to fetch events: Event repository offline".into())
        );
        assert_eq!(ids(&store.events()), vec!["fallback-a", "fallback-b"]);
        assert_eq!(
            store.snapshot().error.as_deref(),
            Some("Failed to fetch events: Event repository offline")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_stale_data_when_a_later_refresh_fails() {
        let mut repository = InMemoryEventRepository::new();
        repository.toggle_offline();
        let cache = Arc::new(InMemoryCache::new());
        let store = store_with(Arc::new(repository), true, cache.clone());
        store.add(make_event("local", EventStatus::Ongoing));

        assert!(matches!(store.refresh().await, RefreshOutcome::Failed(_)));
        assert_eq!(ids(&store.events()), vec!["local"]);
        assert!(store.snapshot().error.is_some());
        assert_eq!(ids(&cached(&cache).unwrap()), vec!["local"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_clear_a_previous_error_after_a_successful_refresh(
        before_each: BeforeEachReturn,
    ) {
        let (repository, cache) = before_each;
        let store = store_with(repository, true, cache);
        store.write_state().error = Some("Failed to fetch events: timeout".into());

        store.refresh().await;

        assert_eq!(store.snapshot().error, None);
    }

    #[rstest]
    fn it_should_rehydrate_from_the_cache(before_each: BeforeEachReturn) {
        let (repository, _) = before_each;
        let events = vec![make_event("cached", EventStatus::Upcoming)];
        let cache = InMemoryCache::new();
        save_json(&cache, EVENT_CACHE_STORAGE_KEY, &events).unwrap();
        let store = store_with(repository, true, Arc::new(cache));

        assert_eq!(store.hydrate(), 1);
        assert_eq!(store.events(), events);
        assert!(!store.snapshot().is_loading);
    }

    #[rstest]
    fn it_should_ignore_an_empty_or_corrupt_cache(before_each: BeforeEachReturn) {
        let (repository, _) = before_each;
        let empty = store_with(
            repository.clone(),
            true,
            Arc::new(InMemoryCache::with_entry(EVENT_CACHE_STORAGE_KEY, "[]")),
        );
        assert_eq!(empty.hydrate(), 0);
        assert!(empty.snapshot().is_loading);

        let corrupt = store_with(
            repository,
            true,
            Arc::new(InMemoryCache::with_entry(EVENT_CACHE_STORAGE_KEY, "{not json")),
        );
        assert_eq!(corrupt.hydrate(), 0);
        assert!(corrupt.events().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_fall_back_after_a_rehydration(before_each: BeforeEachReturn) {
        let mut repository = InMemoryEventRepository::new();
        repository.toggle_offline();
        let (_, cache) = before_each;
        save_json(
            &*cache,
            EVENT_CACHE_STORAGE_KEY,
            &vec![make_event("cached", EventStatus::Upcoming)],
        )
        .unwrap();
        let store = store_with(Arc::new(repository), true, cache);
        store.hydrate();

        assert!(matches!(store.refresh().await, RefreshOutcome::Failed(_)));
        assert_eq!(ids(&store.events()), vec!["cached"]);
    }

    #[rstest]
    fn it_should_add_at_the_front_and_deduplicate(before_each: BeforeEachReturn) {
        let (repository, cache) = before_each;
        let store = store_with(repository, true, cache.clone());
        store.add(make_event("a", EventStatus::Upcoming));
        store.add(make_event("b", EventStatus::Upcoming));
        store.add(make_event("a", EventStatus::Ongoing));

        assert_eq!(ids(&store.events()), vec!["a", "b"]);
        assert_eq!(store.get_by_id("a").unwrap().status, EventStatus::Ongoing);
        assert_eq!(ids(&cached(&cache).unwrap()), vec!["a", "b"]);
    }

    #[rstest]
    fn it_should_update_only_known_events(before_each: BeforeEachReturn) {
        let (repository, cache) = before_each;
        let store = store_with(repository, true, cache);
        store.add(make_event("a", EventStatus::Upcoming));

        assert!(store.update(make_event("a", EventStatus::Completed)));
        assert!(!store.update(make_event("missing", EventStatus::Completed)));
        assert_eq!(store.events().len(), 1);
        assert_eq!(store.get_by_id("a").unwrap().status, EventStatus::Completed);
    }

    #[rstest]
    fn it_should_remove_events_by_id(before_each: BeforeEachReturn) {
        let (repository, cache) = before_each;
        let store = store_with(repository, true, cache);
        store.add(make_event("a", EventStatus::Upcoming));
        store.add(make_event("b", EventStatus::Upcoming));

        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert_eq!(ids(&store.events()), vec!["b"]);
    }

    #[rstest]
    fn it_should_return_none_for_an_unknown_id(before_each: BeforeEachReturn) {
        let (repository, cache) = before_each;
        let store = store_with(repository, true, cache);
        assert_eq!(store.get_by_id("missing"), None);
    }

    #[rstest]
    fn it_should_select_events_by_status(before_each: BeforeEachReturn) {
        let (repository, cache) = before_each;
        let store = store_with(repository, true, cache);
        store.add(make_event("a", EventStatus::Ongoing));
        store.add(make_event("b", EventStatus::Completed));
        store.add(make_event("c", EventStatus::Ongoing));

        assert_eq!(ids(&store.events_with_status(EventStatus::Ongoing)), vec!["c", "a"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_working_when_the_cache_is_offline(before_each: BeforeEachReturn) {
        let (repository, _) = before_each;
        let mut cache = InMemoryCache::new();
        cache.toggle_offline();
        let store = store_with(repository, true, Arc::new(cache));

        store.add(make_event("a", EventStatus::Upcoming));
        assert_eq!(ids(&store.events()), vec!["a"]);
        assert_eq!(store.refresh().await, RefreshOutcome::Refreshed(2));
    }

    /// Holds `list` open until released, so a test can act while a refresh is in flight.
    struct GatedRepository {
        events: Vec<Event>,
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl EventRepository for GatedRepository {
        async fn list(&self) -> Result<Vec<Event>, RepositoryError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(self.events.clone())
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<Event>, RepositoryError> {
            Ok(self.events.iter().find(|e| e.id == id).cloned())
        }

        async fn create(&self, _input: CreateEventInput) -> Result<Event, RepositoryError> {
            Err(RepositoryError::Create("read only".into()))
        }
    }

    fn gated() -> Arc<GatedRepository> {
        Arc::new(GatedRepository {
            events: vec![
                make_event("remote-1", EventStatus::Upcoming),
                make_event("remote-2", EventStatus::Upcoming),
            ],
            entered: Notify::new(),
            release: Notify::new(),
        })
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_skip_a_refresh_while_another_is_in_flight() {
        let repository = gated();
        let store = Arc::new(store_with(
            repository.clone(),
            true,
            Arc::new(InMemoryCache::new()),
        ));

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.refresh().await }
        });
        repository.entered.notified().await;

        assert!(store.snapshot().is_syncing);
        assert_eq!(store.refresh().await, RefreshOutcome::Skipped);

        repository.release.notify_one();
        assert_eq!(first.await.unwrap(), RefreshOutcome::Refreshed(2));
        assert!(!store.is_syncing());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replay_local_mutations_made_during_a_refresh() {
        let repository = gated();
        let store = Arc::new(store_with(
            repository.clone(),
            true,
            Arc::new(InMemoryCache::new()),
        ));
        store.add(make_event("remote-2", EventStatus::Upcoming));

        let refresh = tokio::spawn({
            let store = store.clone();
            async move { store.refresh().await }
        });
        repository.entered.notified().await;

        store.add(make_event("local", EventStatus::OpenForRegistration));
        store.update(make_event("remote-2", EventStatus::Ongoing));
        repository.release.notify_one();

        assert_eq!(refresh.await.unwrap(), RefreshOutcome::Refreshed(3));
        assert_eq!(ids(&store.events()), vec!["local", "remote-1", "remote-2"]);
        assert_eq!(
            store.get_by_id("remote-2").unwrap().status,
            EventStatus::Ongoing
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_stop_recording_mutations_when_a_refresh_is_abandoned() {
        let store = store_with(gated(), true, Arc::new(InMemoryCache::new()));

        let abandoned =
            tokio::time::timeout(std::time::Duration::from_millis(20), store.refresh()).await;
        assert!(abandoned.is_err());
        assert!(!store.is_syncing());

        store.add(make_event("local", EventStatus::Upcoming));
        assert!(store.read_state().pending.is_none());
        assert_eq!(ids(&store.events()), vec!["local"]);
    }

    /// Reads the store back from inside `write`, which deadlocks if the state lock is held.
    struct ReentrantCache {
        inner: InMemoryCache,
        store: std::sync::OnceLock<Arc<EventStore<InMemoryEventRepository>>>,
        seen: Mutex<Vec<usize>>,
    }

    impl DurableCache for ReentrantCache {
        fn read(&self, key: &str) -> Result<Option<String>, CacheError> {
            self.inner.read(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), CacheError> {
            if let Some(store) = self.store.get() {
                self.seen.lock().unwrap().push(store.events().len());
            }
            self.inner.write(key, value)
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_write_the_cache_outside_the_state_lock(before_each: BeforeEachReturn) {
        let (repository, _) = before_each;
        let cache = Arc::new(ReentrantCache {
            inner: InMemoryCache::new(),
            store: std::sync::OnceLock::new(),
            seen: Mutex::new(Vec::new()),
        });
        let store = Arc::new(EventStore::new(
            repository,
            Arc::new(true),
            cache.clone(),
            fallback(),
        ));
        assert!(cache.store.set(store.clone()).is_ok());

        store.add(make_event("local", EventStatus::Upcoming));
        assert_eq!(store.refresh().await, RefreshOutcome::Refreshed(2));

        assert_eq!(*cache.seen.lock().unwrap(), vec![1, 2]);
    }

    #[rstest]
    fn it_should_not_overwrite_the_cache_with_an_older_revision(before_each: BeforeEachReturn) {
        let (repository, cache) = before_each;
        let store = store_with(repository, true, cache.clone());
        store.add(make_event("a", EventStatus::Upcoming));
        store.add(make_event("b", EventStatus::Upcoming));

        store.persist(Some((1, vec![make_event("stale", EventStatus::Upcoming)])));

        assert_eq!(ids(&cached(&cache).unwrap()), vec!["b", "a"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_allow_a_new_refresh_after_completion(before_each: BeforeEachReturn) {
        let (repository, cache) = before_each;
        let store = store_with(repository, true, cache);
        assert_eq!(store.refresh().await, RefreshOutcome::Refreshed(2));
        assert_eq!(store.refresh().await, RefreshOutcome::Refreshed(2));
    }
}
