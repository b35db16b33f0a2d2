use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::events::use_cases::get_event::inbound::graphql::GetEventQueryRoot;
use crate::modules::events::use_cases::list_events::inbound::graphql::ListEventsQueryRoot;
use crate::modules::events::use_cases::submit_event::inbound::graphql::SubmitEventMutationRoot;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListEventsQueryRoot, GetEventQueryRoot);

#[derive(MergedObject, Default)]
pub struct MutationRoot(SubmitEventMutationRoot);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
