use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::events::use_cases::list_events::inbound::graphql::GqlEvent;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetEventQueryRoot;

#[Object]
impl GetEventQueryRoot {
    async fn event(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let event = state
            .get_handler
            .handle(&id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(event.map(Into::into))
    }
}
