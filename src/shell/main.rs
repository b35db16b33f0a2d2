use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use event_overview::modules::events::adapters::outbound::fallback::fallback_events;
use event_overview::shared::infrastructure::cache::file::FileCache;
use event_overview::shell;
use event_overview::shell::config::AppConfig;
use event_overview::shell::graphql::{AppSchema, build_schema};
use event_overview::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // TODO: wire a remote EventRepository adapter and its readiness here once one exists.
    let cache = Arc::new(FileCache::new(config.cache_dir.clone()));
    let state = AppState::local(cache, fallback_events());

    let hydrated = state.store.hydrate();
    tracing::info!(hydrated, cache_dir = %config.cache_dir.display(), "store hydrated");

    let store = state.store.clone();
    tokio::spawn(async move {
        let outcome = store.refresh().await;
        tracing::info!(?outcome, "initial refresh finished");
    });

    let schema = build_schema(state.clone());

    let app = Router::new()
        .merge(shell::http::router(state))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("HTTP endpoint: http://{}/events", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
