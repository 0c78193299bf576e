use std::sync::Arc;

use axum::{Router, http::Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{
    Result,
    api::{self, AppState},
    config::ClimateApiConfig,
    store::ClimateStore,
};

/// Full application router with CORS and request tracing
pub fn app(store: Arc<dyn ClimateStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    api::router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState::new(store))
}

pub async fn run(config: &ClimateApiConfig, store: Arc<dyn ClimateStore>) -> Result<()> {
    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server running at http://{}", listener.local_addr()?);
    axum::serve(listener, app(store)).await?;
    Ok(())
}
