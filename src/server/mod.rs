pub mod handlers;
pub mod types;

use crate::{Result, config::Config, extraction::Extractor};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const GENERATE_PATH: &str = "/api/generate";

/// Builds the application router. Every method other than POST on the
/// generate path answers 405 with a JSON error body.
pub fn router(extractor: Arc<Extractor>) -> Router {
    let app_state = handlers::AppState { extractor };

    Router::new()
        .route(
            GENERATE_PATH,
            post(handlers::generate).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    if config.upstream.api_key.is_none() {
        warn!("No API key configured; generate requests will fail until one is set");
    }

    let extractor = Extractor::from_config(&config.upstream)?;
    let app = router(Arc::new(extractor));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
