use axum::{Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, config, management::SearchService, success};

pub fn router(service: Arc<SearchService>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/spotify", get(api::search))
        .with_state(service)
}

pub async fn start_api_server(service: Arc<SearchService>) -> Res<()> {
    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    success!("Listening on http://{}", addr);

    axum::serve(listener, router(service)).await?;
    Ok(())
}
