use std::sync::Arc;

use crate::{config, error, info, management::SearchService, server};

pub async fn serve() {
    let service = Arc::new(SearchService::from_env());
    info!(
        "Serving playlist search against {} (cache ttl {}s)",
        config::spotify_apiurl(),
        service.cache().ttl().as_secs()
    );

    if let Err(e) = server::start_api_server(service).await {
        error!("Server stopped: {}", e);
    }
}
