use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{error::SearchError, management::SearchService, types::SearchParams, utils, warning};

pub async fn search(
    State(service): State<Arc<SearchService>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<String>>, SearchError> {
    let (token, song_name) =
        utils::validate_params(params.token.as_deref(), params.song_name.as_deref())?;

    match service.search(token, song_name).await {
        Ok(playlists) => Ok(Json(playlists)),
        Err(e) => {
            warning!("Search for '{}' failed: {}", song_name, e.detail());
            Err(e)
        }
    }
}
