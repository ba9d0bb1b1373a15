use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use crate::management::SearchService;

pub async fn health(State(service): State<Arc<SearchService>>) -> Json<Value> {
    let state = service.cache_state().await;

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "cache": {
            "state": state.label(),
            "built_at": state.built_at().map(|at| at.to_rfc3339()),
        }
    }))
}
