//! Error types for playlist searches.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::types::ErrorBody;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum SearchError {
    /// Token or song name missing
    #[error("Invalid request parameters")]
    InvalidRequest,

    /// Any failure talking to, or parsing responses from, the Spotify API
    #[error("Error fetching playlists")]
    FetchFailure(#[source] BoxError),
}

impl SearchError {
    pub fn status(&self) -> StatusCode {
        match self {
            SearchError::InvalidRequest => StatusCode::BAD_REQUEST,
            SearchError::FetchFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message plus its full source chain, for server-side logs.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            detail.push_str(": ");
            detail.push_str(&err.to_string());
            source = err.source();
        }
        detail
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::FetchFailure(Box::new(err))
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
