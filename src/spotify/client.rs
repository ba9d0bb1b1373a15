use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{config, types::Page};

/// Thin handle on the Spotify Web API.
///
/// Holds one pooled `reqwest::Client` and the API base URL. The bearer token
/// is passed on every call and never stored.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    base_url: String,
}

impl SpotifyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client pointed at the configured `SPOTIFY_API_URL`.
    pub fn from_env() -> Self {
        Self::new(config::spotify_apiurl())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page and decodes it.
    ///
    /// Transport errors, non-success statuses and malformed bodies all come
    /// back as `reqwest::Error`.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
    ) -> Result<Page<T>, reqwest::Error> {
        self.http
            .get(url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json::<Page<T>>()
            .await
    }

    /// Drains a cursor-paginated resource into one ordered `Vec`.
    ///
    /// Starts at `first_url` and follows each page's `next` URL until the API
    /// stops returning one. Page N+1 is requested only after page N has been
    /// decoded. Every item is passed through `extract`; items mapped to `None`
    /// are dropped.
    ///
    /// # Errors
    ///
    /// The first failing page aborts the drain; already collected items are
    /// discarded with it.
    ///
    /// # Example
    ///
    /// ```
    /// let names: Vec<String> = client
    ///     .drain(&url, token, |item: TrackItem| item.into_name())
    ///     .await?;
    /// ```
    pub async fn drain<T, U, F>(
        &self,
        first_url: &str,
        token: &str,
        mut extract: F,
    ) -> Result<Vec<U>, reqwest::Error>
    where
        T: DeserializeOwned,
        F: FnMut(T) -> Option<U>,
    {
        let mut collected = Vec::new();
        let mut next = Some(first_url.to_string());

        while let Some(url) = next {
            let page = self.get_page::<T>(&url, token).await?;
            collected.extend(page.items.into_iter().filter_map(&mut extract));
            next = page.next;
        }

        Ok(collected)
    }
}
