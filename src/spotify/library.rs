use crate::{
    types::{Playlist, PlaylistItem, TrackItem},
    utils,
};

use super::SpotifyClient;

/// Spotify's maximum page size for the library endpoints.
pub const PAGE_LIMIT: u32 = 50;

/// Retrieves every playlist the user owns or follows.
///
/// Drains `GET /me/playlists` in API order. The returned playlists carry no
/// tracks yet; see [`get_playlist_tracks`].
///
/// # Errors
///
/// Returns the first `reqwest::Error` hit on any page.
pub async fn get_playlists(
    client: &SpotifyClient,
    token: &str,
) -> Result<Vec<Playlist>, reqwest::Error> {
    let url = utils::first_page_url(client.base_url(), "me/playlists", PAGE_LIMIT);
    client
        .drain(&url, token, |item: PlaylistItem| {
            Some(Playlist::new(item.id, item.name))
        })
        .await
}

/// Retrieves the names of all saved ("liked") tracks.
///
/// Drains `GET /me/tracks`. Items without a resolvable track name, such as
/// tracks removed from the catalogue, are skipped.
pub async fn get_liked_tracks(
    client: &SpotifyClient,
    token: &str,
) -> Result<Vec<String>, reqwest::Error> {
    let url = utils::first_page_url(client.base_url(), "me/tracks", PAGE_LIMIT);
    client.drain(&url, token, TrackItem::into_name).await
}

/// Retrieves the track names of one playlist.
///
/// Drains `GET /playlists/{id}/tracks`, skipping unnamed entries the same way
/// as [`get_liked_tracks`].
pub async fn get_playlist_tracks(
    client: &SpotifyClient,
    token: &str,
    playlist_id: &str,
) -> Result<Vec<String>, reqwest::Error> {
    let path = format!("playlists/{id}/tracks", id = playlist_id);
    let url = utils::first_page_url(client.base_url(), &path, PAGE_LIMIT);
    client.drain(&url, token, TrackItem::into_name).await
}
