use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, management::SearchService, success, types::PlaylistTableRow, warning,
};

pub async fn search(token: String, song_name: String) {
    let service = SearchService::from_env();

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = service.search(&token, &song_name).await;
    pb.finish_and_clear();

    let playlists = match result {
        Ok(playlists) => playlists,
        Err(e) => error!("{}", e.detail()),
    };

    if playlists.is_empty() {
        warning!("No playlist contains a track matching '{}'", song_name);
        return;
    }

    success!(
        "Found '{}' in {} playlist(s)",
        song_name,
        playlists.len()
    );

    let rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|playlist| PlaylistTableRow { playlist })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
