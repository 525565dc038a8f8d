use super::PlaylistSource;
use crate::models::{FetchOutcome, Track};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::info;

/// A simple mock source used in tests: serves canned tracks per playlist id
/// and can simulate partially-failed fetches.
pub struct MockSource {
    playlists: HashMap<String, FetchOutcome>,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            playlists: HashMap::new(),
        }
    }

    pub fn with_playlist(mut self, id: &str, tracks: Vec<Track>) -> Self {
        self.playlists
            .insert(id.to_string(), FetchOutcome { tracks, error: None });
        self
    }

    /// Register a playlist whose fetch fails after yielding `tracks`.
    pub fn with_failing_playlist(mut self, id: &str, tracks: Vec<Track>, error: &str) -> Self {
        self.playlists.insert(
            id.to_string(),
            FetchOutcome {
                tracks,
                error: Some(error.to_string()),
            },
        );
        self
    }

    fn is_authenticated(&self) -> bool {
        true
    }
    fn name(&self) -> &str {
        "mock"
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaylistSource for MockSource {
    fn name(&self) -> &str {
        MockSource::name(self)
    }
    fn is_authenticated(&self) -> bool {
        MockSource::is_authenticated(self)
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> FetchOutcome {
        info!("MockSource: playlist_tracks {}", playlist_id);
        self.playlists.get(playlist_id).cloned().unwrap_or_else(|| FetchOutcome {
            tracks: Vec::new(),
            error: Some(format!("unknown playlist {}", playlist_id)),
        })
    }
}
