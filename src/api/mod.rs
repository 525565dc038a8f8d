pub mod spotify;
pub mod mock;

use crate::models::FetchOutcome;

/// PlaylistSource trait: the one operation the comparators need.
/// Implementations: spotify::SpotifyClient and mock::MockSource.
#[async_trait::async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Fetch every track of the given playlist in order. Best-effort: a
    /// request failure never propagates; the outcome carries the tracks
    /// gathered so far plus the error text.
    async fn playlist_tracks(&self, playlist_id: &str) -> FetchOutcome;

    /// Return the source's name (for logging, reports)
    fn name(&self) -> &str;

    /// Return true if the source has credentials to talk to the remote API
    fn is_authenticated(&self) -> bool;
}
