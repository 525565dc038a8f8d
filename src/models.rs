use serde::{Deserialize, Serialize};

/// One playlist entry as returned by the remote API. `id` is the
/// remote-assigned identifier; `artist` is the primary artist only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist: String,
}

impl Track {
    pub fn new(id: impl Into<String>, name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), artist: artist.into() }
    }
}

/// Result of fetching one playlist. When `error` is set the track list is
/// whatever was accumulated before the failing request, not the full
/// playlist.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchOutcome {
    pub tracks: Vec<Track>,
    pub error: Option<String>,
}

/// Result of scanning the local folder. Files or directories that could
/// not be read are recorded in `errors` and contribute no titles.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanOutcome {
    pub titles: Vec<String>,
    pub errors: Vec<String>,
}

/// Title-based comparison of one playlist against the local folder.
#[derive(Debug, Clone, Serialize)]
pub struct TitleReport {
    pub playlist_id: String,
    pub remote_total: usize,
    pub missing: Vec<String>,
    pub fetch_error: Option<String>,
}

/// Id-based comparison of a master playlist against a playlist collection.
/// `missing` + `placed` partition the unique master track ids.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionReport {
    pub missing: Vec<Track>,
    pub placed: usize,
    pub master_total: usize,
    pub errors: Vec<String>,
}
