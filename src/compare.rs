use crate::api::PlaylistSource;
use crate::models::{CollectionReport, TitleReport, Track};
use std::collections::HashSet;
use tracing::info;

/// Remote titles with no exact match among the local titles.
/// Matching is raw string equality: case-sensitive, no normalization, so
/// remixes and "(feat. X)" variants count as different titles.
pub fn missing_titles(remote: &[String], local: &[String]) -> Vec<String> {
    let local_set: HashSet<&str> = local.iter().map(|s| s.as_str()).collect();
    remote
        .iter()
        .filter(|t| !local_set.contains(t.as_str()))
        .cloned()
        .collect()
}

/// Compare each playlist's titles against the local titles, one playlist at
/// a time. A failed fetch still yields a report over the partial track list,
/// with the error attached.
pub async fn compare_playlists_to_local(
    source: &dyn PlaylistSource,
    playlist_ids: &[String],
    local_titles: &[String],
) -> Vec<TitleReport> {
    let mut reports = Vec::with_capacity(playlist_ids.len());

    for playlist_id in playlist_ids {
        info!("fetching playlist {} from {}", playlist_id, source.name());
        let outcome = source.playlist_tracks(playlist_id).await;
        let remote_titles: Vec<String> =
            outcome.tracks.iter().map(|t| t.name.clone()).collect();
        let missing = missing_titles(&remote_titles, local_titles);
        reports.push(TitleReport {
            playlist_id: playlist_id.clone(),
            remote_total: remote_titles.len(),
            missing,
            fetch_error: outcome.error,
        });
    }

    reports
}

/// Verify that every track of the master playlist appears in at least one
/// of the collection playlists, by track id. Missing tracks keep their
/// name/artist from the master listing. Fetch errors are accumulated; the
/// partition is computed over whatever was fetched.
pub async fn verify_master_in_collection(
    source: &dyn PlaylistSource,
    master_id: &str,
    collection_ids: &[String],
) -> CollectionReport {
    info!("fetching master playlist {}", master_id);
    let master = source.playlist_tracks(master_id).await;
    let mut errors = Vec::new();
    if let Some(e) = master.error {
        errors.push(format!("master {}: {}", master_id, e));
    }

    let mut collection: HashSet<String> = HashSet::new();
    for playlist_id in collection_ids {
        info!("fetching collection playlist {}", playlist_id);
        let outcome = source.playlist_tracks(playlist_id).await;
        if let Some(e) = outcome.error {
            errors.push(format!("collection {}: {}", playlist_id, e));
        }
        for t in outcome.tracks {
            collection.insert(t.id);
        }
    }

    // Partition unique master ids into placed/missing, preserving order.
    let mut seen: HashSet<String> = HashSet::new();
    let mut missing: Vec<Track> = Vec::new();
    let mut placed = 0usize;
    for t in &master.tracks {
        if !seen.insert(t.id.clone()) {
            continue;
        }
        if collection.contains(&t.id) {
            placed += 1;
        } else {
            missing.push(t.clone());
        }
    }

    CollectionReport {
        missing,
        placed,
        master_total: seen.len(),
        errors,
    }
}
