use crate::models::ScanOutcome;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Return true if the given path's extension matches any of the configured
/// file_extensions patterns ("*.mp3", "mp3", ".mp3"), case-insensitive.
fn path_matches_extensions(path: &Path, exts: &[String]) -> bool {
    let ext_os = match path.extension() {
        Some(e) => e,
        None => return false,
    };
    let ext = match ext_os.to_str() {
        Some(s) => s.to_ascii_lowercase(),
        None => return false,
    };
    for pat in exts {
        let mut p = pat.trim();
        if p.is_empty() {
            continue;
        }
        // strip common prefixes: "*." or "."
        if let Some(stripped) = p.strip_prefix("*.") {
            p = stripped;
        } else if let Some(stripped) = p.strip_prefix('.') {
            p = stripped;
        }
        if ext == p.to_ascii_lowercase() {
            return true;
        }
    }
    false
}

/// Read the title field from the audio file's metadata tags.
/// Returns Ok(None) if the file has tags but no title field.
fn read_title(path: &Path) -> anyhow::Result<Option<String>> {
    use lofty::file::TaggedFileExt;
    use lofty::probe::read_from_path;
    use lofty::tag::{ItemKey, Tag};

    let tagged_file = read_from_path(path)?;

    let tag: Option<Tag> = tagged_file
        .primary_tag()
        .cloned()
        .or_else(|| tagged_file.first_tag().cloned());

    Ok(tag.and_then(|t| t.get_string(&ItemKey::TrackTitle).map(|s| s.to_string())))
}

/// Collect track titles from all audio files under `root`, recursively.
///
/// Best-effort: unreadable directories and files with unparseable metadata
/// are recorded on the outcome and skipped; files without a title tag
/// contribute nothing. No ordering guarantee on the returned titles.
pub fn scan_local_titles(root: &Path, file_extensions: &[String]) -> ScanOutcome {
    let mut out = ScanOutcome::default();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("scan: cannot read directory entry: {}", e);
                out.errors.push(e.to_string());
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !path_matches_extensions(path, file_extensions) {
            continue;
        }
        match read_title(path) {
            Ok(Some(title)) => out.titles.push(title),
            Ok(None) => {}
            Err(e) => {
                warn!("scan: cannot read metadata from {}: {}", path.display(), e);
                out.errors.push(format!("{}: {}", path.display(), e));
            }
        }
    }

    out
}
