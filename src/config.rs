use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub redirect_uri: String,

    /// Folder scanned for tagged audio files by the `local` command.
    pub local_folder: PathBuf,

    /// Playlist ids compared against the local folder.
    #[serde(default)]
    pub playlists: Vec<String>,

    /// Reference playlist for the `collection` command: every track in it
    /// should appear somewhere across collection_playlists.
    #[serde(default)]
    pub master_playlist: String,
    #[serde(default)]
    pub collection_playlists: Vec<String>,

    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Whitelist of file extensions to treat as audio files.
    /// Examples: ["*.mp3", "*.flac", "wav"]. Case-insensitive.
    #[serde(default = "default_file_extensions")]
    pub file_extensions: Vec<String>,
}

fn default_log_dir() -> PathBuf { "/var/log/playlist-audit".into() }

fn default_file_extensions() -> Vec<String> {
    vec![
        "*.mp3",
        "*.flac",
        "*.ogg",
        "*.wav",
        "*.mp4",
        "*.m4a",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Config {
    pub fn from_path(path: &std::path::Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&s)?;
        Ok(cfg)
    }
}
