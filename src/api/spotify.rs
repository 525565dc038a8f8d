use super::PlaylistSource;
use crate::models::{FetchOutcome, Track};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use log::{debug, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use std::env;

#[derive(Debug, Clone)]
pub struct AppToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: i64, // epoch seconds
}

/// Spotify source backed by the Spotify Web API using the
/// client-credentials grant. The app token is acquired lazily on first use
/// and held inside the client value; nothing is persisted across runs.
/// Endpoints may be overridden by SPOTIFY_AUTH_BASE and SPOTIFY_API_BASE
/// env vars (useful for tests).
pub struct SpotifyClient {
    client: Client,
    client_id: String,
    client_secret: String,
    token: tokio::sync::Mutex<Option<AppToken>>,
}

impl SpotifyClient {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client: Client::new(),
            client_id,
            client_secret,
            token: tokio::sync::Mutex::new(None),
        }
    }

    pub fn from_config(cfg: &crate::config::Config) -> Self {
        Self::new(cfg.client_id.clone(), cfg.client_secret.clone())
    }

    fn is_authenticated(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
    fn name(&self) -> &str {
        "spotify"
    }

    fn auth_base() -> String {
        env::var("SPOTIFY_AUTH_BASE").unwrap_or_else(|_| "https://accounts.spotify.com".into())
    }
    fn api_base() -> String {
        // include v1 path by default
        env::var("SPOTIFY_API_BASE").unwrap_or_else(|_| "https://api.spotify.com/v1".into())
    }

    async fn request_token(&self) -> Result<AppToken> {
        let auth_header = format!(
            "Basic {}",
            general_purpose::STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret))
        );
        let url = format!("{}/api/token", Self::auth_base());
        let resp = self
            .client
            .post(&url)
            .header(AUTHORIZATION, auth_header)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow!("client credentials grant failed: {} - {}", status, body));
        }
        let j: serde_json::Value = resp.json().await?;
        let access_token = j["access_token"]
            .as_str()
            .ok_or_else(|| anyhow!("no access_token"))?
            .to_string();
        let token_type = j["token_type"].as_str().unwrap_or("Bearer").to_string();
        let expires_in = j["expires_in"].as_i64().unwrap_or(3600);
        Ok(AppToken {
            access_token,
            token_type,
            expires_at: Utc::now().timestamp() + expires_in,
        })
    }

    async fn ensure_token(&self) -> Result<()> {
        let mut lock = self.token.lock().await;
        let need_new = match &*lock {
            // re-acquire within 30s of expiry
            Some(t) => Utc::now().timestamp() + 30 >= t.expires_at,
            None => true,
        };
        if need_new {
            debug!("acquiring Spotify app token via client credentials");
            *lock = Some(self.request_token().await?);
        }
        Ok(())
    }

    async fn get_bearer(&self) -> Result<String> {
        self.ensure_token().await?;
        let lock = self.token.lock().await;
        let t = lock.as_ref().ok_or_else(|| anyhow!("no token acquired"))?;
        Ok(format!("Bearer {}", t.access_token))
    }

    /// List all tracks of a playlist, following the server-provided `next`
    /// cursor until it is absent.
    async fn playlist_tracks_internal(
        &self,
        playlist_id: &str,
        tracks: &mut Vec<Track>,
    ) -> Result<()> {
        let mut next: Option<String> = Some(format!(
            "{}/playlists/{}/tracks?fields=items(track(id,name,artists(name))),next&limit=100",
            Self::api_base(),
            playlist_id
        ));

        while let Some(url) = next {
            let bearer = self.get_bearer().await?;
            let resp = self
                .client
                .get(&url)
                .header(AUTHORIZATION, &bearer)
                .send()
                .await?;
            let status = resp.status();
            if !status.is_success() {
                let txt = resp.text().await.unwrap_or_default();
                return Err(anyhow!(
                    "list playlist tracks failed: {} => {}",
                    status,
                    txt
                ));
            }
            let j: serde_json::Value = resp.json().await?;
            if let Some(items) = j["items"].as_array() {
                for it in items {
                    let t = &it["track"];
                    // removed/region-blocked entries come back as null
                    if t.is_null() {
                        continue;
                    }
                    tracks.push(Track {
                        id: t["id"].as_str().unwrap_or("").to_string(),
                        name: t["name"].as_str().unwrap_or("").to_string(),
                        artist: t["artists"][0]["name"].as_str().unwrap_or("").to_string(),
                    });
                }
            }
            next = j["next"].as_str().map(|s| s.to_string());
        }

        Ok(())
    }
}

#[async_trait]
impl PlaylistSource for SpotifyClient {
    fn name(&self) -> &str {
        SpotifyClient::name(self)
    }
    fn is_authenticated(&self) -> bool {
        SpotifyClient::is_authenticated(self)
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> FetchOutcome {
        let mut tracks = Vec::new();
        match self.playlist_tracks_internal(playlist_id, &mut tracks).await {
            Ok(()) => FetchOutcome { tracks, error: None },
            Err(e) => {
                warn!("fetching tracks for playlist {} failed: {}", playlist_id, e);
                FetchOutcome {
                    tracks,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
