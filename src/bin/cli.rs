use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use playlist_local_audit as lib;
use lib::api::{spotify::SpotifyClient, PlaylistSource};
use lib::config::Config;
use std::path::{Path, PathBuf};
use tracing::subscriber as tracing_subscriber_global;
use tracing_appender::rolling::RollingFileAppender;
use tracing_log::LogTracer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "playlist-local-audit", version)]
struct Cli {
    /// Path to config TOML
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the configured playlists against the local music folder (by title)
    Local,
    /// Verify the master playlist against the collection playlists (by track id)
    Collection,
    /// Validate config file and exit
    ConfigValidate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // Resolve config path: explicit --config overrides; otherwise prefer
    // system-wide /etc/playlist-audit/config.toml and fall back to the
    // repository example config for local/dev usage.
    let resolved_config_path: PathBuf = match &cli.config {
        Some(p) => p.clone(),
        None => {
            let etc_path = Path::new("/etc/playlist-audit/config.toml");
            if etc_path.exists() {
                etc_path.to_path_buf()
            } else {
                PathBuf::from("config/example-config.toml")
            }
        }
    };

    let cfg = Config::from_path(&resolved_config_path)
        .with_context(|| format!("loading config from {}", resolved_config_path.display()))?;

    // Initialize log->tracing bridge and structured logging.
    // Logs go to both stdout and a daily-rotated file in cfg.log_dir.
    let _ = LogTracer::init();
    let file_appender: RollingFileAppender =
        tracing_appender::rolling::daily(&cfg.log_dir, "playlist-audit.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Honor RUST_LOG if set, otherwise default to info.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer().with_writer(non_blocking);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer);

    tracing_subscriber_global::set_global_default(subscriber)
        .expect("failed to set global tracing subscriber");

    match cli.command {
        Commands::Local => {
            let scanned = lib::scan::scan_local_titles(&cfg.local_folder, &cfg.file_extensions);
            println!(
                "Loaded {} local track title(s) from {}",
                scanned.titles.len(),
                cfg.local_folder.display()
            );
            if !scanned.errors.is_empty() {
                eprintln!(
                    "{} file(s) or folder(s) could not be read during the scan.",
                    scanned.errors.len()
                );
            }

            let source = SpotifyClient::from_config(&cfg);
            if !source.is_authenticated() {
                eprintln!("Spotify client_id/client_secret missing from config; remote fetches will fail.");
            }

            let reports =
                lib::compare::compare_playlists_to_local(&source, &cfg.playlists, &scanned.titles)
                    .await;
            for report in &reports {
                println!("\nComparison for playlist {}:", report.playlist_id);
                if let Some(err) = &report.fetch_error {
                    eprintln!("  (fetch incomplete: {})", err);
                }
                println!(
                    "  {} of {} remote track(s) missing from the local folder:",
                    report.missing.len(),
                    report.remote_total
                );
                for title in &report.missing {
                    println!("  - {}", title);
                }
            }
        }
        Commands::Collection => {
            let source = SpotifyClient::from_config(&cfg);
            if !source.is_authenticated() {
                eprintln!("Spotify client_id/client_secret missing from config; remote fetches will fail.");
            }

            let report = lib::compare::verify_master_in_collection(
                &source,
                &cfg.master_playlist,
                &cfg.collection_playlists,
            )
            .await;

            for err in &report.errors {
                eprintln!("(fetch incomplete: {})", err);
            }
            if report.missing.is_empty() {
                println!("All tracks from the master playlist are present in the collection.");
            } else {
                println!("The following tracks are missing from the collection:");
                for t in &report.missing {
                    println!("- {} by {}", t.name, t.artist);
                }
            }
            println!(
                "{} track(s) from the master playlist have been placed into the collection.",
                report.placed
            );
            println!(
                "{} track(s) are still missing from the collection.",
                report.missing.len()
            );
        }
        Commands::ConfigValidate => {
            match Config::from_path(resolved_config_path.as_path()) {
                Ok(_) => println!("OK"),
                Err(e) => {
                    eprintln!("Config validation failed: {}", e);
                    std::process::exit(2);
                }
            }
        }
    }

    Ok(())
}
