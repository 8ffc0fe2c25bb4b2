//! drivelink CLI - Rewrite Google Drive share links and fetch their content.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use drivelink::normalizer::DEFAULT_PROXY_PATH;
use drivelink::url_parser::direct_url;
use drivelink::{extract_file_id, LinkNormalizer, RelayClient};

/// CLI tool for rewriting Google Drive share links.
#[derive(Parser)]
#[command(name = "drivelink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite share links into direct-access URLs.
    Normalize {
        /// URLs to rewrite (unrecognized inputs pass through unchanged).
        #[arg(required = true)]
        urls: Vec<String>,

        /// Wrap each rewritten URL behind the image-proxy endpoint.
        #[arg(long)]
        proxy: bool,

        /// Proxy endpoint path used with --proxy.
        #[arg(long, env = "DRIVELINK_PROXY_PATH", default_value = DEFAULT_PROXY_PATH)]
        proxy_path: String,

        /// Print one JSON record per input instead of bare URLs.
        #[arg(long)]
        json: bool,
    },

    /// Extract the bare file identifier from a share link.
    Id {
        /// Share URL to inspect.
        url: String,
    },

    /// Resolve a share link and download the content.
    Fetch {
        /// Share URL (or any direct URL) to fetch.
        url: String,

        /// Local destination path (file or directory).
        #[arg(long, short = 't', default_value = ".")]
        to: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize {
            urls,
            proxy,
            proxy_path,
            json,
        } => {
            let normalizer = if proxy {
                LinkNormalizer::proxied_at(proxy_path)
            } else {
                LinkNormalizer::direct()
            };

            for url in &urls {
                let link = normalizer.resolve(url);
                if json {
                    println!("{}", serde_json::to_string(&link)?);
                } else {
                    println!("{}", link);
                }
            }
        }

        Commands::Id { url } => {
            let file_id = extract_file_id(&url)
                .with_context(|| format!("Not a recognized share link: {}", url))?;
            println!("{}", file_id);
        }

        Commands::Fetch { url, to } => {
            // Ensure destination directory exists
            if to.is_dir() || to.to_string_lossy().ends_with('/') {
                std::fs::create_dir_all(&to)
                    .with_context(|| format!("Failed to create directory: {:?}", to))?;
            } else if let Some(parent) = to.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create directory: {:?}", parent))?;
                }
            }

            // Share links resolve to their canonical direct form; anything
            // else is fetched as given.
            let (target, stem) = match extract_file_id(&url) {
                Ok(file_id) => (direct_url(&file_id), file_id),
                Err(_) => (url.clone(), "download".to_string()),
            };

            print!("Downloading {}... ", target);

            let client = RelayClient::new();
            let fetched = client
                .fetch(&target, &to, &stem)
                .await
                .with_context(|| format!("Failed to fetch: {}", target))?;

            println!("OK");
            println!("Saved to: {:?} ({} bytes)", fetched.path, fetched.bytes);
        }
    }

    Ok(())
}

/// Structured logging to stderr, filter overridable via RUST_LOG.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
