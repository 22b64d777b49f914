use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use songbook_shared::config::{self, Config};
use songbook_youtube as yt;

#[derive(Parser)]
#[command(author, version, about = "Add a list of videos to a YouTube playlist", long_about = None)]
struct Args {
    /// File containing comma-separated video IDs
    ids_file: PathBuf,

    /// The playlist to add the videos to
    playlist_id: String,

    /// Config file to read the API endpoint from
    #[arg(long, default_value = config::DEFAULT_FILENAME)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("songbook=info")),
        )
        .init();

    let args = Args::parse();
    let config = config::load_config::<Config>(&args.config)?.playlist;

    let text = std::fs::read_to_string(&args.ids_file)
        .with_context(|| format!("Failed to read {}", args.ids_file.display()))?;
    // All IDs are validated before prompting or sending anything.
    let video_ids = yt::parse_video_id_list(&text)?;
    let playlist_id = args.playlist_id.trim();

    let token = prompt("YouTube Data API Token (with Bearer header): ")?;
    let client = yt::Client::new(config.endpoint, token);

    for (index, video_id) in video_ids.iter().enumerate() {
        let item = client
            .insert_playlist_item(playlist_id, video_id)
            .await
            .with_context(|| {
                format!(
                    "Failed to add {video_id} ({} of {}); earlier videos were already added",
                    index + 1,
                    video_ids.len()
                )
            })?;
        if let Some(item) = item {
            tracing::debug!("added {video_id} as playlist item {}", item.id);
        }
    }

    println!("finish");
    Ok(())
}

/// Ask for a line on stdin, printing `message` to stderr first.
fn prompt(message: &str) -> anyhow::Result<String> {
    let mut stderr = std::io::stderr();
    stderr.write_all(message.as_bytes())?;
    stderr.flush()?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
