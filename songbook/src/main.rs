use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use songbook_shared::config::{self, Config};

#[derive(Parser)]
#[command(author, version, about = "Generate the song catalogue page", long_about = None)]
struct Args {
    /// Config file to read paths from
    #[arg(long, default_value = config::DEFAULT_FILENAME)]
    config: PathBuf,

    /// Validate and render without writing any files
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("songbook=info")),
        )
        .init();

    let args = Args::parse();
    let config = config::load_config::<Config>(&args.config)?.build;

    let text = std::fs::read_to_string(&config.data)
        .with_context(|| format!("Failed to read {}", config.data.display()))?;
    let output = songbook_catalogue::build(&text)
        .with_context(|| format!("Failed to build catalogue from {}", config.data.display()))?;
    tracing::info!("validated {} songs", output.song_count);

    if args.check {
        tracing::info!("check passed, not writing any files");
        return Ok(());
    }

    for (path, contents) in [
        (&config.html, &output.html),
        (&config.official_only, &output.official_only),
        (&config.including_unofficial, &output.including_unofficial),
    ] {
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        tracing::info!("wrote {}", path.display());
    }

    Ok(())
}
