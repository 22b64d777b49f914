pub mod config {
    //! Configuration shared by the `songbook` and `songbook-playlist` binaries.
    use std::path::{Path, PathBuf};

    use anyhow::Context as _;
    use serde::{Deserialize, Serialize, de::DeserializeOwned};

    /// The config file read when none is given on the command line.
    pub const DEFAULT_FILENAME: &str = "songbook.toml";

    /// Load a TOML config file, returning `T::default()` if the file doesn't exist.
    pub fn load_config<T: Default + DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file at {}, using defaults", path.display());
                Ok(T::default())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Config {
        pub build: Build,
        pub playlist: Playlist,
    }

    /// Where the catalogue builder reads and writes.
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Build {
        pub data: PathBuf,
        pub html: PathBuf,
        pub official_only: PathBuf,
        pub including_unofficial: PathBuf,
    }
    impl Default for Build {
        fn default() -> Self {
            Self {
                data: "data.yaml".into(),
                html: "generated.html".into(),
                official_only: "youtube-id.official-only.txt".into(),
                including_unofficial: "youtube-id.including-unofficial.txt".into(),
            }
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Playlist {
        /// The playlistItems insert endpoint, including its query string.
        pub endpoint: String,
    }
    impl Default for Playlist {
        fn default() -> Self {
            Self {
                endpoint: "https://content-youtube.googleapis.com/youtube/v3/playlistItems?alt=json&part=snippet".to_string(),
            }
        }
    }

}
