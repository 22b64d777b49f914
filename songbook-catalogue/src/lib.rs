//! The song catalogue: its data model, the checks a source document must pass,
//! and the page and video ID lists generated from it.
#![deny(missing_docs)]

mod catalogue;
pub use catalogue::{Catalogue, Section, SectionPolicy, Song};

mod link;
pub use link::{GroupedRelease, Link, SpotGroup, VideoLink};

pub mod schema;
pub use schema::SchemaError;

pub mod rules;
pub use rules::{Rule, RuleViolation};

mod artifacts;
pub use artifacts::VideoIds;

pub mod markup;

mod render;
pub use render::{REPOSITORY_URL, render_page};

/// An error that stops a build. Nothing should be written when one occurs.
#[derive(Debug)]
pub enum BuildError {
    /// The document is not valid YAML.
    Yaml(serde_yaml::Error),
    /// The document does not have the shape of a catalogue.
    Schema(SchemaError),
    /// A song breaks one of the catalogue's rules.
    Rule(RuleViolation),
    /// A song's links could not be embedded in the page.
    Render(serde_json::Error),
}
impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::Yaml(e) => write!(f, "YAML error: {e}"),
            BuildError::Schema(e) => write!(f, "Schema error: {e}"),
            BuildError::Rule(e) => write!(f, "Rule violation: {e}"),
            BuildError::Render(e) => write!(f, "Render error: {e}"),
        }
    }
}
impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Yaml(e) => Some(e),
            BuildError::Schema(e) => Some(e),
            BuildError::Rule(e) => Some(e),
            BuildError::Render(e) => Some(e),
        }
    }
}
impl From<serde_yaml::Error> for BuildError {
    fn from(e: serde_yaml::Error) -> Self {
        BuildError::Yaml(e)
    }
}
impl From<SchemaError> for BuildError {
    fn from(e: SchemaError) -> Self {
        BuildError::Schema(e)
    }
}
impl From<RuleViolation> for BuildError {
    fn from(e: RuleViolation) -> Self {
        BuildError::Rule(e)
    }
}
impl From<serde_json::Error> for BuildError {
    fn from(e: serde_json::Error) -> Self {
        BuildError::Render(e)
    }
}

/// Parse and validate a catalogue document.
///
/// # Errors
///
/// Returns an error if the text is not YAML, does not have the shape of a
/// catalogue, or breaks one of the catalogue's rules.
pub fn load(text: &str) -> Result<Catalogue, BuildError> {
    let document: serde_yaml::Value = serde_yaml::from_str(text)?;
    let catalogue = schema::validate(&document)?;
    rules::validate(&catalogue)?;
    Ok(catalogue)
}

/// Everything generated from one catalogue document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    /// The catalogue page.
    pub html: String,
    /// Comma-joined IDs of songs whose first video is official.
    pub official_only: String,
    /// Comma-joined IDs of every song's first video.
    pub including_unofficial: String,
    /// The number of songs in the catalogue.
    pub song_count: usize,
}

/// Run the whole pipeline in memory.
///
/// # Errors
///
/// See [`load`]. No output is produced unless every check passes.
pub fn build(text: &str) -> Result<BuildOutput, BuildError> {
    let catalogue = load(text)?;
    let ids = VideoIds::collect(&catalogue);
    tracing::debug!(
        "{} official and {} total video IDs",
        ids.official_only.len(),
        ids.including_unofficial.len()
    );

    Ok(BuildOutput {
        html: render_page(&catalogue)?,
        official_only: ids.official_only_text(),
        including_unofficial: ids.including_unofficial_text(),
        song_count: catalogue.song_count(),
    })
}
