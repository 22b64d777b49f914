use crate::{Link, VideoLink};

/// A catalogue, as loaded from the source document.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    /// The page title
    pub title: String,
    /// The page introduction; trusted HTML
    pub description: String,
    /// The sections, in display order
    pub sections: Vec<Section>,
}
impl Catalogue {
    /// The number of songs across every section.
    pub fn song_count(&self) -> usize {
        self.sections.iter().map(|section| section.songs.len()).sum()
    }

    /// Every song, in display order.
    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.sections.iter().flat_map(|section| section.songs.iter())
    }
}

/// A titled section of the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// The anchor ID; unique within the catalogue
    pub id: String,
    /// The section title
    pub title: String,
    /// An optional introduction; trusted HTML
    pub description: Option<String>,
    /// Extra requirements imposed on every song in the section
    pub policy: SectionPolicy,
    /// The songs, in display order
    pub songs: Vec<Song>,
}

/// Requirements a section places on its songs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionPolicy {
    /// Every song needs a release group or recording link
    pub needs_not_spot_release: bool,
    /// Every song needs a digital release link
    pub needs_digital_release: bool,
    /// Every song needs a spot grouping link
    pub needs_spot_group: bool,
}

/// A song and its links.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// The song title
    pub title: String,
    /// Commentary on the song; trusted HTML
    pub description: String,
    /// The links, in display order; never empty
    pub links: Vec<Link>,
}
impl Song {
    /// The first video link, which is treated as the song's canonical video.
    pub fn first_video(&self) -> Option<&VideoLink> {
        self.links.iter().find_map(|link| match link {
            Link::Video(video) => Some(video),
            _ => None,
        })
    }

    /// Whether any link satisfies `predicate`.
    pub fn has_link(&self, predicate: impl Fn(&Link) -> bool) -> bool {
        self.links.iter().any(predicate)
    }
}
