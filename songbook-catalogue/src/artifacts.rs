use crate::Catalogue;

/// The canonical video ID of every song, for building playlists.
///
/// Only a song's first video link is considered. If that link is unofficial,
/// the song is left out of [`VideoIds::official_only`] even when a later link
/// is official.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoIds<'a> {
    /// Songs whose first video link is official.
    pub official_only: Vec<&'a str>,
    /// Every song with a video link.
    pub including_unofficial: Vec<&'a str>,
}
impl<'a> VideoIds<'a> {
    /// Collect the canonical video IDs in display order.
    pub fn collect(catalogue: &'a Catalogue) -> Self {
        let mut ids = Self::default();
        for video in catalogue.songs().filter_map(|song| song.first_video()) {
            if !video.unofficial {
                ids.official_only.push(&video.id);
            }
            ids.including_unofficial.push(&video.id);
        }
        ids
    }

    /// The official-only list, comma-joined.
    pub fn official_only_text(&self) -> String {
        self.official_only.join(",")
    }

    /// The full list, comma-joined.
    pub fn including_unofficial_text(&self) -> String {
        self.including_unofficial.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Link, Section, SectionPolicy, Song, VideoLink};

    fn video(id: &str, unofficial: bool) -> Link {
        Link::Video(VideoLink {
            id: id.to_string(),
            unofficial,
            text: "MV".to_string(),
        })
    }

    fn song(links: Vec<Link>) -> Song {
        Song {
            title: "Song".to_string(),
            description: String::new(),
            links,
        }
    }

    fn catalogue(songs: Vec<Song>) -> Catalogue {
        Catalogue {
            title: "t".to_string(),
            description: "d".to_string(),
            sections: vec![Section {
                id: "a".to_string(),
                title: "A".to_string(),
                description: None,
                policy: SectionPolicy::default(),
                songs,
            }],
        }
    }

    #[test]
    fn test_only_first_video_counts() {
        let catalogue = catalogue(vec![
            song(vec![Link::Work("w".to_string()), video("AAAAAAAAAAA", false)]),
            song(vec![video("BBBBBBBBBBB", true), video("CCCCCCCCCCC", false)]),
            song(vec![Link::Work("w".to_string())]),
            song(vec![video("DDDDDDDDDDD", false), video("EEEEEEEEEEE", true)]),
        ]);
        let ids = VideoIds::collect(&catalogue);

        assert_eq!(ids.official_only, vec!["AAAAAAAAAAA", "DDDDDDDDDDD"]);
        assert_eq!(
            ids.including_unofficial,
            vec!["AAAAAAAAAAA", "BBBBBBBBBBB", "DDDDDDDDDDD"]
        );
        assert_eq!(ids.official_only_text(), "AAAAAAAAAAA,DDDDDDDDDDD");
        assert_eq!(
            ids.including_unofficial_text(),
            "AAAAAAAAAAA,BBBBBBBBBBB,DDDDDDDDDDD"
        );
    }

    #[test]
    fn test_empty_lists_have_no_separator() {
        let catalogue = catalogue(vec![song(vec![video("AAAAAAAAAAA", true)])]);
        let ids = VideoIds::collect(&catalogue);
        assert_eq!(ids.official_only_text(), "");
        assert_eq!(ids.including_unofficial_text(), "AAAAAAAAAAA");
    }

    #[test]
    fn test_order_follows_sections() {
        let mut catalogue = catalogue(vec![song(vec![video("AAAAAAAAAAA", false)])]);
        catalogue.sections.push(Section {
            id: "b".to_string(),
            title: "B".to_string(),
            description: None,
            policy: SectionPolicy::default(),
            songs: vec![song(vec![video("BBBBBBBBBBB", false)])],
        });
        catalogue.sections.swap(0, 1);
        assert_eq!(
            VideoIds::collect(&catalogue).including_unofficial_text(),
            "BBBBBBBBBBB,AAAAAAAAAAA"
        );
    }
}
