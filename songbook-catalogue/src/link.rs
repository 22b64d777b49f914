use serde::{Deserialize, Serialize, de::Unexpected};

/// A link from a song to somewhere else.
///
/// In the source document, the variant is chosen by which key the link
/// carries (`youtube`, `ototoy`, `mb_rg`, `mb_recording`, `mb_work` or
/// `spot_group`); see [`Link::DISCRIMINATORS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// A YouTube video.
    Video(VideoLink),
    /// A digital release on the OTOTOY storefront.
    DigitalRelease {
        /// The numeric OTOTOY product ID
        id: u64,
        /// Whether the release is offered in high resolution
        hi_res: bool,
    },
    /// A MusicBrainz release group.
    ReleaseGroup(String),
    /// A MusicBrainz recording.
    Recording(String),
    /// A MusicBrainz work.
    Work(String),
    /// Membership in one of the fixed spot release groupings.
    Grouped(GroupedRelease),
}
impl Link {
    /// The keys that select a link's variant, in match order.
    pub const DISCRIMINATORS: [&str; 6] = [
        "youtube",
        "ototoy",
        "mb_rg",
        "mb_recording",
        "mb_work",
        "spot_group",
    ];

    /// The keys the variant selected by `discriminator` understands.
    pub(crate) fn known_keys(discriminator: &str) -> &'static [&'static str] {
        match discriminator {
            "youtube" => &["youtube", "unofficial", "text"],
            "ototoy" => &["ototoy", "hi_res"],
            "mb_rg" => &["mb_rg"],
            "mb_recording" => &["mb_recording"],
            "mb_work" => &["mb_work"],
            "spot_group" => &["spot_group", "stage_commu", "stage_purchase"],
            _ => &[],
        }
    }

    /// Decode a link whose variant has already been chosen by `discriminator`.
    pub(crate) fn from_value(
        discriminator: &str,
        value: serde_yaml::Value,
    ) -> Result<Link, serde_yaml::Error> {
        use serde::de::Error as _;

        Ok(match discriminator {
            "youtube" => serde_yaml::from_value::<wire::Video>(value)?.into(),
            "ototoy" => serde_yaml::from_value::<wire::DigitalRelease>(value)?.into(),
            "mb_rg" => {
                Link::ReleaseGroup(serde_yaml::from_value::<wire::ReleaseGroup>(value)?.mb_rg)
            }
            "mb_recording" => {
                Link::Recording(serde_yaml::from_value::<wire::Recording>(value)?.mb_recording)
            }
            "mb_work" => Link::Work(serde_yaml::from_value::<wire::Work>(value)?.mb_work),
            "spot_group" => serde_yaml::from_value::<wire::Grouped>(value)?.into(),
            other => {
                return Err(serde_yaml::Error::custom(format!(
                    "unknown link key `{other}`"
                )));
            }
        })
    }
}
impl Serialize for Link {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Link::Video(video) => wire::Video {
                youtube: video.id.clone(),
                unofficial: video.unofficial,
                text: video.text.clone(),
            }
            .serialize(serializer),
            Link::DigitalRelease { id, hi_res } => wire::DigitalRelease {
                ototoy: *id,
                hi_res: hi_res.then_some(LiteralTrue),
            }
            .serialize(serializer),
            Link::ReleaseGroup(id) => wire::ReleaseGroup { mb_rg: id.clone() }.serialize(serializer),
            Link::Recording(id) => wire::Recording {
                mb_recording: id.clone(),
            }
            .serialize(serializer),
            Link::Work(id) => wire::Work { mb_work: id.clone() }.serialize(serializer),
            Link::Grouped(grouped) => wire::Grouped {
                spot_group: grouped.group,
                stage_commu: grouped.stage_commu,
                stage_purchase: grouped.stage_purchase.then_some(LiteralTrue),
            }
            .serialize(serializer),
        }
    }
}

/// A YouTube video link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoLink {
    /// The YouTube video ID
    pub id: String,
    /// Whether the upload is not from an official channel
    pub unofficial: bool,
    /// The label shown after "YouTube"
    pub text: String,
}
impl VideoLink {
    /// The watch page for this video.
    pub fn url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

/// A song's membership in a spot release grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedRelease {
    /// The grouping
    pub group: SpotGroup,
    /// The story commu chapter that unlocks the song, if any
    pub stage_commu: Option<u32>,
    /// Whether the song is unlocked by purchase in the sound booth
    pub stage_purchase: bool,
}

/// The fixed set of spot release groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpotGroup {
    /// "CINDERELLA GIRLS"
    CinderellaGirls,
    /// "STARLIGHT STAGE"
    StarlightStage,
    /// "Solo Tracks"; carries extra unlock information.
    SoloTracks,
    /// "from Animation"
    FromAnimation,
    /// "ReArrange&ReMix"
    ReArrangeRemix,
}
impl SpotGroup {
    /// Every grouping, in declaration order.
    pub const ALL: [SpotGroup; 5] = [
        SpotGroup::CinderellaGirls,
        SpotGroup::StarlightStage,
        SpotGroup::SoloTracks,
        SpotGroup::FromAnimation,
        SpotGroup::ReArrangeRemix,
    ];

    /// The exact name used in the source document.
    pub fn name(self) -> &'static str {
        match self {
            SpotGroup::CinderellaGirls => "CINDERELLA GIRLS",
            SpotGroup::StarlightStage => "STARLIGHT STAGE",
            SpotGroup::SoloTracks => "Solo Tracks",
            SpotGroup::FromAnimation => "from Animation",
            SpotGroup::ReArrangeRemix => "ReArrange&ReMix",
        }
    }

    /// Look a grouping up by its exact name.
    pub fn from_name(name: &str) -> Option<SpotGroup> {
        Self::ALL.into_iter().find(|group| group.name() == name)
    }
}
impl Serialize for SpotGroup {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
impl<'de> Deserialize<'de> for SpotGroup {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        SpotGroup::from_name(&name).ok_or_else(|| {
            let expected = SpotGroup::ALL.map(SpotGroup::name).join("`, `");
            serde::de::Error::custom(format!(
                "unknown spot group `{name}`, expected one of `{expected}`"
            ))
        })
    }
}
impl std::fmt::Display for SpotGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A flag that is either absent or literally `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LiteralTrue;
impl<'de> Deserialize<'de> for LiteralTrue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(LiteralTrue)
        } else {
            Err(serde::de::Error::invalid_value(
                Unexpected::Bool(false),
                &"`true` or an absent key",
            ))
        }
    }
}
impl Serialize for LiteralTrue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

/// The shapes links take in the source document.
mod wire {
    use serde::{Deserialize, Serialize};

    use super::{GroupedRelease, Link, LiteralTrue, SpotGroup, VideoLink};

    #[derive(Serialize, Deserialize)]
    pub struct Video {
        pub(super) youtube: String,
        pub(super) unofficial: bool,
        pub(super) text: String,
    }
    impl From<Video> for Link {
        fn from(video: Video) -> Self {
            Link::Video(VideoLink {
                id: video.youtube,
                unofficial: video.unofficial,
                text: video.text,
            })
        }
    }

    #[derive(Serialize, Deserialize)]
    pub struct DigitalRelease {
        pub(super) ototoy: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub(super) hi_res: Option<LiteralTrue>,
    }
    impl From<DigitalRelease> for Link {
        fn from(release: DigitalRelease) -> Self {
            Link::DigitalRelease {
                id: release.ototoy,
                hi_res: release.hi_res.is_some(),
            }
        }
    }

    #[derive(Serialize, Deserialize)]
    pub struct ReleaseGroup {
        pub(super) mb_rg: String,
    }

    #[derive(Serialize, Deserialize)]
    pub struct Recording {
        pub(super) mb_recording: String,
    }

    #[derive(Serialize, Deserialize)]
    pub struct Work {
        pub(super) mb_work: String,
    }

    #[derive(Serialize, Deserialize)]
    pub struct Grouped {
        pub(super) spot_group: SpotGroup,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub(super) stage_commu: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub(super) stage_purchase: Option<LiteralTrue>,
    }
    impl From<Grouped> for Link {
        fn from(grouped: Grouped) -> Self {
            Link::Grouped(GroupedRelease {
                group: grouped.spot_group,
                stage_commu: grouped.stage_commu,
                stage_purchase: grouped.stage_purchase.is_some(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(discriminator: &str, yaml: &str) -> Result<Link, serde_yaml::Error> {
        Link::from_value(discriminator, serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_spot_group_names_are_exact() {
        for group in SpotGroup::ALL {
            let value = serde_yaml::Value::String(group.to_string());
            assert_eq!(serde_yaml::from_value::<SpotGroup>(value).unwrap(), group);
            assert_eq!(serde_json::to_value(group).unwrap(), group.name());
        }
        for name in ["solo tracks", "Solo Tracks ", "ReArrange & ReMix"] {
            let value = serde_yaml::Value::String(name.to_string());
            let err = serde_yaml::from_value::<SpotGroup>(value).unwrap_err();
            assert!(err.to_string().contains("unknown spot group"), "{err}");
        }
    }

    #[test]
    fn test_decode_video() {
        let link = decode(
            "youtube",
            "{ youtube: AAAAAAAAAAA, unofficial: true, text: MV }",
        )
        .unwrap();
        assert_eq!(
            link,
            Link::Video(VideoLink {
                id: "AAAAAAAAAAA".to_string(),
                unofficial: true,
                text: "MV".to_string(),
            })
        );
    }

    #[test]
    fn test_video_requires_unofficial_flag() {
        let err = decode("youtube", "{ youtube: AAAAAAAAAAA, text: MV }").unwrap_err();
        assert!(err.to_string().contains("unofficial"), "{err}");
    }

    #[test]
    fn test_literal_true_flags() {
        assert_eq!(
            decode("ototoy", "{ ototoy: 123, hi_res: true }").unwrap(),
            Link::DigitalRelease {
                id: 123,
                hi_res: true
            }
        );
        assert_eq!(
            decode("ototoy", "{ ototoy: 123 }").unwrap(),
            Link::DigitalRelease {
                id: 123,
                hi_res: false
            }
        );
        assert!(decode("ototoy", "{ ototoy: 123, hi_res: false }").is_err());
    }

    #[test]
    fn test_unknown_spot_group_is_rejected() {
        assert!(decode("spot_group", "{ spot_group: SideM }").is_err());
        assert_eq!(
            decode(
                "spot_group",
                "{ spot_group: Solo Tracks, stage_commu: 12, stage_purchase: true }"
            )
            .unwrap(),
            Link::Grouped(GroupedRelease {
                group: SpotGroup::SoloTracks,
                stage_commu: Some(12),
                stage_purchase: true,
            })
        );
    }

    #[test]
    fn test_serialize_matches_document_shape() {
        let links = vec![
            Link::Video(VideoLink {
                id: "AAAAAAAAAAA".to_string(),
                unofficial: false,
                text: "MV".to_string(),
            }),
            Link::DigitalRelease {
                id: 42,
                hi_res: false,
            },
            Link::Grouped(GroupedRelease {
                group: SpotGroup::ReArrangeRemix,
                stage_commu: None,
                stage_purchase: true,
            }),
            Link::Work("w1".to_string()),
        ];
        assert_eq!(
            serde_json::to_string(&links).unwrap(),
            r#"[{"youtube":"AAAAAAAAAAA","unofficial":false,"text":"MV"},{"ototoy":42},{"spot_group":"ReArrange&ReMix","stage_purchase":true},{"mb_work":"w1"}]"#
        );
    }
}
