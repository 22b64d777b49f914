//! Cross-field requirements that depend on a section's policy flags.
use crate::{Catalogue, Link, SectionPolicy, Song, SpotGroup};

/// A requirement a song can fail to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The section needs a release group or recording link.
    ReleaseGroupOrRecording,
    /// The section needs a digital release link.
    DigitalRelease,
    /// The section needs a spot grouping link.
    SpotGroup,
    /// Every song needs a work link.
    Work,
    /// Every song needs a video link.
    Video,
    /// "Solo Tracks" groupings need a story commu chapter or a purchase unlock.
    SoloUnlock,
}
impl Rule {
    fn description(self) -> &'static str {
        match self {
            Rule::ReleaseGroupOrRecording => "mb_rg or mb_recording is missing",
            Rule::DigitalRelease => "ototoy is missing",
            Rule::SpotGroup => "spot_group is missing",
            Rule::Work => "mb_work is missing",
            Rule::Video => "youtube is missing",
            Rule::SoloUnlock => "solo but stage_commu and stage_purchase are missing",
        }
    }
}
impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Songs that are allowed to skip a rule, by exact title.
///
/// There is no pattern behind these; each one is a known gap in the data.
pub const EXCEPTIONS: &[(Rule, &str)] = &[
    (Rule::SpotGroup, "Stage Bye Stage"),
    (Rule::Video, "Stage Bye Stage (デレステイベント版)"),
];

fn is_exempt(rule: Rule, title: &str) -> bool {
    EXCEPTIONS
        .iter()
        .any(|(exempt_rule, exempt_title)| *exempt_rule == rule && *exempt_title == title)
}

/// A song that breaks one of the catalogue's rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    /// The ID of the section containing the song.
    pub section: String,
    /// The song's title.
    pub song: String,
    /// The rule that was broken.
    pub rule: Rule,
}
impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} in {} (section `{}`)",
            self.rule, self.song, self.section
        )
    }
}
impl std::error::Error for RuleViolation {}

/// Check every song against the rules its section activates.
///
/// # Errors
///
/// Returns the first violation, in document order.
pub fn validate(catalogue: &Catalogue) -> Result<(), RuleViolation> {
    for section in &catalogue.sections {
        for song in &section.songs {
            check_song(section.policy, song).map_err(|rule| RuleViolation {
                section: section.id.clone(),
                song: song.title.clone(),
                rule,
            })?;
        }
    }
    Ok(())
}

fn check_song(policy: SectionPolicy, song: &Song) -> Result<(), Rule> {
    let require = |rule: Rule, satisfied: bool| {
        if satisfied || is_exempt(rule, &song.title) {
            Ok(())
        } else {
            Err(rule)
        }
    };

    if policy.needs_not_spot_release {
        require(
            Rule::ReleaseGroupOrRecording,
            song.has_link(|l| matches!(l, Link::ReleaseGroup(_) | Link::Recording(_))),
        )?;
    }
    if policy.needs_digital_release {
        require(
            Rule::DigitalRelease,
            song.has_link(|l| matches!(l, Link::DigitalRelease { .. })),
        )?;
    }
    if policy.needs_spot_group {
        require(
            Rule::SpotGroup,
            song.has_link(|l| matches!(l, Link::Grouped(_))),
        )?;
    }
    require(Rule::Work, song.has_link(|l| matches!(l, Link::Work(_))))?;
    require(Rule::Video, song.has_link(|l| matches!(l, Link::Video(_))))?;

    for link in &song.links {
        let Link::Grouped(grouped) = link else {
            continue;
        };
        if grouped.group == SpotGroup::SoloTracks {
            require(
                Rule::SoloUnlock,
                grouped.stage_commu.is_some() || grouped.stage_purchase,
            )?;
        }
    }

    Ok(())
}
