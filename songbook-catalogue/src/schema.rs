//! Turns an untyped YAML tree into a [`Catalogue`], reporting the path of the
//! first value that does not have the expected shape.
use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::{Catalogue, Link, Section, SectionPolicy, Song, link::LiteralTrue};

/// The document does not have the shape of a catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    /// Where the problem is, e.g. `sections[2].songs[0].links[1]`. Empty for
    /// the document itself.
    pub path: String,
    /// What was expected there.
    pub expected: String,
}
impl SchemaError {
    fn new(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expected: expected.into(),
        }
    }
}
impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "document: {}", self.expected)
        } else {
            write!(f, "{}: {}", self.path, self.expected)
        }
    }
}
impl std::error::Error for SchemaError {}

/// Validate the shape of `document` and convert it to a [`Catalogue`].
///
/// # Errors
///
/// Returns the first [`SchemaError`] found, walking the document in order.
pub fn validate(document: &Value) -> Result<Catalogue, SchemaError> {
    let root = Object::new(document, String::new())?;
    root.warn_unknown(&["title", "description", "sections"]);
    let title = root.required("title")?;
    let description = root.required("description")?;

    let mut seen_ids = HashSet::new();
    let mut sections = vec![];
    for (index, value) in root.sequence("sections")?.iter().enumerate() {
        let section = section(value, format!("sections[{index}]"))?;
        if !seen_ids.insert(section.id.clone()) {
            return Err(SchemaError::new(
                format!("sections[{index}].id"),
                format!("a unique section id, but `{}` is already used", section.id),
            ));
        }
        sections.push(section);
    }

    Ok(Catalogue {
        title,
        description,
        sections,
    })
}

fn section(value: &Value, path: String) -> Result<Section, SchemaError> {
    let object = Object::new(value, path)?;
    object.warn_unknown(&[
        "id",
        "title",
        "description",
        "needs_not_spot_release",
        "needs_digital_release",
        "needs_spot_group",
        "songs",
    ]);
    let id = object.required("id")?;
    let title = object.required("title")?;
    let description = object.optional("description")?;

    let flag = |key: &str| -> Result<bool, SchemaError> {
        Ok(object.optional::<LiteralTrue>(key)?.is_some())
    };
    let policy = SectionPolicy {
        needs_not_spot_release: flag("needs_not_spot_release")?,
        needs_digital_release: flag("needs_digital_release")?,
        needs_spot_group: flag("needs_spot_group")?,
    };

    let songs = object
        .sequence("songs")?
        .iter()
        .enumerate()
        .map(|(index, value)| song(value, object.child(&format!("songs[{index}]"))))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Section {
        id,
        title,
        description,
        policy,
        songs,
    })
}

fn song(value: &Value, path: String) -> Result<Song, SchemaError> {
    let object = Object::new(value, path)?;
    object.warn_unknown(&["title", "description", "links"]);
    let title = object.required("title")?;
    let description = object.required("description")?;

    let values = object.sequence("links")?;
    if values.is_empty() {
        return Err(SchemaError::new(object.child("links"), "at least one link"));
    }
    let links = values
        .iter()
        .enumerate()
        .map(|(index, value)| link(value, object.child(&format!("links[{index}]"))))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Song {
        title,
        description,
        links,
    })
}

fn link(value: &Value, path: String) -> Result<Link, SchemaError> {
    let object = Object::new(value, path)?;

    let present: Vec<&str> = Link::DISCRIMINATORS
        .into_iter()
        .filter(|key| object.map.contains_key(*key))
        .collect();
    let discriminator = match present.as_slice() {
        [] => {
            return Err(SchemaError::new(
                object.path,
                format!(
                    "a link with one of the keys {}",
                    Link::DISCRIMINATORS.join(", ")
                ),
            ));
        }
        [key] => *key,
        [first, second, ..] => {
            return Err(SchemaError::new(
                object.path,
                format!("a single kind of link, but found both `{first}` and `{second}`"),
            ));
        }
    };
    object.warn_unknown(Link::known_keys(discriminator));

    Link::from_value(discriminator, value.clone())
        .map_err(|e| SchemaError::new(object.path.clone(), e.to_string()))
}

/// A mapping in the document, along with where it was found.
struct Object<'a> {
    map: &'a Mapping,
    path: String,
}
impl<'a> Object<'a> {
    fn new(value: &'a Value, path: String) -> Result<Self, SchemaError> {
        match value.as_mapping() {
            Some(map) => Ok(Self { map, path }),
            None => Err(SchemaError::new(path, "a mapping")),
        }
    }

    fn child(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T, SchemaError> {
        self.optional(key)?
            .ok_or_else(|| SchemaError::new(self.child(key), "missing required field"))
    }

    /// Absent keys are `None`; a present key must hold a valid `T`, so an
    /// explicit `null` is rejected.
    fn optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SchemaError> {
        let Some(value) = self.map.get(key) else {
            return Ok(None);
        };
        serde_yaml::from_value(value.clone())
            .map(Some)
            .map_err(|e| SchemaError::new(self.child(key), e.to_string()))
    }

    fn sequence(&self, key: &str) -> Result<&'a [Value], SchemaError> {
        match self.map.get(key) {
            Some(Value::Sequence(values)) => Ok(values.as_slice()),
            Some(_) => Err(SchemaError::new(self.child(key), "a sequence")),
            None => Err(SchemaError::new(self.child(key), "missing required field")),
        }
    }

    fn warn_unknown(&self, known: &[&str]) {
        for key in self.map.keys() {
            let known = key.as_str().is_some_and(|key| known.contains(&key));
            if !known {
                let location = if self.path.is_empty() {
                    "document"
                } else {
                    self.path.as_str()
                };
                tracing::warn!("ignoring unknown key {key:?} in {location}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GroupedRelease, SpotGroup, VideoLink};

    fn validate_str(yaml: &str) -> Result<Catalogue, SchemaError> {
        validate(&serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_valid_document() {
        let catalogue = validate_str(
            r#"
title: Songs
description: <b>hi</b>
sections:
  - id: first
    title: First
    needs_spot_group: true
    songs:
      - title: Song A
        description: nice
        links:
          - mb_work: w1
          - youtube: AAAAAAAAAAA
            unofficial: false
            text: MV
          - spot_group: Solo Tracks
            stage_commu: 3
  - id: second
    title: Second
    description: more
    songs: []
"#,
        )
        .unwrap();

        assert_eq!(catalogue.title, "Songs");
        assert_eq!(catalogue.sections.len(), 2);
        let first = &catalogue.sections[0];
        assert_eq!(first.description, None);
        assert_eq!(
            first.policy,
            SectionPolicy {
                needs_spot_group: true,
                ..Default::default()
            }
        );
        assert_eq!(
            first.songs[0].links,
            vec![
                Link::Work("w1".to_string()),
                Link::Video(VideoLink {
                    id: "AAAAAAAAAAA".to_string(),
                    unofficial: false,
                    text: "MV".to_string(),
                }),
                Link::Grouped(GroupedRelease {
                    group: SpotGroup::SoloTracks,
                    stage_commu: Some(3),
                    stage_purchase: false,
                }),
            ]
        );
        assert_eq!(catalogue.sections[1].description.as_deref(), Some("more"));
    }

    #[test]
    fn test_missing_field_reports_path() {
        let err = validate_str(
            r#"
title: t
description: d
sections:
  - id: a
    title: A
    songs:
      - title: s
        links: [{ mb_work: w }]
"#,
        )
        .unwrap_err();
        assert_eq!(err.path, "sections[0].songs[0].description");
        assert_eq!(err.expected, "missing required field");
    }

    #[test]
    fn test_bad_link_reports_path() {
        let err = validate_str(
            r#"
title: t
description: d
sections:
  - id: a
    title: A
    songs:
      - title: s
        description: d
        links:
          - mb_work: w
          - youtube: AAAAAAAAAAA
            text: MV
"#,
        )
        .unwrap_err();
        assert_eq!(err.path, "sections[0].songs[0].links[1]");
        assert!(err.expected.contains("unofficial"), "{err}");
    }

    #[test]
    fn test_ambiguous_and_unknown_links_are_rejected() {
        let doc = |link: &str| {
            format!(
                "title: t\ndescription: d\nsections:\n  - id: a\n    title: A\n    songs:\n      - title: s\n        description: d\n        links: [{link}]\n"
            )
        };

        let err = validate_str(&doc("{ mb_work: w, mb_rg: r }")).unwrap_err();
        assert_eq!(err.path, "sections[0].songs[0].links[0]");
        assert!(err.expected.contains("mb_rg"), "{err}");

        let err = validate_str(&doc("{ spotify: x }")).unwrap_err();
        assert_eq!(err.path, "sections[0].songs[0].links[0]");

        let err = validate_str(&doc("{ spot_group: SOLO TRACKS }")).unwrap_err();
        assert_eq!(err.path, "sections[0].songs[0].links[0]");
    }

    #[test]
    fn test_empty_links_are_rejected() {
        let err = validate_str(
            "title: t\ndescription: d\nsections:\n  - id: a\n    title: A\n    songs:\n      - { title: s, description: d, links: [] }\n",
        )
        .unwrap_err();
        assert_eq!(err.path, "sections[0].songs[0].links");
    }

    #[test]
    fn test_false_section_flag_is_rejected() {
        let err = validate_str(
            "title: t\ndescription: d\nsections:\n  - { id: a, title: A, needs_digital_release: false, songs: [] }\n",
        )
        .unwrap_err();
        assert_eq!(err.path, "sections[0].needs_digital_release");
    }

    #[test]
    fn test_null_optional_is_rejected() {
        let err = validate_str(
            "title: t\ndescription: d\nsections:\n  - { id: a, title: A, description: null, songs: [] }\n",
        )
        .unwrap_err();
        assert_eq!(err.path, "sections[0].description");
    }

    #[test]
    fn test_duplicate_section_ids_are_rejected() {
        let err = validate_str(
            "title: t\ndescription: d\nsections:\n  - { id: a, title: A, songs: [] }\n  - { id: a, title: B, songs: [] }\n",
        )
        .unwrap_err();
        assert_eq!(err.path, "sections[1].id");
    }

    #[test]
    fn test_root_must_be_a_mapping() {
        let err = validate_str("- 1\n- 2\n").unwrap_err();
        assert_eq!(err.path, "");
        assert_eq!(err.to_string(), "document: a mapping");
    }

    #[test]
    fn test_wrong_type_at_root() {
        let err = validate_str("title: [t]\ndescription: d\nsections: []\n").unwrap_err();
        assert_eq!(err.path, "title");

        let err = validate_str("title: t\ndescription: d\nsections: nope\n").unwrap_err();
        assert_eq!(err.path, "sections");
        assert_eq!(err.expected, "a sequence");
    }
}
