use serde::Serialize;

/// A YouTube video ID, which is always eleven characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);
impl VideoId {
    /// The length of every video ID.
    pub const LENGTH: usize = 11;

    /// The ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl std::str::FromStr for VideoId {
    type Err = InvalidVideoId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() == Self::LENGTH {
            Ok(VideoId(s.to_string()))
        } else {
            Err(InvalidVideoId(s.to_string()))
        }
    }
}
impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A string that is not a valid video ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidVideoId(pub String);
impl std::fmt::Display for InvalidVideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid video id: {}", self.0)
    }
}
impl std::error::Error for InvalidVideoId {}

/// Parse a comma-separated list of video IDs. Whitespace around each ID is
/// ignored, as are empty entries.
///
/// # Errors
///
/// Returns the first entry that is not a valid video ID.
pub fn parse_video_id_list(text: &str) -> Result<Vec<VideoId>, InvalidVideoId> {
    text.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_video_id_list() {
        let ids = parse_video_id_list(" AAAAAAAAAAA,BBBBBBBBBBB ,\n,CCCCCCCCCCC\n").unwrap();
        assert_eq!(
            ids.iter().map(VideoId::as_str).collect::<Vec<_>>(),
            vec!["AAAAAAAAAAA", "BBBBBBBBBBB", "CCCCCCCCCCC"]
        );
    }

    #[test]
    fn test_parse_video_id_list_rejects_bad_length() {
        assert_eq!(
            parse_video_id_list("AAAAAAAAAAA,short"),
            Err(InvalidVideoId("short".to_string()))
        );
        assert_eq!(
            parse_video_id_list("AAAAAAAAAAAA").unwrap_err().to_string(),
            "invalid video id: AAAAAAAAAAAA"
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(parse_video_id_list(""), Ok(vec![]));
        assert_eq!(parse_video_id_list(" , ,"), Ok(vec![]));
    }
}
