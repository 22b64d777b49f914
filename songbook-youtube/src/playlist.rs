use serde::{Deserialize, Serialize};

use crate::{Client, ClientResult, VideoId};

/// The body of a playlistItems insert request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemInsert {
    /// The item to insert
    pub snippet: PlaylistItemInsertSnippet,
}
impl PlaylistItemInsert {
    /// Build a request that appends `video_id` to `playlist_id`.
    pub fn new(playlist_id: impl Into<String>, video_id: &VideoId) -> Self {
        Self {
            snippet: PlaylistItemInsertSnippet {
                playlist_id: playlist_id.into(),
                resource_id: ResourceId {
                    kind: ResourceId::VIDEO_KIND.to_string(),
                    video_id: video_id.as_str().to_string(),
                },
            },
        }
    }
}

/// The snippet of a playlistItems insert request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemInsertSnippet {
    /// The playlist to add to
    pub playlist_id: String,
    /// The resource being added
    pub resource_id: ResourceId,
}

/// A reference to a YouTube resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    /// The kind of resource, e.g. `youtube#video`
    pub kind: String,
    /// The video ID
    pub video_id: String,
}
impl ResourceId {
    /// The kind used for videos.
    pub const VIDEO_KIND: &str = "youtube#video";
}

/// A playlist item, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    /// The playlist item ID
    pub id: String,
    /// Details about the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<PlaylistItemSnippet>,
}

/// Details about a playlist item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    /// The video title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The zero-based position in the playlist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// Playlist endpoints.
impl Client {
    /// Append a video to a playlist.
    ///
    /// Once the API accepts the request the video has been added, so a
    /// response that cannot be read yields `None` rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn insert_playlist_item(
        &self,
        playlist_id: &str,
        video_id: &VideoId,
    ) -> ClientResult<Option<PlaylistItem>> {
        let response = self
            .post(&PlaylistItemInsert::new(playlist_id, video_id))
            .await?;
        match serde_json::from_slice(&response) {
            Ok(item) => Ok(Some(item)),
            Err(err) => {
                tracing::warn!("added {video_id}, but could not read the response: {err}");
                Ok(None)
            }
        }
    }
}
