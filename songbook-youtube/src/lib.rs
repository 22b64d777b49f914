//! A barebones client for the parts of the YouTube Data API that manage playlists.
#![deny(missing_docs)]

mod client;
pub use client::*;

mod video_id;
pub use video_id::*;

mod playlist;
pub use playlist::*;

mod request;
