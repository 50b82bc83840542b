//! Abstract listing data source consumed by the resolution engine
//!
//! The resolver only needs a handful of read operations from the remote
//! listing service. They are gathered behind the [`ListingSource`] trait so
//! the engine can be driven by the real [`YouTubeClient`] in production and
//! by an in-memory double in tests.
//!
//! [`YouTubeClient`]: crate::client::YouTubeClient

use crate::error::Result;
use crate::models::{ListingItem, ListingResponse, SearchItem};
use async_trait::async_trait;

/// Read operations the resolution engine requires from the listing service
///
/// All operations are language-hinted. Implementations report transport and
/// decode failures through [`Error`](crate::error::Error); the resolver maps
/// any failure to "no data" and never propagates it to its caller.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch one page of a playlist, `page_token` being `None` for the first
    async fn playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
        language: &str,
    ) -> Result<ListingResponse>;

    /// Look up a channel by its public handle
    async fn channel_by_handle(&self, handle: &str, language: &str)
        -> Result<Option<ListingItem>>;

    /// Look up a channel by its channel id
    async fn channel_by_id(&self, id: &str, language: &str) -> Result<Option<ListingItem>>;

    /// Fetch video records by video id
    async fn videos_by_id(&self, id: &str, language: &str) -> Result<Vec<ListingItem>>;

    /// Full-text search over channels
    async fn search_channels(&self, query: &str, language: &str) -> Result<Vec<SearchItem>>;

    /// Full-text search over videos
    async fn search_videos(&self, query: &str, language: &str) -> Result<Vec<SearchItem>>;
}
