//! High-level metadata service over a listing source
//!
//! [`YouTubeService`] is the surface the metadata-population layer talks to.
//! It owns the data source and the [`SearchGate`], wires both into the
//! resolution engine, and converts raw listing records into
//! [`MetadataRecord`]s.
//!
//! # Example
//!
//! ```no_run
//! use pmoyoutube::{YouTubeClient, YouTubeService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = YouTubeClient::from_env().await?;
//!     let service = YouTubeService::new(client);
//!
//!     // Channel-style search (handle, channel id, video URL or free text)
//!     let episodes = service.search_show("@somechannel", "en").await;
//!     for episode in episodes.iter().take(5) {
//!         println!("{}", episode.name.as_deref().unwrap_or("<untitled>"));
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::gate::SearchGate;
use crate::metadata::{MediaKind, MetadataRecord};
use crate::resolver::ChannelResolver;
use crate::source::ListingSource;
use crate::video_id::extract_video_id;
use tracing::warn;

/// Metadata service owning a listing source and its search gate
pub struct YouTubeService<S: ListingSource> {
    source: S,
    gate: SearchGate,
}

impl<S: ListingSource> YouTubeService<S> {
    /// Create a service over a listing source, with a fresh gate
    pub fn new(source: S) -> Self {
        Self {
            source,
            gate: SearchGate::new(),
        }
    }

    /// Get the underlying listing source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolution engine wired to this service's source and gate
    pub fn resolver(&self) -> ChannelResolver<'_, S> {
        ChannelResolver::new(&self.source, &self.gate)
    }

    /// Search for a show: resolve the term to a channel listing
    ///
    /// Accepts a channel id, an uploads-playlist id, a handle, a video URL
    /// or free text, and returns the ranked uploads of the best-matching
    /// channel as metadata records. Empty on any failure.
    pub async fn search_show(&self, term: &str, language: &str) -> Vec<MetadataRecord> {
        self.resolver()
            .resolve_channel_listing(term, language)
            .await
            .iter()
            .map(MetadataRecord::from_listing_item)
            .collect()
    }

    /// Search for a movie: direct video lookup, then gated video search
    ///
    /// A term carrying a video id is resolved directly; anything else goes
    /// through the gated full-text video search. Empty on any failure.
    pub async fn search_movie(&self, term: &str, language: &str) -> Vec<MetadataRecord> {
        if let Some(id) = extract_video_id(term) {
            match self.source.videos_by_id(&id, language).await {
                Ok(videos) if !videos.is_empty() => {
                    return videos
                        .iter()
                        .map(|video| {
                            let mut record = MetadataRecord::from_listing_item(video);
                            record.kind = MediaKind::Movie;
                            record
                        })
                        .collect();
                }
                Ok(_) => {}
                Err(e) => warn!(%id, "direct video lookup failed: {e}"),
            }
        }

        self.resolver()
            .resolve_video_search(term, language)
            .await
            .iter()
            .map(|item| MetadataRecord::from_search_item(item, MediaKind::Movie))
            .collect()
    }

    /// Complete a movie record with video- and channel-level details
    ///
    /// When the genre is missing the video is refetched by id; the record's
    /// channel is then looked up to fill the show description, the studio
    /// and a poster artwork. Fetch failures leave the record as it was.
    pub async fn complete_movie_metadata(
        &self,
        mut record: MetadataRecord,
        language: &str,
    ) -> MetadataRecord {
        if record.genre.is_none() {
            if let Some(video_id) = record.video_id.clone() {
                match self.source.videos_by_id(&video_id, language).await {
                    Ok(videos) => {
                        if let Some(video) = videos.first() {
                            record.merge_video_details(video);
                        }
                    }
                    Err(e) => warn!(%video_id, "video detail fetch failed: {e}"),
                }
            }
        }

        if let Some(channel_id) = record.channel_id.clone() {
            match self.source.channel_by_id(&channel_id, language).await {
                Ok(Some(channel)) => record.merge_channel_details(&channel),
                Ok(None) => {}
                Err(e) => warn!(%channel_id, "channel detail fetch failed: {e}"),
            }
        }

        record
    }
}
