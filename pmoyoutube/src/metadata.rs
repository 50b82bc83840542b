//! Generic metadata records built from listing and search results
//!
//! [`MetadataRecord`] is the shape handed to the metadata-population layer:
//! raw API records flattened into named fields, the category code resolved
//! to a genre label, the publication date decomposed into a season (year)
//! and episode number (day of year), and artwork references picked from the
//! thumbnail cascade.

use crate::categories::genre_for_id;
use crate::models::{ArtworkShape, ListingItem, SearchItem, Thumbnails};
use serde::{Deserialize, Serialize};

/// Kind of media a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    /// Channel upload presented as a show episode
    Show,
    /// Standalone video presented as a movie
    Movie,
}

/// Role an artwork plays in the metadata record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtworkKind {
    /// Show/channel poster
    Poster,
    /// Episode still (video thumbnail)
    Episode,
}

/// Reference to a remote artwork
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRef {
    /// Full-resolution image URL
    pub url: String,
    /// Smaller preview URL, when a distinct one exists
    pub thumb_url: Option<String>,
    /// Human-readable provenance label (includes the pixel dimensions)
    pub label: String,
    pub kind: ArtworkKind,
    pub shape: ArtworkShape,
}

impl ArtworkRef {
    /// Build an artwork reference from a thumbnail set
    ///
    /// Returns `None` when the set carries no usable URL.
    fn from_thumbnails(thumbs: &Thumbnails, kind: ArtworkKind, origin: &str) -> Option<Self> {
        let url = thumbs.best_url()?.to_string();
        let thumb_url = thumbs.thumb_url().map(str::to_string);

        Some(Self {
            url,
            thumb_url,
            label: format!(
                "{} [{}x{}]",
                origin,
                thumbs.best_width(),
                thumbs.best_height()
            ),
            kind,
            shape: thumbs.shape(),
        })
    }
}

/// Generic metadata record for one video or channel result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub kind: MediaKind,
    /// Title of the video
    pub name: Option<String>,
    /// Title of the channel, presented as the show name
    pub show_title: Option<String>,
    /// Channel id (used later to complete channel-level metadata)
    pub channel_id: Option<String>,
    /// Raw id of the listing record the metadata came from
    pub listing_id: Option<String>,
    /// Video id
    pub video_id: Option<String>,
    /// Genre label resolved from the category code
    pub genre: Option<String>,
    pub description: Option<String>,
    /// Channel-level description, filled by metadata completion
    pub show_description: Option<String>,
    /// Channel alias, presented as the studio
    pub studio: Option<String>,
    /// Raw publication timestamp (RFC 3339)
    pub release_date: Option<String>,
    /// Publication year
    pub season: Option<i32>,
    /// Day of the publication year (1..=366)
    pub episode: Option<u32>,
    pub artworks: Vec<ArtworkRef>,
}

impl MetadataRecord {
    fn empty(kind: MediaKind) -> Self {
        Self {
            kind,
            name: None,
            show_title: None,
            channel_id: None,
            listing_id: None,
            video_id: None,
            genre: None,
            description: None,
            show_description: None,
            studio: None,
            release_date: None,
            season: None,
            episode: None,
            artworks: Vec::new(),
        }
    }

    /// Build a record from a playlist item or video record
    pub fn from_listing_item(item: &ListingItem) -> Self {
        let mut record = Self::empty(MediaKind::Show);

        record.listing_id = item.id.clone();
        record.video_id = item.video_id().map(str::to_string);

        if let Some(snippet) = &item.snippet {
            record.name = snippet.title.clone();
            record.show_title = snippet.channel_title.clone();
            record.channel_id = snippet.channel_id.clone();
            record.description = snippet.description.clone();
            record.genre = snippet
                .category_id
                .as_deref()
                .and_then(genre_for_id)
                .map(str::to_string);

            if let Some(raw) = &snippet.published_at {
                record.apply_release_date(raw);
            }

            if let Some(thumbs) = &snippet.thumbnails {
                record.artworks.extend(ArtworkRef::from_thumbnails(
                    thumbs,
                    ArtworkKind::Episode,
                    "Video",
                ));
            }
        }

        record
    }

    /// Build a record from a search result
    pub fn from_search_item(item: &SearchItem, kind: MediaKind) -> Self {
        let mut record = Self::empty(kind);

        record.video_id = item.video_id().map(str::to_string);

        if let Some(snippet) = &item.snippet {
            record.name = snippet.title.clone();
            record.show_title = snippet.channel_title.clone();
            record.channel_id = snippet.channel_id.clone();
            record.description = snippet.description.clone();

            if let Some(raw) = &snippet.published_at {
                record.apply_release_date(raw);
            }

            if let Some(thumbs) = &snippet.thumbnails {
                record.artworks.extend(ArtworkRef::from_thumbnails(
                    thumbs,
                    ArtworkKind::Poster,
                    "Video",
                ));
            }
        }

        record
    }

    /// Derive release date, season (year) and episode (day of year)
    fn apply_release_date(&mut self, raw: &str) {
        self.release_date = Some(raw.to_string());

        if let Ok(date) = chrono::DateTime::parse_from_rfc3339(raw) {
            use chrono::Datelike;
            self.season = Some(date.year());
            self.episode = Some(date.ordinal());
        }
    }

    /// Merge video-level details fetched during metadata completion
    pub(crate) fn merge_video_details(&mut self, item: &ListingItem) {
        if let Some(snippet) = &item.snippet {
            self.genre = snippet
                .category_id
                .as_deref()
                .and_then(genre_for_id)
                .map(str::to_string)
                .or(self.genre.take());
            if snippet.title.is_some() {
                self.name = snippet.title.clone();
            }
            if let Some(thumbs) = &snippet.thumbnails {
                self.artworks.extend(ArtworkRef::from_thumbnails(
                    thumbs,
                    ArtworkKind::Episode,
                    "Video",
                ));
            }
        }
    }

    /// Merge channel-level details fetched during metadata completion
    pub(crate) fn merge_channel_details(&mut self, item: &ListingItem) {
        if let Some(snippet) = &item.snippet {
            self.show_description = snippet.description.clone();
            self.studio = snippet.custom_url.clone();
            if let Some(thumbs) = &snippet.thumbnails {
                self.artworks.extend(ArtworkRef::from_thumbnails(
                    thumbs,
                    ArtworkKind::Poster,
                    "Channel",
                ));
            }
        }
    }
}
