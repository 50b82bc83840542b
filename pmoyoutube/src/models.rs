//! Data models for YouTube Data API v3 responses
//!
//! This module contains the structures needed to deserialize responses from
//! the `playlistItems`, `channels`, `videos` and `search` endpoints.
//!
//! The API reports most fields only when the requested `part` includes them,
//! and omits them freely otherwise, so every nested field is optional and
//! every collection defaults to empty. Accessors on [`ListingItem`] and
//! [`SearchItem`] flatten the nesting for the common reads.

use serde::{Deserialize, Serialize};

// ============================================================================
// Listing Responses (playlistItems, channels, videos)
// ============================================================================

/// Response from the `playlistItems`, `channels` and `videos` endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    /// Opaque cursor for the next page; absent on the last page
    #[serde(default)]
    pub next_page_token: Option<String>,
    /// Pagination summary
    #[serde(default)]
    pub page_info: Option<PageInfo>,
    /// Records in this page
    #[serde(default)]
    pub items: Vec<ListingItem>,
}

/// Pagination summary attached to paged responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub total_results: Option<u32>,
    #[serde(default)]
    pub results_per_page: Option<u32>,
}

/// A single playlist item, channel or video record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    /// Record id (video id, channel id or playlist-item id depending on endpoint)
    #[serde(default)]
    pub id: Option<String>,
    /// Descriptive block (title, description, thumbnails, ...)
    #[serde(default)]
    pub snippet: Option<Snippet>,
    /// Content block (duration, uploads-playlist linkage, ...)
    #[serde(default)]
    pub content_details: Option<ContentDetails>,
}

impl ListingItem {
    /// Title of the record, if present
    pub fn title(&self) -> Option<&str> {
        self.snippet.as_ref()?.title.as_deref()
    }

    /// Channel the record belongs to
    pub fn channel_id(&self) -> Option<&str> {
        self.snippet.as_ref()?.channel_id.as_deref()
    }

    /// Video id: playlist items carry it in `snippet.resourceId`,
    /// video records carry it as the record id itself
    pub fn video_id(&self) -> Option<&str> {
        self.snippet
            .as_ref()
            .and_then(|s| s.resource_id.as_ref())
            .and_then(|r| r.video_id.as_deref())
            .or(self.id.as_deref())
    }

    /// Uploads-playlist linkage (channel records only)
    pub fn uploads_playlist(&self) -> Option<&str> {
        self.content_details
            .as_ref()?
            .related_playlists
            .as_ref()?
            .uploads
            .as_deref()
    }

    /// Raw publication timestamp (RFC 3339)
    pub fn published_at(&self) -> Option<&str> {
        self.snippet.as_ref()?.published_at.as_deref()
    }

    /// Numeric category code, parsed from the snippet's `categoryId`
    pub fn category_code(&self) -> Option<u32> {
        self.snippet
            .as_ref()?
            .category_id
            .as_deref()
            .and_then(|id| id.parse().ok())
    }
}

/// Descriptive block shared by all record kinds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Channel alias (channel records only, e.g. "@somechannel")
    #[serde(default)]
    pub custom_url: Option<String>,
    #[serde(default)]
    pub thumbnails: Option<Thumbnails>,
    #[serde(default)]
    pub channel_title: Option<String>,
    /// Playlist the item was read from (playlist items only)
    #[serde(default)]
    pub playlist_id: Option<String>,
    /// Position within the playlist (playlist items only)
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Category code as a decimal string (video records only)
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub default_language: Option<String>,
    #[serde(default)]
    pub localized: Option<Localized>,
    /// Target of a playlist item (carries the video id)
    #[serde(default)]
    pub resource_id: Option<ResourceId>,
    #[serde(default)]
    pub video_owner_channel_title: Option<String>,
    #[serde(default)]
    pub video_owner_channel_id: Option<String>,
    #[serde(default)]
    pub publish_time: Option<String>,
}

/// Localized title/description variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Localized {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Target resource of a playlist item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
}

/// Content block (videos and channels)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    /// ISO 8601 duration (video records)
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub licensed_content: Option<bool>,
    /// Well-known playlists of a channel (channel records)
    #[serde(default)]
    pub related_playlists: Option<RelatedPlaylists>,
}

/// Well-known playlists attached to a channel record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPlaylists {
    #[serde(default)]
    pub likes: Option<String>,
    /// Uploads playlist enumerating the channel's published videos
    #[serde(default)]
    pub uploads: Option<String>,
}

// ============================================================================
// Search Responses
// ============================================================================

/// Response from the `search` endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub region_code: Option<String>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// A single search result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    #[serde(default)]
    pub id: Option<SearchId>,
    #[serde(default)]
    pub snippet: Option<Snippet>,
}

impl SearchItem {
    /// Channel id of the result (channel searches)
    pub fn channel_id(&self) -> Option<&str> {
        self.id.as_ref()?.channel_id.as_deref()
    }

    /// Video id of the result (video searches)
    pub fn video_id(&self) -> Option<&str> {
        self.id.as_ref()?.video_id.as_deref()
    }

    /// Title of the result, if present
    pub fn title(&self) -> Option<&str> {
        self.snippet.as_ref()?.title.as_deref()
    }
}

/// Typed id of a search result (exactly one of the ids is set)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchId {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
}

// ============================================================================
// Thumbnails
// ============================================================================

/// Shape of an artwork, derived from its pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtworkShape {
    /// Wider than tall (video stills)
    Rectangle,
    /// Taller than wide
    Vertical,
    /// Equal dimensions (channel avatars)
    Square,
}

/// Thumbnail variants by resolution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
    #[serde(default)]
    pub medium: Option<Thumbnail>,
    #[serde(default)]
    pub high: Option<Thumbnail>,
    #[serde(default)]
    pub standard: Option<Thumbnail>,
    #[serde(default)]
    pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
    /// Highest-resolution variant available
    pub fn best(&self) -> Option<&Thumbnail> {
        self.maxres
            .as_ref()
            .or(self.standard.as_ref())
            .or(self.high.as_ref())
            .or(self.medium.as_ref())
            .or(self.default.as_ref())
    }

    /// URL of the highest-resolution variant
    pub fn best_url(&self) -> Option<&str> {
        self.best().and_then(|t| t.url.as_deref())
    }

    /// URL of a small variant suitable as a preview
    pub fn thumb_url(&self) -> Option<&str> {
        self.medium
            .as_ref()
            .or(self.default.as_ref())
            .and_then(|t| t.url.as_deref())
    }

    /// Width of the highest-resolution variant (0 when unreported)
    pub fn best_width(&self) -> u32 {
        self.best().and_then(|t| t.width).unwrap_or(0)
    }

    /// Height of the highest-resolution variant (0 when unreported)
    pub fn best_height(&self) -> u32 {
        self.best().and_then(|t| t.height).unwrap_or(0)
    }

    /// Shape of the highest-resolution variant
    pub fn shape(&self) -> ArtworkShape {
        let w = self.best_width();
        let h = self.best_height();
        if w > h {
            ArtworkShape::Rectangle
        } else if w < h {
            ArtworkShape::Vertical
        } else {
            ArtworkShape::Square
        }
    }
}

/// A single thumbnail variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumb(url: &str, w: u32, h: u32) -> Thumbnail {
        Thumbnail {
            url: Some(url.to_string()),
            width: Some(w),
            height: Some(h),
        }
    }

    #[test]
    fn test_listing_response_tolerates_sparse_json() {
        let response: ListingResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
        assert!(response.next_page_token.is_none());

        let response: ListingResponse =
            serde_json::from_str(r#"{"items":[{"id":"abc"}]}"#).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].id.as_deref(), Some("abc"));
        assert!(response.items[0].title().is_none());
    }

    #[test]
    fn test_playlist_item_decoding() {
        let json = r#"{
            "nextPageToken": "CAUQAA",
            "pageInfo": {"totalResults": 120, "resultsPerPage": 50},
            "items": [{
                "id": "UExfabc",
                "snippet": {
                    "publishedAt": "2023-03-01T12:00:00Z",
                    "channelId": "UC123",
                    "title": "Some upload",
                    "categoryId": "10",
                    "resourceId": {"kind": "youtube#video", "videoId": "abcdefghijk"}
                }
            }]
        }"#;
        let response: ListingResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.next_page_token.as_deref(), Some("CAUQAA"));
        let item = &response.items[0];
        assert_eq!(item.title(), Some("Some upload"));
        assert_eq!(item.channel_id(), Some("UC123"));
        assert_eq!(item.video_id(), Some("abcdefghijk"));
        assert_eq!(item.category_code(), Some(10));
    }

    #[test]
    fn test_video_id_falls_back_to_record_id() {
        let item = ListingItem {
            id: Some("abcdefghijk".to_string()),
            snippet: Some(Snippet::default()),
            content_details: None,
        };
        assert_eq!(item.video_id(), Some("abcdefghijk"));
    }

    #[test]
    fn test_uploads_playlist_linkage() {
        let json = r#"{
            "id": "UC123",
            "contentDetails": {"relatedPlaylists": {"uploads": "UU123"}}
        }"#;
        let item: ListingItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.uploads_playlist(), Some("UU123"));
    }

    #[test]
    fn test_search_item_ids() {
        let json = r#"{
            "id": {"kind": "youtube#channel", "channelId": "UC999"},
            "snippet": {"title": "A channel"}
        }"#;
        let item: SearchItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.channel_id(), Some("UC999"));
        assert!(item.video_id().is_none());
        assert_eq!(item.title(), Some("A channel"));
    }

    #[test]
    fn test_thumbnail_cascade() {
        let thumbs = Thumbnails {
            default: Some(thumb("d", 120, 90)),
            medium: Some(thumb("m", 320, 180)),
            high: Some(thumb("h", 480, 360)),
            standard: None,
            maxres: None,
        };
        assert_eq!(thumbs.best_url(), Some("h"));
        assert_eq!(thumbs.thumb_url(), Some("m"));
        assert_eq!(thumbs.shape(), ArtworkShape::Rectangle);

        let avatar = Thumbnails {
            default: Some(thumb("d", 88, 88)),
            ..Thumbnails::default()
        };
        assert_eq!(avatar.best_url(), Some("d"));
        assert_eq!(avatar.shape(), ArtworkShape::Square);

        assert!(Thumbnails::default().best().is_none());
        assert_eq!(Thumbnails::default().shape(), ArtworkShape::Square);
    }
}
