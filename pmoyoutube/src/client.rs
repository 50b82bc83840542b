//! HTTP client for the YouTube Data API v3
//!
//! This module provides the transport layer: endpoint construction, API-key
//! injection, typed JSON decoding and status-code mapping. It implements
//! [`ListingSource`], which is all the resolution engine sees of it.
//!
//! # Example
//!
//! ```no_run
//! use pmoyoutube::YouTubeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = YouTubeClient::builder()
//!         .api_key("AIza...")
//!         .build()
//!         .await?;
//!
//!     let videos = client.videos("abcdefghijk", "en").await?;
//!     if let Some(video) = videos.items.first() {
//!         println!("{}", video.title().unwrap_or("<untitled>"));
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::models::{ListingItem, ListingResponse, SearchItem, SearchResponse};
use crate::source::ListingSource;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default YouTube Data API base URL
pub const DEFAULT_BASE_URL: &str = "https://youtube.googleapis.com";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "PMOMusic/0.1.0 (pmoyoutube)";

/// Page size requested from paginated endpoints (API maximum)
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Environment variable holding the API key for [`YouTubeClient::from_env`]
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

const VIDEOS_PATH: &str = "/youtube/v3/videos";
const CHANNELS_PATH: &str = "/youtube/v3/channels";
const SEARCH_PATH: &str = "/youtube/v3/search";
const PLAYLIST_ITEMS_PATH: &str = "/youtube/v3/playlistItems";

/// How to identify a channel in a `channels` lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLookup<'a> {
    /// Public handle (e.g. "@somechannel")
    Handle(&'a str),
    /// Legacy username
    Username(&'a str),
    /// Channel id (e.g. "UC...")
    Id(&'a str),
}

impl<'a> ChannelLookup<'a> {
    /// Query parameter name and value for this lookup
    fn query_param(self) -> (&'static str, &'a str) {
        match self {
            ChannelLookup::Handle(handle) => ("forHandle", handle),
            ChannelLookup::Username(username) => ("forUsername", username),
            ChannelLookup::Id(id) => ("id", id),
        }
    }
}

/// Record kind requested from the `search` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Channel,
    Video,
}

impl SearchKind {
    /// Value of the `type` query parameter
    fn as_str(self) -> &'static str {
        match self {
            SearchKind::Channel => "channel",
            SearchKind::Video => "video",
        }
    }
}

/// YouTube Data API HTTP client
///
/// The client is stateless and cheap to clone; it holds only the connection
/// pool, the API key and the request settings. Result caching, ranking and
/// fallback strategies live in higher layers.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl YouTubeClient {
    /// Create a client with default settings and the given API key
    pub async fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build().await
    }

    /// Create a client reading the API key from `YOUTUBE_API_KEY`
    pub async fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::configuration(format!("{API_KEY_ENV} is not set")))?;
        Self::new(api_key).await
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the internal HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Perform a GET request and decode the JSON response
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let mut url = Url::parse(&self.base_url)?;
        url.set_path(path);
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in params {
                query.append_pair(name, value);
            }
            query.append_pair("key", &self.api_key);
        }

        debug!("GET {} with {} params", path, params.len());

        let response = self.client.get(url).timeout(self.timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::from_status_code(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }

    // ========================================================================
    // Endpoints
    // ========================================================================

    /// Fetch one page of playlist items
    ///
    /// `page_token` is the cursor from a previous page, `None` for the first.
    pub async fn playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<ListingResponse> {
        let page_size = DEFAULT_PAGE_SIZE.to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("playlistId", playlist_id),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        self.get_json(PLAYLIST_ITEMS_PATH, &params).await
    }

    /// Look up channels by handle, username or id
    pub async fn channels(
        &self,
        lookup: ChannelLookup<'_>,
        language: &str,
    ) -> Result<ListingResponse> {
        let (name, value) = lookup.query_param();
        let params = [
            ("part", "snippet,contentDetails"),
            (name, value),
            ("hl", language),
        ];

        self.get_json(CHANNELS_PATH, &params).await
    }

    /// Fetch video records by video id
    pub async fn videos(&self, id: &str, language: &str) -> Result<ListingResponse> {
        let params = [
            ("part", "snippet,contentDetails"),
            ("id", id),
            ("hl", language),
        ];

        self.get_json(VIDEOS_PATH, &params).await
    }

    /// Full-text search for channels or videos
    pub async fn search(
        &self,
        query: &str,
        kind: SearchKind,
        language: &str,
    ) -> Result<SearchResponse> {
        let page_size = DEFAULT_PAGE_SIZE.to_string();
        let params = [
            ("part", "snippet"),
            ("q", query),
            ("maxResults", page_size.as_str()),
            ("safeSearch", "none"),
            ("relevanceLanguage", language),
            ("type", kind.as_str()),
        ];

        self.get_json(SEARCH_PATH, &params).await
    }
}

#[async_trait]
impl ListingSource for YouTubeClient {
    async fn playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
        _language: &str,
    ) -> Result<ListingResponse> {
        YouTubeClient::playlist_items(self, playlist_id, page_token).await
    }

    async fn channel_by_handle(
        &self,
        handle: &str,
        language: &str,
    ) -> Result<Option<ListingItem>> {
        let response = self.channels(ChannelLookup::Handle(handle), language).await?;
        Ok(response.items.into_iter().next())
    }

    async fn channel_by_id(&self, id: &str, language: &str) -> Result<Option<ListingItem>> {
        let response = self.channels(ChannelLookup::Id(id), language).await?;
        Ok(response.items.into_iter().next())
    }

    async fn videos_by_id(&self, id: &str, language: &str) -> Result<Vec<ListingItem>> {
        let response = self.videos(id, language).await?;
        Ok(response.items)
    }

    async fn search_channels(&self, query: &str, language: &str) -> Result<Vec<SearchItem>> {
        let response = self.search(query, SearchKind::Channel, language).await?;
        Ok(response.items)
    }

    async fn search_videos(&self, query: &str, language: &str) -> Result<Vec<SearchItem>> {
        let response = self.search(query, SearchKind::Video, language).await?;
        Ok(response.items)
    }
}

/// Builder for configuring a [`YouTubeClient`]
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    api_key: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the base URL (useful for tests against a local server)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client
    pub async fn build(self) -> Result<YouTubeClient> {
        if self.api_key.is_empty() {
            return Err(Error::configuration("API key is required"));
        }

        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()?,
        };

        Ok(YouTubeClient {
            client,
            base_url: self.base_url,
            api_key: self.api_key,
            timeout: self.timeout,
        })
    }
}
