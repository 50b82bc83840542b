//! Channel resolution engine
//!
//! Resolves a free-form query (channel id, uploads-playlist id, handle,
//! video URL or arbitrary text) into a ranked list of listing records. The
//! engine tries progressively more expensive strategies and stops at the
//! first one that yields data:
//!
//! 1. **Playlist pagination** — when the term carries a channel-id prefix,
//!    walk the channel's uploads playlist page by page (bounded budget).
//! 2. **Handle lookup** — resolve the term as a channel handle and re-enter
//!    the playlist strategy with the channel's uploads playlist.
//! 3. **Video indirection** — extract a video id from the term, fetch the
//!    video and re-enter the playlist strategy with its channel id.
//! 4. **Gated full-text search** — the quota-hungry last resort, deferred by
//!    the [`SearchGate`] until the identical query repeats.
//!
//! Strategy hops are bounded, as is the pagination loop, so a resolution
//! performs a fixed maximum amount of remote work. Remote failures are
//! logged and treated as "no data"; the public surface returns an empty
//! list instead of an error in every failure case.

use crate::gate::SearchGate;
use crate::models::{ListingItem, SearchItem};
use crate::ranker::ResultRanker;
use crate::source::ListingSource;
use crate::video_id::extract_video_id;
use tracing::{debug, warn};

/// Prefix of a channel id
pub const CHANNEL_ID_PREFIX: &str = "UC";

/// Prefix of an uploads-playlist id
pub const UPLOADS_PLAYLIST_PREFIX: &str = "UU";

/// Maximum playlist pages fetched per resolution
pub const PAGE_BUDGET: usize = 8;

/// Maximum strategy hops per resolution (a hop re-enters the playlist
/// strategy with a derived term)
pub const MAX_STRATEGY_HOPS: usize = 4;

/// Minimum query length for the gated video search
pub const VIDEO_SEARCH_MIN_TERM: usize = 5;

/// Outcome of one pagination run over an uploads playlist
enum PageOutcome {
    /// The service reported a terminal page; the listing is as complete as
    /// it gets and is returned even when empty
    Complete(Vec<ListingItem>),
    /// The page budget ran out before a terminal page was seen
    Exhausted(Vec<ListingItem>),
}

/// Derive the uploads-playlist id from a channel-like term
///
/// Returns `None` unless the term bears one of the two recognized prefixes.
fn uploads_playlist_id(term: &str) -> Option<String> {
    if term.starts_with(CHANNEL_ID_PREFIX) || term.starts_with(UPLOADS_PLAYLIST_PREFIX) {
        Some(format!("{UPLOADS_PLAYLIST_PREFIX}{}", &term[2..]))
    } else {
        None
    }
}

/// Resolution engine over an abstract [`ListingSource`]
///
/// The resolver borrows its collaborators: the data source it queries and
/// the [`SearchGate`] guarding full-text searches. Both are owned by the
/// caller (see [`YouTubeService`](crate::service::YouTubeService)), so gate
/// state is scoped explicitly rather than hidden in a process-wide slot.
pub struct ChannelResolver<'a, S: ListingSource> {
    source: &'a S,
    gate: &'a SearchGate,
}

impl<'a, S: ListingSource> ChannelResolver<'a, S> {
    /// Create a resolver over a source and a gate
    pub fn new(source: &'a S, gate: &'a SearchGate) -> Self {
        Self { source, gate }
    }

    /// Resolve a query into the ranked listing of the best-matching channel
    ///
    /// Returns an empty list when nothing resolves, when the gate defers the
    /// full-text fallback, or when every remote fetch fails. Never errors.
    pub async fn resolve_channel_listing(&self, term: &str, language: &str) -> Vec<ListingItem> {
        // Ranking baseline: the term remembered from the previous request,
        // sampled once before any strategy can rearm or clear the gate.
        let baseline = self.gate.remembered();
        let mut term = term.to_string();

        for hop in 0..MAX_STRATEGY_HOPS {
            debug!(hop, %term, "trying resolution strategies");

            if let Some(playlist_id) = uploads_playlist_id(&term) {
                match self.paginate(&playlist_id, language, &baseline).await {
                    PageOutcome::Complete(items) => return items,
                    PageOutcome::Exhausted(items) if !items.is_empty() => return items,
                    PageOutcome::Exhausted(_) => {}
                }
            }

            if let Some(uploads) = self.lookup_handle(&term, language).await {
                term = uploads;
                continue;
            }

            if let Some(channel_id) = self.follow_video(&term, language).await {
                term = channel_id;
                continue;
            }

            match self.gated_channel_search(&term, language).await {
                Some(channel_id) => {
                    term = channel_id;
                    continue;
                }
                None => return Vec::new(),
            }
        }

        warn!(%term, "giving up after {MAX_STRATEGY_HOPS} strategy hops");
        Vec::new()
    }

    /// Resolve a query through the gated full-text video search
    ///
    /// Independent movie-style entry point: queries shorter than
    /// [`VIDEO_SEARCH_MIN_TERM`] characters are always deferred, and like
    /// the channel fallback the search only runs once the identical query
    /// repeats. Returns raw search results without re-entering the channel
    /// strategies.
    pub async fn resolve_video_search(&self, term: &str, language: &str) -> Vec<SearchItem> {
        if !self.gate.admit(term, VIDEO_SEARCH_MIN_TERM) {
            return Vec::new();
        }

        let outcome = self.source.search_videos(term, language).await;
        self.gate.clear();

        match outcome {
            Ok(items) => items,
            Err(e) => {
                warn!(term, "video search failed: {e}");
                Vec::new()
            }
        }
    }

    // ========================================================================
    // Strategies
    // ========================================================================

    /// Walk an uploads playlist, ranking every item as it arrives
    ///
    /// A failed page fetch consumes budget and retries with the same token;
    /// a terminal page ends the walk immediately.
    async fn paginate(&self, playlist_id: &str, language: &str, baseline: &str) -> PageOutcome {
        let mut ranker = ResultRanker::new(baseline);
        let mut token: Option<String> = None;

        for page in 0..PAGE_BUDGET {
            match self
                .source
                .playlist_items(playlist_id, token.as_deref(), language)
                .await
            {
                Ok(response) => {
                    debug!(playlist_id, page, items = response.items.len(), "page fetched");
                    for item in response.items {
                        ranker.consider(item);
                    }
                    match response.next_page_token {
                        None => return PageOutcome::Complete(ranker.into_items()),
                        next => token = next,
                    }
                }
                Err(e) => {
                    warn!(playlist_id, page, "playlist page fetch failed: {e}");
                }
            }
        }

        PageOutcome::Exhausted(ranker.into_items())
    }

    /// Resolve the term as a channel handle, yielding its uploads playlist
    async fn lookup_handle(&self, term: &str, language: &str) -> Option<String> {
        match self.source.channel_by_handle(term, language).await {
            Ok(Some(channel)) => channel.uploads_playlist().map(str::to_string),
            Ok(None) => None,
            Err(e) => {
                warn!(term, "handle lookup failed: {e}");
                None
            }
        }
    }

    /// Treat the term as a video reference, yielding the video's channel id
    async fn follow_video(&self, term: &str, language: &str) -> Option<String> {
        let id = extract_video_id(term)?;

        match self.source.videos_by_id(&id, language).await {
            Ok(videos) => videos
                .first()
                .and_then(|video| video.channel_id())
                .map(str::to_string),
            Err(e) => {
                warn!(%id, "video lookup failed: {e}");
                None
            }
        }
    }

    /// Gated full-text channel search, yielding the first hit's channel id
    ///
    /// Denial by the gate and an empty search result both yield `None`; the
    /// gate is cleared after a performed search whatever its outcome.
    async fn gated_channel_search(&self, term: &str, language: &str) -> Option<String> {
        if !self.gate.admit(term, 0) {
            debug!(term, "full-text channel search deferred");
            return None;
        }

        let outcome = self.source.search_channels(term, language).await;
        self.gate.clear();

        match outcome {
            Ok(results) => results
                .first()
                .and_then(|result| result.channel_id())
                .map(str::to_string),
            Err(e) => {
                warn!(term, "channel search failed: {e}");
                None
            }
        }
    }
}
