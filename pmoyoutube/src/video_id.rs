//! Video identifier extraction from free-form input
//!
//! A video id is an 11-character token over `[0-9A-Za-z_-]`. Users paste
//! anything from bare ids to full watch/share URLs, so the extractor accepts
//! the bare form directly and otherwise scans for an id embedded in a URL.

use regex::Regex;
use std::sync::LazyLock;

/// Length of a video id
pub const VIDEO_ID_LEN: usize = 11;

/// An 11-char id token preceded by `/`, `%3D`, `vi=` or `v=` and followed by
/// a URL delimiter or the end of the string
static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:/|%3D|vi=|v=)([0-9A-Za-z_-]{11})(?:[%#?&/]|$)").expect("valid literal regex")
});

/// Extract a video id from a raw string
///
/// An input of exactly 11 characters is taken as a bare id and returned
/// unchanged (no charset validation, matching the permissiveness of the
/// listing service itself). Otherwise the first embedded id is returned,
/// or `None` when the input does not carry one.
///
/// # Example
///
/// ```
/// use pmoyoutube::video_id::extract_video_id;
///
/// assert_eq!(
///     extract_video_id("https://www.youtube.com/watch?v=abcdefghijk&t=1"),
///     Some("abcdefghijk".to_string())
/// );
/// assert_eq!(extract_video_id("abcdefghijk"), Some("abcdefghijk".to_string()));
/// assert_eq!(extract_video_id("not a video reference"), None);
/// ```
pub fn extract_video_id(raw: &str) -> Option<String> {
    if raw.chars().count() == VIDEO_ID_LEN {
        return Some(raw.to_string());
    }

    VIDEO_ID
        .captures(raw)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
