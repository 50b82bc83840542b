//! Repeat-request gate for expensive full-text searches
//!
//! Full-text search is by far the most quota-hungry call of the listing API,
//! and resolution queries are often fired on every keystroke or repeated by
//! accident. The gate holds a single pending term and only admits a search
//! once the identical term is requested twice in a row: the first request
//! arms the slot and is answered empty, the second one is allowed through.
//!
//! The gate is an explicitly owned object, injected into the resolver and
//! scoped by its owner (typically one per [`YouTubeService`]). The slot is
//! mutex-protected so concurrent resolutions cannot both be admitted or both
//! be denied for the same term.
//!
//! [`YouTubeService`]: crate::service::YouTubeService

use std::sync::Mutex;
use tracing::debug;

/// Single-slot gate deferring expensive searches until a term repeats
///
/// # Example
///
/// ```
/// use pmoyoutube::gate::SearchGate;
///
/// let gate = SearchGate::new();
/// assert!(!gate.admit("some query", 0)); // armed, caller answers empty
/// assert!(gate.admit("some query", 0));  // identical repeat, allowed
/// gate.clear();                          // caller clears after searching
/// ```
#[derive(Debug, Default)]
pub struct SearchGate {
    /// Pending term; empty means nothing is armed
    slot: Mutex<String>,
}

impl SearchGate {
    /// Create a gate with an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether an expensive search for `term` may run now
    ///
    /// Returns `false` and stores `term` as the new pending term when it
    /// differs from the stored one or is shorter than `min_len` characters.
    /// Returns `true` when `term` repeats the pending term and meets
    /// `min_len`; the caller then performs the search and must [`clear`]
    /// the gate afterwards, whatever the search's outcome.
    ///
    /// [`clear`]: SearchGate::clear
    pub fn admit(&self, term: &str, min_len: usize) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());

        if term.chars().count() < min_len || *slot != term {
            debug!(term, "search deferred, gate armed");
            *slot = term.to_string();
            return false;
        }

        true
    }

    /// Reset the pending term to empty
    pub fn clear(&self) {
        self.slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    /// Snapshot of the pending term (the last term a caller asked for)
    ///
    /// Used by the resolver as the ranking baseline.
    pub fn remembered(&self) -> String {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_identical_request_is_admitted() {
        let gate = SearchGate::new();

        assert!(!gate.admit("foo", 0));
        assert_eq!(gate.remembered(), "foo");
        assert!(gate.admit("foo", 0));
    }

    #[test]
    fn test_empty_term_is_admitted_immediately() {
        let gate = SearchGate::new();

        // The empty string doubles as the "nothing armed" encoding, so an
        // empty term matches the fresh slot and passes on its first request
        assert!(gate.admit("", 0));
        // A minimum length still denies it
        assert!(!gate.admit("", 1));
    }

    #[test]
    fn test_changed_term_rearms() {
        let gate = SearchGate::new();

        assert!(!gate.admit("foo", 0));
        assert!(gate.admit("foo", 0));
        // A different term re-arms the slot
        assert!(!gate.admit("bar", 0));
        assert_eq!(gate.remembered(), "bar");
        assert!(gate.admit("bar", 0));
    }

    #[test]
    fn test_min_length_denies_but_still_stores() {
        let gate = SearchGate::new();

        assert!(!gate.admit("abc", 5));
        assert_eq!(gate.remembered(), "abc");
        // Repeating a too-short term is still denied
        assert!(!gate.admit("abc", 5));
        // The same term passes once the minimum no longer applies
        assert!(gate.admit("abc", 0));
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        let gate = SearchGate::new();

        // 5 characters, more than 5 bytes
        assert!(!gate.admit("héllo", 5));
        assert!(gate.admit("héllo", 5));
    }

    #[test]
    fn test_clear_resets_slot() {
        let gate = SearchGate::new();

        assert!(!gate.admit("foo", 0));
        gate.clear();
        assert_eq!(gate.remembered(), "");
        // After clearing, the same term must be requested twice again
        assert!(!gate.admit("foo", 0));
    }
}
