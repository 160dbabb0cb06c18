//! In-memory poster images keyed by URL.
//!
//! A poster is fetched once per URL and kept while something on screen
//! can still show it. Nothing is written to disk.

use std::collections::{HashMap, HashSet};

use iced::widget::image;

/// Load state of one poster.
#[derive(Debug, Clone)]
pub enum PosterState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

#[derive(Debug, Default)]
pub struct PosterCache {
    states: HashMap<String, PosterState>,
}

impl PosterCache {
    /// Mark `url` as loading. Returns `false` if it was already requested,
    /// in which case no fetch should be started.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.states.contains_key(url) {
            return false;
        }
        self.states.insert(url.to_string(), PosterState::Loading);
        true
    }

    /// Store the outcome of a fetch started with [`begin`](Self::begin).
    /// Dropped if the URL was evicted while the fetch was in flight.
    pub fn finish(&mut self, url: String, result: Result<Vec<u8>, String>) {
        let Some(slot) = self.states.get_mut(&url) else {
            tracing::debug!(%url, "poster no longer needed, discarding");
            return;
        };
        *slot = match result {
            Ok(bytes) => PosterState::Loaded(image::Handle::from_bytes(bytes)),
            Err(e) => {
                tracing::debug!(%url, error = %e, "poster unavailable");
                PosterState::Failed
            }
        };
    }

    /// Evict every poster whose URL is not in `keep`.
    pub fn retain<'a>(&mut self, keep: impl IntoIterator<Item = &'a str>) {
        let keep: HashSet<&str> = keep.into_iter().collect();
        let before = self.states.len();
        self.states.retain(|url, _| keep.contains(url.as_str()));
        let evicted = before - self.states.len();
        if evicted > 0 {
            tracing::debug!(evicted, kept = self.states.len(), "posters evicted");
        }
    }

    pub fn get(&self, url: &str) -> Option<&PosterState> {
        self.states.get(url)
    }

    /// Image handle for `url`, if it has loaded.
    pub fn handle(&self, url: Option<&str>) -> Option<&image::Handle> {
        match self.get(url?)? {
            PosterState::Loaded(handle) => Some(handle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://m.media-amazon.com/images/M/poster.jpg";

    #[test]
    fn test_begin_only_once_per_url() {
        let mut cache = PosterCache::default();
        assert!(cache.begin(URL));
        assert!(!cache.begin(URL));
        assert!(matches!(cache.get(URL), Some(PosterState::Loading)));
    }

    #[test]
    fn test_failed_fetch_is_not_retried() {
        let mut cache = PosterCache::default();
        cache.begin(URL);
        cache.finish(URL.to_string(), Err("404".into()));
        assert!(matches!(cache.get(URL), Some(PosterState::Failed)));
        assert!(!cache.begin(URL));
        assert!(cache.handle(Some(URL)).is_none());
    }

    #[test]
    fn test_loaded_poster_has_handle() {
        let mut cache = PosterCache::default();
        cache.begin(URL);
        cache.finish(URL.to_string(), Ok(vec![0x89, b'P', b'N', b'G']));
        assert!(cache.handle(Some(URL)).is_some());
        assert!(cache.handle(None).is_none());
    }

    #[test]
    fn test_retain_evicts_unreferenced_posters() {
        let other = "https://m.media-amazon.com/images/M/other.jpg";
        let mut cache = PosterCache::default();
        cache.begin(URL);
        cache.finish(URL.to_string(), Ok(vec![1, 2, 3]));
        cache.begin(other);
        cache.finish(other.to_string(), Ok(vec![4, 5, 6]));

        cache.retain([URL]);

        assert_eq!(cache.states.len(), 1);
        assert!(cache.handle(Some(URL)).is_some());
        assert!(cache.get(other).is_none());
        // Evicted posters can be requested again later.
        assert!(cache.begin(other));
    }

    #[test]
    fn test_fetch_finishing_after_eviction_is_dropped() {
        let mut cache = PosterCache::default();
        cache.begin(URL);
        cache.retain(std::iter::empty::<&str>());

        cache.finish(URL.to_string(), Ok(vec![1, 2, 3]));

        assert_eq!(cache.states.len(), 0);
        assert!(cache.get(URL).is_none());
    }
}
