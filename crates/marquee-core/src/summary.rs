//! Aggregate statistics over the watched set.

use crate::models::WatchedEntry;

/// Count and means shown above the watched list.
///
/// Every mean is 0.0 when there is nothing to average.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchedSummary {
    pub count: usize,
    /// Mean external rating over entries that have one.
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime_minutes: f64,
}

impl WatchedSummary {
    pub fn from_entries(entries: &[WatchedEntry]) -> Self {
        Self {
            count: entries.len(),
            avg_imdb_rating: mean(entries.iter().filter_map(|e| e.imdb_rating.map(f64::from))),
            avg_user_rating: mean(entries.iter().map(|e| f64::from(e.user_rating))),
            avg_runtime_minutes: mean(entries.iter().map(|e| f64::from(e.runtime_minutes))),
        }
    }
}

/// Arithmetic mean, 0.0 for an empty sequence.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}
