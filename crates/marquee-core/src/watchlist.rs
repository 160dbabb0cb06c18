use crate::models::{MovieId, WatchedEntry};
use crate::summary::WatchedSummary;

/// What [`Watchlist::add`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was appended.
    Added,
    /// The id was already present; only its user rating changed.
    Rerated { previous: u8 },
}

/// The watched set: at most one entry per id, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Watchlist {
    entries: Vec<WatchedEntry>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry`, or overwrite the user rating of the entry already
    /// stored under its id. Every other stored field is kept as it was.
    pub fn add(&mut self, entry: WatchedEntry) -> AddOutcome {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == entry.id) {
            let previous = existing.user_rating;
            existing.user_rating = entry.user_rating;
            AddOutcome::Rerated { previous }
        } else {
            self.entries.push(entry);
            AddOutcome::Added
        }
    }

    /// Remove the entry with `id`. Returns it, or `None` if absent.
    pub fn remove(&mut self, id: &MovieId) -> Option<WatchedEntry> {
        let idx = self.entries.iter().position(|e| &e.id == id)?;
        Some(self.entries.remove(idx))
    }

    pub fn get(&self, id: &MovieId) -> Option<&WatchedEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &MovieId) -> bool {
        self.get(id).is_some()
    }

    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &WatchedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> WatchedSummary {
        WatchedSummary::from_entries(&self.entries)
    }
}
