use serde::{Deserialize, Serialize};

use super::movie::{MovieDetails, MovieId};
use crate::parse::runtime_minutes;

/// Highest value a user can give. 0 means "no rating yet".
pub const MAX_USER_RATING: u8 = 10;

/// A rated movie in the watched set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedEntry {
    pub id: MovieId,
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
    pub imdb_rating: Option<f32>,
    pub runtime_minutes: u32,
    pub user_rating: u8,
}

impl WatchedEntry {
    /// Build a fresh entry from loaded details. Unparseable runtime text
    /// becomes 0 minutes.
    pub fn from_details(details: &MovieDetails, user_rating: u8) -> Self {
        Self {
            id: details.id.clone(),
            title: details.title.clone(),
            year: details.year.clone(),
            poster_url: details.poster_url.clone(),
            imdb_rating: details.imdb_rating,
            runtime_minutes: runtime_minutes(&details.runtime),
            user_rating: user_rating.min(MAX_USER_RATING),
        }
    }
}
