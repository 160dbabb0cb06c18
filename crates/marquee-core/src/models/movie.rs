use serde::{Deserialize, Serialize};

/// The movie database's key for a title/edition (an IMDb id such as
/// `tt0372784`). Shared by search results, details and watched entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MovieId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultEntry {
    pub id: MovieId,
    pub title: String,
    /// Release year as given by the source ("2005", "2005–2008").
    pub year: String,
    pub poster_url: Option<String>,
}

/// Full record for a single title, fetched when it is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: MovieId,
    pub title: String,
    pub year: String,
    pub released: String,
    /// Free text, e.g. "136 min".
    pub runtime: String,
    pub genre: String,
    pub plot: String,
    pub actors: String,
    pub director: String,
    pub poster_url: Option<String>,
    /// External (IMDb) rating; `None` when the source has none.
    pub imdb_rating: Option<f32>,
}
