use serde::Deserialize;

use marquee_core::models::{MovieDetails, MovieId, SearchResultEntry};
use marquee_core::parse;

// ── Search responses ────────────────────────────────────────────

/// `?s=` response. On no match OMDb answers 200 with `Response: "False"`
/// and an `Error` message instead of `Search`.
#[derive(Debug, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search")]
    pub search: Option<Vec<OmdbSearchItem>>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbSearchItem {
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(default)]
    pub poster: String,
}

// ── Title responses ─────────────────────────────────────────────

/// `?i=` response: one flat object. Missing fields default to empty so a
/// sparse record still converts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbTitleResponse {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub released: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub actors: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub poster: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    pub response: String,
    pub error: Option<String>,
}

/// Whether an OMDb `Response` field signals success.
pub fn is_success(response: &str) -> bool {
    response.eq_ignore_ascii_case("true")
}

// ── Conversions to core models ──────────────────────────────────

impl OmdbSearchResponse {
    /// The result rows; empty for a "no match" answer.
    pub fn into_results(self) -> Vec<SearchResultEntry> {
        self.search
            .unwrap_or_default()
            .into_iter()
            .map(OmdbSearchItem::into_search_result)
            .collect()
    }
}

impl OmdbSearchItem {
    pub fn into_search_result(self) -> SearchResultEntry {
        SearchResultEntry {
            id: MovieId::new(self.imdb_id),
            title: self.title,
            year: self.year,
            poster_url: parse::available(&self.poster).map(str::to_string),
        }
    }
}

impl OmdbTitleResponse {
    /// Convert to core details. `requested` fills in the id when the
    /// record omits it.
    pub fn into_details(self, requested: &MovieId) -> MovieDetails {
        let id = if self.imdb_id.trim().is_empty() {
            requested.clone()
        } else {
            MovieId::new(self.imdb_id)
        };
        MovieDetails {
            id,
            title: self.title,
            year: self.year,
            released: self.released,
            runtime: self.runtime,
            genre: self.genre,
            plot: self.plot,
            actors: self.actors,
            director: self.director,
            poster_url: parse::available(&self.poster).map(str::to_string),
            imdb_rating: parse::rating(&self.imdb_rating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_response() {
        let json = r#"{
            "Search": [
                {
                    "Title": "Batman Begins",
                    "Year": "2005",
                    "imdbID": "tt0372784",
                    "Type": "movie",
                    "Poster": "https://m.media-amazon.com/images/M/batman-begins.jpg"
                },
                {
                    "Title": "Batman: The Animated Series",
                    "Year": "1992–1995",
                    "imdbID": "tt0103359",
                    "Type": "series",
                    "Poster": "N/A"
                }
            ],
            "totalResults": "597",
            "Response": "True"
        }"#;

        let resp: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert!(is_success(&resp.response));

        let results = resp.into_results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id.as_str(), "tt0372784");
        assert_eq!(results[0].title, "Batman Begins");
        assert_eq!(results[0].year, "2005");
        assert!(results[0].poster_url.is_some());
        assert_eq!(results[1].year, "1992–1995");
        assert!(results[1].poster_url.is_none());
    }

    #[test]
    fn test_deserialize_no_match() {
        let json = r#"{"Response":"False","Error":"Movie not found!"}"#;
        let resp: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert!(!is_success(&resp.response));
        assert_eq!(resp.error.as_deref(), Some("Movie not found!"));
        assert!(resp.into_results().is_empty());
    }

    #[test]
    fn test_deserialize_title_response() {
        let json = r#"{
            "Title": "Batman Begins",
            "Year": "2005",
            "Rated": "PG-13",
            "Released": "15 Jun 2005",
            "Runtime": "140 min",
            "Genre": "Action, Crime, Drama",
            "Director": "Christopher Nolan",
            "Writer": "Bob Kane, David S. Goyer, Christopher Nolan",
            "Actors": "Christian Bale, Michael Caine, Ken Watanabe",
            "Plot": "After witnessing his parents' death, Bruce learns the art of fighting.",
            "Language": "English, Mandarin",
            "Poster": "https://m.media-amazon.com/images/M/batman-begins.jpg",
            "Ratings": [{"Source": "Internet Movie Database", "Value": "8.2/10"}],
            "Metascore": "70",
            "imdbRating": "8.2",
            "imdbVotes": "1,596,210",
            "imdbID": "tt0372784",
            "Type": "movie",
            "Response": "True"
        }"#;

        let resp: OmdbTitleResponse = serde_json::from_str(json).unwrap();
        assert!(is_success(&resp.response));

        let details = resp.into_details(&MovieId::new("tt0372784"));
        assert_eq!(details.id.as_str(), "tt0372784");
        assert_eq!(details.title, "Batman Begins");
        assert_eq!(details.released, "15 Jun 2005");
        assert_eq!(details.runtime, "140 min");
        assert_eq!(details.director, "Christopher Nolan");
        assert_eq!(details.imdb_rating, Some(8.2));
        assert!(details.poster_url.is_some());
    }

    #[test]
    fn test_deserialize_sparse_title() {
        let json = r#"{
            "Title": "Obscure Short",
            "Runtime": "N/A",
            "imdbRating": "N/A",
            "Poster": "N/A",
            "Response": "True"
        }"#;

        let resp: OmdbTitleResponse = serde_json::from_str(json).unwrap();
        let details = resp.into_details(&MovieId::new("tt9999999"));
        assert_eq!(details.id.as_str(), "tt9999999");
        assert_eq!(details.runtime, "N/A");
        assert!(details.imdb_rating.is_none());
        assert!(details.poster_url.is_none());
        assert!(details.plot.is_empty());
    }

    #[test]
    fn test_deserialize_title_error() {
        let json = r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#;
        let resp: OmdbTitleResponse = serde_json::from_str(json).unwrap();
        assert!(!is_success(&resp.response));
        assert_eq!(resp.error.as_deref(), Some("Incorrect IMDb ID."));
    }
}
