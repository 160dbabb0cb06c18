//! The movie-data source seen by the rest of the application.
//!
//! The OMDb client implements this; tests substitute an in-memory source.

use std::future::Future;

use marquee_core::models::{MovieDetails, MovieId, SearchResultEntry};

/// A searchable movie database.
pub trait MovieDatabase: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search titles by free text. A query with no matches yields an empty
    /// list, not an error.
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SearchResultEntry>, Self::Error>> + Send;

    /// Full details for one title.
    fn details(
        &self,
        id: &MovieId,
    ) -> impl Future<Output = Result<MovieDetails, Self::Error>> + Send;
}
