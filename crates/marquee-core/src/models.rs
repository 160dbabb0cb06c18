mod movie;
mod watched;

pub use movie::{MovieDetails, MovieId, SearchResultEntry};
pub use watched::{WatchedEntry, MAX_USER_RATING};
