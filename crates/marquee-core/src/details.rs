use crate::models::{MovieDetails, MovieId, WatchedEntry, MAX_USER_RATING};
use crate::ticket::Ticket;

/// Load state of the details view.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsState {
    /// Request in flight; only the back action is offered.
    Loading,
    Loaded(Box<MovieDetails>),
    /// The request failed; the reason has been logged.
    Unavailable,
}

/// The open details view for one title.
///
/// Created fresh for every selection, so the rating always starts at 0
/// even when the title is already in the watched set.
#[derive(Debug, Clone)]
pub struct DetailsPanel {
    id: MovieId,
    ticket: Ticket,
    state: DetailsState,
    rating: u8,
}

impl DetailsPanel {
    pub fn new(id: MovieId, ticket: Ticket) -> Self {
        Self {
            id,
            ticket,
            state: DetailsState::Loading,
            rating: 0,
        }
    }

    pub fn id(&self) -> &MovieId {
        &self.id
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn state(&self) -> &DetailsState {
        &self.state
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailsState::Loading)
    }

    pub fn details(&self) -> Option<&MovieDetails> {
        match &self.state {
            DetailsState::Loaded(details) => Some(details.as_ref()),
            _ => None,
        }
    }

    pub(crate) fn load(&mut self, details: MovieDetails) {
        self.state = DetailsState::Loaded(Box::new(details));
    }

    pub(crate) fn fail(&mut self) {
        self.state = DetailsState::Unavailable;
    }

    /// Set the pending rating (clamped to the scale). Ignored until the
    /// details have loaded, since the rating control isn't shown before.
    pub fn set_rating(&mut self, rating: u8) {
        if self.details().is_some() {
            self.rating = rating.min(MAX_USER_RATING);
        }
    }

    /// The entry that "add to watched" would commit, if details are loaded.
    pub fn watched_entry(&self) -> Option<WatchedEntry> {
        self.details()
            .map(|details| WatchedEntry::from_details(details, self.rating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::Generation;

    fn sample() -> MovieDetails {
        MovieDetails {
            id: MovieId::new("tt1"),
            title: "Sample".into(),
            year: "1999".into(),
            released: "31 Mar 1999".into(),
            runtime: "136 min".into(),
            genre: "Sci-Fi".into(),
            plot: "A plot.".into(),
            actors: "Someone".into(),
            director: "Someone Else".into(),
            poster_url: None,
            imdb_rating: Some(8.7),
        }
    }

    fn panel() -> DetailsPanel {
        DetailsPanel::new(MovieId::new("tt1"), Generation::new().issue())
    }

    #[test]
    fn test_starts_loading_with_zero_rating() {
        let p = panel();
        assert!(p.is_loading());
        assert_eq!(p.rating(), 0);
        assert!(p.watched_entry().is_none());
    }

    #[test]
    fn test_rating_ignored_while_loading() {
        let mut p = panel();
        p.set_rating(7);
        assert_eq!(p.rating(), 0);
    }

    #[test]
    fn test_watched_entry_after_load() {
        let mut p = panel();
        p.load(sample());
        p.set_rating(9);

        let entry = p.watched_entry().unwrap();
        assert_eq!(entry.user_rating, 9);
        assert_eq!(entry.runtime_minutes, 136);
    }

    #[test]
    fn test_failed_load_offers_nothing_to_add() {
        let mut p = panel();
        p.fail();
        assert_eq!(p.state(), &DetailsState::Unavailable);
        assert!(p.watched_entry().is_none());
    }
}
