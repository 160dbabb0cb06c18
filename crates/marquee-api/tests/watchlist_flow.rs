use std::collections::HashMap;

use marquee_api::MovieDatabase;
use marquee_core::details::DetailsState;
use marquee_core::models::{MovieDetails, MovieId, SearchResultEntry};
use marquee_core::session::{Completion, Session};
use marquee_core::watchlist::AddOutcome;

#[derive(Debug, thiserror::Error)]
#[error("unknown title: {0}")]
struct Missing(String);

/// In-memory movie source keyed by lower-cased query.
struct FakeDatabase {
    searches: HashMap<String, Vec<SearchResultEntry>>,
    titles: HashMap<MovieId, MovieDetails>,
}

impl FakeDatabase {
    fn new() -> Self {
        let batman = vec![
            entry("tt0372784", "Batman Begins", "2005"),
            entry("tt0468569", "The Dark Knight", "2008"),
        ];
        let mut searches = HashMap::new();
        searches.insert("batman".to_string(), batman);

        let mut titles = HashMap::new();
        titles.insert(
            MovieId::new("tt0372784"),
            details("tt0372784", "Batman Begins", "140 min", Some(8.2)),
        );
        titles.insert(
            MovieId::new("tt0468569"),
            details("tt0468569", "The Dark Knight", "152 min", Some(9.0)),
        );

        Self { searches, titles }
    }
}

impl MovieDatabase for FakeDatabase {
    type Error = Missing;

    async fn search(&self, query: &str) -> Result<Vec<SearchResultEntry>, Missing> {
        Ok(self
            .searches
            .get(&query.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }

    async fn details(&self, id: &MovieId) -> Result<MovieDetails, Missing> {
        self.titles
            .get(id)
            .cloned()
            .ok_or_else(|| Missing(id.to_string()))
    }
}

fn entry(id: &str, title: &str, year: &str) -> SearchResultEntry {
    SearchResultEntry {
        id: MovieId::new(id),
        title: title.into(),
        year: year.into(),
        poster_url: None,
    }
}

fn details(id: &str, title: &str, runtime: &str, imdb: Option<f32>) -> MovieDetails {
    MovieDetails {
        id: MovieId::new(id),
        title: title.into(),
        year: "2005".into(),
        released: "15 Jun 2005".into(),
        runtime: runtime.into(),
        genre: "Action, Crime, Drama".into(),
        plot: "A plot.".into(),
        actors: "Christian Bale".into(),
        director: "Christopher Nolan".into(),
        poster_url: None,
        imdb_rating: imdb,
    }
}

#[tokio::test]
async fn search_select_rate_and_add() {
    let db = FakeDatabase::new();
    let (mut session, initial) = Session::start("");
    let outcome = session.finish_search(initial.ticket, db.search(&initial.query).await);
    assert_eq!(outcome, Completion::Applied);
    assert!(session.results().is_empty());

    let search = session.submit_query("batman").expect("query changed");
    let results = db.search(&search.query).await;
    assert_eq!(session.finish_search(search.ticket, results), Completion::Applied);
    assert_eq!(session.results().len(), 2);

    let first = session.results()[0].id.clone();
    let lookup = session.select_movie(first.clone()).expect("opened");
    assert!(session.details().unwrap().is_loading());

    let fetched = db.details(&lookup.id).await;
    assert_eq!(session.finish_details(lookup.ticket, fetched), Completion::Applied);
    assert!(matches!(
        session.details().unwrap().state(),
        DetailsState::Loaded(_)
    ));

    session.set_rating(9);
    assert_eq!(session.add_selected_to_watched(), Some(AddOutcome::Added));
    assert!(session.selection().is_closed());
    assert!(session.details().is_none());

    let watched = session.watched().get(&first).expect("watched");
    assert_eq!(watched.user_rating, 9);
    assert_eq!(watched.runtime_minutes, 140);

    let summary = session.summary();
    assert_eq!(summary.count, 1);
    assert!((summary.avg_user_rating - 9.0).abs() < 1e-9);
    assert!((summary.avg_runtime_minutes - 140.0).abs() < 1e-9);
}

#[tokio::test]
async fn rapid_queries_keep_latest_results() {
    let db = FakeDatabase::new();
    let (mut session, initial) = Session::start("iron man");

    let older = session.submit_query("bat").expect("changed");
    let newer = session.submit_query("batman").expect("changed");

    // The newer search lands first, then the older one arrives late.
    let newer_results = db.search(&newer.query).await;
    let older_results = db.search(&older.query).await;
    let initial_results = db.search(&initial.query).await;

    assert_eq!(
        session.finish_search(newer.ticket, newer_results),
        Completion::Applied
    );
    assert_eq!(
        session.finish_search(older.ticket, older_results),
        Completion::Stale
    );
    assert_eq!(
        session.finish_search(initial.ticket, initial_results),
        Completion::Stale
    );
    assert_eq!(session.results().len(), 2);
    assert_eq!(session.query(), "batman");
}

#[tokio::test]
async fn switching_titles_drops_earlier_lookup() {
    let db = FakeDatabase::new();
    let mut session = Session::default();

    let first = session
        .select_movie(MovieId::new("tt0372784"))
        .expect("opened");
    let second = session
        .select_movie(MovieId::new("tt0468569"))
        .expect("opened");

    let first_details = db.details(&first.id).await;
    let second_details = db.details(&second.id).await;

    assert_eq!(
        session.finish_details(first.ticket, first_details),
        Completion::Stale
    );
    assert_eq!(
        session.finish_details(second.ticket, second_details),
        Completion::Applied
    );
    let shown = session.details().unwrap().details().unwrap();
    assert_eq!(shown.title, "The Dark Knight");
}

#[tokio::test]
async fn unknown_title_leaves_unavailable_view() {
    let db = FakeDatabase::new();
    let mut session = Session::default();

    let lookup = session
        .select_movie(MovieId::new("tt0000000"))
        .expect("opened");
    let fetched = db.details(&lookup.id).await;
    assert!(fetched.is_err());

    assert_eq!(
        session.finish_details(lookup.ticket, fetched),
        Completion::Failed
    );
    assert!(matches!(
        session.details().unwrap().state(),
        DetailsState::Unavailable
    ));
    assert_eq!(session.add_selected_to_watched(), None);
    assert!(session.watched().is_empty());
}
