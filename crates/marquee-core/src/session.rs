//! Application state and its transitions.
//!
//! [`Session`] owns everything the UI shows: the current query, the
//! search results, which title is selected (with its details view), and
//! the watched set. Network work is requested, not performed: transitions
//! that need a fetch return a request carrying a [`Ticket`], and the
//! caller feeds the response back through `finish_search` /
//! `finish_details`. Responses whose ticket has been superseded are
//! dropped.

use std::fmt::Display;

use crate::details::DetailsPanel;
use crate::models::{MovieDetails, MovieId, SearchResultEntry, WatchedEntry};
use crate::selection::Selection;
use crate::summary::WatchedSummary;
use crate::ticket::{Generation, Ticket};
use crate::watchlist::{AddOutcome, Watchlist};

/// A search the caller should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: Ticket,
    pub query: String,
}

/// A details lookup the caller should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsRequest {
    pub ticket: Ticket,
    pub id: MovieId,
}

/// What happened to a response fed back into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The request failed; previous state was kept.
    Failed,
    /// A newer request superseded this one; the response was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct Session {
    query: String,
    results: Vec<SearchResultEntry>,
    selection: Selection,
    details: Option<DetailsPanel>,
    watched: Watchlist,
    searches: Generation,
    lookups: Generation,
}

impl Session {
    /// A new session and the search for its initial query.
    pub fn start(initial_query: impl Into<String>) -> (Self, SearchRequest) {
        let mut session = Self::default();
        session.query = initial_query.into();
        let request = session.issue_search();
        (session, request)
    }

    // ── Search ────────────────────────────────────────────────────

    /// Set the query. Returns the search to run, or `None` if the query
    /// did not change.
    pub fn submit_query(&mut self, query: impl Into<String>) -> Option<SearchRequest> {
        let query = query.into();
        if query == self.query {
            tracing::debug!(%query, "query unchanged, not searching again");
            return None;
        }
        self.query = query;
        Some(self.issue_search())
    }

    fn issue_search(&mut self) -> SearchRequest {
        let ticket = self.searches.issue();
        tracing::debug!(query = %self.query, ?ticket, "search requested");
        SearchRequest {
            ticket,
            query: self.query.clone(),
        }
    }

    /// Apply a search response. Failures are logged and keep the current
    /// results.
    pub fn finish_search<E: Display>(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<SearchResultEntry>, E>,
    ) -> Completion {
        if !self.searches.is_current(ticket) {
            tracing::debug!(?ticket, "dropping stale search response");
            return Completion::Stale;
        }
        match result {
            Ok(results) => {
                tracing::debug!(query = %self.query, count = results.len(), "search results applied");
                self.results = results;
                Completion::Applied
            }
            Err(e) => {
                tracing::warn!(query = %self.query, error = %e, "search failed");
                Completion::Failed
            }
        }
    }

    // ── Selection & details ───────────────────────────────────────

    /// Toggle the selection. Returns the lookup to run when a title was
    /// opened; selecting the open title again closes it.
    pub fn select_movie(&mut self, id: MovieId) -> Option<DetailsRequest> {
        if !self.selection.toggle(id.clone()) {
            self.drop_details();
            return None;
        }
        let ticket = self.lookups.issue();
        tracing::debug!(%id, ?ticket, "details requested");
        self.details = Some(DetailsPanel::new(id.clone(), ticket));
        Some(DetailsRequest { ticket, id })
    }

    pub fn close_details(&mut self) {
        self.selection.close();
        self.drop_details();
    }

    fn drop_details(&mut self) {
        self.details = None;
        self.lookups.invalidate();
    }

    /// Apply a details response to the open panel.
    pub fn finish_details<E: Display>(
        &mut self,
        ticket: Ticket,
        result: Result<MovieDetails, E>,
    ) -> Completion {
        let Some(panel) = self
            .details
            .as_mut()
            .filter(|p| p.ticket() == ticket && self.lookups.is_current(ticket))
        else {
            tracing::debug!(?ticket, "dropping stale details response");
            return Completion::Stale;
        };
        match result {
            Ok(details) => {
                panel.load(details);
                Completion::Applied
            }
            Err(e) => {
                tracing::warn!(id = %panel.id(), error = %e, "details lookup failed");
                panel.fail();
                Completion::Failed
            }
        }
    }

    /// Set the pending rating in the open details view.
    pub fn set_rating(&mut self, rating: u8) {
        if let Some(panel) = self.details.as_mut() {
            panel.set_rating(rating);
        }
    }

    // ── Watched set ───────────────────────────────────────────────

    /// Commit the open details view with its rating. `None` (and nothing
    /// changes) unless details have loaded.
    pub fn add_selected_to_watched(&mut self) -> Option<AddOutcome> {
        let entry = self.details.as_ref()?.watched_entry()?;
        Some(self.add_watched(entry))
    }

    /// Insert or re-rate `entry`, then close the details view.
    pub fn add_watched(&mut self, entry: WatchedEntry) -> AddOutcome {
        let id = entry.id.clone();
        let outcome = self.watched.add(entry);
        tracing::debug!(%id, ?outcome, "watched set updated");
        self.close_details();
        outcome
    }

    /// Remove `id` from the watched set. Returns whether it was present.
    pub fn delete_watched(&mut self, id: &MovieId) -> bool {
        self.watched.remove(id).is_some()
    }

    // ── Accessors ─────────────────────────────────────────────────

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResultEntry] {
        &self.results
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn details(&self) -> Option<&DetailsPanel> {
        self.details.as_ref()
    }

    pub fn watched(&self) -> &Watchlist {
        &self.watched
    }

    pub fn summary(&self) -> WatchedSummary {
        self.watched.summary()
    }
}
