use crate::models::MovieId;

/// Which title, if any, has its details view open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No details view; the watched summary and list are shown.
    #[default]
    Closed,
    Viewing(MovieId),
}

impl Selection {
    /// Select `id`, or close the view if `id` is already selected.
    ///
    /// Returns `true` when a (different) title was opened.
    pub fn toggle(&mut self, id: MovieId) -> bool {
        if self.is_viewing(&id) {
            *self = Self::Closed;
            false
        } else {
            *self = Self::Viewing(id);
            true
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn viewing(&self) -> Option<&MovieId> {
        match self {
            Self::Viewing(id) => Some(id),
            Self::Closed => None,
        }
    }

    pub fn is_viewing(&self, id: &MovieId) -> bool {
        self.viewing() == Some(id)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}
