use iced::widget::column;
use iced::{Element, Length};

use marquee_core::models::MovieId;
use marquee_core::session::Session;

use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::ColorScheme;
use crate::widgets;

#[derive(Debug, Clone)]
pub enum Message {
    Selected(MovieId),
}

/// Clicking a row toggles its details view.
pub fn update(session: &mut Session, msg: Message) -> Action {
    match msg {
        Message::Selected(id) => match session.select_movie(id) {
            Some(request) => Action::FetchDetails(request),
            None => Action::None,
        },
    }
}

pub fn view<'a>(
    cs: &ColorScheme,
    session: &'a Session,
    posters: &PosterCache,
) -> Element<'a, Message> {
    if session.results().is_empty() {
        return widgets::empty_state(
            cs,
            lucide_icons::iced::icon_film()
                .size(style::TEXT_2XL)
                .color(cs.outline)
                .into(),
            "No movies to show",
            "Search for a title to see results here.",
        );
    }

    let rows: Vec<Element<'a, Message>> = session
        .results()
        .iter()
        .map(|entry| {
            widgets::movie_row(
                cs,
                posters,
                entry,
                session.selection().is_viewing(&entry.id),
                Message::Selected(entry.id.clone()),
            )
        })
        .collect();

    widgets::styled_scrollable(
        column(rows)
            .spacing(style::SPACE_XXS)
            .padding([style::SPACE_XS, style::SPACE_XS]),
        cs,
    )
    .height(Length::Fill)
    .into()
}
