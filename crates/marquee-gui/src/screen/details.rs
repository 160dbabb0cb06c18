//! The details view for the selected title.
//!
//! While the lookup is in flight, or after it failed, only the back
//! action is offered. Once loaded it shows the full record, the rating
//! input, and "add to list". Adding before picking a rating stores 0.

use iced::widget::{button, column, container, row, text, Row};
use iced::{Alignment, Element, Length};

use marquee_core::details::{DetailsPanel, DetailsState};
use marquee_core::models::{MovieDetails, MAX_USER_RATING};
use marquee_core::session::Session;
use marquee_core::watchlist::{AddOutcome, Watchlist};

use crate::format;
use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ButtonKind, ColorScheme};
use crate::widgets;

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    RatingChanged(u8),
    AddToWatched,
}

pub fn update(session: &mut Session, msg: Message) -> Action {
    match msg {
        Message::Back => {
            session.close_details();
            Action::None
        }
        Message::RatingChanged(rating) => {
            session.set_rating(rating);
            Action::None
        }
        Message::AddToWatched => {
            let Some(panel) = session.details() else {
                return Action::None;
            };
            let rating = panel.rating();
            let Some(title) = panel.details().map(|d| d.title.clone()) else {
                return Action::None;
            };
            match session.add_selected_to_watched() {
                Some(AddOutcome::Added) if rating == 0 => {
                    Action::SetStatus(format!("Added \"{title}\" without a rating"))
                }
                Some(AddOutcome::Added) => {
                    Action::SetStatus(format!("Added \"{title}\" rated {rating}/{MAX_USER_RATING}"))
                }
                Some(AddOutcome::Rerated { previous }) => Action::SetStatus(format!(
                    "Changed rating of \"{title}\" from {previous} to {rating}"
                )),
                None => Action::None,
            }
        }
    }
}

pub fn view<'a>(
    cs: &ColorScheme,
    panel: &'a DetailsPanel,
    watched: &Watchlist,
    posters: &PosterCache,
) -> Element<'a, Message> {
    let back = button(
        row![
            lucide_icons::iced::icon_arrow_left().size(style::TEXT_SM),
            text("Back").size(style::TEXT_SM),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center),
    )
    .on_press(Message::Back)
    .padding([style::SPACE_XS, style::SPACE_MD])
    .style(theme::button_style(cs, ButtonKind::Outline));

    let body: Element<'a, Message> = match panel.state() {
        DetailsState::Loading => widgets::empty_state(
            cs,
            lucide_icons::iced::icon_clock()
                .size(style::TEXT_2XL)
                .color(cs.outline)
                .into(),
            "Loading...",
            "Fetching the full record.",
        ),
        DetailsState::Unavailable => widgets::empty_state(
            cs,
            lucide_icons::iced::icon_circle_x()
                .size(style::TEXT_2XL)
                .color(cs.error)
                .into(),
            "Details unavailable",
            "The movie database did not return this title.",
        ),
        DetailsState::Loaded(details) => {
            let previous = watched.get(panel.id()).map(|e| e.user_rating);
            loaded(cs, details, panel.rating(), previous, posters)
        }
    };

    column![back, body]
        .spacing(style::SPACE_MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn loaded<'a>(
    cs: &ColorScheme,
    details: &'a MovieDetails,
    rating: u8,
    previous: Option<u8>,
    posters: &PosterCache,
) -> Element<'a, Message> {
    let poster = widgets::poster(
        cs,
        posters,
        details.poster_url.as_deref(),
        style::POSTER_WIDTH,
        style::POSTER_HEIGHT,
        style::RADIUS_MD,
    );

    let genres: Row<'a, Message> = details
        .genre
        .split(',')
        .map(str::trim)
        .filter(|g| marquee_core::parse::available(g).is_some())
        .fold(row![].spacing(style::SPACE_XS), |genres, g| {
            genres.push(
                container(
                    text(g)
                        .size(style::TEXT_XS)
                        .color(cs.on_surface_variant)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                )
                .padding([style::SPACE_XXS, style::SPACE_SM])
                .style(theme::metadata_badge(cs)),
            )
        });

    let header = row![
        poster,
        column![
            text(details.title.as_str())
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            text(format!(
                "{}  \u{00B7}  {}",
                format::or_dash(&details.released),
                format::or_dash(&details.runtime)
            ))
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL),
            genres,
            widgets::stat(
                lucide_icons::iced::icon_star(),
                format!("{} IMDb rating", format::imdb_rating(details.imdb_rating)),
                cs.rating_external,
            ),
        ]
        .spacing(style::SPACE_SM)
        .width(Length::Fill),
    ]
    .spacing(style::SPACE_LG);

    let mut rate = column![widgets::rating_input(
        cs,
        rating,
        MAX_USER_RATING,
        Message::RatingChanged
    )]
    .spacing(style::SPACE_SM)
    .align_x(Alignment::Center);

    if let Some(previous) = previous {
        rate = rate.push(
            text(format!("You rated this movie {previous}/{MAX_USER_RATING}"))
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }

    rate = rate.push(
        button(
            row![
                lucide_icons::iced::icon_plus().size(style::TEXT_SM),
                text("Add to list").size(style::TEXT_SM),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center),
        )
        .on_press(Message::AddToWatched)
        .padding([style::SPACE_SM, style::SPACE_LG])
        .style(theme::button_style(cs, ButtonKind::Accent)),
    );

    let rate_card = container(rate)
        .padding(style::SPACE_MD)
        .width(Length::Fill)
        .style(theme::summary_card(cs));

    let credits = column![
        text(format::or_dash(&details.plot))
            .size(style::TEXT_BASE)
            .line_height(style::LINE_HEIGHT_NORMAL),
        text(format!("Starring {}", format::or_dash(&details.actors)))
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL),
        text(format!("Directed by {}", format::or_dash(&details.director)))
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL),
    ]
    .spacing(style::SPACE_SM);

    widgets::styled_scrollable(
        column![header, rate_card, credits]
            .spacing(style::SPACE_LG)
            .padding([0.0, style::SPACE_SM]),
        cs,
    )
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::models::MovieId;
    use marquee_core::session::Completion;

    fn batman() -> MovieDetails {
        MovieDetails {
            id: MovieId::new("tt0372784"),
            title: "Batman Begins".into(),
            year: "2005".into(),
            released: "15 Jun 2005".into(),
            runtime: "140 min".into(),
            genre: "Action, Crime, Drama".into(),
            plot: "A plot.".into(),
            actors: "Christian Bale".into(),
            director: "Christopher Nolan".into(),
            poster_url: None,
            imdb_rating: Some(8.2),
        }
    }

    fn open_loaded(session: &mut Session) {
        let request = session
            .select_movie(MovieId::new("tt0372784"))
            .expect("opened");
        let completion = session.finish_details(request.ticket, Ok::<_, String>(batman()));
        assert_eq!(completion, Completion::Applied);
    }

    #[test]
    fn test_add_reports_and_closes() {
        let mut session = Session::default();
        open_loaded(&mut session);

        update(&mut session, Message::RatingChanged(9));
        let action = update(&mut session, Message::AddToWatched);

        assert_eq!(
            action,
            Action::SetStatus("Added \"Batman Begins\" rated 9/10".into())
        );
        assert!(session.details().is_none());
        assert_eq!(session.watched().len(), 1);
    }

    #[test]
    fn test_readd_reports_rerating() {
        let mut session = Session::default();
        open_loaded(&mut session);
        update(&mut session, Message::RatingChanged(6));
        update(&mut session, Message::AddToWatched);

        open_loaded(&mut session);
        update(&mut session, Message::RatingChanged(8));
        let action = update(&mut session, Message::AddToWatched);

        assert_eq!(
            action,
            Action::SetStatus("Changed rating of \"Batman Begins\" from 6 to 8".into())
        );
        assert_eq!(session.watched().len(), 1);
    }

    #[test]
    fn test_add_without_rating_stores_zero() {
        let mut session = Session::default();
        open_loaded(&mut session);

        let action = update(&mut session, Message::AddToWatched);

        assert_eq!(
            action,
            Action::SetStatus("Added \"Batman Begins\" without a rating".into())
        );
        let entry = session
            .watched()
            .get(&MovieId::new("tt0372784"))
            .expect("added");
        assert_eq!(entry.user_rating, 0);
        assert!(session.details().is_none());
    }

    #[test]
    fn test_add_while_loading_does_nothing() {
        let mut session = Session::default();
        session.select_movie(MovieId::new("tt0372784"));

        assert_eq!(update(&mut session, Message::AddToWatched), Action::None);
        assert!(session.watched().is_empty());
        assert!(session.details().is_some());
    }

    #[test]
    fn test_back_closes() {
        let mut session = Session::default();
        open_loaded(&mut session);
        update(&mut session, Message::Back);
        assert!(session.selection().is_closed());
    }
}
