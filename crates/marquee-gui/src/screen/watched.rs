//! Summary statistics and the watched list, shown when no details view
//! is open.

use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length};

use marquee_core::models::MovieId;
use marquee_core::session::Session;
use marquee_core::summary::WatchedSummary;

use crate::format;
use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

#[derive(Debug, Clone)]
pub enum Message {
    Delete(MovieId),
}

pub fn update(session: &mut Session, msg: Message) -> Action {
    match msg {
        Message::Delete(id) => {
            let title = session.watched().get(&id).map(|e| e.title.clone());
            match title {
                Some(title) if session.delete_watched(&id) => {
                    Action::SetStatus(format!("Removed \"{title}\" from watched"))
                }
                _ => Action::None,
            }
        }
    }
}

pub fn view<'a>(
    cs: &ColorScheme,
    session: &'a Session,
    posters: &PosterCache,
) -> Element<'a, Message> {
    let summary = summary_card(cs, &session.summary());

    let list: Element<'a, Message> = if session.watched().is_empty() {
        widgets::empty_state(
            cs,
            lucide_icons::iced::icon_list()
                .size(style::TEXT_2XL)
                .color(cs.outline)
                .into(),
            "Nothing watched yet",
            "Open a movie, rate it, and add it to your list.",
        )
    } else {
        let rows: Vec<Element<'a, Message>> = session
            .watched()
            .iter()
            .map(|entry| {
                widgets::watched_row(cs, posters, entry, Message::Delete(entry.id.clone()))
            })
            .collect();
        widgets::styled_scrollable(column(rows).spacing(style::SPACE_XXS), cs)
            .height(Length::Fill)
            .into()
    };

    column![summary, list]
        .spacing(style::SPACE_SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn summary_card<'a>(cs: &ColorScheme, summary: &WatchedSummary) -> Element<'a, Message> {
    let stats = row![
        widgets::stat(
            lucide_icons::iced::icon_film(),
            format::movies_count(summary.count),
            cs.on_surface_variant,
        ),
        widgets::stat(
            lucide_icons::iced::icon_star(),
            format::mean_rating(summary.avg_imdb_rating),
            cs.rating_external,
        ),
        widgets::stat(
            lucide_icons::iced::icon_star(),
            format::mean_rating(summary.avg_user_rating),
            cs.rating_user,
        ),
        widgets::stat(
            lucide_icons::iced::icon_clock(),
            format::minutes(summary.avg_runtime_minutes),
            cs.rating_runtime,
        ),
    ]
    .spacing(style::SPACE_LG)
    .align_y(Alignment::Center);

    container(
        column![
            text("Movies you watched")
                .size(style::TEXT_LG)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            stats,
        ]
        .spacing(style::SPACE_SM),
    )
    .padding([style::SPACE_MD, style::SPACE_LG])
    .width(Length::Fill)
    .style(theme::summary_card(cs))
    .into()
}
