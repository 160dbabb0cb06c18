use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use marquee_core::models::WatchedEntry;

use crate::format;
use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::{self, ButtonKind, ColorScheme};
use crate::widgets;

/// One watched title with its ratings, runtime, and a delete button.
pub fn watched_row<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    posters: &PosterCache,
    entry: &'a WatchedEntry,
    on_delete: Message,
) -> Element<'a, Message> {
    let thumb = widgets::poster(
        cs,
        posters,
        entry.poster_url.as_deref(),
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let stats = row![
        widgets::stat(
            lucide_icons::iced::icon_star(),
            format::imdb_rating(entry.imdb_rating),
            cs.rating_external,
        ),
        widgets::stat(
            lucide_icons::iced::icon_star(),
            entry.user_rating.to_string(),
            cs.rating_user,
        ),
        widgets::stat(
            lucide_icons::iced::icon_clock(),
            format!("{} min", entry.runtime_minutes),
            cs.rating_runtime,
        ),
    ]
    .spacing(style::SPACE_LG);

    let info = column![
        text(entry.title.as_str())
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_NORMAL),
        stats,
    ]
    .spacing(style::SPACE_XXS)
    .width(Length::Fill);

    let delete_size = style::TEXT_SM + style::SPACE_SM * 2.0;
    let delete = button(
        container(lucide_icons::iced::icon_x().size(style::TEXT_SM).color(cs.on_error))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(on_delete)
    .padding(0)
    .width(Length::Fixed(delete_size))
    .height(Length::Fixed(delete_size))
    .style(theme::button_style(cs, ButtonKind::Danger));

    container(
        row![thumb, info, delete]
            .spacing(style::SPACE_MD)
            .align_y(Alignment::Center),
    )
    .padding([style::SPACE_XS, style::SPACE_MD])
    .width(Length::Fill)
    .into()
}
