use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length};

use marquee_core::models::SearchResultEntry;

use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// One search result: thumbnail, title, and year.
pub fn movie_row<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    posters: &PosterCache,
    entry: &'a SearchResultEntry,
    selected: bool,
    on_select: Message,
) -> Element<'a, Message> {
    let thumb = widgets::poster(
        cs,
        posters,
        entry.poster_url.as_deref(),
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let info = column![
        text(entry.title.as_str())
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_NORMAL),
        widgets::stat(
            lucide_icons::iced::icon_calendar(),
            entry.year.clone(),
            cs.on_surface_variant,
        ),
    ]
    .spacing(style::SPACE_XXS)
    .width(Length::Fill);

    button(
        row![thumb, info]
            .spacing(style::SPACE_MD)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([style::SPACE_XS, style::SPACE_MD])
    .on_press(on_select)
    .style(theme::list_item(selected, cs))
    .into()
}
