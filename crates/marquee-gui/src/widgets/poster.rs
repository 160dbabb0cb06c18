use iced::widget::{container, image};
use iced::{ContentFit, Element, Length};

use crate::poster_cache::PosterCache;
use crate::theme::{self, ColorScheme};

/// A poster at a fixed size, or a film-icon placeholder while it loads
/// or when the title has none.
pub fn poster<'a, Message: 'a>(
    cs: &ColorScheme,
    posters: &PosterCache,
    url: Option<&str>,
    width: f32,
    height: f32,
    radius: f32,
) -> Element<'a, Message> {
    if let Some(handle) = posters.handle(url) {
        return container(
            image(handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Cover),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .clip(true)
        .style(theme::poster_frame(radius))
        .into();
    }

    let icon_size = (width * 0.4).min(32.0);
    container(
        lucide_icons::iced::icon_film()
            .size(icon_size)
            .color(cs.outline),
    )
    .center_x(Length::Fixed(width))
    .center_y(Length::Fixed(height))
    .style(theme::poster_placeholder(cs, radius))
    .into()
}
