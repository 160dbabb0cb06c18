use iced::widget::{button, row, text};
use iced::{Alignment, Element};

use crate::style;
use crate::theme::{self, ButtonKind, ColorScheme};

/// A row of `max` star buttons. Stars up to `rating` are lit; pressing
/// star `n` reports `n`.
pub fn rating_input<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    rating: u8,
    max: u8,
    on_rate: impl Fn(u8) -> Message + 'a,
) -> Element<'a, Message> {
    let mut stars = row![].spacing(style::SPACE_XXS).align_y(Alignment::Center);

    for n in 1..=max {
        let color = if n <= rating {
            cs.rating_user
        } else {
            cs.outline_variant
        };
        stars = stars.push(
            button(lucide_icons::iced::icon_star().size(style::STAR_SIZE).color(color))
                .on_press(on_rate(n))
                .padding(style::SPACE_XXS)
                .style(theme::button_style(cs, ButtonKind::Bare)),
        );
    }

    let label = if rating > 0 {
        format!("{rating}/{max}")
    } else {
        String::new()
    };

    row![
        stars,
        text(label)
            .size(style::TEXT_LG)
            .font(style::FONT_HEADING)
            .color(cs.rating_user)
            .line_height(style::LINE_HEIGHT_TIGHT),
    ]
    .spacing(style::SPACE_MD)
    .align_y(Alignment::Center)
    .into()
}
