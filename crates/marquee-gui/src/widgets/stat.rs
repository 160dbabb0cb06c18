use iced::widget::{row, text, Text};
use iced::{Alignment, Color, Element};

use crate::style;

/// An icon followed by a short value, e.g. a star and "8.2".
pub fn stat<'a, Message: 'a>(icon: Text<'a>, value: String, color: Color) -> Element<'a, Message> {
    row![
        icon.size(style::TEXT_SM).color(color),
        text(value)
            .size(style::TEXT_SM)
            .line_height(style::LINE_HEIGHT_NORMAL),
    ]
    .spacing(style::SPACE_XS)
    .align_y(Alignment::Center)
    .into()
}
