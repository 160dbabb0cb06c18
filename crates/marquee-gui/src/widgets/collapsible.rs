use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::{self, ButtonKind, ColorScheme};

/// Open/closed flag for one collapsible panel. Panels start open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collapsible {
    open: bool,
}

impl Default for Collapsible {
    fn default() -> Self {
        Self { open: true }
    }
}

impl Collapsible {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// A card with a header toggle. `content` is only laid out while open;
/// the header stays visible either way.
pub fn collapsible<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    title: &'a str,
    state: Collapsible,
    on_toggle: Message,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let chevron = if state.is_open() {
        lucide_icons::iced::icon_chevron_down()
    } else {
        lucide_icons::iced::icon_chevron_right()
    };

    let header = button(
        row![
            chevron.size(style::TEXT_BASE).color(cs.on_surface_variant),
            text(title)
                .size(style::TEXT_SM)
                .font(style::FONT_HEADING)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_NORMAL),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
    )
    .on_press(on_toggle)
    .padding([style::SPACE_XS, style::SPACE_SM])
    .height(Length::Fixed(style::PANEL_HEADER_HEIGHT))
    .style(theme::button_style(cs, ButtonKind::Bare));

    let mut body = column![header].spacing(style::SPACE_XS);
    if state.is_open() {
        body = body.push(content);
    }

    container(body)
        .padding(style::SPACE_SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::card(cs))
        .into()
}
