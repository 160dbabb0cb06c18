//! The search bar in the top bar.
//!
//! Holds a local draft and reports it to the app only on submit (Enter
//! or the search button), never per keystroke.

use iced::widget::{button, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::screen::Action;
use crate::style;
use crate::theme::{self, ButtonKind, ColorScheme};

/// Widget id of the query input, for `Ctrl+F` focus.
pub const INPUT_ID: &str = "search-query";

pub struct SearchBar {
    draft: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    DraftChanged(String),
    Submit,
    Clear,
}

impl SearchBar {
    /// A bar showing `initial` (the query the app starts with).
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            draft: initial.into(),
        }
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::DraftChanged(draft) => {
                self.draft = draft;
                Action::None
            }
            Message::Clear => {
                self.draft.clear();
                Action::None
            }
            Message::Submit => Action::SubmitQuery(self.draft.clone()),
        }
    }

    pub fn view<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let search_icon = lucide_icons::iced::icon_search()
            .size(style::TEXT_BASE)
            .color(cs.on_surface_variant);

        let input = text_input("Search movies...", &self.draft)
            .id(iced::widget::Id::new(INPUT_ID))
            .on_input(Message::DraftChanged)
            .on_submit(Message::Submit)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .width(Length::Fill)
            .style(theme::text_input_borderless(cs));

        let mut search_row = row![search_icon, input]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center);

        if !self.draft.is_empty() {
            let clear_size = style::TEXT_SM + style::SPACE_XS * 2.0;
            let clear_btn = button(
                container(
                    lucide_icons::iced::icon_x()
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant),
                )
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            )
            .on_press(Message::Clear)
            .padding(0)
            .width(Length::Fixed(clear_size))
            .height(Length::Fixed(clear_size))
            .style(theme::button_style(cs, ButtonKind::Bare));
            search_row = search_row.push(clear_btn);
        }

        let submit = button(
            text("Search")
                .size(style::TEXT_SM)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_NORMAL),
        )
        .on_press(Message::Submit)
        .padding([style::SPACE_XS, style::SPACE_MD])
        .style(theme::button_style(cs, ButtonKind::Accent));

        search_row = search_row.push(submit);

        container(search_row)
            .style(theme::search_bar(cs))
            .padding([style::SPACE_XS, style::SPACE_XS + style::SPACE_SM])
            .width(Length::Fixed(style::SEARCH_BAR_WIDTH))
            .into()
    }
}
