pub mod collapsible;
pub mod empty_state;
pub mod movie_row;
pub mod poster;
pub mod rating_input;
pub mod stat;
pub mod watched_row;

pub use collapsible::{collapsible, Collapsible};
pub use empty_state::empty_state;
pub use movie_row::movie_row;
pub use poster::poster;
pub use rating_input::rating_input;
pub use stat::stat;
pub use watched_row::watched_row;

use iced::widget::scrollable;
use iced::Element;

use crate::theme::{self, ColorScheme};

/// A scrollable with consistent direction and style across the application.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(6)
                .scroller_width(4)
                .margin(2),
        ))
        .style(theme::overlay_scrollbar(cs))
}
