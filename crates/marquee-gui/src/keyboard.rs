//! Global keyboard shortcuts.
//!
//! Maps key combinations to semantic `Shortcut` variants that the app
//! dispatches against the current session state.

use iced::keyboard;
use iced::Subscription;

use crate::app::Message;

/// Application-level keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape: close the details view.
    Escape,
    /// Ctrl+F: focus the search input.
    FocusSearch,
    /// Ctrl+1-9 → ratings 1-9, Ctrl+0 → 10.
    SetRating(u8),
}

/// Subscription that converts keyboard events to `Message::Shortcut`.
pub fn keyboard_subscription() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            map_shortcut(&key, modifiers).map(Message::Shortcut)
        }
        _ => None,
    })
}

fn map_shortcut(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Shortcut> {
    use keyboard::key::Named;
    use keyboard::Key;

    let ctrl = modifiers.control();

    match key {
        Key::Named(Named::Escape) => Some(Shortcut::Escape),
        Key::Character(c) if ctrl => match c.as_str() {
            "f" => Some(Shortcut::FocusSearch),
            "0" => Some(Shortcut::SetRating(10)),
            digit => digit
                .parse::<u8>()
                .ok()
                .filter(|n| (1..=9).contains(n))
                .map(Shortcut::SetRating),
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;
    use iced::keyboard::{Key, Modifiers};

    #[test]
    fn test_escape_without_modifiers() {
        let key = Key::Named(Named::Escape);
        assert_eq!(
            map_shortcut(&key, Modifiers::empty()),
            Some(Shortcut::Escape)
        );
    }

    #[test]
    fn test_ctrl_f_focuses_search() {
        let key = Key::Character("f".into());
        assert_eq!(
            map_shortcut(&key, Modifiers::CTRL),
            Some(Shortcut::FocusSearch)
        );
        assert_eq!(map_shortcut(&key, Modifiers::empty()), None);
    }

    #[test]
    fn test_ctrl_digits_set_rating() {
        let five = Key::Character("5".into());
        assert_eq!(
            map_shortcut(&five, Modifiers::CTRL),
            Some(Shortcut::SetRating(5))
        );
        let zero = Key::Character("0".into());
        assert_eq!(
            map_shortcut(&zero, Modifiers::CTRL),
            Some(Shortcut::SetRating(10))
        );
        let letter = Key::Character("x".into());
        assert_eq!(map_shortcut(&letter, Modifiers::CTRL), None);
    }
}
