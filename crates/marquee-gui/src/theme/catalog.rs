//! Style functions parameterized by ColorScheme.
//!
//! Each function returns a closure suitable for Iced's `.style()` method,
//! capturing the needed color tokens from a `ColorScheme`.

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::style;

use super::ColorScheme;

/// A card container: surface background, rounded corners, subtle border.
pub fn card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_LG.into(),
        },
        ..Default::default()
    }
}

/// Top bar: primary container strip holding logo, search, and count.
pub fn top_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.primary_container;
    let text = cs.on_primary_container;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        border: Border {
            radius: style::RADIUS_LG.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Status bar container style.
pub fn status_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let text = cs.on_surface_variant;
    let bg = cs.surface_container_lowest;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Summary block above the watched list.
pub fn summary_card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            radius: style::RADIUS_MD.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// List item button with selection highlight.
pub fn list_item(
    selected: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_container_high = cs.surface_container_high;
    let surface_container_highest = cs.surface_container_highest;
    let outline_variant = cs.outline_variant;
    let primary = cs.primary;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let (bg, border_color) = if selected {
            (Some(Background::Color(surface_container_highest)), primary)
        } else {
            match status {
                button::Status::Hovered => (
                    Some(Background::Color(surface_container_high)),
                    outline_variant,
                ),
                _ => (None, Color::TRANSPARENT),
            }
        };

        button::Style {
            background: bg,
            text_color: on_surface,
            border: Border {
                color: border_color,
                width: if selected { 1.0 } else { 0.0 },
                radius: style::RADIUS_MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Which role a button plays in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Filled with the primary color: Search, Add to list.
    Accent,
    /// Filled with the error color: removing a watched entry.
    Danger,
    /// Outlined, no fill until hovered: Back.
    Outline,
    /// No fill or border; the content carries its own colors (stars, icons,
    /// panel headers).
    Bare,
}

/// Per-status colors resolved from the scheme for one `ButtonKind`.
#[derive(Clone, Copy)]
struct ButtonPalette {
    idle: Option<Color>,
    hovered: Option<Color>,
    pressed: Option<Color>,
    text: Color,
    hovered_text: Color,
    border: Color,
    border_width: f32,
    radius: f32,
}

impl ButtonKind {
    fn palette(self, cs: &ColorScheme) -> ButtonPalette {
        match self {
            ButtonKind::Accent => ButtonPalette {
                idle: Some(cs.primary),
                hovered: Some(cs.primary_hover),
                pressed: Some(cs.primary_dim),
                text: cs.on_primary,
                hovered_text: cs.on_primary,
                border: Color::TRANSPARENT,
                border_width: 0.0,
                radius: style::RADIUS_FULL,
            },
            ButtonKind::Danger => ButtonPalette {
                idle: Some(cs.error),
                hovered: Some(cs.error_hover),
                pressed: Some(cs.error_pressed),
                text: cs.on_error,
                hovered_text: cs.on_error,
                border: Color::TRANSPARENT,
                border_width: 0.0,
                radius: style::RADIUS_FULL,
            },
            ButtonKind::Outline => ButtonPalette {
                idle: None,
                hovered: Some(cs.surface_bright),
                pressed: Some(cs.surface_container_highest),
                text: cs.on_surface_variant,
                hovered_text: cs.on_surface,
                border: cs.outline_variant,
                border_width: 1.0,
                radius: style::RADIUS_MD,
            },
            ButtonKind::Bare => ButtonPalette {
                idle: None,
                hovered: Some(cs.surface_bright),
                pressed: Some(cs.surface_container_highest),
                text: cs.on_surface_variant,
                hovered_text: cs.on_surface,
                border: Color::TRANSPARENT,
                border_width: 0.0,
                radius: style::RADIUS_FULL,
            },
        }
    }
}

/// Style for every non-list button in the app.
pub fn button_style(
    cs: &ColorScheme,
    kind: ButtonKind,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let palette = kind.palette(cs);

    move |_theme, status| {
        let (bg, text_color) = match status {
            button::Status::Hovered => (palette.hovered, palette.hovered_text),
            button::Status::Pressed => (palette.pressed, palette.hovered_text),
            _ => (palette.idle, palette.text),
        };
        button::Style {
            background: bg.map(Background::Color),
            text_color,
            border: Border {
                color: palette.border,
                width: palette.border_width,
                radius: palette.radius.into(),
            },
            ..Default::default()
        }
    }
}

/// Borderless text input for use inside a composite search bar container.
pub fn text_input_borderless(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;
    let outline = cs.outline;
    let primary = cs.primary;

    move |_theme, _status| text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 0.0.into(),
        },
        icon: on_surface_variant,
        placeholder: outline,
        value: on_surface,
        selection: primary,
    }
}

/// Composite search bar container, pill-shaped with subtle border.
pub fn search_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_FULL.into(),
        },
        ..Default::default()
    }
}

/// Poster placeholder container.
pub fn poster_placeholder(cs: &ColorScheme, radius: f32) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

/// Rounded clip around a loaded poster image.
pub fn poster_frame(radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Metadata badge (genre pill): tonal surface with outline border.
pub fn metadata_badge(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_FULL.into(),
        },
        ..Default::default()
    }
}

/// Fluent Design overlay scrollbar: thin transparent rail, pill scroller
/// that becomes more visible on hover/drag.
pub fn overlay_scrollbar(
    cs: &ColorScheme,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let on_surface = cs.on_surface;
    let primary = cs.primary;

    move |_theme, status| {
        let (scroller_color, scroller_alpha) = match status {
            scrollable::Status::Dragged { .. } => (primary, 0.7),
            scrollable::Status::Hovered {
                is_vertical_scrollbar_hovered: true,
                ..
            } => (on_surface, 0.5),
            scrollable::Status::Hovered { .. } => (on_surface, 0.25),
            _ => (on_surface, 0.15),
        };

        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(Color {
                    a: scroller_alpha,
                    ..scroller_color
                }),
                border: Border {
                    radius: style::RADIUS_FULL.into(),
                    ..Border::default()
                },
            },
        };

        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::AutoScroll {
                background: Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                shadow: Shadow::default(),
                icon: on_surface,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MarqueeTheme, ThemeMode};

    #[test]
    fn test_accent_button_follows_status() {
        let theme = MarqueeTheme::default_theme();
        let cs = theme.colors(ThemeMode::Dark);
        let style = button_style(cs, ButtonKind::Accent);

        let idle = style(&Theme::Dark, button::Status::Active);
        let hovered = style(&Theme::Dark, button::Status::Hovered);
        assert_eq!(idle.background, Some(Background::Color(cs.primary)));
        assert_eq!(hovered.background, Some(Background::Color(cs.primary_hover)));
        assert_eq!(idle.text_color, cs.on_primary);
    }

    #[test]
    fn test_bare_button_has_no_fill_until_hovered() {
        let theme = MarqueeTheme::default_theme();
        let cs = theme.colors(ThemeMode::Light);
        let style = button_style(cs, ButtonKind::Bare);

        assert_eq!(style(&Theme::Light, button::Status::Active).background, None);
        assert_eq!(
            style(&Theme::Light, button::Status::Hovered).background,
            Some(Background::Color(cs.surface_bright))
        );
        assert_eq!(style(&Theme::Light, button::Status::Active).border.width, 0.0);
    }

    #[test]
    fn test_outline_button_keeps_border() {
        let theme = MarqueeTheme::default_theme();
        let cs = theme.colors(ThemeMode::Dark);
        let style = button_style(cs, ButtonKind::Outline)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, cs.outline_variant);
        assert_eq!(style.border.width, 1.0);
    }
}
