use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::theme::{SitePalette, ThemeProps, fade};

const CARD_RADIUS: f32 = 8.0;
const PILL_RADIUS: f32 = 999.0;
const INPUT_RADIUS: f32 = 6.0;

/// Flat container filled with `color`.
pub(crate) fn surface_style(
    color: Color,
) -> impl Fn(&Theme) -> container::Style + 'static {
    move |_theme: &Theme| container::Style {
        background: Some(color.into()),
        ..Default::default()
    }
}

/// White rounded card with a soft drop shadow. `lifted` deepens the shadow.
pub(crate) fn card_style(
    theme: ThemeProps<'_>,
    lifted: bool,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = *theme.palette();
    let opacity = theme.opacity;
    move |_theme: &Theme| container::Style {
        background: Some(fade(palette.white, opacity).into()),
        border: Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: CARD_RADIUS.into(),
        },
        shadow: Shadow {
            color: fade(palette.shadow, opacity),
            offset: Vector::new(0.0, if lifted { 10.0 } else { 4.0 }),
            blur_radius: if lifted { 24.0 } else { 12.0 },
        },
        ..Default::default()
    }
}

/// Fixed header bar: white with a bottom shadow.
pub(crate) fn header_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = *theme.palette();
    let opacity = theme.opacity;
    move |_theme: &Theme| container::Style {
        background: Some(fade(palette.white, opacity).into()),
        shadow: Shadow {
            color: fade(palette.shadow, opacity),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Text-only button used for navigation links.
pub(crate) fn link_button_style(
    theme: ThemeProps<'_>,
    base: Color,
    is_active: bool,
) -> impl Fn(&Theme, ButtonStatus) -> button::Style + 'static {
    let palette = *theme.palette();
    let opacity = theme.opacity;
    move |_theme: &Theme, status| {
        let color = if is_active {
            palette.accent
        } else {
            match status {
                ButtonStatus::Hovered | ButtonStatus::Pressed => palette.accent,
                _ => base,
            }
        };

        button::Style {
            background: None,
            text_color: fade(color, opacity),
            ..Default::default()
        }
    }
}

/// Accent pill used for the hero call to action and form submission.
pub(crate) fn primary_button_style(
    theme: ThemeProps<'_>,
    enabled: bool,
) -> impl Fn(&Theme, ButtonStatus) -> button::Style + 'static {
    let palette = *theme.palette();
    let opacity = theme.opacity;
    move |_theme: &Theme, status| {
        primary_button(&palette, status, enabled, opacity)
    }
}

fn primary_button(
    palette: &SitePalette,
    status: ButtonStatus,
    enabled: bool,
    opacity: f32,
) -> button::Style {
    let background = if !enabled {
        let mut color = palette.accent;
        color.a = 0.5;
        color
    } else {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => {
                palette.accent_hover
            },
            _ => palette.accent,
        }
    };

    button::Style {
        background: Some(Background::Color(fade(background, opacity))),
        text_color: fade(palette.white, opacity),
        border: Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: PILL_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Form input with an accent focus ring; `invalid` paints the border red.
pub(crate) fn text_input_style(
    theme: ThemeProps<'_>,
    invalid: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + 'static {
    let palette = *theme.palette();
    move |base: &Theme, status| {
        let mut style = text_input::default(base, status);
        style.background = Background::Color(palette.white);
        style.border = Border {
            width: 1.0,
            color: input_border_color(&palette, status, invalid),
            radius: INPUT_RADIUS.into(),
        };
        style.value = palette.gray_800;
        style.placeholder = palette.gray_400;
        style.selection = fade(palette.accent, 0.3);
        style
    }
}

fn input_border_color(
    palette: &SitePalette,
    status: text_input::Status,
    invalid: bool,
) -> Color {
    if invalid {
        return palette.danger;
    }

    match status {
        text_input::Status::Focused { .. } => palette.accent,
        _ => palette.gray_300,
    }
}
