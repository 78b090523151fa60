use iced::widget::{button, container, svg};
use iced::{Element, Length, alignment};

use crate::shared::ui::theme::ThemeProps;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    /// Drawn on a dark surface; uses a light resting color.
    pub(crate) on_dark: bool,
}

/// Render a square icon button that turns accent on hover.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.palette();
    let base_color = props.theme.fade(if props.on_dark {
        palette.gray_300
    } else {
        palette.gray_700
    });
    let hover_color = props.theme.fade(palette.accent);

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(|_, _| button::Style::default())
        .into()
}
