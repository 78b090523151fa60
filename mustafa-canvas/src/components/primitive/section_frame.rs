use iced::widget::container;
use iced::{Color, Element, Length, Padding};

use crate::shared::ui::motion::Motion;
use crate::shared::ui::style;
use crate::shared::ui::theme::fade;

/// Props for the fixed-height band every page section is drawn in.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectionFrameProps {
    pub(crate) motion: Motion,
    pub(crate) height: f32,
    pub(crate) padding_x: f32,
    pub(crate) padding_y: f32,
    pub(crate) background: Color,
}

/// Wrap section content in its slot, shifted by the reveal offset.
///
/// The offset moves padding from the bottom to the top, so the slot keeps
/// its height while the content slides.
pub(crate) fn view<'a, Message: 'a>(
    props: SectionFrameProps,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let offset = props.motion.offset_y.clamp(-props.padding_y, props.padding_y);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(props.height))
        .padding(Padding {
            top: props.padding_y + offset,
            bottom: props.padding_y - offset,
            left: props.padding_x,
            right: props.padding_x,
        })
        .clip(true)
        .style(style::surface_style(fade(
            props.background,
            props.motion.opacity,
        )))
        .into()
}
