use iced::widget::{column, container, text};
use iced::{Element, Font, Length, alignment, font};

use crate::shared::ui::theme::ThemeProps;

const TITLE_SIZE_BASE: f32 = 30.0;
const TITLE_SIZE_WIDE: f32 = 36.0;
const RULE_WIDTH: f32 = 80.0;
const RULE_HEIGHT: f32 = 4.0;

/// Props for a centered section title with an accent rule.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectionHeadingProps<'a> {
    pub(crate) title: &'static str,
    pub(crate) wide: bool,
    pub(crate) height: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the heading block used at the top of every content section.
pub(crate) fn view<'a, Message: 'a>(
    props: SectionHeadingProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.palette();
    let title_color = props.theme.fade(palette.gray_800);
    let rule_color = props.theme.fade(palette.accent);
    let size = if props.wide {
        TITLE_SIZE_WIDE
    } else {
        TITLE_SIZE_BASE
    };

    let title = text(props.title)
        .size(size)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        })
        .color(title_color);

    let rule = container(text(""))
        .width(Length::Fixed(RULE_WIDTH))
        .height(Length::Fixed(RULE_HEIGHT))
        .style(move |_| container::Style {
            background: Some(rule_color.into()),
            ..Default::default()
        });

    container(
        column![title, rule]
            .spacing(12)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(props.height))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Top)
    .into()
}
