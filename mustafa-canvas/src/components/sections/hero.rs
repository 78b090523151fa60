use iced::widget::{button, column, container, text};
use iced::{Element, Font, Length, alignment, font};

use super::PageLink;
use crate::components::primitive::section_frame::{self, SectionFrameProps};
use crate::content::{
    HERO_CTA, HERO_SUBTITLE, HERO_TITLE_ACCENT, HERO_TITLE_LEAD, SectionId,
};
use crate::layout::{Breakpoint, SectionMetrics};
use crate::shared::ui::motion::Motion;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;

const CONTENT_MAX_WIDTH: f32 = 896.0;
const SUBTITLE_MAX_WIDTH: f32 = 672.0;
const HORIZONTAL_PADDING: f32 = 24.0;

/// Props for the landing section.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeroProps<'a> {
    pub(crate) motion: Motion,
    pub(crate) height: f32,
    pub(crate) metrics: SectionMetrics,
    pub(crate) breakpoint: Breakpoint,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the headline, tagline and the gallery call to action.
pub(crate) fn view(props: HeroProps<'_>) -> Element<'_, PageLink> {
    let theme = props.theme.with_opacity(props.motion.opacity);
    let palette = theme.palette();
    let (title_size, subtitle_size) = match props.breakpoint {
        Breakpoint::Base => (24.0, 16.0),
        Breakpoint::Sm => (30.0, 18.0),
        Breakpoint::Md => (36.0, 20.0),
        Breakpoint::Lg => (48.0, 20.0),
    };
    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    };

    let title = column![
        text(HERO_TITLE_LEAD.trim_end())
            .size(title_size)
            .font(bold)
            .color(theme.fade(palette.gray_800)),
        text(HERO_TITLE_ACCENT)
            .size(title_size)
            .font(bold)
            .color(theme.fade(palette.accent)),
    ]
    .align_x(alignment::Horizontal::Center);

    let subtitle = container(
        text(HERO_SUBTITLE)
            .size(subtitle_size)
            .color(theme.fade(palette.gray_600))
            .align_x(alignment::Horizontal::Center),
    )
    .max_width(SUBTITLE_MAX_WIDTH);

    let cta = button(text(HERO_CTA).size(16))
        .padding([12.0, 32.0])
        .style(style::primary_button_style(theme, true))
        .on_press(PageLink::Section(SectionId::Gallery));

    let content = container(
        column![title, subtitle, cta]
            .spacing(24)
            .align_x(alignment::Horizontal::Center)
            .max_width(CONTENT_MAX_WIDTH),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    section_frame::view(
        SectionFrameProps {
            motion: props.motion,
            height: props.height,
            padding_x: HORIZONTAL_PADDING,
            padding_y: props.metrics.padding_y,
            background: palette.white,
        },
        content,
    )
}
