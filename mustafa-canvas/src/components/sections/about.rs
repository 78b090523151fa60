use iced::widget::{Space, column, container, image, row, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::asset_image::{
    self, AssetFallback, AssetImageProps,
};
use crate::components::primitive::section_frame::{self, SectionFrameProps};
use crate::components::primitive::section_heading::{
    self, SectionHeadingProps,
};
use crate::content::{ABOUT_PARAGRAPHS, ABOUT_TITLE, ARTIST_PHOTO};
use crate::layout::SectionMetrics;
use crate::shared::ui::motion::Motion;
use crate::shared::ui::theme::ThemeProps;

const CONTENT_MAX_WIDTH: f32 = 896.0;
const HORIZONTAL_PADDING: f32 = 24.0;
const COLUMN_GAP: f32 = 40.0;

/// Props for the about section.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AboutProps<'a> {
    pub(crate) motion: Motion,
    pub(crate) height: f32,
    pub(crate) metrics: SectionMetrics,
    pub(crate) wide: bool,
    pub(crate) photo: Option<&'a image::Handle>,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a, Message: 'a>(
    props: AboutProps<'a>,
) -> Element<'a, Message> {
    let theme = props.theme.with_opacity(props.motion.opacity);
    let palette = theme.palette();
    let metrics = props.metrics;

    let heading = section_heading::view(SectionHeadingProps {
        title: ABOUT_TITLE,
        wide: props.wide,
        height: metrics.heading_height,
        theme,
    });

    let paragraphs = ABOUT_PARAGRAPHS
        .into_iter()
        .fold(column![].spacing(20), |paragraphs, paragraph| {
            paragraphs.push(
                text(paragraph)
                    .size(16)
                    .line_height(1.6)
                    .color(theme.fade(palette.gray_600)),
            )
        });

    let photo = asset_image::view(AssetImageProps {
        asset: ARTIST_PHOTO,
        handle: props.photo,
        width: Length::Fill,
        height: Length::Fixed(metrics.about_photo_height),
        fallback: AssetFallback::Placeholder,
        theme,
    });

    let body: Element<'a, Message> = if metrics.about_stacked {
        column![
            container(paragraphs)
                .width(Length::Fill)
                .height(Length::Fixed(metrics.about_text_height)),
            photo,
        ]
        .spacing(metrics.about_stack_gap)
        .into()
    } else {
        row![
            container(paragraphs)
                .width(Length::FillPortion(1))
                .height(Length::Fill)
                .align_y(alignment::Vertical::Center),
            container(photo).width(Length::FillPortion(1)),
        ]
        .spacing(COLUMN_GAP)
        .height(Length::Fixed(metrics.about_photo_height))
        .into()
    };

    let content = container(
        column![heading, body, Space::new().height(Length::Fill)]
            .max_width(CONTENT_MAX_WIDTH),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    section_frame::view(
        SectionFrameProps {
            motion: props.motion,
            height: props.height,
            padding_x: HORIZONTAL_PADDING,
            padding_y: metrics.padding_y,
            background: palette.gray_50,
        },
        content,
    )
}
