use iced::widget::{column, container, image, svg, text};
use iced::{Border, ContentFit, Element, Font, Length, alignment, font};

use crate::content::ImageAsset;
use crate::shared::ui::icons;
use crate::shared::ui::theme::ThemeProps;

const PLACEHOLDER_ICON_SIZE: f32 = 32.0;
const PLACEHOLDER_TEXT_SIZE: f32 = 14.0;
const MONOGRAM_RADIUS: f32 = 6.0;

/// What to draw when the image file is not available.
#[derive(Debug, Clone, Copy)]
pub(crate) enum AssetFallback {
    /// Neutral box with an image glyph and the alt text.
    Placeholder,
    /// Accent tile with the given letters.
    Monogram(&'static str),
}

/// Props for rendering a catalogued image.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AssetImageProps<'a> {
    pub(crate) asset: ImageAsset,
    pub(crate) handle: Option<&'a image::Handle>,
    pub(crate) width: Length,
    pub(crate) height: Length,
    pub(crate) fallback: AssetFallback,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the image, or its fallback when the file was not found.
pub(crate) fn view<'a, Message: 'a>(
    props: AssetImageProps<'a>,
) -> Element<'a, Message> {
    match props.handle {
        Some(handle) => image(handle.clone())
            .width(props.width)
            .height(props.height)
            .content_fit(ContentFit::Cover)
            .opacity(props.theme.opacity)
            .into(),
        None => match props.fallback {
            AssetFallback::Placeholder => placeholder(props),
            AssetFallback::Monogram(letters) => monogram(props, letters),
        },
    }
}

fn placeholder<'a, Message: 'a>(
    props: AssetImageProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.palette();
    let background = props.theme.fade(palette.gray_200);
    let foreground = props.theme.fade(palette.gray_600);

    let glyph = svg::Svg::new(svg::Handle::from_memory(icons::IMAGE))
        .width(Length::Fixed(PLACEHOLDER_ICON_SIZE))
        .height(Length::Fixed(PLACEHOLDER_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(foreground),
        });

    let label = text(props.asset.alt)
        .size(PLACEHOLDER_TEXT_SIZE)
        .color(foreground);

    container(
        column![glyph, label]
            .spacing(8)
            .align_x(alignment::Horizontal::Center),
    )
    .width(props.width)
    .height(props.height)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(background.into()),
        ..Default::default()
    })
    .into()
}

fn monogram<'a, Message: 'a>(
    props: AssetImageProps<'a>,
    letters: &'static str,
) -> Element<'a, Message> {
    let palette = props.theme.palette();
    let background = props.theme.fade(palette.accent);
    let foreground = props.theme.fade(palette.white);

    let label = text(letters)
        .size(20)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        })
        .color(foreground);

    container(label)
        .width(props.width)
        .height(props.height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(background.into()),
            border: Border {
                radius: MONOGRAM_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
