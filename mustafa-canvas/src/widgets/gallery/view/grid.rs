use iced::widget::{Space, column, container, mouse_area, row, text};
use iced::{Element, Font, Length, Padding, font};

use crate::assets::AssetCatalog;
use crate::components::primitive::asset_image::{
    self, AssetFallback, AssetImageProps,
};
use crate::content::{GALLERY, GalleryItem};
use crate::layout::GalleryMetrics;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::gallery::{GalleryEvent, GalleryViewModel};

const TITLE_SIZE: f32 = 18.0;
const DESCRIPTION_SIZE: f32 = 14.0;
const TEXT_PADDING: f32 = 20.0;

/// Props for the gallery card grid.
#[derive(Clone, Copy)]
pub(crate) struct GridProps<'a> {
    pub(crate) vm: GalleryViewModel,
    pub(crate) metrics: GalleryMetrics,
    pub(crate) assets: &'a AssetCatalog,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the six gallery cards in rows of `metrics.columns`.
pub(crate) fn view(props: GridProps<'_>) -> Element<'_, GalleryEvent> {
    let columns = props.metrics.columns.max(1);

    let cards: Vec<(usize, GalleryItem)> =
        GALLERY.into_iter().enumerate().collect();

    let rows = cards
        .chunks(columns)
        .map(|chunk| {
            let mut cells = row![].spacing(props.metrics.gap);
            for &(index, item) in chunk {
                cells = cells.push(card(props, index, item));
            }
            for _ in chunk.len()..columns {
                cells = cells.push(Space::new().width(Length::Fill));
            }
            Element::from(cells)
        })
        .collect::<Vec<_>>();

    column(rows)
        .spacing(props.metrics.gap)
        .width(Length::Fill)
        .into()
}

fn card<'a>(
    props: GridProps<'a>,
    index: usize,
    item: GalleryItem,
) -> Element<'a, GalleryEvent> {
    let theme = props.theme;
    let palette = theme.palette();
    let lifted = props.vm.is_hovered(index);

    let image = asset_image::view(AssetImageProps {
        asset: item.image,
        handle: props.assets.handle(item.image),
        width: Length::Fill,
        height: Length::Fixed(props.metrics.image_height),
        fallback: AssetFallback::Placeholder,
        theme,
    });

    let caption = column![
        text(item.title())
            .size(TITLE_SIZE)
            .font(Font {
                weight: font::Weight::Medium,
                ..Font::DEFAULT
            })
            .color(theme.fade(palette.gray_800)),
        text(item.description)
            .size(DESCRIPTION_SIZE)
            .color(theme.fade(palette.gray_600)),
    ]
    .spacing(6)
    .padding(TEXT_PADDING);

    let body = container(column![image, caption])
        .width(Length::Fill)
        .height(Length::Fixed(props.metrics.card_height))
        .clip(true)
        .style(style::card_style(theme, lifted));

    // Hover lift moves the card up without changing its footprint.
    let lift = props.vm.lift(index);
    let slot = container(body).width(Length::Fill).padding(Padding {
        top: -lift,
        bottom: lift,
        ..Padding::ZERO
    });

    mouse_area(slot)
        .on_enter(GalleryEvent::CardEntered(index))
        .on_exit(GalleryEvent::CardExited(index))
        .into()
}
