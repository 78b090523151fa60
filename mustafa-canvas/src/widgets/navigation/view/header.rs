use iced::widget::{Space, button, container, image, row, text};
use iced::{Element, Font, Length, Padding, alignment, font};

use crate::components::primitive::asset_image::{
    self, AssetFallback, AssetImageProps,
};
use crate::components::primitive::icon_button::{self, IconButtonProps};
use crate::content::{BRAND_INITIAL, BRAND_NAME, LOGO_MARK, SectionId};
use crate::shared::ui::icons;
use crate::shared::ui::motion::Motion;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::navigation::{NavigationIntent, NavigationViewModel};

const LOGO_SIZE: f32 = 40.0;
const BRAND_SIZE: f32 = 24.0;
const LINK_SIZE: f32 = 16.0;
const LINK_SPACING: f32 = 32.0;
const TOGGLE_SIZE: f32 = 36.0;
const TOGGLE_ICON_SIZE: f32 = 24.0;
const HORIZONTAL_PADDING: f32 = 24.0;

/// Props for the fixed page header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderProps<'a> {
    pub(crate) vm: NavigationViewModel,
    pub(crate) logo: Option<&'a image::Handle>,
    pub(crate) motion: Motion,
    pub(crate) height: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render logo, brand name and either the link row or the menu toggle.
pub(crate) fn view(
    props: HeaderProps<'_>,
) -> Element<'_, NavigationIntent> {
    let theme = props.theme.with_opacity(props.motion.opacity);
    let palette = theme.palette();

    let logo = asset_image::view(AssetImageProps {
        asset: LOGO_MARK,
        handle: props.logo,
        width: Length::Fixed(LOGO_SIZE),
        height: Length::Fixed(LOGO_SIZE),
        fallback: AssetFallback::Monogram(BRAND_INITIAL),
        theme,
    });

    let brand = text(BRAND_NAME)
        .size(BRAND_SIZE)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        })
        .color(theme.fade(palette.gray_800));

    let home = button(
        row![logo, brand]
            .spacing(12)
            .align_y(alignment::Vertical::Center),
    )
    .padding(0)
    .style(|_, _| button::Style::default())
    .on_press(NavigationIntent::Navigate(SectionId::Hero));

    let trailing: Element<'_, NavigationIntent> = if props.vm.is_mobile {
        let icon = if props.vm.menu_open {
            icons::CLOSE
        } else {
            icons::MENU
        };
        icon_button::view(IconButtonProps {
            icon,
            theme,
            size: TOGGLE_SIZE,
            icon_size: TOGGLE_ICON_SIZE,
            on_dark: false,
        })
        .map(|_| NavigationIntent::ToggleMenu)
    } else {
        SectionId::ALL
            .into_iter()
            .fold(row![].spacing(LINK_SPACING), |links, section| {
                let is_active = section == props.vm.active_section;
                links.push(
                    button(text(section.label()).size(LINK_SIZE))
                        .padding(0)
                        .style(style::link_button_style(
                            theme,
                            palette.gray_700,
                            is_active,
                        ))
                        .on_press(NavigationIntent::Navigate(section)),
                )
            })
            .align_y(alignment::Vertical::Center)
            .into()
    };

    let bar = row![home, Space::new().width(Length::Fill), trailing]
        .align_y(alignment::Vertical::Center)
        .padding([0.0, HORIZONTAL_PADDING])
        .width(Length::Fill)
        .height(Length::Fill);

    // Entrance slide: the bar starts above its slot and drops into place.
    let lift = (-props.motion.offset_y).max(0.0);

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(props.height))
        .padding(Padding {
            bottom: lift,
            ..Padding::ZERO
        })
        .clip(true)
        .style(style::header_style(theme))
        .into()
}
